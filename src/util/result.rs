use std::alloc;
use std::error::Error;

use super::error::ReserveError;

pub(crate) trait ResultExtension<T, E: Error> {
    /// A method similar to [`Result::unwrap`], except that it applies only to types which implement
    /// [`Error`] and panics with the message of the error itself.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{}", error),
        }
    }
}

pub(crate) trait ReserveResultExtension<T> {
    /// Unwraps the result of a growth step. A [`CapacityOverflow`](super::error::CapacityOverflow)
    /// panics like [`throw`](ResultExtension::throw), while an
    /// [`AllocError`](super::error::AllocError) is handed to [`alloc::handle_alloc_error`] to
    /// avoid allocating while reporting a lack of memory.
    ///
    /// # Panics
    /// Panics if the [`Result`] holds a capacity overflow.
    fn throw_alloc(self) -> T;
}

impl<T> ReserveResultExtension<T> for Result<T, ReserveError> {
    fn throw_alloc(self) -> T {
        match self {
            Ok(val) => val,
            Err(ReserveError::AllocError(error)) => alloc::handle_alloc_error(error.layout),
            Err(error) => panic!("{}", error),
        }
    }
}
