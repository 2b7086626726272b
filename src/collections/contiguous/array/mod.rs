//! A module containing [`Array`] and associtated types.
//!
//! [`IterMut`](std::slice::IterMut) and [`Iter`](std::slice::Iter) from [`std::slice`] are used for
//! borrowed iteration, while [`IntoIter`] provides owned iteration.
//!
//! [`Array`] is also re-exported under the parent module.

mod array;
mod iter;

pub use array::*;
pub use iter::*;
