use std::cell::{Cell, RefCell};
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZeroSizedType;

/// A value which increments a shared counter whenever any clone of it is dropped.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for CountedDrop {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}

/// A value that panics once its shared budget of clones has been spent. Used to simulate an
/// element constructor failing part way through a bulk operation.
#[derive(Debug, PartialEq, Eq)]
pub struct PanicOnClone {
    pub value: usize,
    pub budget: Rc<Cell<usize>>,
}

impl PanicOnClone {
    pub fn new(value: usize, budget: &Rc<Cell<usize>>) -> PanicOnClone {
        PanicOnClone {
            value,
            budget: Rc::clone(budget),
        }
    }
}

impl Clone for PanicOnClone {
    fn clone(&self) -> Self {
        match self.budget.get().checked_sub(1) {
            Some(left) => self.budget.set(left),
            None => panic!("clone budget exhausted"),
        }
        PanicOnClone {
            value: self.value,
            budget: Rc::clone(&self.budget),
        }
    }
}
