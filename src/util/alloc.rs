use std::cell::Cell;
use std::rc::Rc;

/// A unit type for checking that collections behave with zero-sized elements.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSizedType;

/// A test element that bumps a shared counter when dropped, for asserting that node teardown
/// drops each element exactly once.
#[derive(Debug, Clone)]
pub struct DropCounter {
    count: Rc<Cell<usize>>,
}

impl DropCounter {
    pub fn new() -> (DropCounter, Rc<Cell<usize>>) {
        let count = Rc::new(Cell::new(0));
        (DropCounter { count: Rc::clone(&count) }, count)
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.count.set(self.count.get() + 1);
    }
}
