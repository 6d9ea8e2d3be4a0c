use alloc::collections::VecDeque;
use alloc::rc::Rc;
use core::cell::RefCell;
use core::num::NonZeroUsize;

use endless::ContentAdapter;

/// A content adapter that queues fill requests for the embedding to bind later.
///
/// Clones share the same queue: hand one clone to the controller and keep the other to drain
/// requests after each event.
#[derive(Clone, Debug, Default)]
pub struct FillQueue {
    pending: Rc<RefCell<VecDeque<NonZeroUsize>>>,
}

impl FillQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }

    pub fn pop(&self) -> Option<NonZeroUsize> {
        self.pending.borrow_mut().pop_front()
    }

    /// Removes and sums every queued request.
    pub fn take_total(&self) -> usize {
        self.pending.borrow_mut().drain(..).map(NonZeroUsize::get).sum()
    }
}

impl ContentAdapter for FillQueue {
    fn fill(&mut self, quantity: NonZeroUsize) {
        self.pending.borrow_mut().push_back(quantity);
    }
}
