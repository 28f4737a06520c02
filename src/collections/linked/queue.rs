use std::fmt;

use crate::collections::{
    ContainerCommon, QueueLike,
    linked::{ContainerError, chain::TailChain},
};

/// FIFO queue, `enqueue` appends after the tail and `dequeue` takes the head.
pub struct Queue<T> {
    chain: TailChain<T>,
}

impl<T> Queue<T> {
    #[inline]
    pub const fn new() -> Self {
        Self {
            chain: TailChain::new(),
        }
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.chain.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn clear(&mut self) {
        let _released = self.chain.clear();
        trace_event!(container = "queue", released = _released, "cleared");
    }

    #[inline]
    pub fn enqueue(&mut self, item: T) {
        self.chain.push_back(item)
    }

    pub fn dequeue(&mut self) -> Result<T, ContainerError> {
        self.chain.pop_front().ok_or_else(|| Self::empty("dequeue"))
    }

    /// front element, the next one `dequeue` returns.
    pub fn peek(&self) -> Result<&T, ContainerError> {
        self.chain.front().ok_or_else(|| Self::empty("peek"))
    }

    pub fn peek_mut(&mut self) -> Result<&mut T, ContainerError> {
        self.chain.front_mut().ok_or_else(|| Self::empty("peek_mut"))
    }

    #[inline]
    fn empty(_op: &'static str) -> ContainerError {
        trace_event!(container = "queue", op = _op, "empty");
        ContainerError::Empty
    }
}

impl<T> Default for Queue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("len", &self.chain.len())
            .field("chain", &self.chain.debug())
            .finish()
    }
}

impl<T> ContainerCommon for Queue<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    #[inline]
    fn clear(&mut self) {
        self.clear()
    }
}

impl<T> QueueLike<T> for Queue<T> {
    #[inline]
    fn enqueue(&mut self, value: T) {
        self.enqueue(value)
    }

    #[inline]
    fn dequeue(&mut self) -> Result<T, ContainerError> {
        self.dequeue()
    }

    #[inline]
    fn front(&self) -> Result<&T, ContainerError> {
        self.peek()
    }

    #[inline]
    fn front_mut(&mut self) -> Result<&mut T, ContainerError> {
        self.peek_mut()
    }
}
