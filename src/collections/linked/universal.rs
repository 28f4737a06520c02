use std::fmt;

use crate::collections::{
    ContainerCommon, QueueLike, StackLike,
    linked::{ContainerError, chain::TailChain},
};

/// Queue and stack over one chain.
///
/// `enqueue` appends at the tail, `push` inserts at the head, and every removal
/// (`pop`, `dequeue`) takes the head. `push`/`pop` therefore behave as a stack
/// and `enqueue`/`dequeue` as a queue, and both disciplines can be mixed freely.
///
/// ```
/// use linked_linear::collections::UniversalQueue;
///
/// let mut u = UniversalQueue::new();
/// u.push(1);
/// u.enqueue(2);
/// u.push(0);
/// assert_eq!(u.pop(), Ok(0));
/// assert_eq!(u.dequeue(), Ok(1));
/// assert_eq!(u.peek(), Ok(&2));
/// ```
pub struct UniversalQueue<T> {
    chain: TailChain<T>,
}

impl<T> UniversalQueue<T> {
    #[inline]
    pub const fn new() -> Self {
        Self {
            chain: TailChain::new(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.chain.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn clear(&mut self) {
        let _released = self.chain.clear();
        trace_event!(container = "universal_queue", released = _released, "cleared");
    }

    #[inline]
    pub fn enqueue(&mut self, item: T) {
        self.chain.push_back(item)
    }

    #[inline]
    pub fn push(&mut self, item: T) {
        self.chain.push_front(item)
    }

    pub fn peek(&self) -> Result<&T, ContainerError> {
        self.chain.front().ok_or_else(|| Self::empty("peek"))
    }

    pub fn peek_mut(&mut self) -> Result<&mut T, ContainerError> {
        self.chain.front_mut().ok_or_else(|| Self::empty("peek_mut"))
    }

    #[inline]
    pub fn dequeue(&mut self) -> Result<T, ContainerError> {
        self.remove_head("dequeue")
    }

    #[inline]
    pub fn pop(&mut self) -> Result<T, ContainerError> {
        self.remove_head("pop")
    }

    fn remove_head(&mut self, op: &'static str) -> Result<T, ContainerError> {
        self.chain.pop_front().ok_or_else(|| Self::empty(op))
    }

    #[inline]
    fn empty(_op: &'static str) -> ContainerError {
        trace_event!(container = "universal_queue", op = _op, "empty");
        ContainerError::Empty
    }
}

impl<T> Default for UniversalQueue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for UniversalQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniversalQueue")
            .field("len", &self.chain.len())
            .field("chain", &self.chain.debug())
            .finish()
    }
}

impl<T> ContainerCommon for UniversalQueue<T> {
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

impl<T> StackLike<T> for UniversalQueue<T> {
    #[inline]
    fn push(&mut self, value: T) {
        self.push(value)
    }

    #[inline]
    fn peek(&self) -> Result<&T, ContainerError> {
        self.peek()
    }

    #[inline]
    fn peek_mut(&mut self) -> Result<&mut T, ContainerError> {
        self.peek_mut()
    }

    #[inline]
    fn pop(&mut self) -> Result<T, ContainerError> {
        self.pop()
    }
}

impl<T> QueueLike<T> for UniversalQueue<T> {
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
