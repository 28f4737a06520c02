use std::marker::PhantomData;

use crate::collections::linked::node::{self, ChainDebug, Link, Node};

/// Singly linked chain with an owning `head` and a non-owning back-pointer to the last node.
///
/// `head` is `None` iff `tail` is `None`; otherwise `tail` is the node whose `next` is `None`.
pub(crate) struct TailChain<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _phantom_data: PhantomData<Box<Node<T>>>,
}

// SAFETY: the chain owns every node reachable from `head` and `tail` only aliases
// one of them, so it is exactly as thread-safe as a `Box<Node<T>>` chain.
unsafe impl<T: Send> Send for TailChain<T> {}
unsafe impl<T: Sync> Sync for TailChain<T> {}

impl<T> TailChain<T> {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _phantom_data: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[inline]
    pub(crate) fn front(&self) -> Option<&T> {
        // SAFETY: `head` owns the chain and `&self` freezes it.
        unsafe { node::value_ref(&self.head) }
    }

    #[inline]
    pub(crate) fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: `head` owns the chain and `&mut self` freezes it.
        unsafe { node::value_mut(&mut self.head) }
    }

    pub(crate) fn push_front(&mut self, value: T) {
        let node = Node::alloc(value, self.head);
        self.head = Some(node);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.len += 1;
    }

    pub(crate) fn push_back(&mut self, value: T) {
        let node = Node::alloc(value, None);
        match self.tail {
            // SAFETY: `tail` is the live last node of the chain owned by `head`,
            // and `&mut self` rules out any other access to it.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    pub(crate) fn pop_front(&mut self) -> Option<T> {
        // SAFETY: `head` owns the chain.
        let value = unsafe { node::pop_link(&mut self.head) }?;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(value)
    }

    /// Releases every node and returns how many were released.
    pub(crate) fn clear(&mut self) -> usize {
        let mut head = self.head.take();
        self.tail = None;
        self.len = 0;
        // SAFETY: `head` was moved out of `self`, it is the only owner of the chain.
        unsafe { node::release_chain(&mut head) }
    }

    #[inline]
    pub(crate) fn debug(&self) -> ChainDebug<'_, T> {
        // SAFETY: `head` owns the chain and `&self` freezes it.
        unsafe { ChainDebug::new(&self.head) }
    }

    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(unsafe { node::chain_len(&self.head) }, self.len);
        let mut last = self.head;
        while let Some(node) = last {
            match unsafe { (*node.as_ptr()).next } {
                Some(next) => last = Some(next),
                None => break,
            }
        }
        assert_eq!(last, self.tail);
    }
}

impl<T> Drop for TailChain<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
