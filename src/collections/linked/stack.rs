use std::{fmt, marker::PhantomData};

use crate::collections::{
    ContainerCommon, StackLike,
    linked::{
        ContainerError,
        node::{self, ChainDebug, Link, Node},
    },
};

/// LIFO stack, every operation works on `top`.
pub struct Stack<T> {
    top: Link<T>,
    len: usize,
    _phantom_data: PhantomData<Box<Node<T>>>,
}

// SAFETY: `top` uniquely owns the chain, like a `Box<Node<T>>` would.
unsafe impl<T: Send> Send for Stack<T> {}
unsafe impl<T: Sync> Sync for Stack<T> {}

impl<T> Stack<T> {
    #[inline]
    pub const fn new() -> Self {
        Self {
            top: None,
            len: 0,
            _phantom_data: PhantomData,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn clear(&mut self) {
        let mut top = self.top.take();
        self.len = 0;
        // SAFETY: `top` was moved out of `self`, it is the only owner of the chain.
        let _released = unsafe { node::release_chain(&mut top) };
        trace_event!(container = "stack", released = _released, "cleared");
    }

    #[inline]
    pub fn push(&mut self, item: T) {
        self.top = Some(Node::alloc(item, self.top));
        self.len += 1;
    }

    pub fn peek(&self) -> Result<&T, ContainerError> {
        // SAFETY: `top` owns the chain and `&self` freezes it.
        unsafe { node::value_ref(&self.top) }.ok_or_else(|| Self::empty("peek"))
    }

    pub fn peek_mut(&mut self) -> Result<&mut T, ContainerError> {
        // SAFETY: `top` owns the chain and `&mut self` freezes it.
        unsafe { node::value_mut(&mut self.top) }.ok_or_else(|| Self::empty("peek_mut"))
    }

    pub fn pop(&mut self) -> Result<T, ContainerError> {
        // SAFETY: `top` owns the chain.
        let value = unsafe { node::pop_link(&mut self.top) }.ok_or_else(|| Self::empty("pop"))?;
        self.len -= 1;
        Ok(value)
    }

    #[inline]
    fn empty(_op: &'static str) -> ContainerError {
        trace_event!(container = "stack", op = _op, "empty");
        ContainerError::Empty
    }
}

impl<T> Default for Stack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        let mut top = self.top.take();
        // SAFETY: `top` was moved out of `self`, it is the only owner of the chain.
        unsafe { node::release_chain(&mut top) };
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("len", &self.len)
            // SAFETY: `top` owns the chain and `&self` freezes it.
            .field("top", &unsafe { ChainDebug::new(&self.top) })
            .finish()
    }
}

impl<T> ContainerCommon for Stack<T> {
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

impl<T> StackLike<T> for Stack<T> {
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

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    impl<T> Stack<T> {
        fn assert_invariants(&self) {
            assert_eq!(unsafe { node::chain_len(&self.top) }, self.len);
            assert_eq!(self.is_empty(), self.len == 0);
        }
    }

    #[test]
    fn t_scenario() {
        let mut s = Stack::new();
        s.push(1);
        s.push(2);
        s.push(3);
        assert_eq!(s.pop(), Ok(3));
        assert_eq!(s.peek(), Ok(&2));
        assert_eq!(s.pop(), Ok(2));
        assert_eq!(s.pop(), Ok(1));
        assert!(s.is_empty());
        s.assert_invariants();
    }

    #[test]
    fn t_lifo() {
        let mut s = Stack::new();
        for i in 0..100 {
            s.push(i);
            s.assert_invariants();
        }
        for i in (0..100).rev() {
            assert_eq!(s.pop(), Ok(i));
            s.assert_invariants();
        }
    }

    #[test]
    fn t_empty() {
        let mut s = Stack::<i32>::new();
        assert!(s.is_empty());
        assert_eq!(s.peek(), Err(ContainerError::Empty));
        assert_eq!(s.peek_mut(), Err(ContainerError::Empty));
        assert_eq!(s.pop(), Err(ContainerError::Empty));

        s.push(7);
        assert_eq!(s.pop(), Ok(7));
        assert_eq!(s.pop(), Err(ContainerError::Empty));
        assert_eq!(s.peek(), Err(ContainerError::Empty));

        s.push(1);
        s.push(2);
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.pop(), Err(ContainerError::Empty));
        s.assert_invariants();
    }

    #[test]
    fn t_peek_is_pure() {
        let mut s = Stack::new();
        s.push("a");
        s.push("b");
        assert_eq!(s.peek(), Ok(&"b"));
        assert_eq!(s.peek(), Ok(&"b"));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn t_peek_mut() {
        let mut s = Stack::new();
        s.push(1);
        s.push(2);
        if let Ok(top) = s.peek_mut() {
            *top = 20;
        }
        assert_eq!(s.pop(), Ok(20));
        assert_eq!(s.pop(), Ok(1));
    }

    #[test]
    fn t_none_round_trip() {
        let mut s = Stack::new();
        s.push(None);
        s.push(Some(1));
        assert_eq!(s.pop(), Ok(Some(1)));
        assert_eq!(s.peek(), Ok(&None));
        assert_eq!(s.pop(), Ok(None));
        assert_eq!(s.pop(), Err(ContainerError::Empty));
    }

    #[test]
    fn t_drop_each_once() {
        let drops = Rc::new(Cell::new(0));
        struct Counted(Rc<Cell<usize>>);
        impl Drop for Counted {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let mut s = Stack::new();
        for _ in 0..10 {
            s.push(Counted(drops.clone()));
        }
        drop(s.pop());
        assert_eq!(drops.get(), 1);
        s.clear();
        assert_eq!(drops.get(), 10);
        for _ in 0..5 {
            s.push(Counted(drops.clone()));
        }
        drop(s);
        assert_eq!(drops.get(), 15);
    }

    #[test]
    #[cfg_attr(miri, ignore)]
    fn t_deep_drop() {
        let mut s = Stack::new();
        for i in 0..1_000_000u32 {
            s.push(i);
        }
        s.clear();
        for i in 0..1_000_000u32 {
            s.push(i);
        }
        drop(s);
    }

    #[test]
    fn t_debug() {
        let mut s = Stack::new();
        s.push(1);
        s.push(2);
        assert_eq!(format!("{:?}", s), "Stack { len: 2, top: [2, 1] }");
    }

    #[test]
    fn t_matches_vec() {
        let mut s = Stack::new();
        let mut model = Vec::new();
        let mut seed = 0x2545_f491_u32;
        let steps = if cfg!(miri) { 200 } else { 2_000 };
        for step in 0..steps {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            match (seed >> 16) % 5 {
                0 | 1 => {
                    s.push(step);
                    model.push(step);
                }
                2 => assert_eq!(s.pop().ok(), model.pop()),
                3 => assert_eq!(s.peek().ok(), model.last()),
                _ => {
                    if step % 97 == 0 {
                        s.clear();
                        model.clear();
                    }
                }
            }
            assert_eq!(s.len(), model.len());
        }
        s.assert_invariants();
    }
}
