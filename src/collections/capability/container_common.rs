pub trait ContainerCommon {
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// removes every element.
    fn clear(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::{Queue, Stack, UniversalQueue};

    fn reset<C: ContainerCommon>(c: &mut C) {
        c.clear();
        assert_eq!(c.len(), 0);
        assert!(c.is_empty());
    }

    #[test]
    fn t_clear_all() {
        let mut s = Stack::new();
        s.push(1);
        let mut q = Queue::new();
        q.enqueue(1);
        q.enqueue(2);
        let mut u = UniversalQueue::new();
        u.push(1);
        u.enqueue(2);
        assert_eq!(ContainerCommon::len(&u), 2);

        reset(&mut s);
        reset(&mut q);
        reset(&mut u);
    }
}
