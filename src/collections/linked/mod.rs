//! Stack, queue and universal queue over a singly linked chain of owned nodes.

/// Emits a `tracing::trace!` event when the `tracing` feature is enabled, nothing otherwise.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

mod chain;
mod node;

pub mod queue;
pub mod stack;
pub mod universal;

pub use queue::Queue;
pub use stack::Stack;
pub use universal::UniversalQueue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ContainerError {
    /// read or removal on a container without elements.
    #[error("Container is empty")]
    Empty,
}

/// new empty [`Stack`].
#[inline]
pub fn stack<T>() -> Stack<T> {
    Stack::new()
}

/// new empty [`Queue`].
#[inline]
pub fn queue<T>() -> Queue<T> {
    Queue::new()
}

/// new empty [`UniversalQueue`].
#[inline]
pub fn universal_queue<T>() -> UniversalQueue<T> {
    UniversalQueue::new()
}
