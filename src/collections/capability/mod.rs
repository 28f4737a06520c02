pub mod container_common;
pub mod queue;
pub mod stack;

pub use container_common::ContainerCommon;
pub use queue::QueueLike;
pub use stack::StackLike;

/// Both disciplines over one container, see [`UniversalQueue`](crate::collections::UniversalQueue).
pub trait UniversalQueueLike<T>: StackLike<T> + QueueLike<T> {}

impl<T, C: StackLike<T> + QueueLike<T>> UniversalQueueLike<T> for C {}
