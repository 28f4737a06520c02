use crate::collections::{ContainerCommon, ContainerError};

/// FIFO access, values leave in the order they were enqueued.
pub trait QueueLike<T>: ContainerCommon {
    fn enqueue(&mut self, value: T);

    fn dequeue(&mut self) -> Result<T, ContainerError>;

    fn front(&self) -> Result<&T, ContainerError>;

    fn front_mut(&mut self) -> Result<&mut T, ContainerError>;
}
