use crate::collections::{ContainerCommon, ContainerError};

/// LIFO access at a single end of the container.
pub trait StackLike<T>: ContainerCommon {
    fn push(&mut self, value: T);

    fn peek(&self) -> Result<&T, ContainerError>;

    fn peek_mut(&mut self) -> Result<&mut T, ContainerError>;

    fn pop(&mut self) -> Result<T, ContainerError>;
}
