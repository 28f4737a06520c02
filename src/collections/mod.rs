pub mod capability;
pub mod linked;

pub use capability::{ContainerCommon, QueueLike, StackLike, UniversalQueueLike};
pub use linked::{ContainerError, Queue, Stack, UniversalQueue};
