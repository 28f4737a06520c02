//! Linked stack, queue and universal queue.
//!
//! ```
//! use linked_linear::collections::{ContainerError, linked};
//!
//! let mut s = linked::stack();
//! s.push(1);
//! s.push(2);
//! assert_eq!(s.pop(), Ok(2));
//!
//! let mut q = linked::queue();
//! q.enqueue("a");
//! assert_eq!(q.dequeue(), Ok("a"));
//! assert_eq!(q.dequeue(), Err(ContainerError::Empty));
//! ```

#[cfg(feature = "collections")]
pub mod collections;
