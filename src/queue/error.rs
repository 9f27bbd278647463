//! Errors reported by the ordered queue.
//!
//! Only the checked removal path reports errors. The unchecked
//! [`OrderedQueue::remove`](crate::OrderedQueue::remove) keeps the older
//! contract and hands back a default value instead.

use thiserror::Error;

/// Failure of a queue operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// Removal was attempted on a queue holding no elements
    #[error("cannot remove from an empty queue")]
    Empty,
}
