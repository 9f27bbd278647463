//! Queue module for the ordered queue.
//!
//! ## Architecture
//!
//! The queue is a singly-linked chain whose nodes live in a slab:
//!
//! - **Slab-based storage**: O(1) node allocation and release
//! - **Index links**: Each node points at the next by slab key
//! - **Head slot**: The queue holds the key of the highest-priority node
//!
//! ## Components
//!
//! - [`Node`]: An element plus its forward link
//! - [`OrderedQueue`]: The container with insert/remove
//! - [`QueueError`]: Returned by the checked removal path
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Insert | O(n) |
//! | Remove | O(1) |
//! | Peek | O(1) |
//! | Clone | O(n) |
//! | Take (move out) | O(1) |
//!
//! ## Example
//!
//! ```
//! use ordered_queue::queue::OrderedQueue;
//! use ordered_queue::types::Symbol;
//!
//! let mut queue = OrderedQueue::with_capacity(16);
//! queue.insert(Symbol::new('a', 5));
//! queue.insert(Symbol::new('b', 5));
//!
//! // Equal priorities leave in arrival order
//! assert_eq!(queue.remove().ch, 'a');
//! assert_eq!(queue.remove().ch, 'b');
//! assert!(queue.is_empty());
//! ```

pub mod node;
pub mod ordered;
mod error;

pub use node::Node;
pub use ordered::OrderedQueue;
pub use error::QueueError;
