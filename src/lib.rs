//! # Ordered Queue
//!
//! A priority-ordered queue: every element carries a priority, insertion
//! places the element by priority, and removal always yields the
//! highest-priority element.
//!
//! ## Architecture
//!
//! - **Types**: The [`Prioritized`] trait and the [`Symbol`] example element
//! - **Queue**: [`OrderedQueue`], a singly-linked chain of slab-allocated nodes
//!
//! ## Ordering Rules
//!
//! 1. **Highest first**: The chain is non-increasing in priority, head to tail
//! 2. **FIFO on ties**: Among equal priorities, earlier inserts leave first
//! 3. **Generic priorities**: Any `Ord` type works; no range is enforced
//!
//! ## Complexity
//!
//! - Insert: O(n) scan from the head
//! - Remove: O(1) pop from the head
//! - Clone: O(n) deep copy; move: O(1)
//!
//! ## Example
//!
//! ```
//! use ordered_queue::{OrderedQueue, Symbol};
//!
//! let mut queue = OrderedQueue::new();
//! queue.insert(Symbol::new('x', 3));
//! queue.insert(Symbol::new('y', 9));
//! queue.insert(Symbol::new('z', 9));
//!
//! assert_eq!(queue.remove(), Symbol::new('y', 9));
//! assert_eq!(queue.remove(), Symbol::new('z', 9));
//! assert_eq!(queue.remove(), Symbol::new('x', 3));
//! assert_eq!(queue.remove(), Symbol::default());
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Element-side types: the priority accessor and the example element
pub mod types;

/// The ordered queue and its node storage
pub mod queue;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{Prioritized, Symbol};
pub use queue::{OrderedQueue, QueueError};
