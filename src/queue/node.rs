//! Chain node for slab-based storage.
//!
//! ## Design
//!
//! `Node` wraps one element with a single forward link. The link is a slab
//! key, not a pointer, so a node is only meaningful inside the slab of the
//! queue that allocated it.
//!
//! ## Linked List
//!
//! Nodes form a singly-linked chain ordered by priority:
//!
//! ```text
//! head (highest) -> node2 -> node3 -> tail (lowest, next = None)
//! ```
//!
//! The chain is forward-only: no back links, no cycles.

/// Node stored in the queue's slab.
///
/// Contains the element plus the key of the next node in the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    /// The element carried by this node
    pub value: T,

    /// Next node in the chain (slab key)
    /// None if this is the tail (lowest priority, newest among ties)
    pub next: Option<usize>,
}

impl<T> Node<T> {
    /// Create a new node (not yet linked)
    ///
    /// # Example
    ///
    /// ```
    /// use ordered_queue::queue::Node;
    /// use ordered_queue::types::Symbol;
    ///
    /// let node = Node::new(Symbol::new('x', 3));
    ///
    /// assert!(node.is_tail());
    /// ```
    #[inline]
    pub fn new(value: T) -> Self {
        Self { value, next: None }
    }

    /// Create a node already linked in front of `next`
    #[inline]
    pub fn linked(value: T, next: Option<usize>) -> Self {
        Self { value, next }
    }

    /// Check if this node ends the chain
    #[inline]
    pub fn is_tail(&self) -> bool {
        self.next.is_none()
    }

    /// Consume the node, returning its element
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
