//! Ordered queue implementation.
//!
//! ## Architecture
//!
//! - **Slab**: Owns every node; keys are reused after removal
//! - **Head slot**: Key of the highest-priority node, `None` when empty
//! - **Forward links**: Each node holds the key of its successor
//!
//! ## Placement Rule
//!
//! A new element becomes the head when the queue is empty or its priority is
//! strictly greater than the head's. Otherwise the scan walks forward while
//! the next node's priority is greater than or equal to the new one, and
//! links the element after the last node visited:
//!
//! ```text
//! insert ('z', 9) into  ('y', 9) -> ('x', 3)
//!                       ('y', 9) -> ('z', 9) -> ('x', 3)
//! ```
//!
//! Equal priorities therefore leave in arrival order.
//!
//! ## Ownership
//!
//! The queue owns its slab, so dropping or clearing the queue releases each
//! node exactly once. `Clone` walks the source chain into a fresh slab and
//! shares nothing with it. Moving a queue moves the slab handle without
//! touching the nodes.
//!
//! ## Example
//!
//! ```
//! use ordered_queue::{OrderedQueue, QueueError, Symbol};
//!
//! let mut queue = OrderedQueue::with_capacity(8);
//! queue.insert(Symbol::new('x', 3));
//! queue.insert(Symbol::new('y', 9));
//!
//! assert_eq!(queue.peek(), Some(&Symbol::new('y', 9)));
//! assert_eq!(queue.try_remove(), Ok(Symbol::new('y', 9)));
//! assert_eq!(queue.try_remove(), Ok(Symbol::new('x', 3)));
//! assert_eq!(queue.try_remove(), Err(QueueError::Empty));
//! ```

use std::fmt;

use slab::Slab;
use tracing::{debug, trace};

use crate::queue::{Node, QueueError};
use crate::types::Prioritized;

/// Priority-ordered queue backed by a slab-allocated singly-linked chain.
pub struct OrderedQueue<T> {
    /// Node storage
    /// Key: slab index, Value: Node
    nodes: Slab<Node<T>>,

    /// Key of the first node (highest priority, oldest among ties)
    head: Option<usize>,
}

impl<T> Default for OrderedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedQueue<T> {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: None,
        }
    }

    /// Create a queue with pre-allocated node capacity
    ///
    /// The capacity is a hint, not a bound: the queue grows past it.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Number of nodes to pre-allocate
    ///
    /// # Example
    ///
    /// ```
    /// use ordered_queue::{OrderedQueue, Symbol};
    ///
    /// let queue: OrderedQueue<Symbol> = OrderedQueue::with_capacity(1_000);
    /// assert!(queue.capacity() >= 1_000);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: None,
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Get the current capacity (pre-allocated node slots)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Get the number of elements in the queue
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the queue holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Get the element that the next removal would return
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.head.map(|key| &self.nodes[key].value)
    }

    /// Remove and return the highest-priority element
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Empty`] if the queue holds no elements; the
    /// queue is left unchanged.
    pub fn try_remove(&mut self) -> Result<T, QueueError> {
        let Some(head) = self.head else {
            debug!("remove on empty queue");
            return Err(QueueError::Empty);
        };

        let node = self.nodes.remove(head);
        self.head = node.next;

        trace!(key = head, len = self.nodes.len(), "removed head");
        Ok(node.into_value())
    }

    /// Remove and return the highest-priority element
    ///
    /// An empty queue yields `T::default()` and stays empty. Use
    /// [`try_remove`](Self::try_remove) to observe emptiness as an error.
    ///
    /// # Example
    ///
    /// ```
    /// use ordered_queue::{OrderedQueue, Symbol};
    ///
    /// let mut queue: OrderedQueue<Symbol> = OrderedQueue::new();
    ///
    /// assert_eq!(queue.remove(), Symbol::default());
    /// assert!(queue.is_empty());
    /// ```
    pub fn remove(&mut self) -> T
    where
        T: Default,
    {
        self.try_remove().unwrap_or_default()
    }

    /// Release every node, leaving the queue empty
    ///
    /// Allocated capacity is kept.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
    }

    /// Move the whole chain out, leaving `self` empty
    ///
    /// No node is visited; only the slab handle changes owner.
    ///
    /// # Example
    ///
    /// ```
    /// use ordered_queue::{OrderedQueue, Symbol};
    ///
    /// let mut a = OrderedQueue::new();
    /// a.insert(Symbol::new('q', 2));
    ///
    /// let mut b = a.take();
    /// assert!(a.is_empty());
    /// assert_eq!(b.remove(), Symbol::new('q', 2));
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Walk the chain head to tail
    fn chain(&self) -> Chain<'_, T> {
        Chain {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }

    /// Append clones of `source`'s elements in chain order
    ///
    /// Only called on an empty queue, so appending keeps the source order.
    fn copy_chain_from(&mut self, source: &Self)
    where
        T: Clone,
    {
        debug_assert!(self.is_empty());

        let mut tail: Option<usize> = None;
        for value in source.chain() {
            let key = self.nodes.insert(Node::new(value.clone()));
            match tail {
                Some(tail_key) => self.nodes[tail_key].next = Some(key),
                None => self.head = Some(key),
            }
            tail = Some(key);
        }
    }
}

impl<T: Prioritized> OrderedQueue<T> {
    // ========================================================================
    // Insertion
    // ========================================================================

    /// Insert an element according to its priority
    ///
    /// The element lands before the first node of strictly lower priority,
    /// i.e. after every element whose priority is greater than or equal to
    /// its own.
    ///
    /// # Arguments
    ///
    /// * `value` - The element to insert
    ///
    /// # Example
    ///
    /// ```
    /// use ordered_queue::{OrderedQueue, Symbol};
    ///
    /// let mut queue = OrderedQueue::new();
    /// queue.insert(Symbol::new('x', 3));
    /// queue.insert(Symbol::new('y', 9));
    ///
    /// assert_eq!(queue.len(), 2);
    /// assert_eq!(queue.peek(), Some(&Symbol::new('y', 9)));
    /// ```
    pub fn insert(&mut self, value: T) {
        let prev = self.find_predecessor(value.priority());

        let next = match prev {
            Some(prev_key) => self.nodes[prev_key].next,
            None => self.head,
        };
        let key = self.nodes.insert(Node::linked(value, next));

        match prev {
            Some(prev_key) => self.nodes[prev_key].next = Some(key),
            None => self.head = Some(key),
        }

        trace!(key, at_head = prev.is_none(), len = self.nodes.len(), "inserted element");
    }

    /// Find the node a new element of `priority` must follow
    ///
    /// `None` means the element becomes the new head.
    fn find_predecessor(&self, priority: &T::Priority) -> Option<usize> {
        let head = self.head?;

        // Strict comparison: a tie keeps the current head in front
        if priority > self.nodes[head].value.priority() {
            return None;
        }

        let mut prev = head;
        while let Some(next) = self.nodes[prev].next {
            if self.nodes[next].value.priority() < priority {
                break;
            }
            prev = next;
        }

        Some(prev)
    }
}

// ============================================================================
// Trait implementations
// ============================================================================

impl<T: Clone> Clone for OrderedQueue<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len());
        copy.copy_chain_from(self);
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.copy_chain_from(source);
    }
}

impl<T: PartialEq> PartialEq for OrderedQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.chain().eq(other.chain())
    }
}

impl<T: Eq> Eq for OrderedQueue<T> {}

impl<T: fmt::Debug> fmt::Debug for OrderedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.chain()).finish()
    }
}

impl<T: Prioritized> Extend<T> for OrderedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Prioritized> FromIterator<T> for OrderedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut queue = Self::with_capacity(iter.size_hint().0);
        queue.extend(iter);
        queue
    }
}

/// Borrowing cursor over the chain, head to tail.
struct Chain<'a, T> {
    nodes: &'a Slab<Node<T>>,
    cursor: Option<usize>,
}

impl<'a, T> Iterator for Chain<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let nodes = self.nodes;
        let node = &nodes[self.cursor?];
        self.cursor = node.next;
        Some(&node.value)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
