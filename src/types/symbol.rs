//! The example element: a character tagged with an integer priority.
//!
//! ## Priority Convention
//!
//! Priorities run from [`Symbol::MIN_PRIORITY`] (1, lowest) to
//! [`Symbol::MAX_PRIORITY`] (10, highest). The range is a convention only:
//! the queue accepts any `i32`, including zero and negatives.
//!
//! ## Default Value
//!
//! `Symbol::default()` is `('\0', 0)`. It is what
//! [`OrderedQueue::remove`](crate::OrderedQueue::remove) returns when the
//! queue is empty.

use std::fmt;

use crate::types::Prioritized;

/// A character tagged with a priority.
///
/// ## Example
///
/// ```
/// use ordered_queue::{Prioritized, Symbol};
///
/// let symbol = Symbol::new('y', 9);
/// assert_eq!(symbol.ch, 'y');
/// assert_eq!(symbol.priority(), &9);
/// assert!(symbol.has_conventional_priority());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Symbol {
    /// The character itself
    pub ch: char,

    /// Priority: 1 (low) to 10 (high) by convention
    pub prior: i32,
}

impl Symbol {
    /// Lowest conventional priority
    pub const MIN_PRIORITY: i32 = 1;

    /// Highest conventional priority
    pub const MAX_PRIORITY: i32 = 10;

    /// Create a new symbol
    ///
    /// # Arguments
    ///
    /// * `ch` - The character tag
    /// * `prior` - The priority (not range-checked)
    #[inline]
    pub const fn new(ch: char, prior: i32) -> Self {
        Self { ch, prior }
    }

    /// Whether the priority lies in the conventional `1..=10` range
    #[inline]
    pub fn has_conventional_priority(&self) -> bool {
        (Self::MIN_PRIORITY..=Self::MAX_PRIORITY).contains(&self.prior)
    }
}

impl Prioritized for Symbol {
    type Priority = i32;

    #[inline]
    fn priority(&self) -> &i32 {
        &self.prior
    }
}

impl From<(char, i32)> for Symbol {
    fn from((ch, prior): (char, i32)) -> Self {
        Self::new(ch, prior)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {})", self.ch, self.prior)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
