//! Priority access for queue elements.
//!
//! ## Contract
//!
//! An element exposes exactly one read-only priority. The queue compares
//! priorities with [`Ord`] and nothing else: a higher priority is removed
//! sooner, and equal priorities keep their arrival order.
//!
//! The priority type is generic. [`Symbol`](crate::Symbol) uses an `i32`
//! with a conventional range of 1 to 10, but the queue accepts any totally
//! ordered type (integers, `char`, tuples, `std::cmp::Reverse<_>` to flip
//! the order, and so on).

/// An element with a totally ordered priority.
///
/// ## Example
///
/// ```
/// use ordered_queue::{OrderedQueue, Prioritized};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Job {
///     name: &'static str,
///     urgency: u8,
/// }
///
/// impl Prioritized for Job {
///     type Priority = u8;
///
///     fn priority(&self) -> &u8 {
///         &self.urgency
///     }
/// }
///
/// let mut queue = OrderedQueue::new();
/// queue.insert(Job { name: "backup", urgency: 1 });
/// queue.insert(Job { name: "page", urgency: 7 });
///
/// assert_eq!(queue.remove().name, "page");
/// ```
pub trait Prioritized {
    /// The priority type; larger values are removed first.
    type Priority: Ord;

    /// The element's priority.
    fn priority(&self) -> &Self::Priority;
}

impl<T: Prioritized + ?Sized> Prioritized for &T {
    type Priority = T::Priority;

    #[inline]
    fn priority(&self) -> &Self::Priority {
        (**self).priority()
    }
}

impl<T: Prioritized + ?Sized> Prioritized for Box<T> {
    type Priority = T::Priority;

    #[inline]
    fn priority(&self) -> &Self::Priority {
        (**self).priority()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
