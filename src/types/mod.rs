//! Element-side types for the ordered queue.
//!
//! ## Types
//!
//! - [`Prioritized`]: Read-only access to an element's priority
//! - [`Symbol`]: A character tagged with an integer priority
//!
//! The queue only ever compares priorities; it never inspects the rest of
//! an element.

mod priority;
mod symbol;

// Re-export all types at module level
pub use priority::Prioritized;
pub use symbol::Symbol;
