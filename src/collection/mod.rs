//! Collections that take part in the type class hierarchy.
//!
//! - [`List`]: An immutable ordered sequence, the crate's [`Traversable`]
//!   collection
//!
//! [`Traversable`]: crate::typeclass::Traversable

mod list;

pub use list::List;
