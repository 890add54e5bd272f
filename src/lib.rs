//! # effecta
//!
//! Composable effect types sharing one set of type classes.
//!
//! ## Overview
//!
//! - **Type Classes**: Functor, Applicative, Monad and Traversable, with
//!   higher-kinded types emulated through generic associated types
//! - **Control Structures**: [`Either`](control::Either), an eager value with
//!   a success and a failure branch
//! - **Collections**: [`List`](collection::List), an immutable ordered
//!   sequence that can be traversed with any applicative effect
//! - **Effects**: [`State`](effect::State) for state-threading computations
//!   and [`Task`](effect::Task) for lazy asynchronous computations
//!
//! Traversing a `List` of `Task`s yields one `Task` of a `List`. Running it
//! starts every member task concurrently, keeps the results in index order
//! and rejects with the first failure.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `control`: `Either`
//! - `collection`: `List`
//! - `effect`: `State`
//! - `async`: `Task` (enables `effect`)
//! - `serde`: Serialization for `Either` and `List`
//! - `tracing`: Trace events for task executors and `Task::instrument`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use effecta::prelude::*;
//!
//! let tasks = List::from(vec![Task::<i32, String>::pure(1), Task::pure(2), Task::pure(3)]);
//! let combined = tasks.sequence();
//! assert_eq!(combined.run_blocking(), Ok(List::from(vec![1, 2, 3])));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use effecta::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "effect")]
pub mod effect;
