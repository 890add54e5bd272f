//! Type class traits for functional programming abstractions.
//!
//! This module provides the capability contracts shared by every container
//! and effect in the crate:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining independent contexts
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Traversable`]: Traversing structures with any applicative effect
//!
//! None of the algorithms built on these traits assume a concrete container;
//! each instance is resolved at compile time.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate HKT
//! behavior, which is what lets `Traversable::traverse` be written once for
//! every applicative.
//!
//! # Examples
//!
//! ```rust
//! use effecta::typeclass::{Applicative, Functor, Monad};
//!
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x.fmap(|n| n + 1), Some(43));
//!
//! let chained = Some(1).flat_map(|n| Some(n * 10)).map2(Some(2), |a, b| a + b);
//! assert_eq!(chained, Some(12));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;
mod traversable;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::{TypeConstructor, Value};
pub use monad::Monad;
pub use traversable::Traversable;
