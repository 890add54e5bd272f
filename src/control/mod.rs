//! Control structures for functional programming.
//!
//! - [`Either`]: A value that can be one of two types, with `Right` as the
//!   success branch
//!
//! # Examples
//!
//! ```rust
//! use effecta::control::Either;
//!
//! fn parse(input: &str) -> Either<String, i32> {
//!     input.parse().map_err(|_| format!("not a number: {input}")).into()
//! }
//!
//! assert_eq!(parse("42"), Either::Right(42));
//! assert!(parse("forty-two").is_left());
//! ```

mod either;

pub use either::Either;
