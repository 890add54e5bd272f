//! Effect types: deferred computations that are described first and run
//! later.
//!
//! - [`State`]: Computations that thread a state value
//! - [`Task`]: Lazy asynchronous computations that can fail (requires the
//!   `async` feature)
//!
//! Both types implement [`Functor`](crate::typeclass::Functor),
//! [`Applicative`](crate::typeclass::Applicative) and
//! [`Monad`](crate::typeclass::Monad), so either can be the effect of a
//! [`Traversable`](crate::typeclass::Traversable) traversal.
//!
//! # Examples
//!
//! ```rust
//! use effecta::effect::State;
//!
//! let counter: State<u32, u32> = State::modify(|count| count + 1).then(State::get());
//! assert_eq!(counter.run(41), (42, 42));
//! ```

mod state;

pub use state::State;

// =============================================================================
// Task (requires async feature)
// =============================================================================

#[cfg(feature = "async")]
mod task;

#[cfg(feature = "async")]
pub use task::{Rejecter, Resolver, Task};
