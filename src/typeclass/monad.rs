//! Monad type class - sequencing computations with dependency.
//!
//! A `Monad` lets the next computation depend on the result of the previous
//! one. Where `Applicative::map2` combines two independent contexts,
//! `flat_map` decides which context comes next from the value produced so far.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effecta::typeclass::Monad;
//!
//! let z = Some(10).flat_map(|n| if n > 0 { Some(n / 2) } else { None });
//! assert_eq!(z, Some(5));
//! ```

use super::applicative::Applicative;
use super::higher::Value;

/// A type class for applicatives whose computations can depend on earlier results.
///
/// # Examples
///
/// ```rust
/// use effecta::typeclass::Monad;
///
/// let parsed: Result<i32, String> = Ok("42".to_string())
///     .flat_map(|text| text.parse::<i32>().map_err(|error| error.to_string()));
/// assert_eq!(parsed, Ok(42));
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// Called `chain` or `>>=` elsewhere. Once the receiver has failed, the
    /// function is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::typeclass::Monad;
    ///
    /// let x = Some(5);
    /// assert_eq!(x.flat_map(|n| Some(n * 2)), Some(10));
    ///
    /// let z = Some(5);
    /// assert_eq!(z.flat_map(|n| if n > 10 { Some(n) } else { None }), None);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> Self::WithType<B> + Send + Sync + 'static,
        B: Value;

    /// Alias for `flat_map` to match Rust's naming conventions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).and_then(|n| Some(n * 2)), Some(10));
    /// ```
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: Fn(Self::Inner) -> Self::WithType<B> + Send + Sync + 'static,
        B: Value,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` fails, the failure propagates and `next` is not used.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).then(Some("hello")), Some("hello"));
    /// assert_eq!(None::<i32>.then(Some("hello")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::WithType<B>: Value,
        B: Value,
    {
        self.flat_map(move |_| next.clone())
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: Fn(A) -> Option<B> + Send + Sync + 'static,
        B: Value,
    {
        self.and_then(function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: Fn(T) -> Result<B, E> + Send + Sync + 'static,
        B: Value,
    {
        self.and_then(function)
    }
}
