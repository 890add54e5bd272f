//! Traversable type class - mapping with effects and collecting results.
//!
//! A `Traversable` structure can apply an effectful function to each of its
//! elements and collect the results inside the effect, "turning the structure
//! inside out": a `List` of `Task`s becomes one `Task` of a `List`, a `List` of
//! `Option`s becomes an `Option` of a `List`.
//!
//! # Generic Effects
//!
//! `traverse` is generic over **any** [`Applicative`] `G`. The target
//! applicative is selected by the type returned from the element function
//! (or by a turbofish), which plays the role of the `of` constructor other
//! libraries pass explicitly. Everything the algorithm needs from `G` is
//! `pure` (the empty result) and `map2` (adding one element), so no instance
//! is special-cased.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! traverse(Identity) == Identity  // conceptually
//! ```
//!
//! ## Naturality
//!
//! ```text
//! transform(traverse(f)) == traverse(transform . f)  // for natural transformation `transform`
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effecta::collection::List;
//! use effecta::typeclass::Traversable;
//!
//! let strings = List::from(vec!["1", "2", "3"]);
//! let numbers: Option<List<i32>> = strings.traverse(|s| s.parse().ok());
//! assert_eq!(numbers, Some(List::from(vec![1, 2, 3])));
//!
//! let with_error = List::from(vec!["1", "not a number", "3"]);
//! let result: Option<List<i32>> = with_error.traverse(|s| s.parse().ok());
//! assert_eq!(result, None);
//! ```

use super::applicative::Applicative;
use super::functor::Functor;
use super::higher::{TypeConstructor, Value};

/// A type class for structures that can be traversed with effects.
///
/// # Examples
///
/// ```rust
/// use effecta::collection::List;
/// use effecta::typeclass::Traversable;
///
/// fn validate_positive(number: i32) -> Result<i32, &'static str> {
///     if number > 0 { Ok(number) } else { Err("must be positive") }
/// }
///
/// let valid = List::from(vec![1, 2, 3]);
/// assert_eq!(valid.traverse(validate_positive), Ok(List::from(vec![1, 2, 3])));
///
/// let invalid = List::from(vec![1, -2, 3]);
/// assert_eq!(invalid.traverse(validate_positive), Err("must be positive"));
/// ```
pub trait Traversable: Functor {
    /// Applies an effectful function to every element and collects the results
    /// inside the effect.
    ///
    /// The function is applied to the elements in order. Element order is kept
    /// in the result regardless of how or when the effects settle.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::collection::List;
    /// use effecta::typeclass::Traversable;
    ///
    /// let values = List::from(vec!["1", "2", "3"]);
    /// let result: Result<List<i32>, String> =
    ///     values.traverse(|s| s.parse::<i32>().map_err(|e| e.to_string()));
    /// assert_eq!(result, Ok(List::from(vec![1, 2, 3])));
    /// ```
    fn traverse<G, B, F>(self, function: F) -> G::WithType<Self::WithType<B>>
    where
        G: Applicative<Inner = B>,
        F: FnMut(Self::Inner) -> G,
        B: Value;

    /// Turns a structure of effects inside out.
    ///
    /// Equivalent to `traverse(|effect| effect)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::collection::List;
    /// use effecta::typeclass::Traversable;
    ///
    /// let values = List::from(vec![Some(1), Some(2), Some(3)]);
    /// assert_eq!(values.sequence(), Some(List::from(vec![1, 2, 3])));
    ///
    /// let values = List::from(vec![Some(1), None, Some(3)]);
    /// assert_eq!(values.sequence(), None);
    /// ```
    #[inline]
    fn sequence<B>(self) -> <Self::Inner as TypeConstructor>::WithType<Self::WithType<B>>
    where
        Self: Sized,
        Self::Inner: Applicative<Inner = B>,
        B: Value,
    {
        self.traverse::<Self::Inner, B, _>(|effect| effect)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Traversable for Option<A> {
    fn traverse<G, B, F>(self, mut function: F) -> G::WithType<Option<B>>
    where
        G: Applicative<Inner = B>,
        F: FnMut(A) -> G,
        B: Value,
    {
        match self {
            Some(element) => function(element).fmap(Some::<B>),
            None => G::pure(None::<B>),
        }
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Value> Traversable for Result<T, E> {
    fn traverse<G, B, F>(self, mut function: F) -> G::WithType<Result<B, E>>
    where
        G: Applicative<Inner = B>,
        F: FnMut(T) -> G,
        B: Value,
    {
        match self {
            Ok(element) => function(element).fmap(Ok::<B, E>),
            Err(error) => G::pure(Err::<B, E>(error)),
        }
    }
}
