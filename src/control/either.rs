//! Either type - a value that can be one of two types.
//!
//! `Either<L, R>` is either a `Left(L)` or a `Right(R)`. `Right` is the
//! success branch: the type class instances map and chain over it, while a
//! `Left` short-circuits every subsequent step until [`Either::catch`] turns
//! it back into a `Right`.
//!
//! # Examples
//!
//! ```rust
//! use effecta::control::Either;
//! use effecta::typeclass::{Functor, Monad};
//!
//! let right: Either<String, i32> = Either::Right(20);
//! let result = right.fmap(|n| n + 1).flat_map(|n| Either::Right(n * 2));
//! assert_eq!(result, Either::Right(42));
//!
//! let left: Either<String, i32> = Either::Left("boom".to_string());
//! let result = left.fmap(|n| n + 1);
//! assert_eq!(result, Either::Left("boom".to_string()));
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Functor, Monad, Traversable, TypeConstructor, Value};

/// A value that can be one of two types.
///
/// By convention:
/// - `Left` represents failure and is passed through unchanged
/// - `Right` represents success and is what `fmap`/`flat_map` operate on
///
/// # Examples
///
/// ```rust
/// use effecta::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// assert_eq!(success.map_right(|x| x * 2), Either::Right(84));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure.
    Left(L),
    /// The right variant, conventionally representing success.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Wraps a value in the success branch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::control::Either;
    ///
    /// let value: Either<(), i32> = Either::pure(1);
    /// assert_eq!(value, Either::Right(1));
    /// ```
    #[inline]
    pub const fn pure(value: R) -> Self {
        Self::Right(value)
    }

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Converts the `Either` into an `Option<L>`, consuming the either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left(), Some(42));
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts the `Either` into an `Option<R>`, consuming the either.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Applies a function to the left value, leaving a right value untouched.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value, leaving a left value untouched.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Collapses both branches into one value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// let result = right.fold(|n| format!("Number: {n}"), |s| format!("String: {s}"));
    /// assert_eq!(result, "String: hello");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the branches.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Recovers from a `Left` by converting its value into a `Right`.
    ///
    /// A `Right` is returned unchanged and `recover` is not called. This goes
    /// further than moving the left value across unchanged: `recover` computes
    /// the new right value. When both branches share a type, `catch(|v| v)`
    /// is that plain move.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::control::Either;
    ///
    /// let failed: Either<&str, usize> = Either::Left("boom");
    /// assert_eq!(failed.catch(|message| message.len()), Either::Right(4));
    ///
    /// let succeeded: Either<&str, usize> = Either::Right(1);
    /// assert_eq!(succeeded.catch(|message| message.len()), Either::Right(1));
    ///
    /// let same_type: Either<i32, i32> = Either::Left(7);
    /// assert_eq!(same_type.catch(|value| value), Either::Right(7));
    /// ```
    #[inline]
    pub fn catch<F>(self, recover: F) -> Self
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(value) => Self::Right(recover(value)),
            right @ Self::Right(_) => right,
        }
    }

    /// Converts into a `Result`, with `Right` as `Ok`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        self.into()
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Removes one level of nesting from the success branch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::control::Either;
    ///
    /// let nested: Either<&str, Either<&str, i32>> = Either::Right(Either::Right(1));
    /// assert_eq!(nested.flatten(), Either::Right(1));
    /// ```
    #[inline]
    pub fn flatten(self) -> Either<L, R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(inner) => inner,
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(error) => Err(error),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: Fn(R) -> B + Send + Sync + 'static,
        B: Value,
    {
        self.map_right(function)
    }
}

impl<L, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B>
    where
        B: Value,
    {
        Either::Right(value)
    }

    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: Fn(R, B) -> C + Send + Sync + 'static,
        B: Value,
        C: Value,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(first) => other.map_right(|second| function(first, second)),
        }
    }
}

impl<L, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: Fn(R) -> Either<L, B> + Send + Sync + 'static,
        B: Value,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }
}

impl<L: Value, R> Traversable for Either<L, R> {
    fn traverse<G, B, F>(self, mut function: F) -> G::WithType<Either<L, B>>
    where
        G: Applicative<Inner = B>,
        F: FnMut(R) -> G,
        B: Value,
    {
        match self {
            Self::Left(value) => G::pure(Either::<L, B>::Left(value)),
            Self::Right(value) => function(value).fmap(Either::<L, B>::Right),
        }
    }
}
