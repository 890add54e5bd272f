//! Applicative type class - applying functions within a context.
//!
//! `Applicative` extends `Functor` with the ability to:
//! - Lift a pure value into the context (`pure`)
//! - Combine independent computations within the context (`map2`)
//! - Apply a wrapped function to a wrapped value (`apply`)
//!
//! # Effect Order
//!
//! Instances combine effects **receiver first**: in `fa.map2(fb, f)` the
//! effect of `fa` is observed before the effect of `fb`. Sequential effects
//! (`State`) thread state in that order; short-circuiting effects (`Option`,
//! `Result`, `Either`) report the receiver's failure when both sides fail.
//! Concurrent effects (`Task`) start both sides together and are free to
//! settle in either order; only the value layout follows receiver-first.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use effecta::typeclass::Applicative;
//!
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, Some(42));
//!
//! let sum = Some(3).map2(Some(4), |x, y| x + y);
//! assert_eq!(sum, Some(7));
//! ```

use super::functor::Functor;
use super::higher::Value;

/// A type class for functors that can lift values and combine two contexts.
///
/// # Examples
///
/// ```rust
/// use effecta::typeclass::Applicative;
///
/// let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
/// assert_eq!(function.apply(Some(5)), Some(6));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// The receiver type only selects the context; its inner type is ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::typeclass::Applicative;
    ///
    /// let x: Option<i32> = <Option<()>>::pure(42);
    /// assert_eq!(x, Some(42));
    ///
    /// let y: Result<String, ()> = <Result<(), ()>>::pure("hello".to_string());
    /// assert_eq!(y, Ok("hello".to_string()));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>
    where
        B: Value;

    /// Combines two applicative values using a binary function.
    ///
    /// If either side fails (in the sense appropriate to the instance), the
    /// result fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).map2(Some(2), |x, y| x + y), Some(3));
    /// assert_eq!(Some(1).map2(None::<i32>, |x, y| x + y), None);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: Fn(Self::Inner, B) -> C + Send + Sync + 'static,
        B: Value,
        C: Value;

    /// Applies a function inside the context to a value inside the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::typeclass::Applicative;
    ///
    /// let function: Result<fn(i32) -> i32, &str> = Ok(|x| x * 2);
    /// assert_eq!(function.apply(Ok(21)), Ok(42));
    /// ```
    #[inline]
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: Fn(B) -> Output,
        B: Value,
        Output: Value,
    {
        self.map2(other, |function, value| function(value))
    }

    /// Combines two applicative values into a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product(Some("hello")), Some((1, "hello")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
        Self::Inner: Value,
        B: Value,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates both applicatives and keeps the left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product_left(Some(2)), Some(1));
    /// assert_eq!(Some(1).product_left(None::<i32>), None);
    /// ```
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
        Self::Inner: Value,
        B: Value,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates both applicatives and keeps the right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product_right(Some(2)), Some(2));
    /// ```
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        B: Value,
    {
        self.map2(other, |_, b| b)
    }

    /// Combines a sequence of effects into one effect of all their values.
    ///
    /// Effects are combined in order, leftmost as the receiver, so the
    /// result is the same as chaining `map2` over the sequence. Instances
    /// whose `map2` nests (`State`, `Task`) override this with a flat
    /// combination so that long sequences do not grow the stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::typeclass::Applicative;
    ///
    /// let all: Option<Vec<i32>> = Option::combine_all(vec![Some(1), Some(2), Some(3)]);
    /// assert_eq!(all, Some(vec![1, 2, 3]));
    ///
    /// let first_error: Result<Vec<i32>, &str> = Result::combine_all(vec![Ok(1), Err("a"), Err("b")]);
    /// assert_eq!(first_error, Err("a"));
    /// ```
    fn combine_all<C>(effects: Vec<Self>) -> Self::WithType<C>
    where
        Self: Sized,
        Self::Inner: Value,
        C: Value + FromIterator<Self::Inner>,
    {
        let mut remaining = effects.into_iter();
        let Some(first) = remaining.next() else {
            return Self::pure(std::iter::empty().collect());
        };
        // Values after the first are gathered last-first.
        let rest = remaining
            .rev()
            .fold(Self::pure(Vec::new()), |accumulated, effect| {
                effect.map2(accumulated, |head, mut tail: Vec<Self::Inner>| {
                    tail.push(head);
                    tail
                })
            });
        first.map2::<Vec<Self::Inner>, C, _>(rest, |head, tail| {
            std::iter::once(head).chain(tail.into_iter().rev()).collect()
        })
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B>
    where
        B: Value,
    {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: Fn(A, B) -> C + Send + Sync + 'static,
        B: Value,
        C: Value,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E>
    where
        B: Value,
    {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: Fn(T, B) -> C + Send + Sync + 'static,
        B: Value,
        C: Value,
    {
        match self {
            Ok(a) => other.map(|b| function(a, b)),
            Err(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_pure_creates_some() {
        let value: Option<i32> = <Option<()>>::pure(42);
        assert_eq!(value, Some(42));
    }

    #[rstest]
    #[case(Some(1), Some(2), Some(3))]
    #[case(Some(1), None, None)]
    #[case(None, Some(2), None)]
    #[case(None, None, None)]
    fn option_map2_cases(
        #[case] left: Option<i32>,
        #[case] right: Option<i32>,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(left.map2(right, |x, y| x + y), expected);
    }

    #[rstest]
    fn result_map2_err_err_returns_first() {
        let first: Result<i32, &str> = Err("first");
        let second: Result<i32, &str> = Err("second");
        assert_eq!(first.map2(second, |x, y| x + y), Err("first"));
    }

    #[rstest]
    fn result_map2_ok_err_returns_err() {
        let first: Result<i32, &str> = Ok(1);
        let second: Result<i32, &str> = Err("second");
        assert_eq!(first.map2(second, |x, y| x + y), Err("second"));
    }

    #[rstest]
    fn option_apply_with_none_function() {
        let function: Option<fn(i32) -> i32> = None;
        assert_eq!(function.apply(Some(5)), None);
    }

    #[rstest]
    fn option_product_right_with_none() {
        assert_eq!(None::<i32>.product_right(Some(2)), None);
    }

    #[rstest]
    fn result_homomorphism_law() {
        let function: fn(i32) -> i32 = |x| x * 3;
        let lifted: Result<fn(i32) -> i32, String> = <Result<(), String>>::pure(function);
        let left = lifted.apply(<Result<(), String>>::pure(7));
        let right: Result<i32, String> = <Result<(), String>>::pure(function(7));
        assert_eq!(left, right);
    }

    #[rstest]
    #[case(vec![], Some(vec![]))]
    #[case(vec![Some(1)], Some(vec![1]))]
    #[case(vec![Some(1), Some(2), Some(3)], Some(vec![1, 2, 3]))]
    #[case(vec![Some(1), None, Some(3)], None)]
    fn option_combine_all_cases(#[case] input: Vec<Option<i32>>, #[case] expected: Option<Vec<i32>>) {
        assert_eq!(Option::combine_all::<Vec<i32>>(input), expected);
    }

    #[rstest]
    fn result_combine_all_reports_leftmost_error() {
        let effects: Vec<Result<i32, &str>> = vec![Ok(1), Err("second"), Err("third")];
        assert_eq!(Result::combine_all::<Vec<i32>>(effects), Err("second"));
    }

    #[rstest]
    fn combine_all_handles_long_sequences() {
        let effects: Vec<Option<u32>> = (0..100_000).map(Some).collect();
        let combined: Option<Vec<u32>> = Option::combine_all(effects);
        assert_eq!(combined.map(|values| values.len()), Some(100_000));
    }
}
