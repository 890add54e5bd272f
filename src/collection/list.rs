//! Immutable ordered sequence.
//!
//! [`List`] owns its elements in a `VecDeque`, so both ends are O(1). No
//! method mutates a list in place: consuming methods move the receiver and
//! return a new list, borrowing methods clone.
//!
//! `List` is the crate's [`Traversable`] collection. Traversing a list with
//! an effectful function turns a list of effects into one effect of a list:
//!
//! ```rust
//! use effecta::collection::List;
//! use effecta::typeclass::Traversable;
//!
//! let inputs = List::from(vec!["1", "2", "3"]);
//! let parsed: Result<List<i32>, String> =
//!     inputs.traverse(|s| s.parse::<i32>().map_err(|e| e.to_string()));
//! assert_eq!(parsed, Ok(List::from(vec![1, 2, 3])));
//! ```
//!
//! # Traversal Order
//!
//! The element function is applied left to right. The resulting effects are
//! then handed to [`Applicative::combine_all`], which combines them in index
//! order, so short-circuiting effects report the leftmost failure. The output
//! keeps index order whatever order the effects settle in.

use std::collections::VecDeque;
use std::collections::vec_deque;
use std::fmt;

use crate::typeclass::{Applicative, Functor, Monad, Traversable, TypeConstructor, Value};

/// An immutable, ordered, finite sequence.
///
/// # Examples
///
/// ```rust
/// use effecta::collection::List;
///
/// let list = List::of(1).concat(2).concat(3);
/// assert_eq!(list.to_vec(), vec![1, 2, 3]);
/// assert_eq!(format!("{list}"), "[1, 2, 3]");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct List<A> {
    elements: VecDeque<A>,
}

impl<A> List<A> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: VecDeque::new(),
        }
    }

    /// Creates a one-element list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::collection::List;
    ///
    /// assert_eq!(List::pure(42).to_vec(), vec![42]);
    /// ```
    pub fn pure(value: A) -> Self {
        let mut elements = VecDeque::with_capacity(1);
        elements.push_back(value);
        Self { elements }
    }

    /// Alias for [`List::pure`].
    pub fn of(value: A) -> Self {
        Self::pure(value)
    }

    /// Wraps a vector, keeping its order.
    pub fn from_vec(values: Vec<A>) -> Self {
        Self {
            elements: VecDeque::from(values),
        }
    }

    /// Lifts a plain function into one that returns a singleton list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::collection::List;
    ///
    /// let lifted = List::lift(|x: i32| x + 1);
    /// assert_eq!(lifted(1), List::of(2));
    /// ```
    pub fn lift<B, F>(function: F) -> impl Fn(A) -> List<B>
    where
        F: Fn(A) -> B,
    {
        move |value| List::pure(function(value))
    }

    /// Returns a new list with `value` appended. `self` is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::collection::List;
    ///
    /// let original = List::from(vec![1, 2]);
    /// let extended = original.concat(3);
    /// assert_eq!(original.len(), 2);
    /// assert_eq!(extended.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn concat(&self, value: A) -> Self
    where
        A: Clone,
    {
        let mut elements = self.elements.clone();
        elements.push_back(value);
        Self { elements }
    }

    /// Joins two lists, `self` first.
    #[must_use]
    pub fn append(mut self, mut other: Self) -> Self {
        self.elements.append(&mut other.elements);
        self
    }

    /// Copies the elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<A>
    where
        A: Clone,
    {
        self.elements.iter().cloned().collect()
    }

    /// Converts into a `Vec` without cloning.
    pub fn into_vec(self) -> Vec<A> {
        Vec::from(self.elements)
    }

    /// Returns an iterator over references to the elements.
    pub fn iter(&self) -> vec_deque::Iter<'_, A> {
        self.elements.iter()
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the list has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&A> {
        self.elements.get(index)
    }

    /// Returns the first element, if any.
    pub fn first(&self) -> Option<&A> {
        self.elements.front()
    }

    /// Returns the last element, if any.
    pub fn last(&self) -> Option<&A> {
        self.elements.back()
    }

    /// Applies `function` to every element, keeping order and length.
    pub fn fmap<B, F>(self, function: F) -> List<B>
    where
        F: FnMut(A) -> B,
    {
        List {
            elements: self.elements.into_iter().map(function).collect(),
        }
    }

    /// Maps every element to a list and concatenates the results in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::collection::List;
    ///
    /// let list = List::from(vec![1, 2]).flat_map(|x| List::from(vec![x, x * 10]));
    /// assert_eq!(list.to_vec(), vec![1, 10, 2, 20]);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> List<B>
    where
        F: FnMut(A) -> List<B>,
    {
        self.fmap(function).flatten()
    }
}

impl<A> List<List<A>> {
    /// Concatenates the inner lists in order.
    #[must_use]
    pub fn flatten(self) -> List<A> {
        self.elements
            .into_iter()
            .fold(List::new(), |flattened, inner| flattened.append(inner))
    }
}

impl<F> List<F> {
    /// Applies every function to every element of `other`.
    ///
    /// The outer loop runs over the functions, so results are grouped by
    /// function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::collection::List;
    ///
    /// fn add_one(x: i32) -> i32 { x + 1 }
    /// fn times_ten(x: i32) -> i32 { x * 10 }
    ///
    /// let functions: List<fn(i32) -> i32> = List::from(vec![add_one as fn(i32) -> i32, times_ten]);
    /// let applied = functions.apply(List::from(vec![1, 2]));
    /// assert_eq!(applied.to_vec(), vec![2, 3, 10, 20]);
    /// ```
    pub fn apply<A, B>(self, other: List<A>) -> List<B>
    where
        F: Fn(A) -> B,
        A: Clone,
    {
        let mut elements = VecDeque::with_capacity(self.len().saturating_mul(other.len()));
        for function in self.elements {
            for value in &other.elements {
                elements.push_back(function(value.clone()));
            }
        }
        List { elements }
    }
}

impl<A> Default for List<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> From<Vec<A>> for List<A> {
    fn from(values: Vec<A>) -> Self {
        Self::from_vec(values)
    }
}

impl<A> FromIterator<A> for List<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<A> IntoIterator for List<A> {
    type Item = A;
    type IntoIter = vec_deque::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, A> IntoIterator for &'a List<A> {
    type Item = &'a A;
    type IntoIter = vec_deque::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<A: fmt::Debug> fmt::Debug for List<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<A: fmt::Display> fmt::Display for List<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for List<A> {
    type Inner = A;
    type WithType<B> = List<B>;
}

impl<A> Functor for List<A> {
    fn fmap<B, F>(self, function: F) -> List<B>
    where
        F: Fn(A) -> B + Send + Sync + 'static,
        B: Value,
    {
        Self::fmap(self, function)
    }
}

impl<A: Clone> Applicative for List<A> {
    fn pure<B>(value: B) -> List<B>
    where
        B: Value,
    {
        List::pure(value)
    }

    fn map2<B, C, F>(self, other: List<B>, function: F) -> List<C>
    where
        F: Fn(A, B) -> C + Send + Sync + 'static,
        B: Value,
        C: Value,
    {
        let mut elements = VecDeque::with_capacity(self.len().saturating_mul(other.len()));
        for first in self.elements {
            for second in &other.elements {
                elements.push_back(function(first.clone(), second.clone()));
            }
        }
        List { elements }
    }
}

impl<A: Clone> Monad for List<A> {
    fn flat_map<B, F>(self, function: F) -> List<B>
    where
        F: Fn(A) -> List<B> + Send + Sync + 'static,
        B: Value,
    {
        Self::flat_map(self, function)
    }
}

impl<A> Traversable for List<A> {
    fn traverse<G, B, F>(self, function: F) -> G::WithType<List<B>>
    where
        G: Applicative<Inner = B>,
        F: FnMut(A) -> G,
        B: Value,
    {
        // Collected first so the function sees the elements in index order.
        let effects: Vec<G> = self.elements.into_iter().map(function).collect();
        G::combine_all(effects)
    }
}
