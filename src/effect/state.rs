//! State monad - deferred computations that thread a state value.
//!
//! A `State<S, A>` wraps a transition `S -> (A, S)`. Nothing happens until
//! [`State::run`] is called with an initial state, and the same `State` may
//! be run any number of times.
//!
//! `State` implements [`Functor`], [`Applicative`] and [`Monad`], so it can
//! be the effect of a generic traversal. `map2` runs the receiver's
//! transition first and hands the resulting state to the argument, which
//! makes a traversal thread state through the elements in order.
//!
//! # Laws
//!
//! - Get Put: `get().flat_map(put) == pure(())`
//! - Put Get: `put(s).then(get())` yields `s`
//! - Put Put: `put(s1).then(put(s2)) == put(s2)`
//!
//! # Examples
//!
//! ```rust
//! use effecta::effect::State;
//!
//! fn increment() -> State<i32, ()> {
//!     State::modify(|count| count + 1)
//! }
//!
//! let computation = increment()
//!     .then(increment())
//!     .then(increment())
//!     .then(State::get());
//!
//! assert_eq!(computation.run(0), (3, 3));
//! ```

use std::fmt;
use std::rc::Rc;

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor, Value};

/// A computation that, given a state `S`, yields a value `A` and a new state.
///
/// # Examples
///
/// ```rust
/// use effecta::effect::State;
///
/// let computation: State<i32, i32> =
///     State::get().flat_map(|current| State::put(current + 1).then(State::pure(current)));
///
/// assert_eq!(computation.run(10), (10, 11));
/// ```
pub struct State<S, A> {
    transition: Rc<dyn Fn(S) -> (A, S)>,
}

impl<S: 'static, A: 'static> State<S, A> {
    /// Creates a State from a state transition function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// assert_eq!(state.run(10), (20, 11));
    /// ```
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self {
            transition: Rc::new(transition),
        }
    }

    /// Creates a State that yields `value` and leaves the state untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::effect::State;
    ///
    /// let state: State<i32, &str> = State::pure("constant");
    /// assert_eq!(state.run(42), ("constant", 42));
    /// ```
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Alias for [`State::pure`].
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        Self::pure(value)
    }

    /// Runs the computation, returning the value and the final state.
    pub fn run(&self, initial_state: S) -> (A, S) {
        (self.transition)(initial_state)
    }

    /// Runs the computation and keeps only the value.
    pub fn eval(&self, initial_state: S) -> A {
        self.run(initial_state).0
    }

    /// Runs the computation and keeps only the final state.
    pub fn exec(&self, initial_state: S) -> S {
        self.run(initial_state).1
    }

    /// Maps a function over the value, leaving the state transition as is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::effect::State;
    ///
    /// let state: State<i32, i32> = State::get();
    /// assert_eq!(state.fmap(|value| value * 2).run(21), (42, 21));
    /// ```
    pub fn fmap<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let transition = self.transition;
        State::new(move |state| {
            let (value, next_state) = transition(state);
            (function(value), next_state)
        })
    }

    /// Runs this State, then the State produced from its value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::effect::State;
    ///
    /// let state: State<i32, i32> = State::new(|s: i32| (s, s + 1));
    /// let chained = state.flat_map(|value| State::new(move |s: i32| (value + s, s * 2)));
    /// assert_eq!(chained.run(10), (21, 22));
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        let transition = self.transition;
        State::new(move |state| {
            let (value, intermediate_state) = transition(state);
            function(value).run(intermediate_state)
        })
    }

    /// Alias for [`State::flat_map`].
    pub fn and_then<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Runs this State, then `next`, keeping the value of `next`.
    #[must_use]
    pub fn then<B: 'static>(self, next: State<S, B>) -> State<S, B> {
        self.flat_map(move |_| next.clone())
    }

    /// Runs this State and then `other` on the resulting state, combining
    /// both values with `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::effect::State;
    ///
    /// let first: State<i32, i32> = State::new(|s: i32| (s, s + 1));
    /// let second: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// // first: (10, 11), second with 11: (22, 12)
    /// assert_eq!(first.map2(second, |a, b| a + b).run(10), (32, 12));
    /// ```
    pub fn map2<B, C, F>(self, other: State<S, B>, function: F) -> State<S, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let first = self.transition;
        let second = other.transition;
        State::new(move |state| {
            let (value_a, intermediate_state) = first(state);
            let (value_b, final_state) = second(intermediate_state);
            (function(value_a, value_b), final_state)
        })
    }

    /// Creates a State that yields a projection of the current state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::effect::State;
    ///
    /// #[derive(Clone)]
    /// struct Config { port: u16 }
    ///
    /// let state: State<Config, u16> = State::gets(|config: &Config| config.port);
    /// assert_eq!(state.eval(Config { port: 8080 }), 8080);
    /// ```
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| (projection(&state), state))
    }

    /// Creates a State that yields `function(state)` and keeps the state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::effect::State;
    ///
    /// let state: State<i32, String> = State::get_state_and_update(|s| format!("was {s}"));
    /// assert_eq!(state.run(7), ("was 7".to_string(), 7));
    /// ```
    pub fn get_state_and_update<F>(function: F) -> Self
    where
        F: Fn(S) -> A + 'static,
        S: Clone,
    {
        Self::new(move |state: S| (function(state.clone()), state))
    }
}

impl<S: 'static, F: 'static> State<S, F> {
    /// Applies the function produced by this State to the value of `other`.
    ///
    /// The function's transition runs first.
    pub fn apply<A, B>(self, other: State<S, A>) -> State<S, B>
    where
        F: Fn(A) -> B,
        A: 'static,
        B: 'static,
    {
        self.map2(other, |function, value| function(value))
    }
}

impl<S: Clone + 'static> State<S, S> {
    /// Creates a State that yields the current state without modifying it.
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }

    /// Yields the current state, ignoring its argument.
    ///
    /// Shaped to be passed straight to `flat_map`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::effect::State;
    ///
    /// let state: State<i32, i32> = State::of(5).flat_map(State::get_state);
    /// assert_eq!(state.run(10), (10, 10));
    /// ```
    #[must_use]
    pub fn get_state<T>(_ignored: T) -> Self {
        Self::get()
    }
}

impl<S: 'static> State<S, ()> {
    /// Creates a State that replaces the current state.
    pub fn put(new_state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| ((), new_state.clone()))
    }

    /// Creates a State that transforms the current state.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| ((), modifier(state)))
    }

    /// Stores `value` as the new state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::effect::State;
    ///
    /// let state: State<i32, i32> = State::save(3).then(State::get());
    /// assert_eq!(state.run(0), (3, 3));
    /// ```
    pub fn save(value: S) -> Self
    where
        S: Clone,
    {
        Self::put(value)
    }

    /// Replaces the state with `function(state)`.
    pub fn update<F>(function: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::modify(function)
    }
}

impl<S, A> Clone for State<S, A> {
    fn clone(&self) -> Self {
        Self {
            transition: Rc::clone(&self.transition),
        }
    }
}

impl<S, A> fmt::Display for State<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<State>")
    }
}

impl<S, A> fmt::Debug for State<S, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("State").finish_non_exhaustive()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<S, A> TypeConstructor for State<S, A> {
    type Inner = A;
    type WithType<B> = State<S, B>;
}

impl<S: 'static, A: 'static> Functor for State<S, A> {
    fn fmap<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + Send + Sync + 'static,
        B: Value,
    {
        Self::fmap(self, function)
    }
}

impl<S: 'static, A: 'static> Applicative for State<S, A> {
    fn pure<B>(value: B) -> State<S, B>
    where
        B: Value,
    {
        State::pure(value)
    }

    fn map2<B, C, F>(self, other: State<S, B>, function: F) -> State<S, C>
    where
        F: Fn(A, B) -> C + Send + Sync + 'static,
        B: Value,
        C: Value,
    {
        Self::map2(self, other, function)
    }

    /// Threads the state through every transition in order, in one loop.
    fn combine_all<C>(effects: Vec<Self>) -> State<S, C>
    where
        Self: Sized,
        Self::Inner: Value,
        C: Value + FromIterator<A>,
    {
        State::new(move |initial_state| {
            let mut state = initial_state;
            let mut values = Vec::with_capacity(effects.len());
            for effect in &effects {
                let (value, next_state) = effect.run(state);
                values.push(value);
                state = next_state;
            }
            (values.into_iter().collect(), state)
        })
    }
}

impl<S: 'static, A: 'static> Monad for State<S, A> {
    fn flat_map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + Send + Sync + 'static,
        B: Value,
    {
        Self::flat_map(self, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_display_state() {
        let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
        assert_eq!(format!("{state}"), "<State>");
    }

    #[rstest]
    fn state_new_and_run() {
        let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
        assert_eq!(state.run(10), (20, 11));
        assert_eq!(state.eval(10), 20);
        assert_eq!(state.exec(10), 11);
    }

    #[rstest]
    fn state_put_replaces_state() {
        let state: State<i32, ()> = State::put(100);
        assert_eq!(state.run(42), ((), 100));
    }

    #[rstest]
    fn state_modify_transforms_state() {
        let state: State<i32, ()> = State::modify(|x| x * 2);
        assert_eq!(state.exec(21), 42);
    }

    #[rstest]
    fn get_state_ignores_previous_value() {
        let state: State<i32, i32> = State::of(5).flat_map(State::get_state);
        assert_eq!(state.run(10), (10, 10));
    }

    #[rstest]
    fn update_then_get_state_and_update() {
        let state = State::update(|s: i32| s + 1)
            .then(State::get_state_and_update(|s: i32| s * 100));
        assert_eq!(state.run(1), (200, 2));
    }

    #[rstest]
    fn apply_runs_function_transition_first() {
        type Log = Vec<&'static str>;
        let function: State<Log, fn(usize) -> usize> = State::new(|mut log: Log| {
            log.push("function");
            let increment: fn(usize) -> usize = |n| n + 1;
            (increment, log)
        });
        let argument: State<Log, usize> = State::new(|mut log: Log| {
            log.push("argument");
            (log.len(), log)
        });
        let (value, log) = function.apply(argument).run(Vec::new());
        assert_eq!(value, 3);
        assert_eq!(log, vec!["function", "argument"]);
    }

    #[rstest]
    fn state_is_rerunnable() {
        let state: State<i32, i32> = State::gets(|s: &i32| s * 2);
        let cloned = state.clone();
        assert_eq!(state.run(10), cloned.run(10));
        assert_eq!(state.run(3), (6, 3));
    }

    fn double_through_functor<F: Functor<Inner = i32>>(container: F) -> F::WithType<i32> {
        container.fmap(|x| x * 2)
    }

    #[rstest]
    fn functor_instance_is_usable_generically() {
        let state: State<String, i32> = State::gets(String::len).fmap(|n| n as i32);
        assert_eq!(double_through_functor(state).run("abc".to_string()), (6, "abc".to_string()));
    }

    #[rstest]
    fn monad_instance_matches_inherent() {
        let via_trait = <State<i32, i32> as Monad>::flat_map(State::get(), |s| State::pure(s + 1));
        assert_eq!(via_trait.run(4), (5, 4));
    }
}
