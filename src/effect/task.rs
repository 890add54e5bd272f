//! `Task` - a lazy, re-runnable asynchronous computation that can fail.
//!
//! A `Task<A, E>` describes work that eventually settles with `Ok(A)`
//! (resolved) or `Err(E)` (rejected). Building a task, or a pipeline of
//! tasks, performs no work. Each call to [`Task::run_async`] (or each
//! `.await` on a clone) runs the whole pipeline again from the start:
//! nothing is memoized.
//!
//! # Concurrency
//!
//! [`Task::map2`], and with it [`Task::apply`] and [`Task::product`], starts
//! both sides in the same poll. The combined task resolves once both sides
//! have resolved, or rejects with the first rejection to arrive. The side
//! still pending at that point is dropped and its later settlement is
//! ignored. A `List` traversal over `Task` behaves the same way for every
//! member at once, through a single flat join.
//!
//! # Examples
//!
//! ```rust
//! use effecta::effect::Task;
//!
//! let task: Task<i32, String> = Task::pure(10)
//!     .fmap(|x| x * 2)
//!     .flat_map(|x| Task::pure(x + 1));
//!
//! assert_eq!(task.run_blocking(), Ok(21));
//! // Running again re-runs the pipeline.
//! assert_eq!(task.run_blocking(), Ok(21));
//! ```
//!
//! Callback-style executors settle through a [`Resolver`] or a [`Rejecter`]:
//!
//! ```rust
//! use effecta::effect::Task;
//!
//! let task: Task<&str, &str> = Task::new(|resolve, reject| {
//!     assert!(resolve.resolve("first"));
//!     // Later settlements of the same run are ignored.
//!     assert!(!reject.reject("too late"));
//! });
//!
//! assert_eq!(task.run_blocking(), Ok("first"));
//! ```

use std::fmt;
use std::future::{Future, IntoFuture};
use std::sync::Arc;
use std::time::Duration;

use futures::channel::oneshot;
use futures::future::{self, BoxFuture, FutureExt};
use parking_lot::Mutex;

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor, Value};

type Settlement<A, E> = Arc<Mutex<Option<oneshot::Sender<Result<A, E>>>>>;

/// Settles a single run, returning `true` only for the first settlement.
fn settle<A, E>(slot: &Settlement<A, E>, outcome: Result<A, E>) -> bool {
    let settled = slot
        .lock()
        .take()
        .is_some_and(|sender| sender.send(outcome).is_ok());
    #[cfg(feature = "tracing")]
    tracing::trace!(settled, "task settlement");
    settled
}

/// Resolves the run of a [`Task::new`] executor.
///
/// Shares its run with the paired [`Rejecter`]: whichever settles first wins.
pub struct Resolver<A, E> {
    slot: Settlement<A, E>,
}

impl<A, E> Resolver<A, E> {
    /// Resolves the run with `value`.
    ///
    /// Returns `false` when the run was already settled, or when nothing is
    /// waiting for it any more.
    pub fn resolve(&self, value: A) -> bool {
        settle(&self.slot, Ok(value))
    }
}

impl<A, E> Clone for Resolver<A, E> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<A, E> fmt::Debug for Resolver<A, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Resolver")
            .field("settled", &self.slot.lock().is_none())
            .finish()
    }
}

/// Rejects the run of a [`Task::new`] executor.
pub struct Rejecter<A, E> {
    slot: Settlement<A, E>,
}

impl<A, E> Rejecter<A, E> {
    /// Rejects the run with `error`.
    ///
    /// Returns `false` when the run was already settled, or when nothing is
    /// waiting for it any more.
    pub fn reject(&self, error: E) -> bool {
        settle(&self.slot, Err(error))
    }
}

impl<A, E> Clone for Rejecter<A, E> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<A, E> fmt::Debug for Rejecter<A, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Rejecter")
            .field("settled", &self.slot.lock().is_none())
            .finish()
    }
}

/// A lazy asynchronous computation settling with `Result<A, E>`.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `Task::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(Task::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
///
/// Equality here means equal settlements when run.
pub struct Task<A, E> {
    run: Arc<dyn Fn() -> BoxFuture<'static, Result<A, E>> + Send + Sync>,
}

static_assertions::assert_impl_all!(Task<i32, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Resolver<i32, String>: Send, Sync, Clone);

// =============================================================================
// Constructors
// =============================================================================

impl<A: Send + 'static, E: Send + 'static> Task<A, E> {
    /// Creates a task from a callback-style executor.
    ///
    /// The executor is not called here. Every run calls it once, on the
    /// run's first poll, with a fresh [`Resolver`]/[`Rejecter`] pair. If all
    /// handles of a run are dropped without settling, that run never
    /// completes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::effect::Task;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use std::sync::Arc;
    ///
    /// let calls = Arc::new(AtomicUsize::new(0));
    /// let counter = Arc::clone(&calls);
    /// let task: Task<usize, ()> = Task::new(move |resolve, _reject| {
    ///     resolve.resolve(counter.fetch_add(1, Ordering::SeqCst));
    /// });
    ///
    /// assert_eq!(calls.load(Ordering::SeqCst), 0);
    /// assert_eq!(task.run_blocking(), Ok(0));
    /// assert_eq!(task.run_blocking(), Ok(1));
    /// ```
    pub fn new<F>(executor: F) -> Self
    where
        F: Fn(Resolver<A, E>, Rejecter<A, E>) + Send + Sync + 'static,
    {
        let executor = Arc::new(executor);
        Self::from_fn(move || {
            let executor = Arc::clone(&executor);
            async move {
                let (sender, receiver) = oneshot::channel();
                let slot = Arc::new(Mutex::new(Some(sender)));
                #[cfg(feature = "tracing")]
                tracing::trace!("invoking task executor");
                executor(
                    Resolver {
                        slot: Arc::clone(&slot),
                    },
                    Rejecter { slot },
                );
                match receiver.await {
                    Ok(outcome) => outcome,
                    Err(oneshot::Canceled) => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!("task handles dropped without settling");
                        future::pending().await
                    }
                }
            }
        })
    }

    /// Creates a task from a function producing a fresh future per run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::effect::Task;
    ///
    /// let task: Task<i32, String> = Task::from_fn(|| async { Ok(10 + 20) });
    /// assert_eq!(task.run_blocking(), Ok(30));
    /// ```
    pub fn from_fn<F, Fut>(factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<A, E>> + Send + 'static,
    {
        Self {
            run: Arc::new(move || factory().boxed()),
        }
    }

    /// Creates a task that resolves with a clone of `value` on every run.
    pub fn pure(value: A) -> Self
    where
        A: Clone + Sync,
    {
        Self::from_fn(move || future::ready(Ok(value.clone())))
    }

    /// Alias for [`Task::pure`].
    pub fn of(value: A) -> Self
    where
        A: Clone + Sync,
    {
        Self::pure(value)
    }

    /// Creates a task that rejects with a clone of `error` on every run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::effect::Task;
    ///
    /// let task: Task<i32, &str> = Task::reject("boom");
    /// assert_eq!(task.run_blocking(), Err("boom"));
    /// ```
    pub fn reject(error: E) -> Self
    where
        E: Clone + Sync,
    {
        Self::from_fn(move || future::ready(Err(error.clone())))
    }
}

impl<E: Send + 'static> Task<(), E> {
    /// Creates a task that resolves with `()` after `duration`.
    ///
    /// Uses the tokio timer, so it must run inside a tokio runtime with the
    /// time driver enabled.
    pub fn sleep(duration: Duration) -> Self {
        Self::from_fn(move || async move {
            tokio::time::sleep(duration).await;
            Ok(())
        })
    }
}

// =============================================================================
// Running
// =============================================================================

impl<A, E> Task<A, E> {
    /// Starts a new run of this task.
    ///
    /// The returned future owns everything it needs, so it can be spawned or
    /// awaited after the task itself is dropped. Every call runs the whole
    /// pipeline again.
    pub fn run_async(&self) -> BoxFuture<'static, Result<A, E>> {
        (self.run)()
    }

    /// Runs this task to completion on the current thread.
    ///
    /// Tasks that use tokio timers, such as [`Task::sleep`], need a tokio
    /// runtime and should be awaited there instead.
    pub fn run_blocking(&self) -> Result<A, E> {
        futures::executor::block_on(self.run_async())
    }
}

impl<A: 'static, E: 'static> IntoFuture for Task<A, E> {
    type Output = Result<A, E>;
    type IntoFuture = BoxFuture<'static, Result<A, E>>;

    fn into_future(self) -> Self::IntoFuture {
        self.run_async()
    }
}

// =============================================================================
// Functor / Monad Operations
// =============================================================================

impl<A: Send + 'static, E: Send + 'static> Task<A, E> {
    /// Transforms the resolved value. A rejection is forwarded unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::effect::Task;
    ///
    /// let task: Task<i32, ()> = Task::pure(21).fmap(|x| x * 2);
    /// assert_eq!(task.run_blocking(), Ok(42));
    /// ```
    pub fn fmap<B, F>(self, function: F) -> Task<B, E>
    where
        F: Fn(A) -> B + Send + Sync + 'static,
        B: Send + 'static,
    {
        let function = Arc::new(function);
        Task::from_fn(move || {
            let upstream = self.run_async();
            let function = Arc::clone(&function);
            async move { upstream.await.map(|value| function(value)) }
        })
    }

    /// Continues with the task produced from the resolved value.
    ///
    /// A rejection short-circuits: `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::effect::Task;
    ///
    /// let task: Task<i32, String> = Task::pure(10).flat_map(|x| Task::pure(x * 2));
    /// assert_eq!(task.run_blocking(), Ok(20));
    ///
    /// let failed: Task<i32, String> = Task::reject("no".to_string())
    ///     .flat_map(|x: i32| Task::pure(x * 2));
    /// assert_eq!(failed.run_blocking(), Err("no".to_string()));
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Task<B, E>
    where
        F: Fn(A) -> Task<B, E> + Send + Sync + 'static,
        B: Send + 'static,
    {
        let function = Arc::new(function);
        Task::from_fn(move || {
            let upstream = self.run_async();
            let function = Arc::clone(&function);
            async move {
                let value = upstream.await?;
                function(value).run_async().await
            }
        })
    }

    /// Alias for [`Task::flat_map`].
    pub fn and_then<B, F>(self, function: F) -> Task<B, E>
    where
        F: Fn(A) -> Task<B, E> + Send + Sync + 'static,
        B: Send + 'static,
    {
        self.flat_map(function)
    }

    /// Runs `next` after this task resolves, keeping the value of `next`.
    #[must_use]
    pub fn then<B: Send + 'static>(self, next: Task<B, E>) -> Task<B, E> {
        self.flat_map(move |_| next.clone())
    }

    /// Runs both tasks concurrently and combines their values.
    ///
    /// Both tasks start in the same poll. The first rejection to arrive
    /// rejects the combined task.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::effect::Task;
    ///
    /// let sum: Task<i32, ()> = Task::pure(10).map2(Task::pure(20), |a, b| a + b);
    /// assert_eq!(sum.run_blocking(), Ok(30));
    /// ```
    pub fn map2<B, C, F>(self, other: Task<B, E>, function: F) -> Task<C, E>
    where
        F: Fn(A, B) -> C + Send + Sync + 'static,
        B: Send + 'static,
        C: Send + 'static,
    {
        let function = Arc::new(function);
        Task::from_fn(move || {
            let both = future::try_join(self.run_async(), other.run_async());
            let function = Arc::clone(&function);
            async move {
                match both.await {
                    Ok((first, second)) => Ok(function(first, second)),
                    Err(error) => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!("concurrent join rejected, pending side dropped");
                        Err(error)
                    }
                }
            }
        })
    }

    /// Runs both tasks concurrently and pairs their values.
    #[must_use]
    pub fn product<B: Send + 'static>(self, other: Task<B, E>) -> Task<(A, B), E> {
        self.map2(other, |a, b| (a, b))
    }

    /// Recovers from a rejection by computing a value from the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::effect::Task;
    ///
    /// let task: Task<usize, String> = Task::reject("four".to_string()).catch(|error| error.len());
    /// assert_eq!(task.run_blocking(), Ok(4));
    /// ```
    pub fn catch<F>(self, function: F) -> Self
    where
        F: Fn(E) -> A + Send + Sync + 'static,
    {
        let function = Arc::new(function);
        Self::from_fn(move || {
            let upstream = self.run_async();
            let function = Arc::clone(&function);
            async move { Ok(upstream.await.unwrap_or_else(|error| function(error))) }
        })
    }

    /// Recovers from a rejection by continuing with another task.
    pub fn or_else<E2, F>(self, function: F) -> Task<A, E2>
    where
        F: Fn(E) -> Task<A, E2> + Send + Sync + 'static,
        E2: Send + 'static,
    {
        let function = Arc::new(function);
        Task::from_fn(move || {
            let upstream = self.run_async();
            let function = Arc::clone(&function);
            async move {
                match upstream.await {
                    Ok(value) => Ok(value),
                    Err(error) => function(error).run_async().await,
                }
            }
        })
    }

    /// Transforms the rejection. A resolved value is forwarded unchanged.
    pub fn map_err<E2, F>(self, function: F) -> Task<A, E2>
    where
        F: Fn(E) -> E2 + Send + Sync + 'static,
        E2: Send + 'static,
    {
        let function = Arc::new(function);
        Task::from_fn(move || {
            let upstream = self.run_async();
            let function = Arc::clone(&function);
            async move { upstream.await.map_err(|error| function(error)) }
        })
    }

    /// Wraps every run of this task in `span`.
    #[cfg(feature = "tracing")]
    #[must_use]
    pub fn instrument(self, span: tracing::Span) -> Self {
        use tracing::Instrument as _;
        Self::from_fn(move || self.run_async().instrument(span.clone()))
    }
}

impl<A: Send + 'static, E: Send + 'static> Task<Task<A, E>, E> {
    /// Removes one level of nesting.
    #[must_use]
    pub fn flatten(self) -> Task<A, E> {
        self.flat_map(|inner| inner)
    }
}

impl<F: Send + 'static, E: Send + 'static> Task<F, E> {
    /// Applies the function this task resolves with to the value of `other`.
    ///
    /// Both tasks start concurrently, as with [`Task::map2`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effecta::effect::Task;
    ///
    /// let function: Task<fn(i32) -> i32, ()> = Task::pure(|x| x + 1);
    /// assert_eq!(function.apply(Task::pure(41)).run_blocking(), Ok(42));
    /// ```
    pub fn apply<A, B>(self, other: Task<A, E>) -> Task<B, E>
    where
        F: Fn(A) -> B,
        A: Send + 'static,
        B: Send + 'static,
    {
        self.map2(other, |function, value| function(value))
    }
}

impl<A, E> Clone for Task<A, E> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<A, E> fmt::Debug for Task<A, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Task").finish_non_exhaustive()
    }
}

impl<A, E> fmt::Display for Task<A, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<Task>")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A, E> TypeConstructor for Task<A, E> {
    type Inner = A;
    type WithType<B> = Task<B, E>;
}

impl<A: Send + 'static, E: Send + 'static> Functor for Task<A, E> {
    fn fmap<B, F>(self, function: F) -> Task<B, E>
    where
        F: Fn(A) -> B + Send + Sync + 'static,
        B: Value,
    {
        Self::fmap(self, function)
    }
}

impl<A: Send + 'static, E: Send + 'static> Applicative for Task<A, E> {
    fn pure<B>(value: B) -> Task<B, E>
    where
        B: Value,
    {
        Task::pure(value)
    }

    fn map2<B, C, F>(self, other: Task<B, E>, function: F) -> Task<C, E>
    where
        F: Fn(A, B) -> C + Send + Sync + 'static,
        B: Value,
        C: Value,
    {
        Self::map2(self, other, function)
    }

    /// Runs every task concurrently in one flat join.
    ///
    /// All members start on the first poll. The first rejection to arrive
    /// rejects the combined task and drops the members still pending.
    fn combine_all<C>(effects: Vec<Self>) -> Task<C, E>
    where
        Self: Sized,
        Self::Inner: Value,
        C: Value + FromIterator<A>,
    {
        Task::from_fn(move || {
            let runs = future::try_join_all(effects.iter().map(Task::run_async));
            async move {
                match runs.await {
                    Ok(values) => Ok(values.into_iter().collect()),
                    Err(error) => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!("concurrent join rejected, pending members dropped");
                        Err(error)
                    }
                }
            }
        })
    }
}

impl<A: Send + 'static, E: Send + 'static> Monad for Task<A, E> {
    fn flat_map<B, F>(self, function: F) -> Task<B, E>
    where
        F: Fn(A) -> Task<B, E> + Send + Sync + 'static,
        B: Value,
    {
        Self::flat_map(self, function)
    }
}
