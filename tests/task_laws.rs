#![cfg(all(feature = "async", feature = "collection"))]
//! Property-based tests for Task laws.
//!
//! This module verifies that the Task type satisfies the Functor, Applicative
//! and Monad laws, comparing settlements of fresh runs. It also checks that
//! traversing a `List` of timed tasks keeps index order for any completion
//! order.

use effecta::collection::List;
use effecta::effect::Task;
use effecta::typeclass::{Applicative, Traversable};
use proptest::prelude::*;
use std::time::Duration;

fn paused_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .unwrap()
}

fn delayed(value: i32, millis: u64) -> Task<i32, String> {
    Task::new(move |resolve, _reject| {
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(millis)).await;
            resolve.resolve(value);
        });
    })
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Functor Identity Law: fmap(id) == id
    #[test]
    fn prop_task_functor_identity(value: i32) {
        let task: Task<i32, String> = Task::pure(value);
        prop_assert_eq!(task.clone().fmap(|x| x).run_blocking(), task.run_blocking());
    }

    /// Functor Composition Law: fmap(f).fmap(g) == fmap(g . f)
    #[test]
    fn prop_task_functor_composition(value: i32) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);
        let task: Task<i32, String> = Task::pure(value);

        let left = task.clone().fmap(function1).fmap(function2).run_blocking();
        let right = task.fmap(move |x| function2(function1(x))).run_blocking();

        prop_assert_eq!(left, right);
    }

    /// A rejection passes through fmap unchanged.
    #[test]
    fn prop_task_fmap_preserves_rejection(error in "[a-z]{1,8}") {
        let task: Task<i32, String> = Task::reject(error.clone());
        prop_assert_eq!(task.fmap(|x| x.wrapping_add(1)).run_blocking(), Err(error));
    }
}

// =============================================================================
// Applicative Laws
// =============================================================================

proptest! {
    /// Homomorphism Law: pure(f).apply(pure(x)) == pure(f(x))
    #[test]
    fn prop_task_applicative_homomorphism(value: i32) {
        let function: fn(i32) -> i32 = |n| n.wrapping_mul(3);
        let lifted: Task<fn(i32) -> i32, String> = <Task<(), String> as Applicative>::pure(function);

        let left = lifted.apply(Task::pure(value)).run_blocking();
        let right = Task::<i32, String>::pure(function(value)).run_blocking();

        prop_assert_eq!(left, right);
    }

    /// map2 combines values receiver first.
    #[test]
    fn prop_task_map2_value_layout(first: i32, second: i32) {
        let pair: Task<(i32, i32), String> = Task::pure(first).product(Task::pure(second));
        prop_assert_eq!(pair.run_blocking(), Ok((first, second)));
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    /// Left Identity Law: pure(a).flat_map(f) == f(a)
    #[test]
    fn prop_task_monad_left_identity(value: i32) {
        let function = |n: i32| Task::<i32, String>::pure(n.wrapping_mul(2));

        let left = Task::pure(value).flat_map(function).run_blocking();
        let right = function(value).run_blocking();

        prop_assert_eq!(left, right);
    }

    /// Right Identity Law: m.flat_map(pure) == m
    #[test]
    fn prop_task_monad_right_identity(value: i32) {
        let task: Task<i32, String> = Task::pure(value);
        prop_assert_eq!(task.clone().flat_map(Task::pure).run_blocking(), task.run_blocking());
    }

    /// Associativity Law: m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
    #[test]
    fn prop_task_monad_associativity(value: i32) {
        let function1 = |n: i32| Task::<i32, String>::pure(n.wrapping_add(1));
        let function2 = |n: i32| {
            if n % 2 == 0 {
                Task::pure(n / 2)
            } else {
                Task::reject(format!("odd {n}"))
            }
        };

        let left = Task::pure(value).flat_map(function1).flat_map(function2).run_blocking();
        let right = Task::pure(value)
            .flat_map(move |x| function1(x).flat_map(function2))
            .run_blocking();

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Traversal
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The aggregate keeps index order whatever order the members settle in.
    #[test]
    fn prop_sequence_keeps_index_order(delays in prop::collection::vec(0u64..50, 0..12)) {
        let values: Vec<i32> = (0..).take(delays.len()).collect();
        let tasks: List<Task<i32, String>> = values
            .iter()
            .zip(&delays)
            .map(|(&value, &millis)| delayed(value, millis))
            .collect();

        let result = paused_runtime().block_on(tasks.sequence().run_async());

        prop_assert_eq!(result, Ok(List::from(values)));
    }

    /// Traversing with pure tasks agrees with mapping the list directly.
    #[test]
    fn prop_traverse_pure_matches_fmap(values in prop::collection::vec(any::<i32>(), 0..20)) {
        let list = List::from(values);
        let expected = list.clone().fmap(|n| n.wrapping_sub(7));

        let aggregate: Task<List<i32>, String> =
            list.traverse(|n| Task::pure(n.wrapping_sub(7)));

        prop_assert_eq!(aggregate.run_blocking(), Ok(expected));
    }

    /// The earliest rejection wins, whatever its position.
    #[test]
    fn prop_sequence_rejects_with_earliest_failure(
        delays in prop::collection::vec(1u64..100, 1..8),
        failing_index in any::<prop::sample::Index>(),
    ) {
        let failing = failing_index.index(delays.len());
        let tasks: List<Task<i32, String>> = delays
            .iter()
            .enumerate()
            .map(|(position, &millis)| {
                if position == failing {
                    Task::sleep(Duration::from_millis(millis / 2))
                        .flat_map(move |()| Task::reject(format!("failed at {position}")))
                } else {
                    delayed(0, millis + 100)
                }
            })
            .collect();

        let result = paused_runtime().block_on(tasks.sequence().run_async());

        prop_assert_eq!(result, Err(format!("failed at {failing}")));
    }
}
