#![cfg(feature = "effect")]
//! Integration tests for `State`.

use effecta::effect::State;
use effecta::typeclass::{Applicative, Monad};
use rstest::rstest;

#[rstest]
fn of_then_get_state_reads_the_initial_state() {
    let state: State<i32, i32> = State::of(5).flat_map(State::get_state);
    assert_eq!(state.run(10), (10, 10));
}

#[rstest]
fn save_replaces_the_state() {
    let state: State<i32, ()> = State::of(5).flat_map(|value| State::save(value * 2));
    assert_eq!(state.run(1), ((), 10));
}

#[rstest]
fn update_transforms_the_state() {
    let state = State::update(|s: i32| s * 3).then(State::update(|s: i32| s + 1));
    assert_eq!(state.exec(2), 7);
}

#[rstest]
fn get_state_and_update_reads_without_changing() {
    let state: State<Vec<i32>, usize> = State::get_state_and_update(|items: Vec<i32>| items.len());
    assert_eq!(state.run(vec![1, 2, 3]), (3, vec![1, 2, 3]));
}

#[rstest]
fn counter_pattern() {
    fn increment() -> State<u32, ()> {
        State::modify(|count| count + 1)
    }

    let computation = increment()
        .then(increment())
        .then(increment())
        .then(State::get());

    assert_eq!(computation.run(0), (3, 3));
}

#[rstest]
fn map2_threads_state_left_to_right() {
    let push = |label: &'static str| {
        State::new(move |mut log: Vec<&'static str>| {
            log.push(label);
            (log.len(), log)
        })
    };
    let combined = push("first").map2(push("second"), |a, b| (a, b));
    assert_eq!(combined.run(Vec::new()), ((1, 2), vec!["first", "second"]));
}

#[rstest]
fn apply_uses_function_state_first() {
    let function: State<i32, fn(i32) -> i32> = State::new(|s: i32| {
        let double: fn(i32) -> i32 = |n| n * 2;
        (double, s + 1)
    });
    assert_eq!(function.apply(State::get()).run(4), (10, 5));
}

#[rstest]
fn state_can_be_run_repeatedly() {
    let state: State<i32, String> = State::gets(|s: &i32| format!("state is {s}"));
    assert_eq!(state.eval(1), "state is 1");
    assert_eq!(state.eval(2), "state is 2");
}

#[rstest]
fn monad_trait_then_and_pure() {
    let via_trait: State<i32, &str> = Monad::and_then(State::put(9), |()| {
        <State<i32, ()> as Applicative>::pure("done")
    });
    assert_eq!(via_trait.run(0), ("done", 9));
}

#[cfg(feature = "collection")]
mod traversal {
    use effecta::collection::List;
    use effecta::effect::State;
    use effecta::typeclass::Traversable;
    use rstest::rstest;

    #[rstest]
    fn traverse_numbers_elements_in_index_order() {
        let labels = List::from(vec!["a", "b", "c"]);
        let numbered = labels.traverse(|label| {
            State::new(move |counter: usize| ((counter, label), counter + 1))
        });

        let (result, next) = numbered.run(0);

        assert_eq!(result, List::from(vec![(0, "a"), (1, "b"), (2, "c")]));
        assert_eq!(next, 3);
    }

    #[rstest]
    fn sequence_of_states_runs_each_once() {
        let steps = List::from(vec![
            State::new(|s: i32| (s, s * 2)),
            State::new(|s: i32| (s, s + 1)),
            State::new(|s: i32| (s, s * 10)),
        ]);

        assert_eq!(steps.sequence().run(1), (List::from(vec![1, 2, 3]), 30));
    }

    #[rstest]
    fn empty_traverse_leaves_state_alone() {
        let empty: List<i32> = List::new();
        let state = empty.traverse(|n| State::new(move |s: i32| (n, s + 1)));
        assert_eq!(state.run(5), (List::new(), 5));
    }

    #[rstest]
    fn traverse_threads_state_through_a_long_list() {
        let list: List<u64> = (0..100_000).collect();
        let summed = list.traverse(|n| State::new(move |total: u64| (total, total + n)));

        let (prefixes, total) = summed.run(0);

        assert_eq!(prefixes.len(), 100_000);
        assert_eq!(prefixes.get(3), Some(&3));
        assert_eq!(total, 4_999_950_000);
    }
}
