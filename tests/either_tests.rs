#![cfg(feature = "control")]
//! Integration tests for `Either` and its type class instances.

use effecta::control::Either;
use effecta::typeclass::{Applicative, Functor, Monad, Traversable};
use proptest::prelude::*;
use rstest::rstest;

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        "[a-z]{0,6}".prop_map(Either::Left),
        any::<i32>().prop_map(Either::Right),
    ]
}

#[rstest]
fn fmap_maps_right_only() {
    let right: Either<&str, i32> = Either::Right(2);
    let left: Either<&str, i32> = Either::Left("kept");
    assert_eq!(right.fmap(|n| n * 10), Either::Right(20));
    assert_eq!(left.fmap(|n| n * 10), Either::Left("kept"));
}

#[rstest]
fn flat_map_chains_until_left() {
    let half = |n: i32| -> Either<String, i32> {
        if n % 2 == 0 {
            Either::Right(n / 2)
        } else {
            Either::Left(format!("{n} is odd"))
        }
    };
    let result = Either::<String, i32>::pure(12)
        .flat_map(half)
        .flat_map(half)
        .flat_map(half);
    assert_eq!(result, Either::Left("3 is odd".to_string()));
}

#[rstest]
fn catch_turns_left_into_right() {
    let failed: Either<String, usize> = Either::Left("three".to_string());
    assert_eq!(failed.catch(|message| message.len()), Either::Right(5));
}

#[rstest]
#[case(Either::Left(3), Either::Right(3))]
#[case(Either::Right(8), Either::Right(8))]
fn catch_with_identity_moves_left_to_right(#[case] input: Either<i32, i32>, #[case] expected: Either<i32, i32>) {
    assert_eq!(input.catch(|value| value), expected);
}

#[rstest]
fn fold_and_swap() {
    let right: Either<i32, &str> = Either::Right("value");
    assert_eq!(right.fold(|n| n.to_string(), str::to_uppercase), "VALUE");
    assert_eq!(right.swap(), Either::Left("value"));
}

#[rstest]
fn flatten_nested_either() {
    let nested: Either<&str, Either<&str, i32>> = Either::Right(Either::Left("inner"));
    assert_eq!(nested.flatten(), Either::Left("inner"));
}

#[rstest]
fn product_pairs_rights() {
    let first: Either<&str, i32> = Either::Right(1);
    assert_eq!(first.product(Either::Right('a')), Either::Right((1, 'a')));
}

#[rstest]
fn traverse_into_result() {
    let right: Either<String, &str> = Either::Right("12");
    let parsed: Result<Either<String, i32>, String> =
        right.traverse(|s| s.parse::<i32>().map_err(|error| error.to_string()));
    assert_eq!(parsed, Ok(Either::Right(12)));
}

#[rstest]
fn conversions_with_result() {
    let ok: Result<i32, String> = Ok(1);
    assert_eq!(Either::from(ok), Either::Right(1));
    let left: Either<String, i32> = Either::Left("e".to_string());
    assert_eq!(Result::from(left), Err::<i32, String>("e".to_string()));
}

proptest! {
    #[test]
    fn prop_either_functor_identity(either in either_strategy()) {
        prop_assert_eq!(either.clone().fmap(|x| x), either);
    }

    #[test]
    fn prop_either_monad_left_identity(value: i32) {
        let function = |n: i32| -> Either<String, i32> {
            if n > 0 { Either::Right(n.wrapping_sub(1)) } else { Either::Left(n.to_string()) }
        };
        prop_assert_eq!(Either::pure(value).flat_map(function), function(value));
    }

    #[test]
    fn prop_either_monad_right_identity(either in either_strategy()) {
        prop_assert_eq!(either.clone().flat_map(Either::Right), either);
    }

    #[test]
    fn prop_either_monad_associativity(either in either_strategy()) {
        let function1 = |n: i32| -> Either<String, i32> { Either::Right(n.wrapping_add(1)) };
        let function2 = |n: i32| -> Either<String, i32> {
            if n % 2 == 0 { Either::Right(n / 2) } else { Either::Left("odd".to_string()) }
        };

        let left = either.clone().flat_map(function1).flat_map(function2);
        let right = either.flat_map(move |x| function1(x).flat_map(function2));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_either_map2_prefers_receiver_left(first in either_strategy(), second in either_strategy()) {
        let expected = match (&first, &second) {
            (Either::Left(error), _) | (Either::Right(_), Either::Left(error)) => Either::Left(error.clone()),
            (Either::Right(a), Either::Right(b)) => Either::Right(a.wrapping_add(*b)),
        };
        prop_assert_eq!(first.map2(second, |a, b| a.wrapping_add(b)), expected);
    }
}
