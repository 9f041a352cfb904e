//! Integration tests for Either.

use rstest::rstest;
use treefold::control::{Either, Outcome, max_of};
use treefold::persistent::PersistentList;
use treefold::typeclass::{Functor, Monad};

fn parse(text: &str) -> Either<String, i32> {
    text.parse::<i32>()
        .map_or_else(|error| Either::Left(error.to_string()), Either::Right)
}

#[rstest]
#[case("12", Either::Right(24))]
#[case("x", Either::Left("invalid digit found in string".to_string()))]
fn parse_then_double(#[case] text: &str, #[case] expected: Either<String, i32>) {
    assert_eq!(parse(text).map(|n| n * 2), expected);
}

#[rstest]
fn flat_map_short_circuits_on_left() {
    let mut calls = 0;
    let result = parse("bad").flat_map(|n| {
        calls += 1;
        Either::Right(n)
    });
    assert!(result.is_left());
    assert_eq!(calls, 0);
}

#[rstest]
fn map_left_and_swap() {
    let left: Either<i32, &str> = Either::Left(3);
    assert_eq!(left.map_left(|n| n + 1), Either::Left(4));
    assert_eq!(left.swap(), Either::Right(3));
}

#[rstest]
fn accessors() {
    let right: Either<&str, i32> = Either::Right(1);
    assert_eq!(right.right_ref(), Some(&1));
    assert_eq!(right.left_ref(), None);
    assert_eq!(right.right(), Some(1));
    assert_eq!(right.left(), None);
    assert_eq!(Either::<&str, i32>::Left("e").get_or_else(|| 9), 9);
}

#[rstest]
fn type_class_instances_agree_with_inherent_methods() {
    let right: Either<String, i32> = Either::Right(5);
    assert_eq!(right.clone().fmap(|n| n + 1), Either::Right(6));
    assert_eq!(<Either<String, i32> as Monad>::pure(8), Either::Right(8));
    assert_eq!(Monad::flat_map(right, |n| Either::Right(n * 3)), Either::Right(15));
}

#[rstest]
fn into_outcome() {
    assert_eq!(parse("7").into_outcome(), Outcome::Success(7));
    assert!(parse("?").into_outcome().is_failure());
}

#[rstest]
#[case(PersistentList::from([1, 5, 3]), Either::Right(5))]
#[case(PersistentList::from([-4]), Either::Right(-4))]
#[case(PersistentList::new(), Either::Left("max called on an empty list".to_string()))]
fn max_of_list(#[case] list: PersistentList<i32>, #[case] expected: Either<String, i32>) {
    assert_eq!(max_of(&list), expected);
}
