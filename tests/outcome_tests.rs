//! Integration tests for Outcome and Cause.

use rstest::rstest;
use std::cell::RefCell;
use treefold::control::{Cause, Outcome, lift, lift2, lift3, map2};

// =============================================================================
// Construction
// =============================================================================

#[rstest]
#[case(Some(3), Outcome::Success(3))]
#[case(None, Outcome::Empty)]
fn from_option(#[case] option: Option<i32>, #[case] expected: Outcome<i32>) {
    assert_eq!(Outcome::from_option(option), expected);
    assert_eq!(Outcome::from(option), expected);
}

#[rstest]
fn from_option_or_fails_with_message() {
    let outcome: Outcome<i32> = Outcome::from_option_or(None, "missing key");
    assert_eq!(outcome, Outcome::Failure(Cause::message("missing key")));
}

#[rstest]
#[case(4, Outcome::Success(4))]
#[case(5, Outcome::Empty)]
fn from_predicate(#[case] value: i32, #[case] expected: Outcome<i32>) {
    assert_eq!(Outcome::from_predicate(value, |n| n % 2 == 0), expected);
}

#[rstest]
fn from_predicate_or_fails() {
    let outcome = Outcome::from_predicate_or(-1, "negative", |n: &i32| *n >= 0);
    assert_eq!(outcome.cause(), Some(&Cause::message("negative")));
}

#[rstest]
fn default_is_empty() {
    assert_eq!(Outcome::<String>::default(), Outcome::Empty);
}

// =============================================================================
// Panic Capture
// =============================================================================

#[rstest]
fn map_captures_str_panic() {
    let outcome = Outcome::success(1).map(|_: i32| -> i32 { panic!("exploded") });
    assert_eq!(outcome, Outcome::Failure(Cause::Panicked("exploded".to_string())));
}

#[rstest]
fn flat_map_captures_string_panic() {
    let outcome = Outcome::success(7).flat_map(|n: i32| -> Outcome<i32> {
        panic!("{}", format!("value {n} rejected"))
    });
    assert_eq!(
        outcome.cause().map(ToString::to_string),
        Some("panicked: value 7 rejected".to_string())
    );
}

#[rstest]
fn or_else_captures_panic() {
    let outcome: Outcome<i32> = Outcome::empty().or_else(|| panic!("no fallback"));
    assert!(outcome.is_failure());
}

#[rstest]
fn failure_and_empty_skip_the_closure() {
    let mut calls = 0;
    let _ = Outcome::<i32>::failure("x").map(|n| {
        calls += 1;
        n
    });
    let _ = Outcome::<i32>::empty().map(|n| {
        calls += 1;
        n
    });
    assert_eq!(calls, 0);
}

// =============================================================================
// Transformation and Extraction
// =============================================================================

#[rstest]
fn try_map_uses_error_text() {
    let outcome = Outcome::success("abc").try_map(|text| text.parse::<u8>());
    assert_eq!(
        outcome,
        Outcome::failure("invalid digit found in string")
    );
}

#[rstest]
fn filter_or_uses_custom_message() {
    let outcome = Outcome::success(3).filter_or("too small", |n| *n > 10);
    assert_eq!(outcome, Outcome::failure("too small"));
}

#[rstest]
fn map_failure_keeps_root() {
    let outcome = Outcome::<i32>::failure("inner")
        .map_failure("middle")
        .map_failure("outer");
    let cause = outcome.cause().unwrap();
    assert_eq!(cause.to_string(), "outer");
    assert_eq!(cause.root(), &Cause::message("inner"));
}

#[rstest]
#[case(Outcome::Success(1), Outcome::failure("Not empty"))]
#[case(Outcome::Empty, Outcome::Success(()))]
fn map_empty(#[case] outcome: Outcome<i32>, #[case] expected: Outcome<()>) {
    assert_eq!(outcome.map_empty(), expected);
}

#[rstest]
fn into_result_separates_absence_from_failure() {
    assert_eq!(Outcome::success(2).into_result(), Ok(Some(2)));
    assert_eq!(Outcome::<i32>::empty().into_result(), Ok(None));
    assert_eq!(
        Outcome::<i32>::failure("bad").into_result(),
        Err(Cause::message("bad"))
    );
}

#[rstest]
fn for_each_runs_exactly_one_handler() {
    let log = RefCell::new(Vec::new());
    Outcome::<i32>::failure("oops").for_each(
        |value| log.borrow_mut().push(format!("success {value}")),
        |cause| log.borrow_mut().push(format!("failure {cause}")),
        || log.borrow_mut().push("empty".to_string()),
    );
    assert_eq!(log.into_inner(), vec!["failure oops".to_string()]);
}

#[rstest]
#[case(Outcome::Success(5), "Success(5)")]
#[case(Outcome::failure("bad"), "Failure(bad)")]
#[case(Outcome::Empty, "Empty")]
fn display(#[case] outcome: Outcome<i32>, #[case] expected: &str) {
    assert_eq!(outcome.to_string(), expected);
}

#[rstest]
fn partition_cause_display() {
    let cause = Cause::Partition {
        index: 3,
        reason: "panicked: boom".to_string(),
    };
    assert_eq!(cause.to_string(), "partition 3 failed: panicked: boom");
}

// =============================================================================
// Lifting
// =============================================================================

#[rstest]
fn lifted_functions_propagate_first_non_success() {
    let add = lift2(|a: i32, b: i32| a + b);
    assert_eq!(add(Outcome::success(1), Outcome::success(2)), Outcome::Success(3));
    assert_eq!(add(Outcome::empty(), Outcome::failure("late")), Outcome::Empty);

    let sum3 = lift3(|a: i32, b: i32, c: i32| a + b + c);
    assert_eq!(
        sum3(Outcome::success(1), Outcome::success(2), Outcome::success(3)),
        Outcome::Success(6)
    );

    let double = lift(|n: i32| n * 2);
    assert_eq!(double(Outcome::failure("x")), Outcome::failure("x"));

    assert_eq!(
        map2(Outcome::success("a"), Outcome::success(2), |s, n| s.repeat(n)),
        Outcome::Success("aa".to_string())
    );
}
