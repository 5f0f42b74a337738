//! Integration tests for the left-biased `Either<L, R>`.
//!
//! `Left` is the primary channel operated on by `map` and `flat_map`;
//! `Right` carries an alternate value such as an error message.

#![cfg(feature = "control")]

use fpqueues::control::{Either, Maybe, left, right};
use rstest::rstest;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn either_new_with_present_left_is_left() {
    let value: Either<i32, String> = Either::new(Some(1), "unused".to_string());
    assert!(value.is_left());
    assert_eq!(value.left(), Maybe::Some(1));
}

#[rstest]
fn either_new_with_absent_left_is_right() {
    let value: Either<i32, String> = Either::new(None, "err".to_string());
    assert!(value.is_right());
    assert_eq!(value.right(), Maybe::Some("err".to_string()));
}

#[rstest]
fn left_constructor_falls_back_to_right() {
    assert_eq!(left(Some(2), "unused"), Either::Left(2));
    assert_eq!(left::<i32, _>(None, "unused"), Either::Right("unused"));
}

#[rstest]
fn right_constructor_builds_right() {
    let value: Either<i32, &str> = right("err");
    assert_eq!(value, Either::Right("err"));
    assert_eq!(value.get_right(), Maybe::Some("err"));
}

#[rstest]
fn map_right_on_absent_left_is_visible_through_get_right() {
    let value: Either<i32, &str> = Either::new(None, "four");
    let mapped = value.map(|n| n * 2).map_right(str::len);
    assert_eq!(mapped.get_or(0), 0);
    assert_eq!(mapped.get_right(), Maybe::Some(4));
}

#[rstest]
#[case(Some(3))]
#[case(None)]
fn either_is_exactly_one_side(#[case] candidate: Option<i32>) {
    let value = Either::new(candidate, "fallback");
    assert_ne!(value.is_left(), value.is_right());
}

// =============================================================================
// Mapping
// =============================================================================

#[rstest]
fn either_map_transforms_left() {
    let value: Either<i32, &str> = Either::new(Some(1), "err");
    assert_eq!(value.map(|x| x + 1).get_or(0), 2);
}

#[rstest]
fn either_map_is_a_no_op_on_right() {
    let value: Either<i32, &str> = Either::new(None, "err");
    let mapped = value.map_optional(|x| Some(x + 1), "err2");
    assert!(mapped.is_right());
    assert_eq!(mapped, Either::Right("err"));
}

#[rstest]
fn either_map_right_transforms_only_right() {
    let right: Either<i32, i32> = Either::new(None, 2);
    let mapped = right.map_right(|r| r * 10);
    assert_eq!(mapped.get_or(-1), -1);
    assert_eq!(mapped.right(), Maybe::Some(20));

    let left: Either<i32, i32> = Either::Left(1);
    assert_eq!(left.map_right(|r| r * 10), Either::Left(1));
}

#[rstest]
fn either_bimap_and_fold() {
    let left: Either<i32, String> = Either::Left(2);
    assert_eq!(left.bimap(|l| l * 2, |r| r.len()), Either::Left(4));

    let right: Either<i32, String> = Either::Right("abc".to_string());
    assert_eq!(
        right.fold(|l| l, |r| i32::try_from(r.len()).unwrap_or(0)),
        3
    );
}

// =============================================================================
// Chaining
// =============================================================================

#[rstest]
fn either_flat_map_keeps_produced_right() {
    let lookup = |key: &str| -> Either<i32, String> {
        Either::new((key == "one").then_some(1), format!("no key {key}"))
    };
    assert_eq!(Either::Left("one").flat_map(lookup), Either::Left(1));
    assert_eq!(
        Either::Left("two").flat_map(lookup),
        Either::Right("no key two".to_string())
    );
}

#[rstest]
fn either_flat_map_replacing_right_overrides_the_right_value() {
    let fail = |_: i32| Either::<i32, &str>::Right("inner");
    let succeed = |n: i32| Either::<i32, &str>::Left(n);

    assert_eq!(
        Either::Left(1).flat_map_replacing_right(fail, "outer"),
        Either::Right("outer")
    );
    assert_eq!(
        Either::Left(1).flat_map_replacing_right(succeed, "outer"),
        Either::Left(1)
    );
    assert_eq!(
        Either::<i32, &str>::Right("original").flat_map_replacing_right(succeed, "outer"),
        Either::Right("outer")
    );
}

#[rstest]
fn either_merge_map_accumulates_messages() {
    let fail = |n: i32| Either::<i32, String>::Right(format!("{n} rejected"));
    let result = Either::Left(5).merge_map(fail, ", giving up".to_string());
    assert_eq!(result, Either::Right("5 rejected, giving up".to_string()));

    let earlier: Either<i32, String> = Either::Right("first".to_string());
    let result = earlier.merge_map(fail, "; second".to_string());
    assert_eq!(result, Either::Right("first; second".to_string()));
}

#[rstest]
fn either_merge_map_leaves_successful_left_alone() {
    let succeed = |n: i32| Either::<i32, String>::Left(n * 2);
    let result = Either::Left(5).merge_map(succeed, "unused".to_string());
    assert_eq!(result, Either::Left(10));
}

// =============================================================================
// Equality, Conversions and Formatting
// =============================================================================

#[rstest]
fn either_left_never_equals_right() {
    assert_ne!(Either::<i32, i32>::Left(1), Either::Right(1));
    assert_eq!(Either::<i32, i32>::Right(1), Either::Right(1));
}

#[rstest]
fn either_swap() {
    assert_eq!(Either::<i32, &str>::Left(1).swap(), Either::Right(1));
}

#[rstest]
fn either_result_conversions_are_left_biased() {
    let either: Either<i32, String> = Ok::<i32, String>(1).into();
    assert_eq!(either, Either::Left(1));
    let result: Result<i32, String> = Either::<i32, String>::Right("bad".to_string()).into();
    assert_eq!(result, Err("bad".to_string()));
}

#[rstest]
fn either_to_maybe() {
    assert_eq!(Either::<i32, &str>::Left(1).to_maybe(), Maybe::Some(1));
    assert_eq!(Either::<i32, &str>::Right("e").to_maybe(), Maybe::Nothing);
}

#[rstest]
#[case(Either::Left(10), "Left(10)")]
#[case(Either::Right("err".to_string()), "Right(err)")]
fn either_display(#[case] value: Either<i32, String>, #[case] expected: &str) {
    assert_eq!(value.to_string(), expected);
}
