//! Property-based tests for Monad laws.
//!
//! This module verifies that `and_then` on every container satisfies:
//!
//! - **Left Identity**: `pure(a).and_then(f) == f(a)`
//! - **Right Identity**: `m.and_then(pure) == m`
//! - **Associativity**: `m.and_then(f).and_then(g) == m.and_then(|x| f(x).and_then(g))`
//!
//! `pure` is the success constructor of each container.

use outcomes::{Either, Faults, Maybe, Outcome, RemoteData, Try, Validation};
use proptest::prelude::*;

// =============================================================================
// Maybe<i32>
// =============================================================================

fn maybe_half(n: i32) -> Maybe<i32> {
    if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() }
}

fn maybe_positive(n: i32) -> Maybe<i32> {
    if n > 0 { Maybe::some(n) } else { Maybe::none() }
}

proptest! {
    #[test]
    fn prop_maybe_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Maybe::some(value).and_then(maybe_half), maybe_half(value));
    }

    #[test]
    fn prop_maybe_right_identity(value in any::<Option<i32>>()) {
        let monad = Maybe::from(value);
        prop_assert_eq!(monad.and_then(Maybe::some), monad);
    }

    #[test]
    fn prop_maybe_associativity(value in any::<Option<i32>>()) {
        let monad = Maybe::from(value);
        let left = monad.and_then(maybe_half).and_then(maybe_positive);
        let right = monad.and_then(|x| maybe_half(x).and_then(maybe_positive));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Outcome<i32, String>
// =============================================================================

fn outcome_half(n: i32) -> Outcome<i32, String> {
    if n % 2 == 0 { Outcome::ok(n / 2) } else { Outcome::err(format!("{n} is odd")) }
}

fn outcome_positive(n: i32) -> Outcome<i32, String> {
    if n > 0 { Outcome::ok(n) } else { Outcome::err(format!("{n} is not positive")) }
}

proptest! {
    #[test]
    fn prop_outcome_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Outcome::ok(value).and_then(outcome_half), outcome_half(value));
    }

    #[test]
    fn prop_outcome_right_identity(value in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        let monad = Outcome::from(value);
        prop_assert_eq!(monad.clone().and_then(Outcome::ok), monad);
    }

    #[test]
    fn prop_outcome_associativity(value in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        let monad = Outcome::from(value);
        let left = monad.clone().and_then(outcome_half).and_then(outcome_positive);
        let right = monad.and_then(|x| outcome_half(x).and_then(outcome_positive));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Either<String, i32>
// =============================================================================

fn either_half(n: i32) -> Either<String, i32> {
    if n % 2 == 0 { Either::right(n / 2) } else { Either::left(format!("{n} is odd")) }
}

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        any::<String>().prop_map(Either::<String, i32>::left),
        any::<i32>().prop_map(Either::<String, i32>::right),
    ]
}

proptest! {
    #[test]
    fn prop_either_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Either::<String, i32>::right(value).and_then(either_half), either_half(value));
    }

    #[test]
    fn prop_either_right_identity(monad in either_strategy()) {
        prop_assert_eq!(monad.clone().and_then(Either::right), monad);
    }

    #[test]
    fn prop_either_associativity(monad in either_strategy()) {
        let left = monad.clone().and_then(either_half).and_then(either_half);
        let right = monad.and_then(|x| either_half(x).and_then(either_half));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Try<i32>
// =============================================================================

fn try_checked_half(n: i32) -> Try<i32> {
    Try::of(move || {
        if n % 2 == 0 {
            Ok(n / 2)
        } else {
            format!("{n}.5").parse::<i32>()
        }
    })
}

fn try_strategy() -> impl Strategy<Value = Try<i32>> {
    prop_oneof![
        any::<i32>().prop_map(Try::success),
        "[a-z]{1,8}".prop_map(|text| Try::of(|| text.parse::<i32>())),
    ]
}

proptest! {
    #[test]
    fn prop_try_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Try::success(value).and_then(try_checked_half), try_checked_half(value));
    }

    #[test]
    fn prop_try_right_identity(monad in try_strategy()) {
        prop_assert_eq!(monad.clone().and_then(Try::success), monad);
    }

    #[test]
    fn prop_try_associativity(monad in try_strategy()) {
        let left = monad.clone().and_then(try_checked_half).and_then(try_checked_half);
        let right = monad.and_then(|x| try_checked_half(x).and_then(try_checked_half));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Validation<i32, String>
// =============================================================================

fn validation_half(n: i32) -> Validation<i32, String> {
    Validation::valid(n)
        .ensure_with(|n| n % 2 == 0, |n| format!("{n} is odd"))
        .map(|n| n / 2)
}

fn validation_strategy() -> impl Strategy<Value = Validation<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Validation::<i32, String>::valid),
        (any::<String>(), prop::collection::vec(any::<String>(), 0..3))
            .prop_map(|(first, rest)| Validation::invalid_many(Faults::from_parts(first, rest))),
    ]
}

proptest! {
    #[test]
    fn prop_validation_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Validation::valid(value).and_then(validation_half), validation_half(value));
    }

    #[test]
    fn prop_validation_right_identity(monad in validation_strategy()) {
        prop_assert_eq!(monad.clone().and_then(Validation::valid), monad);
    }

    #[test]
    fn prop_validation_associativity(monad in validation_strategy()) {
        let left = monad.clone().and_then(validation_half).and_then(validation_half);
        let right = monad.and_then(|x| validation_half(x).and_then(validation_half));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// RemoteData<i32, String>
// =============================================================================

fn remote_half(n: i32) -> RemoteData<i32, String> {
    match n.rem_euclid(3) {
        0 => RemoteData::success(n / 3),
        1 => RemoteData::loading(),
        _ => RemoteData::failure(format!("{n} not loaded")),
    }
}

fn remote_data_strategy() -> impl Strategy<Value = RemoteData<i32, String>> {
    prop_oneof![
        Just(RemoteData::<i32, String>::not_asked()),
        Just(RemoteData::<i32, String>::loading()),
        any::<i32>().prop_map(RemoteData::<i32, String>::success),
        any::<String>().prop_map(RemoteData::<i32, String>::failure),
    ]
}

proptest! {
    #[test]
    fn prop_remote_data_left_identity(value in any::<i32>()) {
        prop_assert_eq!(RemoteData::success(value).and_then(remote_half), remote_half(value));
    }

    #[test]
    fn prop_remote_data_right_identity(monad in remote_data_strategy()) {
        prop_assert_eq!(monad.clone().and_then(RemoteData::success), monad);
    }

    #[test]
    fn prop_remote_data_associativity(monad in remote_data_strategy()) {
        let left = monad.clone().and_then(remote_half).and_then(remote_half);
        let right = monad.and_then(|x| remote_half(x).and_then(remote_half));
        prop_assert_eq!(left, right);
    }
}
