//! Unit tests for the `RemoteData<T, E>` type.
//!
//! RemoteData tracks a remote load through four states:
//! `NotAsked`, `Loading`, `Success(T)` and `Failure(E)`.

use outcomes::{Maybe, Outcome, RemoteData, Tagged};
use rstest::rstest;

type Load = RemoteData<u32, &'static str>;

// =============================================================================
// States and Predicates
// =============================================================================

#[rstest]
#[case(Load::not_asked(), "NotAsked", false)]
#[case(Load::loading(), "Loading", false)]
#[case(Load::success(1), "Success", true)]
#[case(Load::failure("e"), "Failure", true)]
fn remote_data_tags_and_loaded_flag(#[case] state: Load, #[case] tag: &str, #[case] loaded: bool) {
    assert_eq!(state.tag(), tag);
    assert_eq!(state.is_loaded(), loaded);
    assert_eq!(state.is_not_loaded(), !loaded);
}

#[rstest]
fn remote_data_individual_predicates() {
    assert!(Load::not_asked().is_not_asked());
    assert!(Load::loading().is_loading());
    assert!(Load::success(1).is_success());
    assert!(Load::failure("e").is_failure());
}

// =============================================================================
// Mapping and Chaining
// =============================================================================

#[rstest]
#[case(Load::not_asked(), Load::not_asked())]
#[case(Load::loading(), Load::loading())]
#[case(Load::success(2), Load::success(3))]
#[case(Load::failure("e"), Load::failure("e"))]
fn remote_data_map_only_touches_success(#[case] input: Load, #[case] expected: Load) {
    assert_eq!(input.map(|x| x + 1), expected);
}

#[rstest]
fn remote_data_map_error_only_touches_failure() {
    assert_eq!(
        Load::failure("boom").map_error(str::len),
        RemoteData::<u32, usize>::failure(4)
    );
    assert_eq!(Load::loading().map_error(str::len), RemoteData::<u32, usize>::loading());
}

#[rstest]
fn remote_data_and_then_chains_dependent_load() {
    let next = |id: u32| if id > 0 { Load::success(id * 10) } else { Load::failure("no id") };
    assert_eq!(Load::success(4).and_then(next), Load::success(40));
    assert_eq!(Load::success(0).bind(next), Load::failure("no id"));
    assert_eq!(Load::loading().and_then(next), Load::loading());
}

#[rstest]
#[case(Load::success(1), Load::success(2), RemoteData::success((1, 2)))]
#[case(Load::failure("a"), Load::failure("b"), RemoteData::failure("a"))]
#[case(Load::loading(), Load::failure("b"), RemoteData::failure("b"))]
#[case(Load::not_asked(), Load::loading(), RemoteData::loading())]
#[case(Load::success(1), Load::not_asked(), RemoteData::not_asked())]
fn remote_data_zip_precedence(
    #[case] left: Load,
    #[case] right: Load,
    #[case] expected: RemoteData<(u32, u32), &'static str>,
) {
    assert_eq!(left.zip(right), expected);
}

#[rstest]
fn remote_data_tap_observes_success_only() {
    let mut seen = Vec::new();
    let _ = Load::success(5).tap(|x| seen.push(*x));
    let _ = Load::loading().tap(|x| seen.push(*x));
    assert_eq!(seen, vec![5]);
}

// =============================================================================
// Elimination
// =============================================================================

#[rstest]
#[case(Load::not_asked(), "idle")]
#[case(Load::loading(), "spinner")]
#[case(Load::success(3), "3 items")]
#[case(Load::failure("offline"), "error: offline")]
fn remote_data_match_with_renders_every_state(#[case] state: Load, #[case] expected: &str) {
    let rendered = state.match_with(
        || "idle".to_string(),
        || "spinner".to_string(),
        |count| format!("{count} items"),
        |error| format!("error: {error}"),
    );
    assert_eq!(rendered, expected);
}

#[rstest]
fn remote_data_non_throwing_access() {
    assert_eq!(Load::loading().value_or(9), 9);
    assert_eq!(Load::not_asked().value_or_else(|| 8), 8);
    assert_eq!(Load::success(1).try_get(), Some(&1));
    assert_eq!(Load::failure("e").try_get_error(), Some(&"e"));
    assert_eq!(Load::loading().try_get_error(), None);
}

#[rstest]
fn remote_data_checked_access_reports_state() {
    let error = Load::loading().value().unwrap_err();
    assert_eq!(error.to_string(), "called `RemoteData::value()` on `Loading`");
    let error = Load::success(1).error().unwrap_err();
    assert_eq!(error.actual, "Success(1)");
}

#[rstest]
#[should_panic(expected = "called `RemoteData::unwrap()` on `NotAsked`")]
fn remote_data_unwrap_not_asked_panics() {
    let _ = Load::not_asked().unwrap();
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn remote_data_to_outcome_is_undefined_before_load() {
    assert!(Load::not_asked().to_outcome().is_err());
    assert!(Load::loading().to_outcome().is_err());
    assert_eq!(Load::success(1).to_outcome(), Ok(Outcome::ok(1)));
    assert_eq!(Load::failure("e").to_outcome(), Ok(Outcome::err("e")));
}

#[rstest]
#[case(Load::not_asked(), Outcome::err("never requested"))]
#[case(Load::loading(), Outcome::err("still loading"))]
#[case(Load::success(2), Outcome::ok(2))]
#[case(Load::failure("e"), Outcome::err("e"))]
fn remote_data_to_outcome_or(#[case] state: Load, #[case] expected: Outcome<u32, &'static str>) {
    assert_eq!(state.to_outcome_or("never requested", "still loading"), expected);
}

#[rstest]
fn remote_data_from_outcome_and_to_maybe() {
    let loaded: Load = Outcome::ok(7).into();
    assert_eq!(loaded, Load::success(7));
    assert_eq!(loaded.to_maybe(), Maybe::some(7));
    assert_eq!(Load::loading().to_maybe(), Maybe::none());
}

// =============================================================================
// Ordering and Display
// =============================================================================

#[rstest]
fn remote_data_orders_states_regardless_of_payload() {
    let not_asked = RemoteData::<u32, String>::not_asked();
    let loading = RemoteData::<u32, String>::loading();
    let success = RemoteData::<u32, String>::success(u32::MAX);
    let failure = RemoteData::<u32, String>::failure(String::new());
    assert!(not_asked < loading);
    assert!(loading < success);
    assert!(success < failure);
    assert!(not_asked.discriminant() < failure.discriminant());
}

#[rstest]
fn remote_data_display() {
    assert_eq!(Load::not_asked().to_string(), "NotAsked");
    assert_eq!(Load::loading().to_string(), "Loading");
    assert_eq!(Load::success(3).to_string(), "Success(3)");
    assert_eq!(Load::failure("e").to_string(), "Failure(e)");
}
