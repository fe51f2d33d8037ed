#![cfg(feature = "async")]
//! Integration tests for the asynchronous combinators.
//!
//! This module tests:
//! - Extension traits on `Maybe` / `Outcome` values and on futures producing them
//! - Inherent `*_async` methods on `Try`, `Validation` and `RemoteData`
//! - Sequential `combine_all_async` for `Outcome` and `Validation`
//! - Cooperative cancellation through `CancellationToken`

use outcomes::future::{self, MaybeAsyncExt, MaybeFutureExt, OutcomeAsyncExt, OutcomeFutureExt};
use outcomes::{Cancelled, FaultKind, Maybe, Outcome, RemoteData, Try, Validation};
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Once;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

/// Routes the `outcomes::future` debug events into the test output.
fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("outcomes=debug"))
            .with_test_writer()
            .with_target(true)
            .with_ansi(false)
            .try_init();
    });
}

async fn find_user(id: u32) -> Maybe<String> {
    tokio::task::yield_now().await;
    match id {
        1 => Maybe::some("ada".to_string()),
        2 => Maybe::some("grace".to_string()),
        _ => Maybe::none(),
    }
}

async fn load_balance(name: String) -> Outcome<i64, String> {
    tokio::task::yield_now().await;
    if name == "ada" { Outcome::ok(120) } else { Outcome::err(format!("no account for {name}")) }
}

// =============================================================================
// Maybe / Outcome Extension Traits
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_future_chain_without_intermediate_awaits() {
    let greeting = find_user(2)
        .map_async(|name| async move { name.to_uppercase() })
        .tap_async(|name| {
            let length = name.len();
            async move { assert_eq!(length, 5) }
        })
        .await;
    assert_eq!(greeting, Maybe::some("GRACE".to_string()));
}

#[rstest]
#[tokio::test]
async fn test_maybe_match_async_on_missing_user() {
    let rendered = find_user(9)
        .match_async(|name| async move { name }, || async { "anonymous".to_string() })
        .await;
    assert_eq!(rendered, "anonymous");
}

#[rstest]
#[case(1, Outcome::ok(120))]
#[case(2, Outcome::err("no account for grace".to_string()))]
#[case(3, Outcome::err("unknown user".to_string()))]
#[tokio::test]
async fn test_outcome_bind_async_pipeline(#[case] id: u32, #[case] expected: Outcome<i64, String>) {
    let balance = find_user(id)
        .await
        .to_outcome_else(|| "unknown user".to_string())
        .bind_async(load_balance)
        .await;
    assert_eq!(balance, expected);
}

#[rstest]
#[tokio::test]
async fn test_outcome_future_map_error_and_or_else() {
    let recovered = load_balance("grace".to_string())
        .map_error_async(|error| async move { error.len() })
        .or_else_async(|_| async { Outcome::<i64, ()>::ok(0) })
        .await;
    assert_eq!(recovered, Outcome::ok(0));
}

#[rstest]
#[tokio::test]
async fn test_maybe_or_else_async_on_future() {
    let fallback = find_user(7).or_else_async(|| find_user(1)).await;
    assert_eq!(fallback, Maybe::some("ada".to_string()));
}

// =============================================================================
// Sequential Combination
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_outcome_combine_all_async_in_order() {
    let balances = future::outcome::combine_all_async(["ada", "ada"].map(|name| load_balance(name.to_string()))).await;
    assert_eq!(balances, Outcome::ok(vec![120, 120]));
}

#[rstest]
#[tokio::test]
async fn test_outcome_combine_all_async_stops_at_first_err() {
    let started = Arc::new(AtomicUsize::new(0));
    let futures = ["ada", "bob", "eve"].map(|name| {
        let started = Arc::clone(&started);
        async move {
            started.fetch_add(1, Ordering::SeqCst);
            load_balance(name.to_string()).await
        }
    });
    let result = future::outcome::combine_all_async(futures).await;
    assert_eq!(result, Outcome::err("no account for bob".to_string()));
    assert_eq!(started.load(Ordering::SeqCst), 2);
}

#[rstest]
#[tokio::test]
async fn test_validation_combine_all_async_accumulates() {
    let checks = ["", "ada", "x"].map(|name| async move {
        Validation::valid(name).ensure(|name| name.len() > 1, "too short")
    });
    let combined = future::validation::combine_all_async(checks).await;
    assert_eq!(combined.unwrap_errors().into_vec(), vec!["too short", "too short"]);
}

// =============================================================================
// Try
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_try_of_async_captures_error_and_panic() {
    let failed = Try::of_async(async { "x".parse::<i32>() }).await.unwrap();
    assert_eq!(failed.unwrap_fault().kind(), FaultKind::Error);

    let panicked: Try<i32> = Try::catching_async(async { panic!("lost connection") }).await;
    assert!(panicked.unwrap_fault().message().contains("lost connection"));
}

#[rstest]
#[tokio::test]
async fn test_try_async_chain() {
    let result = Try::success(20)
        .map_async(|x| async move { x + 1 })
        .await
        .and_then_async(|x| async move { Try::of(|| u8::try_from(x * 100)) })
        .await;
    assert!(result.is_failure());
}

// =============================================================================
// Validation / RemoteData
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_validation_ensure_async() {
    let taken = Arc::new(vec!["ada".to_string()]);
    let check = |name: &str| {
        let taken = Arc::clone(&taken);
        Validation::<String, &str>::valid(name.to_string()).ensure_async(
            move |name| {
                let free = !taken.contains(name);
                async move { free }
            },
            "name taken",
        )
    };
    assert_eq!(check("ada").await, Validation::invalid("name taken"));
    assert_eq!(check("grace").await, Validation::valid("grace".to_string()));
}

#[rstest]
#[tokio::test]
async fn test_remote_data_from_future_then_map_async() {
    let loaded = RemoteData::<i64, String>::from_future(load_balance("ada".to_string()))
        .await
        .map_async(|balance| async move { balance * 2 })
        .await;
    assert_eq!(loaded, RemoteData::success(240));
}

#[rstest]
#[tokio::test]
async fn test_remote_data_and_then_async_keeps_loading() {
    let state: RemoteData<i64, String> = RemoteData::loading();
    let next = state.and_then_async(|x| async move { RemoteData::success(x + 1) }).await;
    assert!(next.is_loading());
}

// =============================================================================
// Cancellation
// =============================================================================

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_cancellation_is_returned_beside_the_container() {
    init_test_logging();
    let token = CancellationToken::new();
    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
    });

    let result = Outcome::<u32, String>::ok(1)
        .map_async_cancellable(&token, |x, _| async move {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            x
        })
        .await;
    assert_eq!(result, Err(Cancelled));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_token_cancelled_before_polling_short_circuits() {
    init_test_logging();
    let token = CancellationToken::new();
    let reached = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&reached);

    let pending = Maybe::some(3).bind_async_cancellable(&token, move |x, inner| async move {
        counter.fetch_add(1, Ordering::SeqCst);
        inner.cancelled().await;
        Maybe::some(x)
    });
    token.cancel();
    assert_eq!(pending.await, Err(Cancelled));
    assert_eq!(reached.load(Ordering::SeqCst), 0);
}

#[rstest]
#[tokio::test]
async fn test_completed_work_is_not_cancelled() {
    let token = CancellationToken::new();
    let result = Try::of_async_cancellable(&token, |_| async { "5".parse::<i32>() }).await;
    assert_eq!(result, Ok(Try::success(5)));

    let remote = RemoteData::<i32, String>::from_future_cancellable(&token, |_| async {
        Ok::<_, String>(9)
    })
    .await;
    assert_eq!(remote, Ok(RemoteData::success(9)));
}

#[rstest]
#[tokio::test]
async fn test_try_of_async_over_cancelled_future_is_not_a_failure() {
    init_test_logging();
    let token = CancellationToken::new();
    token.cancel();
    let stopped = Try::of_async(future::with_cancellation(&token, async { 1 })).await;
    assert_eq!(stopped, Err(Cancelled));

    let finished = Try::of_async(future::with_cancellation(&CancellationToken::new(), async { 1 })).await;
    assert_eq!(finished, Ok(Try::success(1)));
}

#[rstest]
#[tokio::test]
async fn test_cancelled_token_skips_function() {
    init_test_logging();
    let token = CancellationToken::new();
    token.cancel();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let result = Outcome::<u32, String>::ok(1)
        .bind_async_cancellable(&token, move |x, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            async move { Outcome::ok(x) }
        })
        .await;
    assert_eq!(result, Err(Cancelled));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}
