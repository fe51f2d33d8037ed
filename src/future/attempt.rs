//! Asynchronous fault capture for [`Try`].
//!
//! A panic raised while the future is polled is captured just like a panic
//! raised by a synchronous thunk. A future that reports [`Cancelled`] is not
//! captured: the cancellation is returned beside the `Try` instead.

use std::any::Any;
use std::error::Error;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tokio_util::sync::CancellationToken;

use super::cancellable::{ensure_active, with_cancellation};
use crate::attempt::{Try, capture, trace_capture};
use crate::error::Cancelled;
use crate::fault::Fault;

async fn capture_future<T, Fut>(future: Fut) -> Result<T, Fault>
where
    Fut: Future<Output = T>,
{
    AssertUnwindSafe(future).catch_unwind().await.map_err(|payload| {
        let fault = Fault::from_panic(payload);
        trace_capture(&fault);
        fault
    })
}

fn settle<T, E>(result: Result<Result<T, E>, Fault>) -> Result<Try<T>, Cancelled>
where
    E: Error + Send + Sync + 'static,
{
    match result {
        Ok(Ok(value)) => Ok(Try::Success(value)),
        Ok(Err(error)) if (&error as &dyn Any).is::<Cancelled>() => {
            tracing::debug!(target: "outcomes::future", "future reported cancellation");
            Err(Cancelled)
        }
        Ok(Err(error)) => {
            let fault = Fault::new(error);
            trace_capture(&fault);
            Ok(Try::Failure(fault))
        }
        Err(fault) => Ok(Try::Failure(fault)),
    }
}

impl<T> Try<T> {
    /// Awaits a fallible future, capturing both a returned error and a panic
    /// as `Failure`.
    ///
    /// # Errors
    ///
    /// Returns [`Cancelled`] when the future itself resolves to
    /// `Err(Cancelled)`, for instance a future wrapped with
    /// [`with_cancellation`](crate::future::with_cancellation).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::{Cancelled, Try};
    /// use outcomes::future::with_cancellation;
    /// use tokio_util::sync::CancellationToken;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let parsed = Try::of_async(async { "12".parse::<i32>() }).await;
    /// assert_eq!(parsed, Ok(Try::success(12)));
    ///
    /// let failed = Try::of_async(async { "twelve".parse::<i32>() }).await;
    /// assert!(failed.is_ok_and(|attempt| attempt.is_failure()));
    ///
    /// let token = CancellationToken::new();
    /// token.cancel();
    /// let stopped = Try::of_async(with_cancellation(&token, async { 1 })).await;
    /// assert_eq!(stopped, Err(Cancelled));
    /// # });
    /// ```
    pub async fn of_async<E, Fut>(future: Fut) -> Result<Self, Cancelled>
    where
        Fut: Future<Output = Result<T, E>>,
        E: Error + Send + Sync + 'static,
    {
        settle(capture_future(future).await)
    }

    /// Awaits an infallible future, capturing a panic as `Failure`.
    pub async fn catching_async<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = T>,
    {
        capture_future(future).await.into()
    }

    /// Like [`Try::of_async`], racing the future against `token`.
    ///
    /// `factory` receives a clone of the token so the work can observe
    /// cancellation itself.
    ///
    /// # Errors
    ///
    /// Returns [`Cancelled`] if `token` is cancelled before the future
    /// finishes, or if the future resolves to `Err(Cancelled)`.
    /// Cancellation is never stored as a `Failure`.
    pub async fn of_async_cancellable<E, F, Fut>(
        token: &CancellationToken,
        factory: F,
    ) -> Result<Self, Cancelled>
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Error + Send + Sync + 'static,
    {
        ensure_active(token)?;
        let future = match capture(|| factory(token.clone())) {
            Ok(future) => future,
            Err(fault) => return Ok(Self::Failure(fault)),
        };
        with_cancellation(token, capture_future(future))
            .await
            .and_then(settle)
    }

    /// Awaits `function` on the success value; a panic while building or
    /// polling the future becomes `Failure`.
    pub async fn map_async<U, F, Fut>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Success(value) => match capture(move || function(value)) {
                Ok(future) => capture_future(future).await.into(),
                Err(fault) => Try::Failure(fault),
            },
            Self::Failure(fault) => Try::Failure(fault),
        }
    }

    /// Awaits a dependent `Try` computation on the success value; a panic
    /// while building or polling the future becomes `Failure`.
    pub async fn and_then_async<U, F, Fut>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Try<U>>,
    {
        match self {
            Self::Success(value) => match capture(move || function(value)) {
                Ok(future) => capture_future(future).await.unwrap_or_else(Try::Failure),
                Err(fault) => Try::Failure(fault),
            },
            Self::Failure(fault) => Try::Failure(fault),
        }
    }

    /// Awaits a recovery value computed from the fault.
    pub async fn recover_async<F, Fut>(self, function: F) -> Self
    where
        F: FnOnce(Fault) -> Fut,
        Fut: Future<Output = T>,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(fault) => match capture(move || function(fault)) {
                Ok(future) => capture_future(future).await.into(),
                Err(fault) => Self::Failure(fault),
            },
        }
    }
}
