//! Cooperative cancellation for the asynchronous combinators.
//!
//! [`Cancellable`] races an inner future against a
//! [`CancellationToken`]. Cancellation wins ties and is reported as
//! `Err(Cancelled)`; it is never folded into the container being built.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use pin_project_lite::pin_project;
use tokio_util::sync::{CancellationToken, WaitForCancellationFutureOwned};

use crate::error::Cancelled;

pin_project! {
    /// A future that resolves to `Err(Cancelled)` as soon as its token is
    /// cancelled, and to `Ok(output)` if the inner future finishes first.
    ///
    /// The inner future is dropped without further polling once cancellation
    /// is observed.
    #[must_use = "futures do nothing unless awaited"]
    pub struct Cancellable<F> {
        #[pin]
        inner: F,
        #[pin]
        cancelled: WaitForCancellationFutureOwned,
    }
}

impl<F: Future> Future for Cancellable<F> {
    type Output = Result<F::Output, Cancelled>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        if this.cancelled.poll(context).is_ready() {
            tracing::debug!(target: "outcomes::future", "combinator observed cancellation");
            return Poll::Ready(Err(Cancelled));
        }
        this.inner.poll(context).map(Ok)
    }
}

/// Wraps `future` so that it stops with `Err(Cancelled)` when `token` is cancelled.
///
/// # Examples
///
/// ```rust
/// use outcomes::Cancelled;
/// use outcomes::future::with_cancellation;
/// use tokio_util::sync::CancellationToken;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let token = CancellationToken::new();
/// assert_eq!(with_cancellation(&token, async { 1 }).await, Ok(1));
///
/// token.cancel();
/// assert_eq!(with_cancellation(&token, async { 1 }).await, Err(Cancelled));
/// # });
/// ```
pub fn with_cancellation<F: Future>(token: &CancellationToken, future: F) -> Cancellable<F> {
    Cancellable {
        inner: future,
        cancelled: token.clone().cancelled_owned(),
    }
}

/// Fails fast when `token` is already cancelled.
pub(crate) fn ensure_active(token: &CancellationToken) -> Result<(), Cancelled> {
    if token.is_cancelled() {
        tracing::debug!(target: "outcomes::future", "token cancelled before combinator ran");
        Err(Cancelled)
    } else {
        Ok(())
    }
}
