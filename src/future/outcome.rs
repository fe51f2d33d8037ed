//! Asynchronous combinators for [`Outcome`].

use std::future::Future;

use tokio_util::sync::CancellationToken;

use super::cancellable::{ensure_active, with_cancellation};
use crate::error::Cancelled;
use crate::outcome::Outcome;

/// Asynchronous combinators on an `Outcome` value.
///
/// # Examples
///
/// ```rust
/// use outcomes::Outcome;
/// use outcomes::future::OutcomeAsyncExt;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let fetched: Outcome<i32, String> = Outcome::ok(7)
///     .bind_async(|id| async move {
///         if id > 0 { Outcome::ok(id * 100) } else { Outcome::err("bad id".to_string()) }
///     })
///     .await;
/// assert_eq!(fetched, Outcome::ok(700));
/// # });
/// ```
pub trait OutcomeAsyncExt<T, E>: Sized {
    /// Awaits `function` on the `Ok` value.
    fn map_async<U, F, Fut>(self, function: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>;

    /// Awaits `function` on the `Err` value.
    fn map_error_async<E2, F, Fut>(self, function: F) -> impl Future<Output = Outcome<T, E2>>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = E2>;

    /// Awaits a dependent fallible computation on the `Ok` value.
    fn bind_async<U, F, Fut>(self, function: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>;

    /// Exhaustive asynchronous case analysis.
    fn match_async<U, F, OkFut, G, ErrFut>(
        self,
        ok_function: F,
        err_function: G,
    ) -> impl Future<Output = U>
    where
        F: FnOnce(T) -> OkFut,
        OkFut: Future<Output = U>,
        G: FnOnce(E) -> ErrFut,
        ErrFut: Future<Output = U>;

    /// Awaits an observer of the `Ok` value and returns `self`.
    fn tap_async<F, Fut>(self, function: F) -> impl Future<Output = Outcome<T, E>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>;

    /// Awaits a recovery computation on the `Err` value.
    fn or_else_async<E2, F, Fut>(self, function: F) -> impl Future<Output = Outcome<T, E2>>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = Outcome<T, E2>>;

    /// Like [`OutcomeAsyncExt::map_async`], passing `token` to `function` and
    /// stopping with `Err(Cancelled)` once it is cancelled.
    fn map_async_cancellable<U, F, Fut>(
        self,
        token: &CancellationToken,
        function: F,
    ) -> impl Future<Output = Result<Outcome<U, E>, Cancelled>>
    where
        F: FnOnce(T, CancellationToken) -> Fut,
        Fut: Future<Output = U>;

    /// Like [`OutcomeAsyncExt::bind_async`], passing `token` to `function` and
    /// stopping with `Err(Cancelled)` once it is cancelled.
    fn bind_async_cancellable<U, F, Fut>(
        self,
        token: &CancellationToken,
        function: F,
    ) -> impl Future<Output = Result<Outcome<U, E>, Cancelled>>
    where
        F: FnOnce(T, CancellationToken) -> Fut,
        Fut: Future<Output = Outcome<U, E>>;
}

impl<T, E> OutcomeAsyncExt<T, E> for Outcome<T, E> {
    async fn map_async<U, F, Fut>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value).await),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    async fn map_error_async<E2, F, Fut>(self, function: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = E2>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(function(error).await),
        }
    }

    async fn bind_async<U, F, Fut>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        match self {
            Self::Ok(value) => function(value).await,
            Self::Err(error) => Outcome::Err(error),
        }
    }

    async fn match_async<U, F, OkFut, G, ErrFut>(self, ok_function: F, err_function: G) -> U
    where
        F: FnOnce(T) -> OkFut,
        OkFut: Future<Output = U>,
        G: FnOnce(E) -> ErrFut,
        ErrFut: Future<Output = U>,
    {
        match self {
            Self::Ok(value) => ok_function(value).await,
            Self::Err(error) => err_function(error).await,
        }
    }

    async fn tap_async<F, Fut>(self, function: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Ok(value) = &self {
            function(value).await;
        }
        self
    }

    async fn or_else_async<E2, F, Fut>(self, function: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = Outcome<T, E2>>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => function(error).await,
        }
    }

    async fn map_async_cancellable<U, F, Fut>(
        self,
        token: &CancellationToken,
        function: F,
    ) -> Result<Outcome<U, E>, Cancelled>
    where
        F: FnOnce(T, CancellationToken) -> Fut,
        Fut: Future<Output = U>,
    {
        ensure_active(token)?;
        match self {
            Self::Ok(value) => with_cancellation(token, function(value, token.clone()))
                .await
                .map(Outcome::Ok),
            Self::Err(error) => Ok(Outcome::Err(error)),
        }
    }

    async fn bind_async_cancellable<U, F, Fut>(
        self,
        token: &CancellationToken,
        function: F,
    ) -> Result<Outcome<U, E>, Cancelled>
    where
        F: FnOnce(T, CancellationToken) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        ensure_active(token)?;
        match self {
            Self::Ok(value) => with_cancellation(token, function(value, token.clone())).await,
            Self::Err(error) => Ok(Outcome::Err(error)),
        }
    }
}

/// Asynchronous combinators on a future that produces an `Outcome`.
///
/// # Examples
///
/// ```rust
/// use outcomes::Outcome;
/// use outcomes::future::OutcomeFutureExt;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let response = async { Outcome::<u16, String>::ok(200) };
/// let label = response
///     .match_async(
///         |status| async move { format!("status {status}") },
///         |error| async move { format!("failed: {error}") },
///     )
///     .await;
/// assert_eq!(label, "status 200");
/// # });
/// ```
pub trait OutcomeFutureExt<T, E>: Future<Output = Outcome<T, E>> + Sized {
    /// Awaits `self`, then `function` on the `Ok` value.
    fn map_async<U, F, Fut>(self, function: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.await.map_async(function).await }
    }

    /// Awaits `self`, then `function` on the `Err` value.
    fn map_error_async<E2, F, Fut>(self, function: F) -> impl Future<Output = Outcome<T, E2>>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = E2>,
    {
        async move { self.await.map_error_async(function).await }
    }

    /// Awaits `self`, then a dependent fallible computation.
    fn bind_async<U, F, Fut>(self, function: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        async move { self.await.bind_async(function).await }
    }

    /// Awaits `self`, then performs exhaustive asynchronous case analysis.
    fn match_async<U, F, OkFut, G, ErrFut>(
        self,
        ok_function: F,
        err_function: G,
    ) -> impl Future<Output = U>
    where
        F: FnOnce(T) -> OkFut,
        OkFut: Future<Output = U>,
        G: FnOnce(E) -> ErrFut,
        ErrFut: Future<Output = U>,
    {
        async move { self.await.match_async(ok_function, err_function).await }
    }

    /// Awaits `self`, then an observer of the `Ok` value.
    fn tap_async<F, Fut>(self, function: F) -> impl Future<Output = Outcome<T, E>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.tap_async(function).await }
    }

    /// Awaits `self`, then a recovery computation on the `Err` value.
    fn or_else_async<E2, F, Fut>(self, function: F) -> impl Future<Output = Outcome<T, E2>>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = Outcome<T, E2>>,
    {
        async move { self.await.or_else_async(function).await }
    }
}

impl<T, E, Fut> OutcomeFutureExt<T, E> for Fut where Fut: Future<Output = Outcome<T, E>> {}

/// Awaits each future in order, collecting the `Ok` values.
///
/// Stops at the first `Err`; later futures are dropped without being polled.
///
/// # Examples
///
/// ```rust
/// use outcomes::Outcome;
/// use outcomes::future::outcome::combine_all_async;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let all = combine_all_async((1..=3).map(|x| async move { Outcome::<i32, &str>::ok(x) })).await;
/// assert_eq!(all, Outcome::ok(vec![1, 2, 3]));
/// # });
/// ```
pub async fn combine_all_async<T, E, I>(futures: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator,
    I::Item: Future<Output = Outcome<T, E>>,
{
    let futures = futures.into_iter();
    let mut values = Vec::with_capacity(futures.size_hint().0);
    for future in futures {
        match future.await {
            Outcome::Ok(value) => values.push(value),
            Outcome::Err(error) => return Outcome::Err(error),
        }
    }
    Outcome::Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[rstest]
    #[tokio::test]
    async fn test_bind_async_short_circuits_on_err() {
        let calls = AtomicUsize::new(0);
        let result: Outcome<i32, &str> = Outcome::err("boom")
            .bind_async(|x: i32| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { Outcome::ok(x) }
            })
            .await;
        assert_eq!(result, Outcome::err("boom"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn test_or_else_async_recovers_error() {
        let result: Outcome<i32, String> = Outcome::<i32, &str>::err("missing")
            .or_else_async(|error| async move {
                if error == "missing" { Outcome::ok(0) } else { Outcome::err(error.to_string()) }
            })
            .await;
        assert_eq!(result, Outcome::ok(0));
    }

    #[rstest]
    #[tokio::test]
    async fn test_combine_all_async_stops_at_first_err() {
        let polled = AtomicUsize::new(0);
        let make = |value: Outcome<i32, &'static str>| {
            let polled = &polled;
            async move {
                polled.fetch_add(1, Ordering::SeqCst);
                value
            }
        };
        let result = combine_all_async([
            make(Outcome::ok(1)),
            make(Outcome::err("second")),
            make(Outcome::err("third")),
        ])
        .await;
        assert_eq!(result, Outcome::err("second"));
        assert_eq!(polled.load(Ordering::SeqCst), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn test_cancelled_token_is_not_stored_as_err() {
        let token = CancellationToken::new();
        token.cancel();
        let result = Outcome::<i32, String>::ok(1)
            .bind_async_cancellable(&token, |x, _| async move { Outcome::ok(x) })
            .await;
        assert_eq!(result, Err(Cancelled));
    }
}
