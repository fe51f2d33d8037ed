//! Asynchronous combinators for [`Maybe`].

use std::future::Future;

use tokio_util::sync::CancellationToken;

use super::cancellable::{ensure_active, with_cancellation};
use crate::error::Cancelled;
use crate::maybe::Maybe;

/// Asynchronous combinators on a `Maybe` value.
///
/// Each combinator awaits the supplied function only when the corresponding
/// state is present and packages the result back into a `Maybe`.
///
/// # Examples
///
/// ```rust
/// use outcomes::Maybe;
/// use outcomes::future::MaybeAsyncExt;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let doubled = Maybe::some(21).map_async(|x| async move { x * 2 }).await;
/// assert_eq!(doubled, Maybe::some(42));
/// # });
/// ```
pub trait MaybeAsyncExt<T>: Sized {
    /// Awaits `function` on the value, if present.
    fn map_async<U, F, Fut>(self, function: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>;

    /// Awaits a dependent optional computation, if a value is present.
    fn bind_async<U, F, Fut>(self, function: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>;

    /// Exhaustive asynchronous case analysis.
    fn match_async<U, S, SomeFut, N, NoneFut>(
        self,
        some_function: S,
        none_function: N,
    ) -> impl Future<Output = U>
    where
        S: FnOnce(T) -> SomeFut,
        SomeFut: Future<Output = U>,
        N: FnOnce() -> NoneFut,
        NoneFut: Future<Output = U>;

    /// Awaits an observer of the value, if present, and returns `self`.
    fn tap_async<F, Fut>(self, function: F) -> impl Future<Output = Maybe<T>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>;

    /// Awaits a fallback when no value is present.
    fn or_else_async<F, Fut>(self, function: F) -> impl Future<Output = Maybe<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Maybe<T>>;

    /// Like [`MaybeAsyncExt::map_async`], passing `token` to `function` and
    /// stopping with `Err(Cancelled)` once it is cancelled.
    fn map_async_cancellable<U, F, Fut>(
        self,
        token: &CancellationToken,
        function: F,
    ) -> impl Future<Output = Result<Maybe<U>, Cancelled>>
    where
        F: FnOnce(T, CancellationToken) -> Fut,
        Fut: Future<Output = U>;

    /// Like [`MaybeAsyncExt::bind_async`], passing `token` to `function` and
    /// stopping with `Err(Cancelled)` once it is cancelled.
    fn bind_async_cancellable<U, F, Fut>(
        self,
        token: &CancellationToken,
        function: F,
    ) -> impl Future<Output = Result<Maybe<U>, Cancelled>>
    where
        F: FnOnce(T, CancellationToken) -> Fut,
        Fut: Future<Output = Maybe<U>>;
}

impl<T> MaybeAsyncExt<T> for Maybe<T> {
    async fn map_async<U, F, Fut>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value).await),
            Self::None => Maybe::None,
        }
    }

    async fn bind_async<U, F, Fut>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        match self {
            Self::Some(value) => function(value).await,
            Self::None => Maybe::None,
        }
    }

    async fn match_async<U, S, SomeFut, N, NoneFut>(self, some_function: S, none_function: N) -> U
    where
        S: FnOnce(T) -> SomeFut,
        SomeFut: Future<Output = U>,
        N: FnOnce() -> NoneFut,
        NoneFut: Future<Output = U>,
    {
        match self {
            Self::Some(value) => some_function(value).await,
            Self::None => none_function().await,
        }
    }

    async fn tap_async<F, Fut>(self, function: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Some(value) = &self {
            function(value).await;
        }
        self
    }

    async fn or_else_async<F, Fut>(self, function: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Self>,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => function().await,
        }
    }

    async fn map_async_cancellable<U, F, Fut>(
        self,
        token: &CancellationToken,
        function: F,
    ) -> Result<Maybe<U>, Cancelled>
    where
        F: FnOnce(T, CancellationToken) -> Fut,
        Fut: Future<Output = U>,
    {
        ensure_active(token)?;
        match self {
            Self::Some(value) => with_cancellation(token, function(value, token.clone()))
                .await
                .map(Maybe::Some),
            Self::None => Ok(Maybe::None),
        }
    }

    async fn bind_async_cancellable<U, F, Fut>(
        self,
        token: &CancellationToken,
        function: F,
    ) -> Result<Maybe<U>, Cancelled>
    where
        F: FnOnce(T, CancellationToken) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        ensure_active(token)?;
        match self {
            Self::Some(value) => with_cancellation(token, function(value, token.clone())).await,
            Self::None => Ok(Maybe::None),
        }
    }
}

/// Asynchronous combinators on a future that produces a `Maybe`.
///
/// The future is awaited first; the combinator then behaves like its
/// [`MaybeAsyncExt`] counterpart.
///
/// # Examples
///
/// ```rust
/// use outcomes::Maybe;
/// use outcomes::future::MaybeFutureExt;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let lookup = async { Maybe::some("ada") };
/// let length = lookup.map_async(|name| async move { name.len() }).await;
/// assert_eq!(length, Maybe::some(3));
/// # });
/// ```
pub trait MaybeFutureExt<T>: Future<Output = Maybe<T>> + Sized {
    /// Awaits `self`, then `function` on the value, if present.
    fn map_async<U, F, Fut>(self, function: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { self.await.map_async(function).await }
    }

    /// Awaits `self`, then a dependent optional computation.
    fn bind_async<U, F, Fut>(self, function: F) -> impl Future<Output = Maybe<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        async move { self.await.bind_async(function).await }
    }

    /// Awaits `self`, then performs exhaustive asynchronous case analysis.
    fn match_async<U, S, SomeFut, N, NoneFut>(
        self,
        some_function: S,
        none_function: N,
    ) -> impl Future<Output = U>
    where
        S: FnOnce(T) -> SomeFut,
        SomeFut: Future<Output = U>,
        N: FnOnce() -> NoneFut,
        NoneFut: Future<Output = U>,
    {
        async move { self.await.match_async(some_function, none_function).await }
    }

    /// Awaits `self`, then an observer of the value, if present.
    fn tap_async<F, Fut>(self, function: F) -> impl Future<Output = Maybe<T>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move { self.await.tap_async(function).await }
    }

    /// Awaits `self`, then a fallback when no value is present.
    fn or_else_async<F, Fut>(self, function: F) -> impl Future<Output = Maybe<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Maybe<T>>,
    {
        async move { self.await.or_else_async(function).await }
    }
}

impl<T, Fut> MaybeFutureExt<T> for Fut where Fut: Future<Output = Maybe<T>> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[rstest]
    #[tokio::test]
    async fn test_map_async_skips_function_on_none() {
        let calls = AtomicUsize::new(0);
        let result = Maybe::<i32>::none()
            .map_async(|x| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { x + 1 }
            })
            .await;
        assert_eq!(result, Maybe::none());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn test_chained_future_combinators_run_in_order() {
        let result = async { Maybe::some(2) }
            .map_async(|x| async move { x * 10 })
            .bind_async(|x| async move { if x > 10 { Maybe::some(x) } else { Maybe::none() } })
            .await;
        assert_eq!(result, Maybe::some(20));
    }

    #[rstest]
    #[tokio::test]
    async fn test_or_else_async_recovers_none() {
        let result = Maybe::<i32>::none().or_else_async(|| async { Maybe::some(5) }).await;
        assert_eq!(result, Maybe::some(5));
    }

    #[rstest]
    #[tokio::test]
    async fn test_map_async_cancellable_propagates_cancellation() {
        let token = CancellationToken::new();
        token.cancel();
        let result = Maybe::some(1)
            .map_async_cancellable(&token, |x, _token| async move { x })
            .await;
        assert_eq!(result, Err(Cancelled));
    }

    #[rstest]
    #[tokio::test]
    async fn test_bind_async_cancellable_passes_token_through() {
        let token = CancellationToken::new();
        let result = Maybe::some(1)
            .bind_async_cancellable(&token, |x, inner| async move {
                if inner.is_cancelled() { Maybe::none() } else { Maybe::some(x + 1) }
            })
            .await;
        assert_eq!(result, Ok(Maybe::some(2)));
    }
}
