//! Asynchronous loading for [`RemoteData`].

use std::future::Future;

use tokio_util::sync::CancellationToken;

use super::cancellable::{ensure_active, with_cancellation};
use crate::error::Cancelled;
use crate::outcome::Outcome;
use crate::remote::RemoteData;

impl<T, E> RemoteData<T, E> {
    /// Awaits a load and records how it finished.
    ///
    /// The future may produce anything convertible into an [`Outcome`], such
    /// as a `Result`: `Ok` becomes `Success`, `Err` becomes `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::RemoteData;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let loaded = RemoteData::<Vec<i32>, String>::from_future(async { Ok::<_, String>(vec![1, 2, 3]) }).await;
    /// assert_eq!(loaded, RemoteData::success(vec![1, 2, 3]));
    ///
    /// let failed = RemoteData::<i32, &str>::from_future(async { Err::<i32, &str>("timeout") }).await;
    /// assert_eq!(failed, RemoteData::failure("timeout"));
    /// # });
    /// ```
    pub async fn from_future<Fut, R>(future: Fut) -> Self
    where
        Fut: Future<Output = R>,
        R: Into<Outcome<T, E>>,
    {
        let outcome: Outcome<T, E> = future.await.into();
        outcome.to_remote_data()
    }

    /// Like [`RemoteData::from_future`], racing the load against `token`.
    ///
    /// # Errors
    ///
    /// Returns [`Cancelled`] if `token` is cancelled before the load finishes.
    pub async fn from_future_cancellable<F, Fut, R>(
        token: &CancellationToken,
        factory: F,
    ) -> Result<Self, Cancelled>
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = R>,
        R: Into<Outcome<T, E>>,
    {
        ensure_active(token)?;
        with_cancellation(token, factory(token.clone()))
            .await
            .map(|loaded| {
                let outcome: Outcome<T, E> = loaded.into();
                outcome.to_remote_data()
            })
    }

    /// Awaits `function` on the loaded value.
    pub async fn map_async<U, F, Fut>(self, function: F) -> RemoteData<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::NotAsked => RemoteData::NotAsked,
            Self::Loading => RemoteData::Loading,
            Self::Success(value) => RemoteData::Success(function(value).await),
            Self::Failure(error) => RemoteData::Failure(error),
        }
    }

    /// Awaits a dependent load on the loaded value.
    pub async fn and_then_async<U, F, Fut>(self, function: F) -> RemoteData<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = RemoteData<U, E>>,
    {
        match self {
            Self::NotAsked => RemoteData::NotAsked,
            Self::Loading => RemoteData::Loading,
            Self::Success(value) => function(value).await,
            Self::Failure(error) => RemoteData::Failure(error),
        }
    }
}
