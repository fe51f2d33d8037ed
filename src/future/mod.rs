//! Asynchronous combinators for the containers.
//!
//! This module is available with the `async` feature (enabled by default).
//!
//! # Overview
//!
//! - [`Maybe`](crate::Maybe) and [`Outcome`](crate::Outcome) get extension
//!   traits, both on the container itself ([`MaybeAsyncExt`],
//!   [`OutcomeAsyncExt`]) and on any future that produces one
//!   ([`MaybeFutureExt`], [`OutcomeFutureExt`]), so chains can be written
//!   without awaiting every intermediate step.
//! - [`Try`](crate::Try), [`Validation`](crate::Validation) and
//!   [`RemoteData`](crate::RemoteData) get inherent `*_async` methods.
//!   `Try` captures panics raised while its futures are polled.
//! - [`outcome::combine_all_async`] and [`validation::combine_all_async`]
//!   await a sequence of futures in order.
//!
//! # Cancellation
//!
//! The `*_cancellable` variants take a [`CancellationToken`]. The supplied
//! function receives a clone of the token, and its future is raced against
//! cancellation through [`Cancellable`]. A cancelled operation resolves to
//! `Err(Cancelled)`; cancellation is never stored inside the container.
//!
//! There is no retry, backoff or timeout here. Compose with
//! `tokio::time::timeout` and a token if you need them.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::{Cancelled, Maybe, Outcome};
//! use outcomes::future::{MaybeFutureExt, OutcomeAsyncExt};
//! use tokio_util::sync::CancellationToken;
//!
//! async fn find_user(id: u32) -> Maybe<String> {
//!     if id == 1 { Maybe::some("ada".to_string()) } else { Maybe::none() }
//! }
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let greeting = find_user(1).map_async(|name| async move { format!("hello {name}") }).await;
//! assert_eq!(greeting, Maybe::some("hello ada".to_string()));
//!
//! let token = CancellationToken::new();
//! token.cancel();
//! let cancelled = Outcome::<u32, String>::ok(1)
//!     .map_async_cancellable(&token, |id, _| async move { id + 1 })
//!     .await;
//! assert_eq!(cancelled, Err(Cancelled));
//! # });
//! ```
//!
//! [`CancellationToken`]: tokio_util::sync::CancellationToken

mod attempt;
mod cancellable;
mod maybe;
pub mod outcome;
mod remote;
pub mod validation;

pub use cancellable::{Cancellable, with_cancellation};
pub use maybe::{MaybeAsyncExt, MaybeFutureExt};
pub use outcome::{OutcomeAsyncExt, OutcomeFutureExt};
