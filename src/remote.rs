//! RemoteData type - the four-state lifecycle of an asynchronous load.
//!
//! `RemoteData<T, E>` models the *current status* of a load, not a
//! transition log: `NotAsked`, `Loading`, `Success(T)` or `Failure(E)`. Any
//! state can be constructed directly.
//!
//! Combinators act on `Success` and pass the other three states through;
//! [`RemoteData::map_error`] acts on `Failure`. There is deliberately no
//! conversion from [`Maybe`]: absence is not a load state, use
//! [`RemoteData::not_asked`] explicitly.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::{Outcome, RemoteData};
//!
//! let loaded: RemoteData<u32, String> = Outcome::ok(3).to_remote_data();
//! assert!(loaded.is_loaded());
//!
//! let label = loaded.map(|count| count * 2).match_with(
//!     || "idle".to_string(),
//!     || "spinner".to_string(),
//!     |count| format!("{count} items"),
//!     |error| format!("error: {error}"),
//! );
//! assert_eq!(label, "6 items");
//! ```

use std::fmt;

use crate::error::WrongStateError;
use crate::maybe::Maybe;
use crate::outcome::Outcome;
use crate::tagged::{Tagged, write_tagged};

/// The status of a remote load.
///
/// Cases are ordered `NotAsked < Loading < Success < Failure` regardless of
/// payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RemoteData<T, E> {
    /// The load has not been requested.
    NotAsked,
    /// The load is in flight.
    Loading,
    /// The load completed with a value.
    Success(T),
    /// The load completed with an error.
    Failure(E),
}

impl<T, E> RemoteData<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// The load has not been requested.
    #[inline]
    pub const fn not_asked() -> Self {
        Self::NotAsked
    }

    /// The load is in flight.
    #[inline]
    pub const fn loading() -> Self {
        Self::Loading
    }

    /// The load completed with `value`.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// The load completed with `error`.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` for `NotAsked`.
    #[inline]
    pub const fn is_not_asked(&self) -> bool {
        matches!(self, Self::NotAsked)
    }

    /// Returns `true` for `Loading`.
    #[inline]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns `true` for `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// `Success` or `Failure`: the load has finished.
    #[inline]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Failure(_))
    }

    /// `NotAsked` or `Loading`: there is nothing to show yet.
    #[inline]
    pub const fn is_not_loaded(&self) -> bool {
        matches!(self, Self::NotAsked | Self::Loading)
    }

    // =========================================================================
    // Mapping and Chaining
    // =========================================================================

    /// Transforms the `Success` value; other states pass through.
    pub fn map<U, F>(self, function: F) -> RemoteData<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::NotAsked => RemoteData::NotAsked,
            Self::Loading => RemoteData::Loading,
            Self::Success(value) => RemoteData::Success(function(value)),
            Self::Failure(error) => RemoteData::Failure(error),
        }
    }

    /// Transforms the `Failure` error; other states pass through.
    pub fn map_error<E2, F>(self, function: F) -> RemoteData<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::NotAsked => RemoteData::NotAsked,
            Self::Loading => RemoteData::Loading,
            Self::Success(value) => RemoteData::Success(value),
            Self::Failure(error) => RemoteData::Failure(function(error)),
        }
    }

    /// Chains a dependent load on `Success`; other states pass through.
    pub fn and_then<U, F>(self, function: F) -> RemoteData<U, E>
    where
        F: FnOnce(T) -> RemoteData<U, E>,
    {
        match self {
            Self::NotAsked => RemoteData::NotAsked,
            Self::Loading => RemoteData::Loading,
            Self::Success(value) => function(value),
            Self::Failure(error) => RemoteData::Failure(error),
        }
    }

    /// Alias for [`RemoteData::and_then`].
    pub fn bind<U, F>(self, function: F) -> RemoteData<U, E>
    where
        F: FnOnce(T) -> RemoteData<U, E>,
    {
        self.and_then(function)
    }

    /// Pairs two loads.
    ///
    /// Precedence: the first `Failure` in operand order, then `Loading`, then
    /// `NotAsked`; the result is `Success` only if both are.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::RemoteData;
    ///
    /// let user: RemoteData<&str, &str> = RemoteData::success("ada");
    /// let posts: RemoteData<u32, &str> = RemoteData::loading();
    /// assert_eq!(user.zip(posts), RemoteData::loading());
    ///
    /// let failed: RemoteData<u32, &str> = RemoteData::failure("timeout");
    /// assert_eq!(RemoteData::<&str, &str>::not_asked().zip(failed), RemoteData::failure("timeout"));
    /// ```
    pub fn zip<U>(self, other: RemoteData<U, E>) -> RemoteData<(T, U), E> {
        self.zip_with(other, |left, right| (left, right))
    }

    /// Combines two loads with `function`, using the precedence of [`RemoteData::zip`].
    pub fn zip_with<U, V, F>(self, other: RemoteData<U, E>, function: F) -> RemoteData<V, E>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (Self::Success(left), RemoteData::Success(right)) => RemoteData::Success(function(left, right)),
            (Self::Failure(error), _) | (_, RemoteData::Failure(error)) => RemoteData::Failure(error),
            (Self::Loading, _) | (_, RemoteData::Loading) => RemoteData::Loading,
            (Self::NotAsked, _) | (_, RemoteData::NotAsked) => RemoteData::NotAsked,
        }
    }

    /// Observes the `Success` value and returns `self` unchanged.
    pub fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            function(value);
        }
        self
    }

    /// Observes the `Failure` error and returns `self` unchanged.
    pub fn tap_failure<F>(self, function: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            function(error);
        }
        self
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Exhaustive case analysis over all four states.
    pub fn match_with<U, N, L, S, F>(
        self,
        not_asked_function: N,
        loading_function: L,
        success_function: S,
        failure_function: F,
    ) -> U
    where
        N: FnOnce() -> U,
        L: FnOnce() -> U,
        S: FnOnce(T) -> U,
        F: FnOnce(E) -> U,
    {
        match self {
            Self::NotAsked => not_asked_function(),
            Self::Loading => loading_function(),
            Self::Success(value) => success_function(value),
            Self::Failure(error) => failure_function(error),
        }
    }

    /// Returns the `Success` value, or `default` for every other state.
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            _ => default,
        }
    }

    /// Returns the `Success` value, or the result of `factory` for every other state.
    pub fn value_or_else<F>(self, factory: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Success(value) => value,
            _ => factory(),
        }
    }

    /// Non-throwing access to the `Success` value.
    pub const fn try_get(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Non-throwing access to the `Failure` error.
    pub const fn try_get_error(&self) -> Option<&E> {
        match self {
            Self::Failure(error) => Some(error),
            _ => None,
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts every state to an [`Outcome`], mapping `NotAsked` and
    /// `Loading` to the supplied errors. Always succeeds.
    pub fn to_outcome_or(self, not_asked_error: E, loading_error: E) -> Outcome<T, E> {
        match self {
            Self::NotAsked => Outcome::Err(not_asked_error),
            Self::Loading => Outcome::Err(loading_error),
            Self::Success(value) => Outcome::Ok(value),
            Self::Failure(error) => Outcome::Err(error),
        }
    }

    /// Keeps the `Success` value.
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            _ => Maybe::None,
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> RemoteData<T, E> {
    /// Converts a loaded state to an [`Outcome`].
    ///
    /// # Errors
    ///
    /// `NotAsked` and `Loading` have no `Outcome` representation and yield a
    /// [`WrongStateError`].
    pub fn to_outcome(self) -> Result<Outcome<T, E>, WrongStateError> {
        match self {
            Self::Success(value) => Ok(Outcome::Ok(value)),
            Self::Failure(error) => Ok(Outcome::Err(error)),
            Self::NotAsked | Self::Loading => Err(WrongStateError::new(Self::CONTAINER, "to_outcome", &self)),
        }
    }

    /// Checked access to the `Success` value.
    ///
    /// # Errors
    ///
    /// Returns a [`WrongStateError`] for every other state.
    pub fn value(self) -> Result<T, WrongStateError> {
        match self {
            Self::Success(value) => Ok(value),
            _ => Err(WrongStateError::new(Self::CONTAINER, "value", &self)),
        }
    }

    /// Checked access to the `Failure` error.
    ///
    /// # Errors
    ///
    /// Returns a [`WrongStateError`] for every other state.
    pub fn error(self) -> Result<E, WrongStateError> {
        match self {
            Self::Failure(error) => Ok(error),
            _ => Err(WrongStateError::new(Self::CONTAINER, "error", &self)),
        }
    }

    /// Returns the `Success` value.
    ///
    /// # Panics
    ///
    /// Panics with a message naming the actual state otherwise.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Success(value) => value,
            _ => WrongStateError::new(Self::CONTAINER, "unwrap", &self).raise(),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for RemoteData<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.to_remote_data()
    }
}

impl<T, E> Tagged for RemoteData<T, E> {
    const CONTAINER: &'static str = "RemoteData";

    fn tag(&self) -> &'static str {
        match self {
            Self::NotAsked => "NotAsked",
            Self::Loading => "Loading",
            Self::Success(_) => "Success",
            Self::Failure(_) => "Failure",
        }
    }

    fn discriminant(&self) -> u8 {
        match self {
            Self::NotAsked => 0,
            Self::Loading => 1,
            Self::Success(_) => 2,
            Self::Failure(_) => 3,
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for RemoteData<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAsked | Self::Loading => write_tagged(formatter, self.tag(), None),
            Self::Success(value) => write_tagged(formatter, self.tag(), Some(value)),
            Self::Failure(error) => write_tagged(formatter, self.tag(), Some(error)),
        }
    }
}

static_assertions::assert_impl_all!(RemoteData<String, String>: Send, Sync, Clone, Ord, std::hash::Hash);
