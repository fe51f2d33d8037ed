//! Try type - a success value or a captured runtime fault.
//!
//! `Try<T>` is the only container whose operations capture faults. Code run
//! through [`Try::of`], [`Try::catching`], [`Try::map`] or [`Try::and_then`]
//! may panic or return an error; instead of unwinding to the caller, the
//! fault is stored as [`Try::Failure`].
//!
//! Every other container lets panics raised by caller-supplied functions
//! propagate unchanged. Move the code into `Try` first to capture them.
//!
//! Capturing relies on unwinding; under `panic = "abort"` panics terminate
//! the process as usual and only returned errors are captured.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::Try;
//!
//! let parsed = Try::of(|| "x".parse::<i32>());
//! assert!(parsed.is_failure());
//!
//! let recovered = parsed.recover(|_| -1);
//! assert_eq!(recovered, Try::success(-1));
//! ```

use std::error::Error;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::error::WrongStateError;
use crate::fault::{Fault, PredicateFailed};
use crate::maybe::Maybe;
use crate::outcome::Outcome;
use crate::tagged::{Tagged, write_tagged};

/// A success value `Success(T)` or a captured `Failure(Fault)`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Try<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed; the fault was captured.
    Failure(Fault),
}

/// Runs `thunk`, turning a panic into a [`Fault`].
pub(crate) fn capture<T, F>(thunk: F) -> Result<T, Fault>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(thunk)).map_err(|payload| {
        let fault = Fault::from_panic(payload);
        trace_capture(&fault);
        fault
    })
}

pub(crate) fn trace_capture(fault: &Fault) {
    tracing::debug!(
        target: "outcomes::attempt",
        kind = ?fault.kind(),
        type_name = fault.type_name(),
        message = %fault,
        "captured fault"
    );
}

impl<T> Try<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a success value.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failure from an existing fault.
    #[inline]
    pub const fn failure(fault: Fault) -> Self {
        Self::Failure(fault)
    }

    /// Runs a fallible thunk immediately, capturing both a returned error and
    /// a panic as `Failure`.
    ///
    /// The thunk runs to completion on the calling thread, so no cancellation
    /// can interrupt it. Any error it returns is captured, [`Cancelled`] included;
    /// the asynchronous constructors return cancellation beside the `Try`
    /// instead.
    ///
    /// [`Cancelled`]: crate::Cancelled
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Try;
    ///
    /// assert_eq!(Try::of(|| "42".parse::<i32>()), Try::success(42));
    ///
    /// let failed = Try::of(|| "x".parse::<i32>());
    /// let fault = failed.fault().unwrap();
    /// assert!(fault.downcast_ref::<std::num::ParseIntError>().is_some());
    /// ```
    pub fn of<E, F>(thunk: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: Error + Send + Sync + 'static,
    {
        match capture(thunk) {
            Ok(Ok(value)) => Self::Success(value),
            Ok(Err(error)) => Self::captured(Fault::new(error)),
            Err(fault) => Self::Failure(fault),
        }
    }

    /// Runs an infallible thunk immediately, capturing a panic as `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Try;
    ///
    /// let divided = Try::catching(|| {
    ///     let divisor = "0".parse::<i32>().unwrap_or(1);
    ///     10 / divisor
    /// });
    /// assert!(divided.fault().unwrap().is_panic());
    /// ```
    pub fn catching<F>(thunk: F) -> Self
    where
        F: FnOnce() -> T,
    {
        capture(thunk).into()
    }

    fn captured(fault: Fault) -> Self {
        trace_capture(&fault);
        Self::Failure(fault)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` on success.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` on failure.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Mapping and Chaining
    // =========================================================================

    /// Transforms the success value; a panic inside `function` becomes `Failure`.
    pub fn map<U, F>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => capture(move || function(value)).into(),
            Self::Failure(fault) => Try::Failure(fault),
        }
    }

    /// Transforms the success value with a fallible function; both a returned
    /// error and a panic become `Failure`, exactly as in [`Try::of`].
    pub fn map_fallible<U, E, F>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: Error + Send + Sync + 'static,
    {
        match self {
            Self::Success(value) => Try::of(move || function(value)),
            Self::Failure(fault) => Try::Failure(fault),
        }
    }

    /// Chains another `Try`; a panic inside `function` becomes `Failure`.
    pub fn and_then<U, F>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> Try<U>,
    {
        match self {
            Self::Success(value) => match capture(move || function(value)) {
                Ok(next) => next,
                Err(fault) => Try::Failure(fault),
            },
            Self::Failure(fault) => Try::Failure(fault),
        }
    }

    /// Alias for [`Try::and_then`].
    pub fn bind<U, F>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> Try<U>,
    {
        self.and_then(function)
    }

    /// Turns `Success` into a [`PredicateFailed`] failure when `predicate` does not hold.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => match capture(|| predicate(&value)) {
                Ok(true) => Self::Success(value),
                Ok(false) => Self::captured(Fault::new(PredicateFailed)),
                Err(fault) => Self::Failure(fault),
            },
            Self::Failure(fault) => Self::Failure(fault),
        }
    }

    /// Observes the success value and returns `self` unchanged.
    pub fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            function(value);
        }
        self
    }

    /// Observes the fault and returns `self` unchanged.
    pub fn tap_failure<F>(self, function: F) -> Self
    where
        F: FnOnce(&Fault),
    {
        if let Self::Failure(fault) = &self {
            function(fault);
        }
        self
    }

    // =========================================================================
    // Recovery
    // =========================================================================

    /// Replaces a failure with a value computed from the fault.
    ///
    /// A panic inside `function` becomes a new `Failure`.
    pub fn recover<F>(self, function: F) -> Self
    where
        F: FnOnce(Fault) -> T,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(fault) => capture(move || function(fault)).into(),
        }
    }

    /// Replaces a failure with another `Try` computed from the fault.
    pub fn recover_with<F>(self, function: F) -> Self
    where
        F: FnOnce(Fault) -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(fault) => match capture(move || function(fault)) {
                Ok(next) => next,
                Err(fault) => Self::Failure(fault),
            },
        }
    }

    /// Returns `self` on success, otherwise `alternative`.
    pub fn or(self, alternative: Self) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(_) => alternative,
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Exhaustive case analysis.
    pub fn match_with<U, S, F>(self, success_function: S, failure_function: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(Fault) -> U,
    {
        match self {
            Self::Success(value) => success_function(value),
            Self::Failure(fault) => failure_function(fault),
        }
    }

    /// Returns the success value or `default`.
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value or computes one from the fault.
    pub fn value_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(Fault) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(fault) => function(fault),
        }
    }

    /// Non-throwing access to the success value.
    pub const fn try_get(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Non-throwing access to the fault.
    pub const fn try_get_fault(&self) -> Option<&Fault> {
        match self {
            Self::Success(_) => None,
            Self::Failure(fault) => Some(fault),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts to an [`Outcome`], projecting the fault into an error value.
    pub fn to_outcome<E, F>(self, projection: F) -> Outcome<T, E>
    where
        F: FnOnce(Fault) -> E,
    {
        match self {
            Self::Success(value) => Outcome::Ok(value),
            Self::Failure(fault) => Outcome::Err(projection(fault)),
        }
    }

    /// Converts to an [`Outcome`] that keeps the fault as its error.
    pub fn into_outcome(self) -> Outcome<T, Fault> {
        self.to_outcome(|fault| fault)
    }

    /// Keeps the success value, discarding the fault.
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Failure(_) => Maybe::None,
        }
    }
}

impl<T: fmt::Debug> Try<T> {
    /// Checked access to the success value.
    ///
    /// # Errors
    ///
    /// Returns a [`WrongStateError`] naming the captured fault.
    pub fn value(self) -> Result<T, WrongStateError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(WrongStateError::new(Self::CONTAINER, "value", &self)),
        }
    }

    /// Checked access to the captured fault.
    ///
    /// # Errors
    ///
    /// Returns a [`WrongStateError`] when called on `Success`.
    pub fn fault(&self) -> Result<&Fault, WrongStateError> {
        match self {
            Self::Failure(fault) => Ok(fault),
            Self::Success(_) => Err(WrongStateError::new(Self::CONTAINER, "fault", self)),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with a message naming the fault if this is `Failure`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => WrongStateError::new(Self::CONTAINER, "unwrap", &self).raise(),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with `context` prefixed to the wrong-state message if this is `Failure`.
    #[track_caller]
    pub fn expect(self, context: &str) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => WrongStateError::new(Self::CONTAINER, "expect", &self)
                .with_context(context)
                .raise(),
        }
    }

    /// Returns the captured fault.
    ///
    /// # Panics
    ///
    /// Panics if this is `Success`.
    #[track_caller]
    pub fn unwrap_fault(self) -> Fault {
        match self {
            Self::Failure(fault) => fault,
            Self::Success(_) => WrongStateError::new(Self::CONTAINER, "unwrap_fault", &self).raise(),
        }
    }
}

impl<T> Try<Try<T>> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Try<T> {
        match self {
            Self::Success(inner) => inner,
            Self::Failure(fault) => Try::Failure(fault),
        }
    }
}

impl<T> From<Result<T, Fault>> for Try<T> {
    fn from(result: Result<T, Fault>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(fault) => Self::Failure(fault),
        }
    }
}

impl<T> Tagged for Try<T> {
    const CONTAINER: &'static str = "Try";

    fn tag(&self) -> &'static str {
        match self {
            Self::Success(_) => "Success",
            Self::Failure(_) => "Failure",
        }
    }

    fn discriminant(&self) -> u8 {
        match self {
            Self::Success(_) => 0,
            Self::Failure(_) => 1,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Try<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write_tagged(formatter, self.tag(), Some(value)),
            Self::Failure(fault) => write_tagged(formatter, self.tag(), Some(fault)),
        }
    }
}

static_assertions::assert_impl_all!(Try<String>: Send, Sync, Clone, Ord, std::hash::Hash);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_map_captures_panic() {
        let result = Try::success(1).map(|_: i32| -> i32 { panic!("inside map") });
        let fault = result.unwrap_fault();
        assert!(fault.is_panic());
        assert_eq!(fault.message(), "panicked: inside map");
    }

    #[rstest]
    fn test_and_then_captures_panic() {
        let result = Try::success(1).and_then(|_: i32| -> Try<i32> { panic!("inside and_then") });
        assert!(result.is_failure());
    }

    #[rstest]
    fn test_filter_rejects_with_predicate_failed() {
        let fault = Try::success(3).filter(|x| *x > 5).unwrap_fault();
        assert!(fault.downcast_ref::<PredicateFailed>().is_some());
    }

    #[rstest]
    fn test_recover_with_replaces_failure() {
        let failed: Try<i32> = Try::of(|| "x".parse::<i32>());
        assert_eq!(failed.recover_with(|_| Try::success(0)), Try::success(0));
    }

    #[rstest]
    #[should_panic(expected = "called `Try::unwrap_fault()` on `Success(1)`")]
    fn test_unwrap_fault_on_success_panics() {
        let _ = Try::success(1).unwrap_fault();
    }

    #[rstest]
    fn test_fault_on_success_is_wrong_state() {
        let error = Try::success(1).fault().unwrap_err();
        assert_eq!(error.operation, "fault");
    }

    #[rstest]
    fn test_display_failure_shows_message() {
        let failed: Try<i32> = Try::of(|| "x".parse::<i32>());
        assert_eq!(failed.to_string(), "Failure(invalid digit found in string)");
    }
}
