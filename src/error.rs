//! Error types raised by the container algebra itself.
//!
//! These are distinct from the payloads the containers carry:
//!
//! - [`WrongStateError`]: a payload was requested from a container that is in
//!   a state that does not carry it (for example `value()` on `Err`).
//! - [`ContractViolation`]: a construction contract was broken, such as
//!   building an `Invalid` validation from zero faults.
//! - [`Cancelled`]: an asynchronous combinator observed cancellation.

use std::fmt;

use thiserror::Error;

/// Wrong-state access: the requested payload is not present in the current state.
///
/// The message embeds the container's formatted actual state and, optionally,
/// a caller-supplied context prefix.
///
/// # Examples
///
/// ```rust
/// use outcomes::Outcome;
///
/// let failed: Outcome<i32, &str> = Outcome::err("e");
/// let error = failed.value().unwrap_err();
/// assert_eq!(error.to_string(), "called `Outcome::value()` on `Err(\"e\")`");
///
/// let error = error.with_context("loading user");
/// assert_eq!(
///     error.to_string(),
///     "loading user: called `Outcome::value()` on `Err(\"e\")`"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{}called `{container}::{operation}()` on `{actual}`", ContextPrefix(.context.as_deref()))]
pub struct WrongStateError {
    /// Container type name, for example `"Outcome"`.
    pub container: &'static str,
    /// Accessor that was called.
    pub operation: &'static str,
    /// Debug rendering of the container's actual state.
    pub actual: String,
    /// Caller-supplied context prefix.
    pub context: Option<String>,
}

impl WrongStateError {
    /// Creates an error describing `actual`, which was asked for `operation`.
    pub fn new(container: &'static str, operation: &'static str, actual: &impl fmt::Debug) -> Self {
        Self {
            container,
            operation,
            actual: format!("{actual:?}"),
            context: None,
        }
    }

    /// Prefixes the message with caller-supplied context.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Panics with this error's message. Backs the `unwrap*`/`expect*` family.
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        panic!("{self}")
    }
}

struct ContextPrefix<'a>(Option<&'a str>);

impl fmt::Display for ContextPrefix<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(context) => write!(formatter, "{context}: "),
            None => Ok(()),
        }
    }
}

/// A container was constructed in violation of its contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ContractViolation {
    /// An `Invalid` state requires at least one fault.
    #[error("cannot construct `{container}::Invalid` from an empty fault sequence")]
    EmptyFaults {
        /// Container type name.
        container: &'static str,
    },
}

/// An asynchronous combinator was cancelled through its cancellation token.
///
/// Cancellation is never stored as a container payload; it is always returned
/// beside the container so that the caller observes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Error)]
#[error("operation cancelled")]
pub struct Cancelled;
