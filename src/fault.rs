//! Captured runtime faults carried by [`Try`](crate::Try).
//!
//! A [`Fault`] wraps whatever went wrong inside code run under `Try`: either
//! an error value returned by a fallible thunk, or the payload of a panic.
//! Faults are cheap to clone (`Arc`) and compare by value: two faults are
//! equal when they have the same kind, the same source type and the same
//! message.

use std::any::Any;
use std::cmp::Ordering;
use std::error::Error;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use thiserror::Error;

/// Where a fault came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FaultKind {
    /// An error value returned by the captured code.
    Error,
    /// A panic raised by the captured code.
    Panic,
}

/// The error stored for a captured panic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("panicked: {message}")]
pub struct PanicFault {
    /// The panic message, or a placeholder for non-string payloads.
    pub message: String,
}

/// The error stored when [`Try::filter`](crate::Try::filter) rejects a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Error)]
#[error("predicate does not hold")]
pub struct PredicateFailed;

/// A captured runtime fault.
///
/// Faults built from a concrete error type compare by kind, type name and
/// message. A fault built with [`Fault::from_boxed`] has no recoverable type,
/// so it only equals itself and its clones.
///
/// # Examples
///
/// ```rust
/// use outcomes::{Fault, FaultKind};
///
/// let fault = Fault::new("x".parse::<i32>().unwrap_err());
/// assert_eq!(fault.kind(), FaultKind::Error);
/// assert!(fault.downcast_ref::<std::num::ParseIntError>().is_some());
/// assert_eq!(fault.message(), "invalid digit found in string");
/// ```
#[derive(Clone)]
pub struct Fault {
    kind: FaultKind,
    type_name: Option<&'static str>,
    message: Arc<str>,
    error: Arc<dyn Error + Send + Sync + 'static>,
}

/// What distinguishes two faults of the same kind and message.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Origin {
    Typed(&'static str),
    Opaque(usize),
}

impl Fault {
    /// Captures an error value.
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::build(FaultKind::Error, Some(std::any::type_name::<E>()), Arc::new(error))
    }

    /// Captures an already boxed error.
    ///
    /// The concrete type name is not recoverable from the box, so the fault
    /// compares equal only to its own clones.
    ///
    /// ```rust
    /// use outcomes::Fault;
    ///
    /// let io = Fault::from_boxed(Box::new(std::io::Error::other("x")));
    /// let plain = Fault::from_boxed("x".into());
    /// assert_ne!(io, plain);
    /// assert_eq!(io, io.clone());
    /// ```
    pub fn from_boxed(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self::build(FaultKind::Error, None, Arc::from(error))
    }

    /// Captures the payload of a panic as returned by `catch_unwind`.
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let message = payload
            .downcast_ref::<&'static str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "Box<dyn Any>".to_string());
        Self::build(
            FaultKind::Panic,
            Some(std::any::type_name::<PanicFault>()),
            Arc::new(PanicFault { message }),
        )
    }

    fn build(
        kind: FaultKind,
        type_name: Option<&'static str>,
        error: Arc<dyn Error + Send + Sync + 'static>,
    ) -> Self {
        Self {
            kind,
            type_name,
            message: Arc::from(error.to_string()),
            error,
        }
    }

    /// Whether the fault came from an error value or a panic.
    pub const fn kind(&self) -> FaultKind {
        self.kind
    }

    /// Returns `true` if the fault is a captured panic.
    pub fn is_panic(&self) -> bool {
        self.kind == FaultKind::Panic
    }

    /// Type name of the captured error, or `dyn core::error::Error` when it
    /// was captured from a box.
    pub const fn type_name(&self) -> &'static str {
        match self.type_name {
            Some(name) => name,
            None => "dyn core::error::Error",
        }
    }

    /// The captured error's message, rendered once at capture time.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The captured error.
    pub fn error(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.error
    }

    /// Attempts to view the captured error as a concrete type.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.error.downcast_ref::<E>()
    }

    fn key(&self) -> (FaultKind, Origin, &str) {
        let origin = match self.type_name {
            Some(name) => Origin::Typed(name),
            None => Origin::Opaque(Arc::as_ptr(&self.error).cast::<()>().addr()),
        };
        (self.kind, origin, &self.message)
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Fault")
            .field("kind", &self.kind)
            .field("type_name", &self.type_name())
            .field("message", &self.message)
            .finish()
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Error for Fault {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.error.source()
    }
}

impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Fault {}

impl PartialOrd for Fault {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fault {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Hash for Fault {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
