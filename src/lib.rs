//! # outcomes
//!
//! Algebraic containers for absence, failure and loading state, each with an
//! explicit combinator algebra.
//!
//! ## Overview
//!
//! - **[`Maybe`]**: an optional value (`Some` / `None`).
//! - **[`Outcome`]**: a success or a typed error (`Ok` / `Err`).
//! - **[`Either`]**: one of two values, right-biased (`Left` / `Right`).
//! - **[`Try`]**: a success or a captured runtime [`Fault`]; the only
//!   container that catches panics raised by the code it runs.
//! - **[`Validation`]**: a valid value or a non-empty list of [`Faults`];
//!   combining validations accumulates every fault.
//! - **[`RemoteData`]**: the four states of a remote load
//!   (`NotAsked` / `Loading` / `Success` / `Failure`).
//!
//! All containers are plain enums: match on them directly, or use the
//! `match_with` helpers. Conversions between containers are explicit `to_*`
//! methods or `From` impls; nothing converts implicitly.
//!
//! Operations that only make sense in one state come in two forms. The
//! checked form (`value()`, `error()`, ...) returns
//! `Result<_, WrongStateError>`; the `unwrap`/`expect` family panics with
//! the same message.
//!
//! ## Feature Flags
//!
//! - `async` (default): the [`future`] module with asynchronous combinators
//!   and cooperative cancellation.
//! - `serde`: `Serialize` / `Deserialize` for every container except `Try`.
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use outcomes::prelude::*;
//!
//! fn parse_age(input: &str) -> Outcome<u8, String> {
//!     Outcome::from(input.parse::<u8>()).map_error(|error| error.to_string())
//! }
//!
//! let adult = parse_age("42").filter(|age| *age >= 18, "too young".to_string());
//! assert_eq!(adult, Outcome::ok(42));
//!
//! let form = validation::combine2(
//!     Validation::<&str, &str>::invalid("name required"),
//!     Validation::<u8, &str>::invalid("bad age"),
//! );
//! assert_eq!(form.unwrap_errors().into_vec(), vec!["name required", "bad age"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, their error types and, with the `async`
/// feature, the asynchronous extension traits.
///
/// # Usage
///
/// ```rust
/// use outcomes::prelude::*;
/// ```
pub mod prelude {
    pub use crate::attempt::Try;
    pub use crate::either::Either;
    pub use crate::error::{Cancelled, ContractViolation, WrongStateError};
    pub use crate::fault::{Fault, FaultKind};
    pub use crate::maybe::Maybe;
    pub use crate::outcome::{self, Outcome};
    pub use crate::remote::RemoteData;
    pub use crate::tagged::Tagged;
    pub use crate::validation::{self, Faults, Validation};

    #[cfg(feature = "async")]
    pub use crate::future::{MaybeAsyncExt, MaybeFutureExt, OutcomeAsyncExt, OutcomeFutureExt};
}

pub mod attempt;
pub mod either;
pub mod error;
pub mod fault;
pub mod maybe;
pub mod outcome;
pub mod remote;
pub mod tagged;
pub mod validation;

#[cfg(feature = "async")]
pub mod future;

pub use attempt::Try;
pub use either::Either;
pub use error::{Cancelled, ContractViolation, WrongStateError};
pub use fault::{Fault, FaultKind, PanicFault, PredicateFailed};
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use remote::RemoteData;
pub use tagged::Tagged;
pub use validation::{Faults, Validation};
