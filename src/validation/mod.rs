//! Validation type - a valid value or an accumulated list of faults.
//!
//! `Validation<T, E>` is structurally like [`Outcome`]: `Valid(T)` or
//! `Invalid(Faults<E>)`. The difference is how independent validations are
//! combined:
//!
//! - [`Validation::apply`], [`Validation::zip`], [`combine2`]..[`combine4`]
//!   and [`combine_all`] **accumulate**: the result is `Valid` iff every
//!   operand is `Valid`; otherwise it carries the concatenation of all
//!   operands' faults, in call order (left operand's faults first).
//! - [`Validation::and_then`] **short-circuits** like `Outcome::and_then`:
//!   a dependent step cannot run without the previous value, so only the
//!   first failure is reported. Use it for sequential checks, not for
//!   combining independent fields.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::{Validation, validation};
//!
//! fn name(input: &str) -> Validation<String, &'static str> {
//!     Validation::valid(input.to_string()).ensure(|name| !name.is_empty(), "name required")
//! }
//!
//! fn email(input: &str) -> Validation<String, &'static str> {
//!     Validation::valid(input.to_string()).ensure(|email| email.contains('@'), "bad email")
//! }
//!
//! fn age(input: u32) -> Validation<u32, &'static str> {
//!     Validation::valid(input).ensure(|age| *age >= 18, "bad age")
//! }
//!
//! let user = validation::combine3(name(""), email("nobody"), age(12));
//! assert_eq!(
//!     user.unwrap_errors().into_vec(),
//!     vec!["name required", "bad email", "bad age"]
//! );
//! ```

mod faults;

pub use faults::Faults;

use std::fmt;

use crate::error::{ContractViolation, WrongStateError};
use crate::maybe::Maybe;
use crate::outcome::Outcome;
use crate::tagged::{Tagged, write_tagged};

/// A valid value or a non-empty, ordered sequence of faults.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "T: serde::Serialize, E: Clone + serde::Serialize",
        deserialize = "T: serde::Deserialize<'de>, E: serde::Deserialize<'de>"
    ))
)]
pub enum Validation<T, E> {
    /// The value passed validation.
    Valid(T),
    /// The value failed validation with one or more faults.
    Invalid(Faults<E>),
}

impl<T, E> Validation<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a valid value.
    #[inline]
    pub const fn valid(value: T) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid value with a single fault.
    #[inline]
    pub fn invalid(fault: E) -> Self {
        Self::Invalid(Faults::single(fault))
    }

    /// Creates an invalid value from an existing fault sequence.
    #[inline]
    pub const fn invalid_many(faults: Faults<E>) -> Self {
        Self::Invalid(faults)
    }

    /// Creates an invalid value from an arbitrary iterator of faults.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::EmptyFaults`] if `faults` is empty.
    pub fn try_invalid_from<I>(faults: I) -> Result<Self, ContractViolation>
    where
        I: IntoIterator<Item = E>,
    {
        Faults::try_from_iter(faults).map(Self::Invalid)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if valid.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` if invalid.
    #[inline]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Transforms the valid value.
    pub fn map<U, F>(self, function: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Valid(value) => Validation::Valid(function(value)),
            Self::Invalid(faults) => Validation::Invalid(faults),
        }
    }

    /// Transforms every fault, preserving order.
    pub fn map_errors<E2, F>(self, function: F) -> Validation<T, E2>
    where
        F: FnMut(E) -> E2,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(faults) => Validation::Invalid(faults.map(function)),
        }
    }

    // =========================================================================
    // Sequential (short-circuit) Chaining
    // =========================================================================

    /// Chains a dependent validation. **Does not accumulate**: on `Invalid`,
    /// `function` is skipped and the existing faults are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Validation;
    ///
    /// let first: Validation<i32, &str> = Validation::invalid("first");
    /// let chained = first.and_then(|_| Validation::<i32, &str>::invalid("second"));
    /// assert_eq!(chained, Validation::invalid("first"));
    /// ```
    pub fn and_then<U, F>(self, function: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Self::Valid(value) => function(value),
            Self::Invalid(faults) => Validation::Invalid(faults),
        }
    }

    /// Alias for [`Validation::and_then`]; short-circuits.
    pub fn bind<U, F>(self, function: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        self.and_then(function)
    }

    /// Converts `Valid` into `Invalid(error)` when `predicate` fails.
    ///
    /// On an already `Invalid` value this is a no-op: existing faults are kept
    /// and `error` is discarded.
    pub fn ensure<P>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Valid(value) => {
                if predicate(&value) {
                    Self::Valid(value)
                } else {
                    Self::invalid(error)
                }
            }
            Self::Invalid(faults) => Self::Invalid(faults),
        }
    }

    /// Like [`Validation::ensure`], building the fault from the rejected value.
    pub fn ensure_with<P, F>(self, predicate: P, error_function: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> E,
    {
        match self {
            Self::Valid(value) => {
                if predicate(&value) {
                    Self::Valid(value)
                } else {
                    Self::invalid(error_function(&value))
                }
            }
            Self::Invalid(faults) => Self::Invalid(faults),
        }
    }

    // =========================================================================
    // Applicative (accumulating) Combination
    // =========================================================================

    /// Combines two independent validations with `function`, accumulating
    /// faults from both operands: `self`'s first, then `other`'s.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Validation;
    ///
    /// let left: Validation<i32, &str> = Validation::invalid("a");
    /// let right: Validation<i32, &str> = Validation::invalid("b");
    /// let both = left.apply(right, |x, y| x + y);
    /// assert_eq!(both.unwrap_errors().into_vec(), vec!["a", "b"]);
    /// ```
    pub fn apply<U, V, F>(self, other: Validation<U, E>, function: F) -> Validation<V, E>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (Self::Valid(left), Validation::Valid(right)) => Validation::Valid(function(left, right)),
            (Self::Invalid(left), Validation::Invalid(right)) => Validation::Invalid(left.append(right)),
            (Self::Invalid(faults), Validation::Valid(_)) | (Self::Valid(_), Validation::Invalid(faults)) => {
                Validation::Invalid(faults)
            }
        }
    }

    /// Alias for [`Validation::apply`].
    pub fn zip_with<U, V, F>(self, other: Validation<U, E>, function: F) -> Validation<V, E>
    where
        F: FnOnce(T, U) -> V,
    {
        self.apply(other, function)
    }

    /// Pairs two independent validations, accumulating faults in operand order.
    pub fn zip<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        self.apply(other, |left, right| (left, right))
    }

    /// Observes the valid value and returns `self` unchanged.
    pub fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Valid(value) = &self {
            function(value);
        }
        self
    }

    /// Observes the faults and returns `self` unchanged.
    pub fn tap_invalid<F>(self, function: F) -> Self
    where
        F: FnOnce(&Faults<E>),
    {
        if let Self::Invalid(faults) = &self {
            function(faults);
        }
        self
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Exhaustive case analysis.
    pub fn match_with<U, F, G>(self, valid_function: F, invalid_function: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(Faults<E>) -> U,
    {
        match self {
            Self::Valid(value) => valid_function(value),
            Self::Invalid(faults) => invalid_function(faults),
        }
    }

    /// Returns the valid value or `default`.
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Valid(value) => value,
            Self::Invalid(_) => default,
        }
    }

    /// Returns the valid value or computes one from the faults.
    pub fn value_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(Faults<E>) -> T,
    {
        match self {
            Self::Valid(value) => value,
            Self::Invalid(faults) => function(faults),
        }
    }

    /// Non-throwing access to the valid value.
    pub const fn try_get(&self) -> Option<&T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Non-throwing access to the faults.
    pub const fn try_get_errors(&self) -> Option<&Faults<E>> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(faults) => Some(faults),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts to an [`Outcome`] whose error is the whole fault sequence.
    pub fn to_outcome(self) -> Outcome<T, Faults<E>> {
        match self {
            Self::Valid(value) => Outcome::Ok(value),
            Self::Invalid(faults) => Outcome::Err(faults),
        }
    }

    /// Keeps the valid value, discarding faults.
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Self::Valid(value) => Maybe::Some(value),
            Self::Invalid(_) => Maybe::None,
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> Validation<T, E> {
    /// Checked access to the valid value.
    ///
    /// # Errors
    ///
    /// Returns a [`WrongStateError`] listing the faults.
    pub fn value(self) -> Result<T, WrongStateError> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(_) => Err(WrongStateError::new(Self::CONTAINER, "value", &self)),
        }
    }

    /// Checked access to the faults.
    ///
    /// # Errors
    ///
    /// Returns a [`WrongStateError`] when called on `Valid`.
    pub fn errors(self) -> Result<Faults<E>, WrongStateError> {
        match self {
            Self::Invalid(faults) => Ok(faults),
            Self::Valid(_) => Err(WrongStateError::new(Self::CONTAINER, "errors", &self)),
        }
    }

    /// Returns the valid value.
    ///
    /// # Panics
    ///
    /// Panics with a message listing the faults if this is `Invalid`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Valid(value) => value,
            Self::Invalid(_) => WrongStateError::new(Self::CONTAINER, "unwrap", &self).raise(),
        }
    }

    /// Returns the faults.
    ///
    /// # Panics
    ///
    /// Panics if this is `Valid`.
    #[track_caller]
    pub fn unwrap_errors(self) -> Faults<E> {
        match self {
            Self::Invalid(faults) => faults,
            Self::Valid(_) => WrongStateError::new(Self::CONTAINER, "unwrap_errors", &self).raise(),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Validation<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.to_validation()
    }
}

impl<T, E> Tagged for Validation<T, E> {
    const CONTAINER: &'static str = "Validation";

    fn tag(&self) -> &'static str {
        match self {
            Self::Valid(_) => "Valid",
            Self::Invalid(_) => "Invalid",
        }
    }

    fn discriminant(&self) -> u8 {
        match self {
            Self::Valid(_) => 0,
            Self::Invalid(_) => 1,
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Validation<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid(value) => write_tagged(formatter, self.tag(), Some(value)),
            Self::Invalid(faults) => write_tagged(formatter, self.tag(), Some(faults)),
        }
    }
}

// =============================================================================
// N-ary Combination
// =============================================================================

/// Combines two validations into a pair, accumulating faults in argument order.
pub fn combine2<A, B, E>(first: Validation<A, E>, second: Validation<B, E>) -> Validation<(A, B), E> {
    first.zip(second)
}

/// Combines three validations into a triple, accumulating faults in argument order.
pub fn combine3<A, B, C, E>(
    first: Validation<A, E>,
    second: Validation<B, E>,
    third: Validation<C, E>,
) -> Validation<(A, B, C), E> {
    first
        .zip(second)
        .apply(third, |(first, second), third| (first, second, third))
}

/// Combines four validations into a quadruple, accumulating faults in argument order.
pub fn combine4<A, B, C, D, E>(
    first: Validation<A, E>,
    second: Validation<B, E>,
    third: Validation<C, E>,
    fourth: Validation<D, E>,
) -> Validation<(A, B, C, D), E> {
    combine3(first, second, third).apply(fourth, |(first, second, third), fourth| {
        (first, second, third, fourth)
    })
}

/// Combines any number of validations, consuming every input and
/// accumulating all faults in iteration order.
///
/// # Examples
///
/// ```rust
/// use outcomes::{Validation, validation};
///
/// let combined = validation::combine_all(vec![
///     Validation::<i32, &str>::invalid("a"),
///     Validation::valid(1),
///     Validation::invalid("b"),
/// ]);
/// assert_eq!(combined.unwrap_errors().into_vec(), vec!["a", "b"]);
/// ```
pub fn combine_all<T, E, I>(validations: I) -> Validation<Vec<T>, E>
where
    I: IntoIterator<Item = Validation<T, E>>,
{
    let iterator = validations.into_iter();
    let mut values = Vec::with_capacity(iterator.size_hint().0);
    let mut accumulated: Option<Faults<E>> = None;
    for validation in iterator {
        match validation {
            Validation::Valid(value) => values.push(value),
            Validation::Invalid(faults) => {
                accumulated = Some(match accumulated {
                    Some(previous) => previous.append(faults),
                    None => faults,
                });
            }
        }
    }
    match accumulated {
        Some(faults) => Validation::Invalid(faults),
        None => Validation::Valid(values),
    }
}

impl<T, E> FromIterator<Validation<T, E>> for Validation<Vec<T>, E> {
    fn from_iter<I: IntoIterator<Item = Validation<T, E>>>(iterator: I) -> Self {
        combine_all(iterator)
    }
}

static_assertions::assert_impl_all!(Validation<String, String>: Send, Sync, Clone, Ord, std::hash::Hash);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_apply_accumulates_left_then_right() {
        let left: Validation<i32, &str> = Validation::try_invalid_from(["a1", "a2"]).unwrap();
        let right: Validation<i32, &str> = Validation::invalid("b");
        let combined = left.apply(right, |x, y| x + y);
        assert_eq!(combined.unwrap_errors().into_vec(), vec!["a1", "a2", "b"]);
    }

    #[rstest]
    #[case(Validation::valid(1), Validation::invalid("b"), vec!["b"])]
    #[case(Validation::invalid("a"), Validation::valid(2), vec!["a"])]
    fn test_apply_with_single_invalid_operand(
        #[case] left: Validation<i32, &'static str>,
        #[case] right: Validation<i32, &'static str>,
        #[case] expected: Vec<&'static str>,
    ) {
        assert_eq!(left.zip(right).unwrap_errors().into_vec(), expected);
    }

    #[rstest]
    fn test_ensure_on_invalid_preserves_faults() {
        let invalid: Validation<i32, &str> = Validation::invalid("first");
        let result = invalid.ensure(|_| false, "second").ensure(|_| false, "third");
        assert_eq!(result, Validation::invalid("first"));
    }

    #[rstest]
    fn test_try_invalid_from_empty_is_contract_violation() {
        let result = Validation::<i32, &str>::try_invalid_from(Vec::new());
        assert!(matches!(result, Err(ContractViolation::EmptyFaults { .. })));
    }

    #[rstest]
    fn test_combine4_accumulates_in_argument_order() {
        let combined = combine4(
            Validation::<i32, char>::invalid('a'),
            Validation::valid(2),
            Validation::<i32, char>::invalid('c'),
            Validation::<i32, char>::invalid('d'),
        );
        assert_eq!(combined.unwrap_errors().into_vec(), vec!['a', 'c', 'd']);
    }

    #[rstest]
    fn test_display_lists_faults() {
        let invalid: Validation<i32, &str> = Validation::try_invalid_from(["a", "b"]).unwrap();
        assert_eq!(invalid.to_string(), "Invalid([a, b])");
        assert_eq!(Validation::<i32, &str>::valid(3).to_string(), "Valid(3)");
    }
}
