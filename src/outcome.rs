//! Outcome type - a success value or a typed error.
//!
//! `Outcome<T, E>` is either `Ok(T)` or `Err(E)`. Combinators act on the
//! success side and short-circuit on the first error: once an `Err` is
//! produced, later steps of an `and_then` chain are skipped and the error
//! type cannot change except through an explicit [`Outcome::map_error`].
//!
//! Combining independent outcomes with [`combine2`], [`combine3`],
//! [`combine4`] or [`combine_all`] also short-circuits: the combined value is
//! `Ok` iff every input is `Ok`, and otherwise the *first* `Err` in input
//! order is returned. Use [`Validation`](crate::Validation) to collect every
//! error instead.
//!
//! Caller-supplied functions are never guarded: a panic raised inside `map`
//! or `and_then` propagates unchanged. Wrap such code in [`Try`](crate::Try)
//! to capture it.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::{Outcome, outcome};
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     input.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! let sum = outcome::combine2(parse("1"), parse("2")).map(|(a, b)| a + b);
//! assert_eq!(sum, Outcome::ok(3));
//!
//! let failed = outcome::combine_all(vec![
//!     Outcome::<i32, &str>::err("a"),
//!     Outcome::err("b"),
//! ]);
//! assert_eq!(failed, Outcome::err("a"));
//! ```

use std::fmt;

use crate::either::Either;
use crate::error::WrongStateError;
use crate::maybe::Maybe;
use crate::remote::RemoteData;
use crate::tagged::{Tagged, write_tagged};
use crate::validation::Validation;

/// A success value `Ok(T)` or an error value `Err(E)`.
///
/// # Examples
///
/// ```rust
/// use outcomes::Outcome;
///
/// let value: Outcome<i32, String> = Outcome::ok(21);
/// assert_eq!(value.map(|x| x * 2).to_string(), "Ok(42)");
///
/// let error: Outcome<i32, String> = Outcome::err("boom".to_string());
/// assert_eq!(error.map(|x| x * 2).to_string(), "Err(boom)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// The success case.
    Ok(T),
    /// The error case.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a success value.
    #[inline]
    pub const fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Creates an error value.
    #[inline]
    pub const fn err(error: E) -> Self {
        Self::Err(error)
    }

    /// Adapts a nullable source, using `error` when the source is empty.
    #[inline]
    pub fn from_nullable(value: Option<T>, error: E) -> Self {
        match value {
            Some(value) => Self::Ok(value),
            None => Self::Err(error),
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is `Ok`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is `Err`.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Returns `true` if this is `Ok` and the value satisfies `predicate`.
    #[inline]
    pub fn is_ok_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Ok(value) => predicate(value),
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if this is `Err` and the error satisfies `predicate`.
    #[inline]
    pub fn is_err_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&E) -> bool,
    {
        match self {
            Self::Ok(_) => false,
            Self::Err(error) => predicate(error),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Transforms the success value; errors pass through untouched.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Transforms the error value; successes pass through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let failed: Outcome<i32, i32> = Outcome::err(404);
    /// assert_eq!(failed.map_error(|code| format!("status {code}")), Outcome::err("status 404".to_string()));
    /// ```
    #[inline]
    pub fn map_error<E2, F>(self, function: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(function(error)),
        }
    }

    /// Transforms whichever side is present.
    #[inline]
    pub fn bimap<U, E2, F, G>(self, ok_function: F, err_function: G) -> Outcome<U, E2>
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> E2,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(ok_function(value)),
            Self::Err(error) => Outcome::Err(err_function(error)),
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Chains a fallible computation, short-circuiting on the first error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// fn positive(value: i32) -> Outcome<i32, &'static str> {
    ///     if value > 0 { Outcome::ok(value) } else { Outcome::err("not positive") }
    /// }
    ///
    /// assert_eq!(Outcome::ok(3).and_then(positive), Outcome::ok(3));
    /// assert_eq!(Outcome::ok(-3).and_then(positive), Outcome::err("not positive"));
    /// assert_eq!(Outcome::err("earlier").and_then(positive), Outcome::err("earlier"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Alias for [`Outcome::and_then`].
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.and_then(function)
    }

    /// Demotes `Ok` to `Err(error)` when `predicate` does not hold.
    #[inline]
    pub fn filter<P>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Ok(value) => {
                if predicate(&value) {
                    Self::Ok(value)
                } else {
                    Self::Err(error)
                }
            }
            Self::Err(error) => Self::Err(error),
        }
    }

    /// Demotes `Ok` to an error built from the rejected value when `predicate`
    /// does not hold.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Outcome;
    ///
    /// let age: Outcome<u32, String> = Outcome::ok(12);
    /// let adult = age.filter_or_else(|age| *age >= 18, |age| format!("{age} is under 18"));
    /// assert_eq!(adult, Outcome::err("12 is under 18".to_string()));
    /// ```
    #[inline]
    pub fn filter_or_else<P, F>(self, predicate: P, error_function: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> E,
    {
        match self {
            Self::Ok(value) => {
                if predicate(&value) {
                    Self::Ok(value)
                } else {
                    Self::Err(error_function(&value))
                }
            }
            Self::Err(error) => Self::Err(error),
        }
    }

    /// Attempts recovery from an error. `function` is called only on `Err`.
    #[inline]
    pub fn or_else<E2, F>(self, function: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> Outcome<T, E2>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => function(error),
        }
    }

    /// Returns `self` if `Ok`, otherwise `alternative`.
    #[inline]
    pub fn or<E2>(self, alternative: Outcome<T, E2>) -> Outcome<T, E2> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(_) => alternative,
        }
    }

    /// Observes the success value and returns `self` unchanged.
    #[inline]
    pub fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            function(value);
        }
        self
    }

    /// Observes the error value and returns `self` unchanged.
    #[inline]
    pub fn tap_error<F>(self, function: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(error) = &self {
            function(error);
        }
        self
    }

    /// Pairs two outcomes; the first error in operand order wins.
    #[inline]
    pub fn zip<U>(self, other: Outcome<U, E>) -> Outcome<(T, U), E> {
        self.zip_with(other, |left, right| (left, right))
    }

    /// Combines two outcomes with `function`; the first error in operand order wins.
    #[inline]
    pub fn zip_with<U, V, F>(self, other: Outcome<U, E>, function: F) -> Outcome<V, E>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (Self::Ok(left), Outcome::Ok(right)) => Outcome::Ok(function(left, right)),
            (Self::Err(error), _) | (Self::Ok(_), Outcome::Err(error)) => Outcome::Err(error),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Exhaustive case analysis.
    #[inline]
    pub fn match_with<U, F, G>(self, ok_function: F, err_function: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> U,
    {
        match self {
            Self::Ok(value) => ok_function(value),
            Self::Err(error) => err_function(error),
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value or computes one from the error.
    #[inline]
    pub fn value_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => function(error),
        }
    }

    /// Non-throwing access to the success value.
    #[inline]
    pub const fn try_get(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Non-throwing access to the error value.
    #[inline]
    pub const fn try_get_error(&self) -> Option<&E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Converts `&Outcome<T, E>` into `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Keeps the success value, discarding any error.
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Self::Ok(value) => Maybe::Some(value),
            Self::Err(_) => Maybe::None,
        }
    }

    /// Keeps the error value, discarding any success.
    #[inline]
    pub fn error_to_maybe(self) -> Maybe<E> {
        match self {
            Self::Ok(_) => Maybe::None,
            Self::Err(error) => Maybe::Some(error),
        }
    }

    /// Converts to an [`Either`]: `Ok` becomes `Right`, `Err` becomes `Left`.
    #[inline]
    pub fn to_either(self) -> Either<E, T> {
        match self {
            Self::Ok(value) => Either::Right(value),
            Self::Err(error) => Either::Left(error),
        }
    }

    /// Converts to a [`Validation`] holding a single fault on error.
    #[inline]
    pub fn to_validation(self) -> Validation<T, E> {
        match self {
            Self::Ok(value) => Validation::valid(value),
            Self::Err(error) => Validation::invalid(error),
        }
    }

    /// Converts to a loaded [`RemoteData`]: `Ok` becomes `Success`, `Err` becomes `Failure`.
    #[inline]
    pub fn to_remote_data(self) -> RemoteData<T, E> {
        match self {
            Self::Ok(value) => RemoteData::Success(value),
            Self::Err(error) => RemoteData::Failure(error),
        }
    }

    /// Converts into the standard library's `Result`.
    ///
    /// # Errors
    ///
    /// Returns `Err(e)` when this is `Err(e)`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> Outcome<T, E> {
    /// Checked access to the success value.
    ///
    /// # Errors
    ///
    /// Returns a [`WrongStateError`] naming the actual `Err` state.
    #[inline]
    pub fn value(self) -> Result<T, WrongStateError> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(_) => Err(WrongStateError::new(Self::CONTAINER, "value", &self)),
        }
    }

    /// Checked access to the error value.
    ///
    /// # Errors
    ///
    /// Returns a [`WrongStateError`] naming the actual `Ok` state.
    #[inline]
    pub fn error(self) -> Result<E, WrongStateError> {
        match self {
            Self::Err(error) => Ok(error),
            Self::Ok(_) => Err(WrongStateError::new(Self::CONTAINER, "error", &self)),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with a message embedding the error if this is `Err`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => WrongStateError::new(Self::CONTAINER, "unwrap", &self).raise(),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with `context` prefixed to the wrong-state message if this is `Err`.
    #[inline]
    #[track_caller]
    pub fn expect(self, context: &str) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => WrongStateError::new(Self::CONTAINER, "expect", &self)
                .with_context(context)
                .raise(),
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics with a message embedding the success value if this is `Ok`.
    #[inline]
    #[track_caller]
    pub fn unwrap_error(self) -> E {
        match self {
            Self::Err(error) => error,
            Self::Ok(_) => WrongStateError::new(Self::CONTAINER, "unwrap_error", &self).raise(),
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics with `context` prefixed to the wrong-state message if this is `Ok`.
    #[inline]
    #[track_caller]
    pub fn expect_error(self, context: &str) -> E {
        match self {
            Self::Err(error) => error,
            Self::Ok(_) => WrongStateError::new(Self::CONTAINER, "expect_error", &self)
                .with_context(context)
                .raise(),
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Collapses one level of nesting: the outer error is propagated first,
    /// then the inner one.
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(|inner| inner)
    }
}

impl<T, E> Tagged for Outcome<T, E> {
    const CONTAINER: &'static str = "Outcome";

    fn tag(&self) -> &'static str {
        match self {
            Self::Ok(_) => "Ok",
            Self::Err(_) => "Err",
        }
    }

    fn discriminant(&self) -> u8 {
        match self {
            Self::Ok(_) => 0,
            Self::Err(_) => 1,
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write_tagged(formatter, self.tag(), Some(value)),
            Self::Err(error) => write_tagged(formatter, self.tag(), Some(error)),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

// =============================================================================
// Combination
// =============================================================================

macro_rules! define_combine {
    ($arity:literal; $($value:ident: $type:ident),+) => {
        paste::paste! {
            #[doc = concat!(
                "Combines ", stringify!($arity), " independent outcomes into a tuple.\n\n",
                "The result is `Ok` iff every input is `Ok`; otherwise the first `Err` ",
                "in argument order is returned."
            )]
            pub fn [<combine $arity>]<$($type,)+ E>(
                $($value: Outcome<$type, E>),+
            ) -> Outcome<($($type,)+), E> {
                $(
                    let $value = match $value {
                        Outcome::Ok(value) => value,
                        Outcome::Err(error) => return Outcome::Err(error),
                    };
                )+
                Outcome::Ok(($($value,)+))
            }
        }
    };
}

define_combine!(2; first: A, second: B);
define_combine!(3; first: A, second: B, third: C);
define_combine!(4; first: A, second: B, third: C, fourth: D);

/// Combines any number of outcomes into a `Vec`.
///
/// Inputs are consumed in order and consumption stops at the first `Err`,
/// which is returned.
///
/// # Examples
///
/// ```rust
/// use outcomes::{Outcome, outcome};
///
/// let all: Outcome<Vec<i32>, &str> = outcome::combine_all(vec![Outcome::ok(1), Outcome::ok(2)]);
/// assert_eq!(all, Outcome::ok(vec![1, 2]));
/// ```
pub fn combine_all<T, E, I>(outcomes: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let iterator = outcomes.into_iter();
    let mut values = Vec::with_capacity(iterator.size_hint().0);
    for outcome in iterator {
        match outcome {
            Outcome::Ok(value) => values.push(value),
            Outcome::Err(error) => return Outcome::Err(error),
        }
    }
    Outcome::Ok(values)
}

impl<T, E> FromIterator<Outcome<T, E>> for Outcome<Vec<T>, E> {
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iterator: I) -> Self {
        combine_all(iterator)
    }
}

static_assertions::assert_impl_all!(Outcome<String, String>: Send, Sync, Clone, Ord, std::hash::Hash);
