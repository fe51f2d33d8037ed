//! Maybe type - an optional value with an explicit combinator algebra.
//!
//! `Maybe<T>` is either `Some(T)` or `None`. It plays the role of a
//! null-free optional reference: absence is a value that flows through
//! `map`, `and_then` and `filter` untouched, and is only eliminated at an
//! explicit `match_with` or `value_or` call.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::Maybe;
//!
//! let result = Maybe::some(42)
//!     .map(|x| x * 2)
//!     .filter(|x| *x > 50)
//!     .value_or(0);
//! assert_eq!(result, 84);
//!
//! let absent: Maybe<i32> = Maybe::none();
//! assert_eq!(absent.map(|x| x * 2).value_or(0), 0);
//! ```

use std::fmt;

use crate::either::Either;
use crate::error::WrongStateError;
use crate::outcome::Outcome;
use crate::tagged::{Tagged, write_tagged};

/// An optional value: `Some(T)` or `None`.
///
/// `None` is declared first so that `None < Some(_)` for every payload.
///
/// # Examples
///
/// ```rust
/// use outcomes::Maybe;
///
/// let name = Maybe::from_nullable(std::env::var("OUTCOMES_UNSET_VARIABLE").ok());
/// assert!(name.is_none());
/// assert_eq!(name.value_or_else(|| "anonymous".to_string()), "anonymous");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value.
    None,
    /// A present value.
    Some(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a present value.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Creates an absent value.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Adapts a nullable source: `Some(v)` becomes `Some(v)`, `None` becomes `None`.
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if a value is present and satisfies `predicate`.
    #[inline]
    pub fn is_some_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    // =========================================================================
    // Mapping and Chaining
    // =========================================================================

    /// Applies `function` to the value if present; `None` is returned unchanged
    /// and `function` is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Maybe;
    ///
    /// assert_eq!(Maybe::some(2).map(|x| x + 1), Maybe::some(3));
    /// assert_eq!(Maybe::<i32>::none().map(|x| x + 1), Maybe::none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Chains a computation that may itself be absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Maybe;
    ///
    /// fn half(value: i32) -> Maybe<i32> {
    ///     if value % 2 == 0 { Maybe::some(value / 2) } else { Maybe::none() }
    /// }
    ///
    /// assert_eq!(Maybe::some(8).and_then(half).and_then(half), Maybe::some(2));
    /// assert_eq!(Maybe::some(6).and_then(half).and_then(half), Maybe::none());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }

    /// Alias for [`Maybe::and_then`].
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.and_then(function)
    }

    /// Keeps the value only if `predicate` holds.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    Self::Some(value)
                } else {
                    Self::None
                }
            }
            Self::None => Self::None,
        }
    }

    /// Observes the value, if present, and returns `self` unchanged.
    #[inline]
    pub fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            function(value);
        }
        self
    }

    /// Runs `function` if no value is present and returns `self` unchanged.
    #[inline]
    pub fn tap_none<F>(self, function: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            function();
        }
        self
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Exhaustive case analysis. Both handlers are mandatory.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Maybe;
    ///
    /// let greeting = Maybe::some("Ada").match_with(
    ///     |name| format!("Hello, {name}"),
    ///     || "Hello, stranger".to_string(),
    /// );
    /// assert_eq!(greeting, "Hello, Ada");
    /// ```
    #[inline]
    pub fn match_with<U, S, N>(self, some_function: S, none_function: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Self::Some(value) => some_function(value),
            Self::None => none_function(),
        }
    }

    /// Exhaustive case analysis by reference.
    #[inline]
    pub fn match_ref<U, S, N>(&self, some_function: S, none_function: N) -> U
    where
        S: FnOnce(&T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Self::Some(value) => some_function(value),
            Self::None => none_function(),
        }
    }

    /// Returns the value, or `default` if absent.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the value, or the result of `factory` if absent.
    ///
    /// `factory` is only evaluated when no value is present.
    #[inline]
    pub fn value_or_else<F>(self, factory: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => factory(),
        }
    }

    /// Non-throwing access: a reference to the value if present.
    #[inline]
    pub const fn try_get(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Converts `&Maybe<T>` into `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Returns an iterator over the value, yielding at most one item.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.try_get().into_iter()
    }

    // =========================================================================
    // Recovery and Combination
    // =========================================================================

    /// Returns `self` if present, otherwise `alternative`.
    #[inline]
    pub fn or(self, alternative: Self) -> Self {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => alternative,
        }
    }

    /// Returns `self` if present, otherwise the result of `factory`.
    #[inline]
    pub fn or_else<F>(self, factory: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => factory(),
        }
    }

    /// Returns whichever of `self` and `other` is present, if exactly one is.
    #[inline]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(value), Self::None) | (Self::None, Self::Some(value)) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Pairs two values; the result is `Some` iff both are `Some`.
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        self.zip_with(other, |left, right| (left, right))
    }

    /// Combines two values with `function`; the result is `Some` iff both are `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Maybe;
    ///
    /// assert_eq!(Maybe::some(2).zip_with(Maybe::some(3), |a, b| a * b), Maybe::some(6));
    /// assert_eq!(Maybe::some(2).zip_with(Maybe::<i32>::none(), |a, b| a * b), Maybe::none());
    /// ```
    #[inline]
    pub fn zip_with<U, V, F>(self, other: Maybe<U>, function: F) -> Maybe<V>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (Self::Some(left), Maybe::Some(right)) => Maybe::Some(function(left, right)),
            _ => Maybe::None,
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Checked access to the value.
    ///
    /// # Errors
    ///
    /// Returns a [`WrongStateError`] if no value is present.
    #[inline]
    pub fn value(self) -> Result<T, WrongStateError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(WrongStateError::new(Self::CONTAINER, "value", &Maybe::<()>::None)),
        }
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics if no value is present.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => WrongStateError::new(Self::CONTAINER, "unwrap", &Maybe::<()>::None).raise(),
        }
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics with `context` prefixed to the wrong-state message if no value is present.
    #[inline]
    #[track_caller]
    pub fn expect(self, context: &str) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => WrongStateError::new(Self::CONTAINER, "expect", &Maybe::<()>::None)
                .with_context(context)
                .raise(),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts to an [`Outcome`], using `error` when no value is present.
    #[inline]
    pub fn to_outcome<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Err(error),
        }
    }

    /// Converts to an [`Outcome`], computing the error lazily.
    #[inline]
    pub fn to_outcome_else<E, F>(self, factory: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Err(factory()),
        }
    }

    /// Converts to an [`Either`]: `Some(v)` becomes `Right(v)`, `None` becomes `Left(left)`.
    #[inline]
    pub fn to_either<L>(self, left: L) -> Either<L, T> {
        match self {
            Self::Some(value) => Either::Right(value),
            Self::None => Either::Left(left),
        }
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.and_then(|inner| inner)
    }
}

impl<T: Default> Maybe<T> {
    /// Returns the value, or `T::default()` if absent.
    #[inline]
    pub fn value_or_default(self) -> T {
        self.value_or_else(T::default)
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> Tagged for Maybe<T> {
    const CONTAINER: &'static str = "Maybe";

    fn tag(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Some(_) => "Some",
        }
    }

    fn discriminant(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::Some(_) => 1,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write_tagged(formatter, self.tag(), Some(value)),
            Self::None => write_tagged(formatter, self.tag(), None),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

static_assertions::assert_impl_all!(Maybe<String>: Send, Sync, Clone, Ord, std::hash::Hash);
