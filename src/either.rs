//! Either type - a value that can be one of two equally valid types.
//!
//! `Either<L, R>` holds either a `Left(L)` or a `Right(R)`. Unlike
//! [`Outcome`], neither side connotes failure: use `Either` when both
//! outcomes are legitimate, such as a cache hit versus a fresh load.
//!
//! Combinators are right-biased by convention: [`Either::map`],
//! [`Either::and_then`] and [`Either::zip`] act on `Right` and pass `Left`
//! through. [`Either::map_left`] and [`Either::or_else`] are their
//! left-side counterparts.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::Either;
//!
//! let left: Either<i32, String> = Either::left(42);
//! let right: Either<i32, String> = Either::right("hello".to_string());
//!
//! let result = right.fold(
//!     |n| format!("Number: {}", n),
//!     |s| format!("String: {}", s),
//! );
//! assert_eq!(result, "String: hello");
//! assert_eq!(left.map(|s| s.len()), Either::left(42));
//! ```

use std::fmt;

use crate::error::WrongStateError;
use crate::maybe::Maybe;
use crate::outcome::Outcome;
use crate::tagged::{Tagged, write_tagged};

/// A value that is either `Left(L)` or `Right(R)`.
///
/// `Left` is declared first, so `Left(_) < Right(_)`.
///
/// # Examples
///
/// ```rust
/// use outcomes::Either;
///
/// let cached: Either<String, i32> = Either::right(42);
/// let doubled = cached.map(|x| x * 2);
/// assert_eq!(doubled, Either::right(84));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant.
    Left(L),
    /// The right variant; the side the default combinators act on.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction and Type Checking
    // =========================================================================

    /// Creates a `Left` value.
    #[inline]
    pub const fn left(value: L) -> Self {
        Self::Left(value)
    }

    /// Creates a `Right` value.
    #[inline]
    pub const fn right(value: R) -> Self {
        Self::Right(value)
    }

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into a `Maybe<L>`, discarding any right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::{Either, Maybe};
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.left_maybe(), Maybe::some(42));
    ///
    /// let right: Either<i32, String> = Either::right("hello".to_string());
    /// assert_eq!(right.left_maybe(), Maybe::none());
    /// ```
    #[inline]
    pub fn left_maybe(self) -> Maybe<L> {
        match self {
            Self::Left(value) => Maybe::Some(value),
            Self::Right(_) => Maybe::None,
        }
    }

    /// Converts into a `Maybe<R>`, discarding any left value.
    #[inline]
    pub fn right_maybe(self) -> Maybe<R> {
        match self {
            Self::Left(_) => Maybe::None,
            Self::Right(value) => Maybe::Some(value),
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns the right value, or `default` for a `Left`.
    #[inline]
    pub fn right_or(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the right value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Either;
    ///
    /// let right: Either<i32, String> = Either::right("hello".to_string());
    /// assert_eq!(right.map(|s| s.len()), Either::right(5));
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.map(|s| s.len()), Either::left(42));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies a function to the left value if present.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies one of two functions depending on the side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.bimap(|x| x * 2, |s: String| s.len()), Either::left(84));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Right-biased chaining: `function` runs only on `Right`.
    #[inline]
    pub fn and_then<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Alias for [`Either::and_then`].
    #[inline]
    pub fn bind<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        self.and_then(function)
    }

    /// Left-biased chaining: `function` runs only on `Left`.
    #[inline]
    pub fn or_else<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Pairs two right values; the first `Left` in operand order wins.
    #[inline]
    pub fn zip<T>(self, other: Either<L, T>) -> Either<L, (R, T)> {
        self.zip_with(other, |first, second| (first, second))
    }

    /// Combines two right values with `function`; the first `Left` in operand order wins.
    #[inline]
    pub fn zip_with<T, U, F>(self, other: Either<L, T>, function: F) -> Either<L, U>
    where
        F: FnOnce(R, T) -> U,
    {
        match (self, other) {
            (Self::Right(first), Either::Right(second)) => Either::Right(function(first, second)),
            (Self::Left(value), _) | (Self::Right(_), Either::Left(value)) => Either::Left(value),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the Either by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Exhaustive case analysis; identical to [`Either::fold`].
    #[inline]
    pub fn match_with<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        self.fold(left_function, right_function)
    }

    /// Swaps the Left and Right variants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Either;
    ///
    /// let left: Either<i32, String> = Either::left(42);
    /// assert_eq!(left.swap(), Either::right(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Observes the `Right` value and returns `self` unchanged.
    pub fn tap<F>(self, function: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Self::Right(value) = &self {
            function(value);
        }
        self
    }

    /// Observes the `Left` value and returns `self` unchanged.
    pub fn tap_left<F>(self, function: F) -> Self
    where
        F: FnOnce(&L),
    {
        if let Self::Left(value) = &self {
            function(value);
        }
        self
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Biased conversion: `Right` becomes `Ok`, `Left` becomes `Err`.
    #[inline]
    pub fn to_outcome(self) -> Outcome<R, L> {
        match self {
            Self::Left(value) => Outcome::Err(value),
            Self::Right(value) => Outcome::Ok(value),
        }
    }

    /// Converts into a pair of `Option`s.
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            Self::Left(value) => (Some(value), None),
            Self::Right(value) => (None, Some(value)),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> Either<L, R> {
    /// Checked access to the left value.
    ///
    /// # Errors
    ///
    /// Returns a [`WrongStateError`] naming the actual `Right` state.
    #[inline]
    pub fn left_value(self) -> Result<L, WrongStateError> {
        match self {
            Self::Left(value) => Ok(value),
            Self::Right(_) => Err(WrongStateError::new(Self::CONTAINER, "left_value", &self)),
        }
    }

    /// Checked access to the right value.
    ///
    /// # Errors
    ///
    /// Returns a [`WrongStateError`] naming the actual `Left` state.
    #[inline]
    pub fn right_value(self) -> Result<R, WrongStateError> {
        match self {
            Self::Right(value) => Ok(value),
            Self::Left(_) => Err(WrongStateError::new(Self::CONTAINER, "right_value", &self)),
        }
    }

    /// Returns the left value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value.
    #[inline]
    #[track_caller]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => WrongStateError::new(Self::CONTAINER, "unwrap_left", &self).raise(),
        }
    }

    /// Returns the right value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value.
    #[inline]
    #[track_caller]
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Right(value) => value,
            Self::Left(_) => WrongStateError::new(Self::CONTAINER, "unwrap_right", &self).raise(),
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<L: Default, R> Either<L, R> {
    /// Returns the left value, or default if this is a Right.
    #[inline]
    pub fn left_or_default(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => L::default(),
        }
    }
}

impl<L, R: Default> Either<L, R> {
    /// Returns the right value, or default if this is a Left.
    #[inline]
    pub fn right_or_default(self) -> R {
        match self {
            Self::Left(_) => R::default(),
            Self::Right(value) => value,
        }
    }
}

// =============================================================================
// Tag and Display
// =============================================================================

impl<L, R> Tagged for Either<L, R> {
    const CONTAINER: &'static str = "Either";

    fn tag(&self) -> &'static str {
        match self {
            Self::Left(_) => "Left",
            Self::Right(_) => "Right",
        }
    }

    fn discriminant(&self) -> u8 {
        match self {
            Self::Left(_) => 0,
            Self::Right(_) => 1,
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write_tagged(formatter, self.tag(), Some(value)),
            Self::Right(value) => write_tagged(formatter, self.tag(), Some(value)),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

static_assertions::assert_impl_all!(Either<String, i32>: Send, Sync, Clone, Ord, std::hash::Hash);
