//! Maybe type - a value that may be absent.
//!
//! This module provides the `Maybe<T>` type, which represents either a
//! present value (`Some(T)`) or the absence of one (`None`). Exactly one of
//! the two cases holds, so a `Some` always carries a valid `T` and a `None`
//! never exposes one.
//!
//! `Maybe` is immutable: every combinator returns a new value instead of
//! modifying the receiver.
//!
//! # Examples
//!
//! ```rust
//! use fp_primer::control::Maybe;
//!
//! fn safe_divide(numerator: i32, denominator: i32) -> Maybe<i32> {
//!     if denominator == 0 {
//!         Maybe::none()
//!     } else {
//!         Maybe::some(numerator / denominator)
//!     }
//! }
//!
//! let result = Maybe::some(100)
//!     .bind(|x| safe_divide(x, 5))
//!     .bind(|x| safe_divide(x, 2));
//! assert_eq!(result, Maybe::some(10));
//!
//! let short_circuited = Maybe::some(100)
//!     .bind(|x| safe_divide(x, 0))
//!     .bind(|x| safe_divide(x, 2));
//! assert!(short_circuited.is_none());
//! ```

use super::error::EmptyAccessError;

/// An optional value.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Monad Laws
///
/// `Maybe` satisfies the monad laws with [`Maybe::pure`] and [`Maybe::bind`]:
///
/// 1. **Left Identity**: `Maybe::pure(a).bind(f) == f(a)`
/// 2. **Right Identity**: `m.bind(Maybe::pure) == m`
/// 3. **Associativity**: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value. Orders before every `Some`, as with [`Option`].
    None,
    /// A present value.
    Some(T),
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Maybe<String>: Send, Sync);

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Maybe` holding `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_primer::control::Maybe;
    ///
    /// let present = Maybe::some(42);
    /// assert!(present.is_some());
    /// ```
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Creates an empty `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_primer::control::Maybe;
    ///
    /// let absent: Maybe<i32> = Maybe::none();
    /// assert!(absent.is_none());
    /// ```
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Wraps a value in a `Maybe`. This is the monadic `return` and is the
    /// same as [`Maybe::some`].
    #[inline]
    pub const fn pure(value: T) -> Self {
        Self::Some(value)
    }

    // =========================================================================
    // Predicates
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

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Chains a computation that may itself produce no value.
    ///
    /// If this is `None`, returns `None` without calling `function`.
    /// Otherwise returns `function(value)` as is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_primer::control::Maybe;
    ///
    /// fn parse(text: &str) -> Maybe<i32> {
    ///     text.parse().map_or(Maybe::none(), Maybe::some)
    /// }
    ///
    /// assert_eq!(Maybe::some("42").bind(parse), Maybe::some(42));
    /// assert_eq!(Maybe::some("forty").bind(parse), Maybe::none());
    ///
    /// let absent: Maybe<&str> = Maybe::none();
    /// assert_eq!(absent.bind(parse), Maybe::none());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }

    /// Alias for [`Maybe::bind`].
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.bind(function)
    }

    /// Applies a function to the contained value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_primer::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(21).map(|x| x * 2), Maybe::some(42));
    /// assert_eq!(Maybe::<i32>::none().map(|x| x * 2), Maybe::none());
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

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the contained value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyAccessError`] if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_primer::control::{EmptyAccessError, Maybe};
    ///
    /// assert_eq!(Maybe::some(7).get(), Ok(7));
    /// assert_eq!(Maybe::<i32>::none().get(), Err(EmptyAccessError));
    /// ```
    #[inline]
    pub fn get(self) -> Result<T, EmptyAccessError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(EmptyAccessError),
        }
    }

    /// Returns the contained value, or `default` if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_primer::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(7).get_or_else(0), 7);
    /// assert_eq!(Maybe::none().get_or_else(0), 0);
    /// ```
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the contained value, or computes a fallback if this is `None`.
    ///
    /// The fallback is only evaluated when needed.
    #[inline]
    pub fn get_or_else_with<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => fallback(),
        }
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }
}

impl<T> Default for Maybe<T> {
    /// Returns `None`.
    fn default() -> Self {
        Self::None
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}

// =============================================================================
// Iteration
// =============================================================================

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    /// Yields the contained value once, or nothing.
    fn into_iter(self) -> Self::IntoIter {
        Option::from(self).into_iter()
    }
}
