//! Either type - a value that can be one of two types.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Left(L)` or a `Right(R)`. The case is fixed when the
//! value is built and never changes afterwards.
//!
//! Accessors never fault: [`Either::get_left`] and [`Either::get_right`]
//! report presence with a flag, and [`Either::left_ref`] /
//! [`Either::right_ref`] return an `Option`.
//!
//! # Examples
//!
//! ```rust
//! use fp_primer::control::Either;
//!
//! let parsed: Either<String, i32> = match "42".parse::<i32>() {
//!     Ok(n) => Either::right(n),
//!     Err(e) => Either::left(e.to_string()),
//! };
//!
//! let (value, present) = parsed.get_right();
//! assert!(present);
//! assert_eq!(value, 42);
//! assert_eq!(parsed.to_string(), "Right{42}");
//! ```

use std::fmt;

/// A value that can be one of two types.
///
/// By convention `Left` carries an error or alternate case and `Right`
/// carries a success value, but nothing in this type depends on that.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant.
    Left(L),
    /// The right variant.
    Right(R),
}

static_assertions::assert_impl_all!(Either<String, i32>: Send, Sync);

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_primer::control::Either;
    ///
    /// let value: Either<&str, i32> = Either::left("missing");
    /// assert!(value.is_left());
    /// ```
    #[inline]
    pub const fn left(value: L) -> Self {
        Self::Left(value)
    }

    /// Creates a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_primer::control::Either;
    ///
    /// let value: Either<&str, i32> = Either::right(7);
    /// assert!(value.is_right());
    /// ```
    #[inline]
    pub const fn right(value: R) -> Self {
        Self::Right(value)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

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
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the left value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_primer::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left_ref(), Some(&42));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.left_ref(), None);
    /// ```
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

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the Either by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_primer::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.fold(|x: i32| x.to_string(), |s| s), "hello");
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

    /// Swaps the Left and Right variants.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_primer::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.swap(), Either::Right(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

// =============================================================================
// Presence-flag Accessors
// =============================================================================

impl<L: Clone + Default, R> Either<L, R> {
    /// Returns the left value and `true`, or `L::default()` and `false` if
    /// this is a `Right`.
    ///
    /// The default value in the absent case carries no meaning; branch on
    /// the flag before using it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_primer::control::Either;
    ///
    /// let left: Either<String, i32> = Either::left("boom".to_string());
    /// assert_eq!(left.get_left(), ("boom".to_string(), true));
    ///
    /// let right: Either<String, i32> = Either::right(1);
    /// assert_eq!(right.get_left(), (String::new(), false));
    /// ```
    pub fn get_left(&self) -> (L, bool) {
        match self {
            Self::Left(value) => (value.clone(), true),
            Self::Right(_) => (L::default(), false),
        }
    }
}

impl<L, R: Clone + Default> Either<L, R> {
    /// Returns the right value and `true`, or `R::default()` and `false` if
    /// this is a `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_primer::control::Either;
    ///
    /// let right: Either<String, i32> = Either::right(9);
    /// assert_eq!(right.get_right(), (9, true));
    ///
    /// let left: Either<String, i32> = Either::left("boom".to_string());
    /// assert_eq!(left.get_right(), (0, false));
    /// ```
    pub fn get_right(&self) -> (R, bool) {
        match self {
            Self::Left(_) => (R::default(), false),
            Self::Right(value) => (value.clone(), true),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    /// Renders `Left{value}` or `Right{value}`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left{{{value}}}"),
            Self::Right(value) => write!(formatter, "Right{{{value}}}"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result` to an `Either`.
    ///
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
    /// Converts an `Either` to a `Result`.
    ///
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_either_left_construction() {
        let value: Either<i32, String> = Either::left(42);
        assert!(value.is_left());
        assert!(!value.is_right());
    }

    #[rstest]
    fn test_either_right_construction() {
        let value: Either<i32, String> = Either::right("hello".to_string());
        assert!(value.is_right());
        assert!(!value.is_left());
    }

    #[rstest]
    fn test_get_accessors_do_not_consume() {
        let value: Either<String, Vec<i32>> = Either::right(vec![1, 2]);
        assert_eq!(value.get_right(), (vec![1, 2], true));
        assert_eq!(value.get_left(), (String::new(), false));
        assert!(value.is_right());
    }

    #[rstest]
    #[case(Either::left(-1), "Left{-1}")]
    #[case(Either::right("ok"), "Right{ok}")]
    fn test_display(#[case] value: Either<i32, &str>, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Ok(42));

        let err: Result<i32, String> = Err("error".to_string());
        let either: Either<String, i32> = err.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Err("error".to_string()));
    }
}
