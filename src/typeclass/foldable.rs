//! Foldable type class - reducing structures to a summary value.
//!
//! This module provides the two fold combinators over ordered sequences,
//! [`fold_left`] and [`fold_right`], and the [`Foldable`] trait that gives
//! the same operations to other containers.
//!
//! # Laws
//!
//! ## Consistency between `fold_left` and `fold_right`
//!
//! For an associative and commutative `f` with identity `e`:
//!
//! ```text
//! fold_left(f, e, xs) == fold_right(flip(f), e, xs)
//! ```
//!
//! For other operators the two differ in bracketing:
//!
//! ```text
//! fold_left(f, z, [a, b, c])  == f(f(f(z, a), b), c)
//! fold_right(f, z, [a, b, c]) == f(a, f(b, f(c, z)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fp_primer::typeclass::{fold_left, fold_right};
//!
//! let numbers = [1, 2, 3];
//! assert_eq!(fold_left(|accumulator, element| accumulator - element, 0, &numbers), -6);
//! assert_eq!(fold_right(|element, accumulator| element - accumulator, 0, &numbers), 2);
//! ```

#[cfg(feature = "control")]
use crate::control::Maybe;

/// Folds `sequence` from left to right.
///
/// Starting from `initial`, calls `function(accumulator, element)` for each
/// element in order. Returns `initial` unchanged for an empty sequence. The
/// sequence is only read.
///
/// # Examples
///
/// ```rust
/// use fp_primer::typeclass::fold_left;
///
/// let joined = fold_left(
///     |mut accumulator: String, element| {
///         accumulator.push_str(element);
///         accumulator
///     },
///     String::new(),
///     &["a", "b", "c"],
/// );
/// assert_eq!(joined, "abc");
/// ```
pub fn fold_left<T, U, F>(function: F, initial: U, sequence: &[T]) -> U
where
    F: FnMut(U, &T) -> U,
{
    sequence.fold_left(initial, function)
}

/// Folds `sequence` from right to left.
///
/// Starting from `initial`, calls `function(element, accumulator)` for each
/// element, last element first. Returns `initial` unchanged for an empty
/// sequence.
///
/// # Examples
///
/// ```rust
/// use fp_primer::typeclass::fold_right;
///
/// let joined = fold_right(
///     |element, accumulator| format!("{element}{accumulator}"),
///     String::new(),
///     &["a", "b", "c"],
/// );
/// assert_eq!(joined, "abc");
/// ```
pub fn fold_right<T, U, F>(function: F, initial: U, sequence: &[T]) -> U
where
    F: FnMut(&T, U) -> U,
{
    sequence.fold_right(initial, function)
}

/// A type class for data structures that can be folded to a summary value.
///
/// # Required Methods
///
/// - `fold_left`: Left-associative fold
/// - `fold_right`: Right-associative fold
///
/// # Provided Methods
///
/// - `length`: Count the number of elements
/// - `to_list`: Collect the elements into a `Vec`
/// - `exists`: Check if any element matches a predicate
/// - `for_all`: Check if all elements match a predicate
pub trait Foldable: Sized {
    /// The element type visited by the fold.
    type Item;

    /// Folds the structure from left to right with an accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_primer::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3];
    /// let sum = values.fold_left(0, |accumulator, element| accumulator + element);
    /// assert_eq!(sum, 6);
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Item) -> B;

    /// Folds the structure from right to left with an accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fp_primer::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3];
    /// // Builds "123" by folding from the right: f(1, f(2, f(3, "")))
    /// let result = values.fold_right(String::new(), |element, accumulator| {
    ///     format!("{element}{accumulator}")
    /// });
    /// assert_eq!(result, "123");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Item, B) -> B;

    /// Returns the number of elements in the structure.
    fn length(self) -> usize {
        self.fold_left(0, |count, _| count + 1)
    }

    /// Collects the elements, in order, into a `Vec`.
    fn to_list(self) -> Vec<Self::Item> {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Returns `true` if any element satisfies `predicate`.
    fn exists<P>(self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.fold_left(false, |found, element| found || predicate(&element))
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// An empty structure satisfies any predicate.
    fn for_all<P>(self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        !self.exists(|element| !predicate(element))
    }
}

// =============================================================================
// Slice Implementation
// =============================================================================

impl<'a, T> Foldable for &'a [T] {
    type Item = &'a T;

    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, &'a T) -> B,
    {
        self.iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(&'a T, B) -> B,
    {
        self.iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn length(self) -> usize {
        self.len()
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Foldable for Vec<T> {
    type Item = T;

    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn length(self) -> usize {
        self.len()
    }

    #[inline]
    fn to_list(self) -> Self {
        self
    }
}

// =============================================================================
// Maybe<T> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<T> Foldable for Maybe<T> {
    type Item = T;

    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Maybe::Some(element) => function(init, element),
            Maybe::None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Maybe::Some(element) => function(element, init),
            Maybe::None => init,
        }
    }

    #[inline]
    fn length(self) -> usize {
        usize::from(self.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_fold_left_subtraction() {
        assert_eq!(fold_left(|a, x| a - x, 0, &[1, 2, 3]), -6);
    }

    #[rstest]
    fn test_fold_right_subtraction() {
        assert_eq!(fold_right(|x, a| x - a, 0, &[1, 2, 3]), 2);
    }

    #[rstest]
    fn test_folds_on_empty_return_initial() {
        let empty: [i32; 0] = [];
        assert_eq!(fold_left(|a, x| a + x, 17, &empty), 17);
        assert_eq!(fold_right(|x, a| x + a, 17, &empty), 17);
    }

    #[rstest]
    fn test_fold_does_not_mutate_input() {
        let sequence = vec![3, 1, 2];
        let _ = fold_left(|a, x| a.max(*x), i32::MIN, &sequence);
        assert_eq!(sequence, vec![3, 1, 2]);
    }

    #[rstest]
    fn test_fold_right_visits_last_first() {
        let mut visited = Vec::new();
        fold_right(
            |x: &i32, ()| {
                visited.push(*x);
            },
            (),
            &[1, 2, 3],
        );
        assert_eq!(visited, vec![3, 2, 1]);
    }

    #[rstest]
    fn test_vec_to_list_is_identity() {
        assert_eq!(vec![1, 2, 3].to_list(), vec![1, 2, 3]);
    }

    #[rstest]
    #[case(vec![], true)]
    #[case(vec![2, 4], true)]
    #[case(vec![2, 3], false)]
    fn test_for_all_even(#[case] values: Vec<i32>, #[case] expected: bool) {
        assert_eq!(values.for_all(|x| x % 2 == 0), expected);
    }

    #[cfg(feature = "control")]
    #[rstest]
    fn test_maybe_folds_as_zero_or_one_element() {
        assert_eq!(Maybe::some(5).fold_left(10, |a, x| a + x), 15);
        assert_eq!(Maybe::<i32>::none().fold_right(10, |x, a| x + a), 10);
        assert_eq!(Maybe::some('x').length(), 1);
        assert_eq!(Maybe::<char>::none().to_list(), Vec::<char>::new());
    }
}
