//! Type class traits and combinators for reducing structures.
//!
//! - [`fold_left`] / [`fold_right`]: Folds over ordered sequences
//! - [`Foldable`]: The same folds for slices, `Vec` and `Maybe`
//!
//! # Examples
//!
//! ```rust
//! use fp_primer::typeclass::{Foldable, fold_left};
//!
//! let total = fold_left(|accumulator, element| accumulator + element, 0, &[1, 2, 3, 4]);
//! assert_eq!(total, 10);
//!
//! let evens = vec![2, 4, 6];
//! assert!(evens.for_all(|x| x % 2 == 0));
//! ```

mod foldable;

pub use foldable::{Foldable, fold_left, fold_right};
