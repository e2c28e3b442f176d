//! # fp-primer
//!
//! Generic algebraic containers for functional programming in Rust.
//!
//! ## Overview
//!
//! - **Control**: [`Maybe`](control::Maybe) for optional values and
//!   [`Either`](control::Either) for two-case tagged unions
//! - **Effect**: [`IO`](effect::IO), a deferred computation that runs only
//!   when asked to, plus console action builders
//! - **Type Classes**: left and right folds over ordered sequences
//!
//! ## Feature Flags
//!
//! - `typeclass`: Fold combinators and the `Foldable` trait
//! - `control`: `Maybe` and `Either`
//! - `effect`: `IO` and console actions
//! - `serde`: `Serialize`/`Deserialize` for `Maybe` and `Either`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fp_primer::prelude::*;
//!
//! let halved = Maybe::some(10).bind(|x| {
//!     if x % 2 == 0 { Maybe::some(x / 2) } else { Maybe::none() }
//! });
//! assert_eq!(halved.get_or_else(0), 5);
//!
//! let total = fold_left(|accumulator, element| accumulator + element, 0, &[1, 2, 3]);
//! assert_eq!(total, 6);
//!
//! let io = IO::pure(20).map(|x| x + 1);
//! assert_eq!(io.run(), 21);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use fp_primer::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
