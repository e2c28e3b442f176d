//! Algebraic containers for optional and two-case values.
//!
//! - [`Maybe`]: A value that may be absent
//! - [`Either`]: A value that is one of two types
//! - [`EmptyAccessError`]: Returned when reading from an empty [`Maybe`]
//!
//! Both containers are tagged enums, so a value is always in exactly one
//! legal case.
//!
//! # Examples
//!
//! ## Maybe
//!
//! ```rust
//! use fp_primer::control::Maybe;
//!
//! let name = Maybe::some("Ada");
//! assert_eq!(name.map(str::len).get_or_else(0), 3);
//!
//! let missing: Maybe<&str> = Maybe::none();
//! assert!(missing.get().is_err());
//! ```
//!
//! ## Either
//!
//! ```rust
//! use fp_primer::control::Either;
//!
//! let outcome: Either<String, u32> = Either::left("not found".to_string());
//! let (_, present) = outcome.get_right();
//! assert!(!present);
//! assert_eq!(outcome.to_string(), "Left{not found}");
//! ```

mod either;
mod error;
mod maybe;

pub use either::Either;
pub use error::EmptyAccessError;
pub use maybe::Maybe;
