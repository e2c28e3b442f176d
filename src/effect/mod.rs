//! Effect system for deferred side effect handling.
//!
//! # IO Monad
//!
//! The [`IO`] type describes a computation that may perform side effects.
//! Nothing happens until [`IO::run`] is called, and every call runs the
//! computation again.
//!
//! ```rust
//! use fp_primer::effect::IO;
//!
//! let io = IO::pure(10)
//!     .map(|x| x * 2)
//!     .bind(|x| IO::pure(x + 1));
//!
//! assert_eq!(io.run(), 21);
//! ```
//!
//! The free functions [`map`] and [`bind`] are the same combinators in
//! prefix form.
//!
//! # Console Actions
//!
//! The [`console`] module builds actions that write lines to, or read
//! lines from, the standard streams or any shared reader/writer. Their
//! failures come back from `run` as [`EffectError`].

// =============================================================================
// IO Monad
// =============================================================================

mod io;

pub use io::{IO, bind, map};

// =============================================================================
// Console Actions
// =============================================================================

pub mod console;

pub use console::{print_line, read_line};

// =============================================================================
// Error Types
// =============================================================================

mod error;

pub use error::EffectError;
