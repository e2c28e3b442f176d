//! Error types for the control containers.

use thiserror::Error;

/// Returned by [`Maybe::get`](super::Maybe::get) when the value is absent.
///
/// Callers that cannot rule out absence should check
/// [`Maybe::is_some`](super::Maybe::is_some) first, or use
/// [`Maybe::get_or_else`](super::Maybe::get_or_else) instead.
///
/// # Examples
///
/// ```rust
/// use fp_primer::control::{EmptyAccessError, Maybe};
///
/// let absent: Maybe<i32> = Maybe::none();
/// assert_eq!(absent.get(), Err(EmptyAccessError));
/// assert_eq!(
///     EmptyAccessError.to_string(),
///     "attempted to get value from None"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("attempted to get value from None")]
pub struct EmptyAccessError;
