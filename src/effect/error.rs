//! Error types for the effect system.
//!
//! Failures of the effects wrapped by the console builders are reported
//! through [`EffectError`] in the result of [`IO::run`](super::IO::run).

use thiserror::Error;

/// Represents errors raised by an effect while an `IO` action runs.
///
/// # Examples
///
/// ```rust
/// use fp_primer::effect::EffectError;
///
/// let error = EffectError::from(std::io::Error::other("pipe closed"));
/// assert_eq!(error.to_string(), "effect I/O failed: pipe closed");
/// ```
#[derive(Debug, Error)]
pub enum EffectError {
    /// Reading from or writing to a stream failed.
    #[error("effect I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error as _;
    use std::io;

    #[rstest]
    fn test_effect_error_display() {
        let error = EffectError::from(io::Error::new(io::ErrorKind::BrokenPipe, "broken"));
        assert_eq!(format!("{error}"), "effect I/O failed: broken");
    }

    #[rstest]
    fn test_effect_error_keeps_source_kind() {
        let error = EffectError::from(io::Error::from(io::ErrorKind::UnexpectedEof));
        let EffectError::Io(source) = &error;
        assert_eq!(source.kind(), io::ErrorKind::UnexpectedEof);
        assert!(error.source().is_some());
    }
}
