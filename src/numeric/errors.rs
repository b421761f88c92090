// ============================================================================
// Numeric Errors
// Error types for decimal construction, conversion and rounding
// ============================================================================

use thiserror::Error;

/// Coarse classification of a [`DecimalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller supplied a value the operation cannot accept
    InvalidArgument,
    /// Value is well-formed but does not fit the requested representation
    OutOfRange,
}

/// Errors that can occur while building or rounding decimal values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecimalError {
    /// Input text is not an exact decimal literal
    #[error("invalid argument: malformed decimal literal {input:?}: {reason}")]
    MalformedLiteral { input: String, reason: &'static str },

    /// Scale (fractional digit count) below zero
    #[error("invalid argument: scale must be non-negative, got {0}")]
    NegativeScale(i64),

    /// Scale above what a significand/scale pair can carry
    #[error("invalid argument: scale {0} exceeds the maximum of {max}", max = u32::MAX)]
    ScaleTooLarge(i64),

    /// Rounding mode name not recognised
    #[error("invalid argument: unknown rounding mode {0:?}")]
    UnknownRoundingMode(String),

    /// Lossless conversion into a bounded representation is impossible
    #[error("out of range: {0}")]
    OutOfRange(String),
}

impl DecimalError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecimalError::MalformedLiteral { .. }
            | DecimalError::NegativeScale(_)
            | DecimalError::ScaleTooLarge(_)
            | DecimalError::UnknownRoundingMode(_) => ErrorKind::InvalidArgument,
            DecimalError::OutOfRange(_) => ErrorKind::OutOfRange,
        }
    }

    /// Shorthand for `self.kind() == ErrorKind::InvalidArgument`.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    pub(crate) fn malformed(input: &str, reason: &'static str) -> Self {
        DecimalError::MalformedLiteral {
            input: input.to_string(),
            reason,
        }
    }
}

/// Result type alias for decimal operations
pub type DecimalResult<T> = Result<T, DecimalError>;

/// Validates a caller-supplied scale and narrows it to the stored width.
pub(crate) fn checked_scale(scale: i64) -> DecimalResult<u32> {
    if scale < 0 {
        return Err(DecimalError::NegativeScale(scale));
    }
    u32::try_from(scale).map_err(|_| DecimalError::ScaleTooLarge(scale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DecimalError::NegativeScale(-1).to_string(),
            "invalid argument: scale must be non-negative, got -1"
        );
        assert_eq!(
            DecimalError::malformed("1.2.3", "more than one decimal point").to_string(),
            "invalid argument: malformed decimal literal \"1.2.3\": more than one decimal point"
        );
        assert_eq!(
            DecimalError::ScaleTooLarge(5_000_000_000).to_string(),
            "invalid argument: scale 5000000000 exceeds the maximum of 4294967295"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(DecimalError::NegativeScale(-3).kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            DecimalError::UnknownRoundingMode("SIDEWAYS".into()).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            DecimalError::OutOfRange("too wide".into()).kind(),
            ErrorKind::OutOfRange
        );
        assert!(DecimalError::malformed("x", "no digits").is_invalid_argument());
        assert!(!DecimalError::OutOfRange("x".into()).is_invalid_argument());
    }

    #[test]
    fn test_checked_scale() {
        assert_eq!(checked_scale(0), Ok(0));
        assert_eq!(checked_scale(28), Ok(28));
        assert_eq!(checked_scale(-1), Err(DecimalError::NegativeScale(-1)));
        assert_eq!(checked_scale(i64::MIN), Err(DecimalError::NegativeScale(i64::MIN)));
        assert_eq!(
            checked_scale(i64::from(u32::MAX) + 1),
            Err(DecimalError::ScaleTooLarge(i64::from(u32::MAX) + 1))
        );
    }
}
