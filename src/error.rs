//! Error types for COBS framing

/// Errors that can occur while decoding a frame or writing into a caller buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A length byte claims more data bytes than remain in the frame
    Truncated,
    /// A zero byte appeared where a block length byte was expected
    InvalidLength,
    /// Output buffer too small for the operation
    ShortBuffer,
}

impl Error {
    /// Returns a human-readable description of the error
    pub const fn description(&self) -> &'static str {
        match self {
            Error::Truncated => "frame truncated: block length exceeds remaining bytes",
            Error::InvalidLength => "zero length byte where a block header was expected",
            Error::ShortBuffer => "buffer too small for operation",
        }
    }

    /// Whether the error was caused by malformed frame data rather than by
    /// the caller's output buffer
    #[inline]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Error::Truncated | Error::InvalidLength)
    }
}

#[cfg(feature = "std")]
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias for COBS operations
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_classification() {
        assert!(Error::Truncated.is_malformed());
        assert!(Error::InvalidLength.is_malformed());
        assert!(!Error::ShortBuffer.is_malformed());
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_display_uses_description() {
        use std::string::ToString;

        assert_eq!(Error::Truncated.to_string(), Error::Truncated.description());
        assert_eq!(
            Error::ShortBuffer.to_string(),
            "buffer too small for operation"
        );
    }
}
