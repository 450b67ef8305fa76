//! Error types for stream positioning.
//!
//! Byte transfers never fail loudly: `read`/`write` report how many bytes moved.
//! Only `seek` and `tell` carry a status, expressed through [`StreamError`].

/// Failure signal for stream positioning calls.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum StreamError {
    /// The stream has no medium attached (failed open, closed, or empty adoption).
    #[error("stream is not opened")]
    NotOpened,

    /// The requested position lies before the start of the stream or past its limit.
    #[error("seek target {target} is outside [0, {limit}]")]
    OutOfRange { target: i128, limit: u64 },

    /// The native handle reported an error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StreamError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::NotOpened => "state",
            Self::OutOfRange { .. } => "range",
            Self::Io(_) => "io",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert() {
        let err: StreamError = std::io::Error::other("disk gone").into();
        assert!(matches!(err, StreamError::Io(_)));
        assert_eq!(err.category(), "io");
    }

    #[test]
    fn out_of_range_message_names_bounds() {
        let err = StreamError::OutOfRange {
            target: -4,
            limit: 16,
        };
        assert_eq!(err.to_string(), "seek target -4 is outside [0, 16]");
        assert_eq!(err.category(), "range");
    }
}
