//! Errors raised when inputs cross into the cipher.
//!
//! The transforms themselves are total over fixed-size buffers; every variant
//! here describes malformed input caught before any round runs.

use thiserror::Error;

/// Result alias for fallible conversions into cipher inputs.
pub type Result<T> = core::result::Result<T, Error>;

/// Input validation failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The key does not have exactly 16 elements.
    #[error("invalid key length (expected 16, got {actual})")]
    InvalidKeyLength {
        /// Number of elements supplied.
        actual: usize,
    },

    /// The input block does not have exactly 16 elements.
    #[error("invalid block length (expected 16, got {actual})")]
    InvalidBlockLength {
        /// Number of elements supplied.
        actual: usize,
    },

    /// An element intended as a byte lies outside `0..=255`.
    #[error("{field}[{index}] = {value} is not a byte value")]
    InvalidByteValue {
        /// Which collection held the element (`"key"` or `"block"`).
        field: &'static str,
        /// Position of the element.
        index: usize,
        /// The rejected value.
        value: i64,
    },

    /// The mode selector is neither encrypt (0) nor decrypt (1).
    #[error("invalid mode {mode} (expected 0 = encrypt or 1 = decrypt)")]
    InvalidMode {
        /// The rejected selector.
        mode: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = Error::InvalidByteValue {
            field: "block",
            index: 3,
            value: 256,
        };
        assert_eq!(err.to_string(), "block[3] = 256 is not a byte value");
        assert_eq!(
            Error::InvalidKeyLength { actual: 15 }.to_string(),
            "invalid key length (expected 16, got 15)"
        );
        assert!(Error::InvalidMode { mode: 2 }.to_string().contains("mode 2"));
    }
}
