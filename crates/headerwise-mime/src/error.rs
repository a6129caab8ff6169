//! Error types for header decoding.
//!
//! These surface only from the fallible `try_*` layer. The public decoding
//! entry points absorb them and fall back to their input.

/// Result type alias for decoding operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Decoding error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Base64 decode error.
    #[error("Base64 decode error: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    /// A `=XX` escape whose two characters are not hexadecimal digits.
    #[error("Invalid escape sequence at byte {position}: {sequence:?}")]
    InvalidEscape {
        /// Byte offset of the `=` in the payload.
        position: usize,
        /// The two characters following the `=`.
        sequence: String,
    },

    /// A `=` escape cut short by the end of the payload.
    #[error("Incomplete escape sequence at byte {position}")]
    TruncatedEscape {
        /// Byte offset of the `=` in the payload.
        position: usize,
    },

    /// Encoding flag other than `B` or `Q`.
    #[error("Unknown encoded-word encoding: {0}")]
    UnknownEncoding(String),
}
