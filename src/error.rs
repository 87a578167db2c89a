//! Error types for validation and streaming decode.

use crate::unit::Encoding;
use thiserror::Error;

/// Main error type of this crate.
///
/// Most operations never fail: they substitute U+FFFD for malformed input. This type is
/// returned only by the checking functions ([`validate`](crate::validate),
/// [`validate_ascii`](crate::validate_ascii), [`try_codepoint`](crate::try_codepoint))
/// and by [`Utf8Reader`](crate::Utf8Reader).
#[derive(Error, Debug)]
pub enum Error {
    /// A malformed unit group.
    #[error("invalid {encoding} sequence at offset {offset}")]
    InvalidSequence {
        /// Offset of the first unit of the group, in units.
        offset: usize,
        /// Encoding form the input was checked against.
        encoding: Encoding,
    },

    /// A byte with the high bit set in input that must be ASCII.
    #[error("non-ASCII byte at offset {offset}")]
    NotAscii {
        /// Offset of the byte.
        offset: usize,
    },

    /// The underlying reader failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The unit offset the error refers to, if any.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::InvalidSequence { offset, .. } | Error::NotAscii { offset } => Some(*offset),
            Error::Io(_) => None,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_sequence() {
        let err = Error::InvalidSequence {
            offset: 7,
            encoding: Encoding::Utf16,
        };
        assert_eq!(err.to_string(), "invalid UTF-16 sequence at offset 7");
        assert_eq!(err.offset(), Some(7));
    }

    #[test]
    fn display_not_ascii() {
        let err = Error::NotAscii { offset: 0 };
        assert_eq!(err.to_string(), "non-ASCII byte at offset 0");
    }

    #[test]
    fn display_io() {
        let err = Error::from(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "stream closed",
        ));
        assert_eq!(err.to_string(), "I/O error: stream closed");
        assert_eq!(err.offset(), None);
    }
}
