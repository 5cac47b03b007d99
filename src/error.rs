use std::io;

/// Error returned by identifier generation, formatting, and parsing.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No entropy source was provided where one is required.
    #[error("provided entropy source is absent")]
    InvalidArgument,

    /// The entropy source could not supply the requested number of bytes.
    #[error("failed to read random bytes: {0}")]
    EntropyReadFailure(#[source] io::Error),

    /// A byte buffer or string does not have the required length.
    #[error("wrong length (expected {expected}, got {actual})")]
    InvalidLength { expected: usize, actual: usize },

    /// A hyphen separator is missing or misplaced.
    #[error("identifier is improperly formatted: expected '-' at position {position}")]
    InvalidFormat { position: usize },

    /// A character other than a hexadecimal digit was found where one is required.
    #[error("invalid hex character {character:?} at position {position}")]
    InvalidHexEncoding { position: usize, character: char },
}

impl Error {
    /// Returns true if retrying the same operation may succeed.
    ///
    /// Only entropy read failures are potentially transient; all other kinds reflect a problem
    /// with the input and will fail again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::EntropyReadFailure(_))
    }
}

/// Result type alias used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;
    use std::{error::Error as _, io};

    /// Keeps underlying cause of entropy read failure
    #[test]
    fn keeps_underlying_cause_of_entropy_read_failure() {
        let e = Error::EntropyReadFailure(io::Error::new(io::ErrorKind::UnexpectedEof, "drained"));
        assert_eq!(e.to_string(), "failed to read random bytes: drained");
        let cause = e.source().unwrap();
        assert_eq!(cause.to_string(), "drained");
        assert!(e.is_retryable());
    }

    /// Treats input errors as permanent
    #[test]
    fn treats_input_errors_as_permanent() {
        let cases = [
            Error::InvalidArgument,
            Error::InvalidLength {
                expected: 16,
                actual: 15,
            },
            Error::InvalidFormat { position: 8 },
            Error::InvalidHexEncoding {
                position: 3,
                character: 'g',
            },
        ];

        for e in cases {
            assert!(!e.is_retryable(), "{}", e);
            assert!(e.source().is_none());
        }
    }

    /// Describes errors with positions and lengths
    #[test]
    fn describes_errors_with_positions_and_lengths() {
        assert_eq!(
            Error::InvalidLength {
                expected: 36,
                actual: 35
            }
            .to_string(),
            "wrong length (expected 36, got 35)"
        );
        assert_eq!(
            Error::InvalidFormat { position: 13 }.to_string(),
            "identifier is improperly formatted: expected '-' at position 13"
        );
        assert_eq!(
            Error::InvalidHexEncoding {
                position: 0,
                character: 'x'
            }
            .to_string(),
            "invalid hex character 'x' at position 0"
        );
    }
}
