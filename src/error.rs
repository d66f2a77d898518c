use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while building an encoder or encoding/decoding ids
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The alphabet has fewer than the minimum number of characters
    #[error("Alphabet must contain at least {min} characters, got {len}")]
    AlphabetTooShort { min: usize, len: usize },

    /// The alphabet contains a character outside printable ASCII
    #[error("Alphabet character {0:?} is not printable ASCII")]
    AlphabetNotAscii(char),

    /// The alphabet repeats a character
    #[error("Alphabet contains duplicate character {0:?}")]
    DuplicateCharacter(char),

    /// The requested minimum length is above the supported limit
    #[error("Minimum length {requested} exceeds the limit of {limit}")]
    MinLengthTooLarge { requested: usize, limit: usize },

    /// Nothing to encode
    #[error("Cannot encode an empty list of numbers")]
    EmptyInput,

    /// A number is negative or does not fit in 64 bits
    #[error("Number at index {index} is negative or out of range")]
    InvalidNumber { index: usize },

    /// The id contains a character that is not part of the alphabet
    #[error("Character {character:?} at position {position} is not in the alphabet")]
    InvalidCharacter { character: char, position: usize },

    /// A decoded number does not fit in 64 bits
    #[error("Decoded number overflows a 64-bit integer")]
    Overflow,

    /// Every rotation of the alphabet produced a blocked id
    #[error("Could not produce an id that passes the blocklist after {attempts} attempts")]
    EncodingExhausted { attempts: usize },
}

/// Coarse classification of [`Error`] values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Raised only while building an encoder
    Configuration,
    /// Bad arguments to `encode`
    InvalidInput,
    /// Foreign character in an id passed to `decode`
    InvalidCharacter,
    /// Id decodes to a value wider than 64 bits
    Overflow,
    /// Blocklist retries ran out; treat as a misconfiguration
    EncodingExhausted,
}

impl Error {
    /// Returns the category this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::AlphabetTooShort { .. }
            | Error::AlphabetNotAscii(_)
            | Error::DuplicateCharacter(_)
            | Error::MinLengthTooLarge { .. } => ErrorKind::Configuration,
            Error::EmptyInput | Error::InvalidNumber { .. } => ErrorKind::InvalidInput,
            Error::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            Error::Overflow => ErrorKind::Overflow,
            Error::EncodingExhausted { .. } => ErrorKind::EncodingExhausted,
        }
    }
}
