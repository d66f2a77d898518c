use sqids::{Error as SqidsError, ErrorKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    /// Numbers that cannot be encoded
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Ids that cannot be decoded
    #[error("Invalid id: {0}")]
    InvalidId(String),

    /// Well-formed id that does not stand for any numbers
    #[error("Unknown id: {0}")]
    UnknownId(String),

    /// The encoder could not do its job with the current configuration
    #[error("Encoder failure: {0}")]
    Encoder(SqidsError),
}

impl From<SqidsError> for ServiceError {
    fn from(err: SqidsError) -> Self {
        match err.kind() {
            ErrorKind::InvalidInput => Self::InvalidInput(err.to_string()),
            ErrorKind::InvalidCharacter | ErrorKind::Overflow => Self::InvalidId(err.to_string()),
            ErrorKind::Configuration | ErrorKind::EncodingExhausted => Self::Encoder(err),
        }
    }
}
