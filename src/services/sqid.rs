// src/services/sqid.rs - Business logic
use std::sync::Arc;

use log::debug;
use sqids::Sqids;

use crate::errors::ServiceError;
use crate::models::SqidResponseDto;

type Result<T> = std::result::Result<T, ServiceError>;

#[cfg_attr(test, mockall::automock)]
pub trait CodecServiceTrait: Send + Sync {
    /// Encodes a list of numbers into an id
    ///
    /// ### Arguments
    /// * `numbers` - The numbers to encode, in order
    ///
    /// ### Returns
    /// * `Result<SqidResponseDto>` - The id together with the numbers it encodes
    ///
    /// ### Errors
    /// * `ServiceError::InvalidInput` - If the list is empty or a number is out of range
    /// * `ServiceError::Encoder` - If no id passes the blocklist
    fn encode(&self, numbers: &[i128]) -> Result<SqidResponseDto>;

    /// Decodes an id back into its numbers
    ///
    /// ### Arguments
    /// * `id` - An id previously returned by `encode`
    ///
    /// ### Returns
    /// * `Result<SqidResponseDto>` - The id together with the numbers it stands for
    ///
    /// ### Errors
    /// * `ServiceError::InvalidId` - If the id contains foreign characters or overflows
    /// * `ServiceError::UnknownId` - If the id is not the canonical encoding of any numbers
    fn decode(&self, id: &str) -> Result<SqidResponseDto>;
}

pub struct CodecService {
    sqids: Arc<Sqids>,
}

impl CodecService {
    pub fn new(sqids: Arc<Sqids>) -> Self {
        Self { sqids }
    }
}

impl CodecServiceTrait for CodecService {
    fn encode(&self, numbers: &[i128]) -> Result<SqidResponseDto> {
        let id = self.sqids.encode_signed(numbers)?;
        // encode_signed has range-checked every value
        let numbers: Vec<u64> = numbers.iter().map(|&n| n as u64).collect();
        debug!("Encoded {} number(s) as '{}'", numbers.len(), id);

        Ok(SqidResponseDto { id, numbers })
    }

    fn decode(&self, id: &str) -> Result<SqidResponseDto> {
        let numbers = self.sqids.decode(id)?;
        if numbers.is_empty() {
            return Err(ServiceError::UnknownId(format!(
                "'{}' does not encode any numbers",
                id
            )));
        }

        // Several ids can decode to the same numbers; only the one encode produces is accepted
        if self.sqids.encode(&numbers)? != id {
            debug!("Rejecting non-canonical id '{}'", id);
            return Err(ServiceError::UnknownId(format!(
                "'{}' is not a canonical id",
                id
            )));
        }

        Ok(SqidResponseDto {
            id: id.to_string(),
            numbers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> CodecService {
        CodecService::new(Arc::new(Sqids::default()))
    }

    #[test]
    fn test_encode_then_decode() {
        let service = service();
        let encoded = service.encode(&[1, 2, 3]).unwrap();
        assert_eq!(encoded.id, "86Rf07");
        assert_eq!(encoded.numbers, vec![1, 2, 3]);

        let decoded = service.decode("86Rf07").unwrap();
        assert_eq!(decoded, encoded);
    }

    #[test]
    fn test_encode_rejects_negative() {
        let err = service().encode(&[-5]).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[test]
    fn test_encode_rejects_empty() {
        let err = service().encode(&[]).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[test]
    fn test_decode_rejects_foreign_characters() {
        let err = service().decode("86Rf-07").unwrap_err();
        assert!(matches!(err, ServiceError::InvalidId(_)));
    }

    #[test]
    fn test_decode_rejects_non_canonical_ids() {
        // A lone anchor decodes to nothing
        let err = service().decode("8").unwrap_err();
        assert!(matches!(err, ServiceError::UnknownId(_)));

        // Extra trailing characters still decode, but re-encode differently
        let err = service().decode("86Rf07x").unwrap_err();
        assert!(matches!(err, ServiceError::UnknownId(_)));
    }
}
