// src/models/sqid.rs - Request and response shapes
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validations::{validate_id_charset, validate_numbers};

// DTO for encoding a list of numbers
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct EncodeRequestDto {
    // Wider than u64 so negative and oversized values reach validation
    #[validate(
        length(min = 1, max = 100, message = "Provide between 1 and 100 numbers"),
        custom(function = "validate_numbers")
    )]
    pub numbers: Vec<i128>,
}

// DTO for decoding an id taken from the request path
#[derive(Debug, Validate)]
pub struct DecodeRequestDto {
    #[validate(
        length(min = 1, max = 512, message = "Id must be between 1 and 512 characters"),
        custom(function = "validate_id_charset")
    )]
    pub id: String,
}

/// An id together with the numbers it stands for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqidResponseDto {
    pub id: String,
    pub numbers: Vec<u64>,
}
