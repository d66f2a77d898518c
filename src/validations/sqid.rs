use validator::ValidationError;

/// Validates that every number fits in an unsigned 64-bit integer
pub fn validate_numbers(numbers: &[i128]) -> Result<(), ValidationError> {
    if numbers
        .iter()
        .any(|&n| n < 0 || n > i128::from(u64::MAX))
    {
        let mut err = ValidationError::new("number_range");
        err.message = Some("Numbers must be between 0 and 18446744073709551615".into());
        return Err(err);
    }

    Ok(())
}

/// Validates that an id only contains printable ASCII characters
pub fn validate_id_charset(id: &str) -> Result<(), ValidationError> {
    if !id.chars().all(|c| c.is_ascii_graphic()) {
        let mut err = ValidationError::new("id_charset");
        err.message = Some("Id can only contain printable ASCII characters".into());
        return Err(err);
    }

    Ok(())
}
