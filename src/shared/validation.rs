use lazy_static::lazy_static;
use regex::Regex;

use crate::core::error::AppError;
use crate::shared::constants::MAX_NIM_LENGTH;

lazy_static! {
    /// Regex for student enrollment numbers (NIM)
    /// Letters, digits, hyphen and underscore only, so a NIM is always safe as a file name
    /// - Valid: "202401001", "TI-2024_07"
    /// - Invalid: "", "../etc", "2024 01", "nim/1"
    pub static ref NIM_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();
}

/// Validate a NIM taken from a URL path segment.
pub fn validate_nim(nim: &str) -> Result<(), AppError> {
    if nim.len() > MAX_NIM_LENGTH || !NIM_REGEX.is_match(nim) {
        return Err(AppError::Validation(format!("NIM '{}' tidak valid", nim)));
    }
    Ok(())
}
