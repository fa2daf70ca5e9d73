use crate::error::{SocNetError, SocNetResult};

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> SocNetResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(SocNetError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}
