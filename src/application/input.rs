//! Presence checks shared by the services

use crate::domain::{DomainError, DomainResult};

/// Reject a missing or blank text field
pub fn required(value: &str, field: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{} is required", field)));
    }
    Ok(())
}

/// Trimmed value when present and not blank
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_missing() {
        assert!(required("  ", "name").is_err());
        assert_eq!(
            required("", "email").unwrap_err().to_string(),
            "email is required"
        );
        assert!(required("Acme", "name").is_ok());
    }

    #[test]
    fn non_blank_drops_whitespace() {
        assert_eq!(non_blank(Some(" a ".into())), Some("a".into()));
        assert_eq!(non_blank(Some("   ".into())), None);
        assert_eq!(non_blank(None), None);
    }
}
