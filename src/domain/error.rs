//! Domain errors

use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

use super::Role;

/// Why an access check refused the acting identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Denial {
    /// The record belongs to someone else
    NotOwner,
    /// The operation needs a role the identity does not hold
    RoleRequired(Role),
}

impl std::fmt::Display for Denial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotOwner => write!(f, "you do not own this resource"),
            Self::RoleRequired(role) => write!(f, "{} role required", role.as_str()),
        }
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthenticated(String),

    #[error("Access denied: {0}")]
    Forbidden(Denial),

    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("{0}")]
    Unexpected(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Whether the error is a refusal rather than a failure
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Storage(_) | Self::Unexpected(_))
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages = Vec::new();
        collect_messages(&errors, "", &mut messages);
        messages.sort();

        if messages.is_empty() {
            Self::validation("Validation failed")
        } else {
            Self::validation(messages.join("; "))
        }
    }
}

/// Flatten nested field errors into `path: message` lines
fn collect_messages(errors: &ValidationErrors, prefix: &str, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };
        match kind {
            ValidationErrorsKind::Field(errs) => {
                for e in errs {
                    let msg = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    out.push(format!("{}: {}", path, msg));
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_messages(inner, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_messages(inner, &format!("{}[{}]", path, index), out);
                }
            }
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_messages_name_the_reason() {
        let owner = DomainError::Forbidden(Denial::NotOwner);
        assert_eq!(owner.to_string(), "Access denied: you do not own this resource");

        let role = DomainError::Forbidden(Denial::RoleRequired(Role::Admin));
        assert_eq!(role.to_string(), "Access denied: admin role required");
    }

    #[test]
    fn not_found_names_the_entity() {
        let err = DomainError::not_found("Website", "w-1");
        assert_eq!(err.to_string(), "Website not found");
        assert!(err.is_client_error());
        assert!(!DomainError::Storage("disk full".into()).is_client_error());
    }

    #[test]
    fn validation_errors_become_one_message() {
        use validator::Validate;

        #[derive(Validate)]
        struct Body {
            #[validate(length(min = 1, message = "is required"))]
            name: String,
            #[validate(range(min = 1, message = "must be positive"))]
            count: u32,
        }

        let err: DomainError = Body {
            name: String::new(),
            count: 0,
        }
        .validate()
        .unwrap_err()
        .into();
        assert_eq!(err.to_string(), "count: must be positive; name: is required");
    }
}
