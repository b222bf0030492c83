//! AHP pipeline error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors surfaced by the AHP pipeline and the operations built on it.
#[derive(Debug, Clone, PartialEq)]
pub enum AhpError {
    /// A matrix, collection, alternative set, or score set does not exist.
    NotFound(String),
    /// Malformed matrix, zero column sum, unknown code, or dimension mismatch.
    InvalidInput { field: String, message: String },
    /// Persistence or I/O failure.
    Internal(String),
}

impl AhpError {
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        AhpError::NotFound(format!("{} not found: {}", resource, id))
    }
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        AhpError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        AhpError::Internal(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            AhpError::NotFound(_) => ErrorCode::NotFound,
            AhpError::InvalidInput { .. } => ErrorCode::ValidationFailed,
            AhpError::Internal(_) => ErrorCode::InternalError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            AhpError::NotFound(msg) => msg.clone(),
            AhpError::InvalidInput { field, message } => {
                format!("Invalid input for '{}': {}", field, message)
            }
            AhpError::Internal(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for AhpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AhpError {}

impl From<DomainError> for AhpError {
    fn from(err: DomainError) -> Self {
        if err.code.is_not_found() {
            AhpError::NotFound(err.message)
        } else if err.code.is_validation() {
            let field = err
                .details
                .get("field")
                .cloned()
                .unwrap_or_else(|| "unknown".to_string());
            AhpError::InvalidInput {
                field,
                message: err.message,
            }
        } else {
            AhpError::Internal(err.to_string())
        }
    }
}

impl From<ValidationError> for AhpError {
    fn from(err: ValidationError) -> Self {
        AhpError::InvalidInput {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}
