//! Advisory request errors.
//!
//! Backend failures never appear here; the router recovers them with the
//! fallback generators. Only caller mistakes are surfaced.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvisoryError {
    /// A required request field is missing or blank.
    MissingField(String),
    /// A field is present but unusable.
    ValidationFailed { field: String, message: String },
    /// Persisting the advice (chat history, company insights) failed.
    Infrastructure(String),
}

impl AdvisoryError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        AdvisoryError::MissingField(field.into())
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AdvisoryError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            AdvisoryError::MissingField(_) | AdvisoryError::ValidationFailed { .. } => {
                ErrorCode::ValidationFailed
            }
            AdvisoryError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            AdvisoryError::MissingField(field) => format!("Missing required field: {}", field),
            AdvisoryError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            AdvisoryError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for AdvisoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AdvisoryError {}

impl From<ValidationError> for AdvisoryError {
    fn from(err: ValidationError) -> Self {
        let message = err.to_string();
        match err {
            ValidationError::EmptyField { field } => AdvisoryError::MissingField(field),
            ValidationError::OutOfRange { field, .. } => AdvisoryError::validation(field, message),
            ValidationError::InvalidFormat { field, reason } => {
                AdvisoryError::validation(field, reason)
            }
        }
    }
}

impl From<DomainError> for AdvisoryError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => AdvisoryError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => AdvisoryError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_is_a_validation_failure() {
        let err = AdvisoryError::missing_field("problemStatement");
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(err.message(), "Missing required field: problemStatement");
    }

    #[test]
    fn store_failures_map_to_database_code() {
        let err: AdvisoryError = DomainError::database("pool timed out").into();
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }
}
