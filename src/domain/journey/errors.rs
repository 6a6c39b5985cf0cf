//! Journey-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, UserId};

/// Journey-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JourneyError {
    /// No journey row exists for the user.
    NotFound(UserId),
    /// Step number outside the program.
    InvalidStep(i64),
    /// Request payload was malformed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl JourneyError {
    pub fn not_found(user_id: UserId) -> Self {
        JourneyError::NotFound(user_id)
    }
    pub fn invalid_step(number: i64) -> Self {
        JourneyError::InvalidStep(number)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        JourneyError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        JourneyError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            JourneyError::NotFound(_) => ErrorCode::JourneyNotFound,
            JourneyError::InvalidStep(_) => ErrorCode::InvalidStep,
            JourneyError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            JourneyError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            JourneyError::NotFound(_) => "Journey not found".to_string(),
            JourneyError::InvalidStep(n) => {
                format!("Invalid step number {}: expected 1 through 8", n)
            }
            JourneyError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            JourneyError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for JourneyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for JourneyError {}

impl From<DomainError> for JourneyError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => JourneyError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => JourneyError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_categories() {
        let user = UserId::new("u").unwrap();
        assert_eq!(JourneyError::not_found(user).code(), ErrorCode::JourneyNotFound);
        assert_eq!(JourneyError::invalid_step(9).code(), ErrorCode::InvalidStep);
        assert_eq!(
            JourneyError::infrastructure("db down").code(),
            ErrorCode::DatabaseError
        );
    }

    #[test]
    fn invalid_step_message_names_number() {
        assert!(JourneyError::invalid_step(0).message().contains("0"));
    }

    #[test]
    fn domain_error_converts_to_infrastructure() {
        let err: JourneyError = DomainError::database("connection reset").into();
        assert!(matches!(err, JourneyError::Infrastructure(_)));
    }
}
