//! HTTP error mapping.
//!
//! Every handler returns `Result<_, ApiError>`. Store failures are logged
//! here and reach the caller only as a generic message.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::advisory::AdvisoryError;
use crate::domain::conversation::ConversationError;
use crate::domain::foundation::{AuthError, ErrorCode};
use crate::domain::journey::JourneyError;
use crate::domain::portfolio::PortfolioError;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Error body: `{ "code": "...", "message": "..." }`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    ServiceUnavailable(String),
    /// Detail is logged, never returned.
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(self) -> ErrorResponse {
        let (code, message) = match self {
            ApiError::BadRequest(msg) => ("BAD_REQUEST", msg),
            ApiError::Unauthorized(msg) => ("UNAUTHORIZED", msg),
            ApiError::Forbidden(msg) => ("FORBIDDEN", msg),
            ApiError::NotFound(msg) => ("NOT_FOUND", msg),
            ApiError::ServiceUnavailable(msg) => ("SERVICE_UNAVAILABLE", msg),
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                ("INTERNAL_ERROR", INTERNAL_MESSAGE.to_string())
            }
        };
        ErrorResponse {
            code: code.to_string(),
            message,
        }
    }

    fn from_code(code: ErrorCode, message: String) -> Self {
        match code {
            ErrorCode::ValidationFailed | ErrorCode::InvalidStep => ApiError::BadRequest(message),
            ErrorCode::JourneyNotFound
            | ErrorCode::PortfolioNotFound
            | ErrorCode::CompanyNotFound
            | ErrorCode::ConversationNotFound => ApiError::NotFound(message),
            ErrorCode::Unauthorized => ApiError::Unauthorized(message),
            ErrorCode::Forbidden => ApiError::Forbidden(message),
            ErrorCode::AIProviderError
            | ErrorCode::ContractViolation
            | ErrorCode::DatabaseError
            | ErrorCode::InternalError => ApiError::Internal(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(self.body())).into_response()
    }
}

impl From<JourneyError> for ApiError {
    fn from(err: JourneyError) -> Self {
        ApiError::from_code(err.code(), err.message())
    }
}

impl From<PortfolioError> for ApiError {
    fn from(err: PortfolioError) -> Self {
        ApiError::from_code(err.code(), err.message())
    }
}

impl From<ConversationError> for ApiError {
    fn from(err: ConversationError) -> Self {
        ApiError::from_code(err.code(), err.message())
    }
}

impl From<AdvisoryError> for ApiError {
    fn from(err: AdvisoryError) -> Self {
        ApiError::from_code(err.code(), err.message())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(format!("Invalid path parameter: {}", rejection.body_text()))
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::TokenExpired => ApiError::Unauthorized("Token expired".to_string()),
            AuthError::InvalidToken => ApiError::Unauthorized("Invalid token".to_string()),
            AuthError::InsufficientPermissions => {
                ApiError::Forbidden("Insufficient permissions".to_string())
            }
            AuthError::ServiceUnavailable(msg) => {
                tracing::error!("Auth service unavailable: {}", msg);
                ApiError::ServiceUnavailable("Authentication service unavailable".to_string())
            }
        }
    }
}
