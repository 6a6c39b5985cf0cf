//! Authentication types for the domain layer.
//!
//! These types represent an authenticated user extracted from a bearer token.
//! Token issuance lives in an external auth service; whatever validates the
//! token populates these via the `SessionValidator` port.

use super::{UserId, UserRole};
use thiserror::Error;

/// Authenticated user extracted from a validated token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the auth service.
    pub id: UserId,

    /// Role claim. Gates founder and VC endpoints.
    pub role: UserRole,

    /// Email address if the token carries one.
    pub email: Option<String>,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, role: UserRole, email: Option<String>) -> Self {
        Self { id, role, email }
    }

    /// Returns true if the user holds the given role.
    pub fn has_role(&self, role: UserRole) -> bool {
        self.role == role
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    /// Token is valid but the user lacks the role for this endpoint.
    #[error("Insufficient permissions")]
    InsufficientPermissions,

    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this error indicates the user should re-authenticate.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::TokenExpired)
    }
}
