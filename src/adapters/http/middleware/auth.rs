//! Authentication middleware and extractors for axum.
//!
//! This module provides:
//! - `auth_middleware` - validates Bearer tokens and injects the user into extensions
//! - `RequireAuth` - extractor for any authenticated user
//! - `RequireFounder` / `RequireVc` - extractors that also check the role claim
//!
//! ```text
//! Request → auth_middleware → injects AuthenticatedUser into extensions
//!                                      ↓
//!                              Handler → RequireAuth extractor reads from extensions
//! ```
//!
//! A request without an `Authorization` header passes through untouched so
//! public routes such as `/api/health` keep working; the extractors reject
//! it with 401 on protected routes.

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::adapters::http::error::ApiError;
use crate::domain::foundation::{AuthError, AuthenticatedUser, UserRole};
use crate::ports::SessionValidator;

/// Auth middleware state - wraps the session validator.
pub type AuthState = Arc<dyn SessionValidator>;

/// Validates `Authorization: Bearer <token>` when present.
///
/// An invalid or expired token is rejected immediately with 401.
pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim);

    let Some(token) = token else {
        return next.run(request).await;
    };

    match validator.validate(token).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(e) => {
            tracing::debug!(error = %e, "Bearer token rejected");
            ApiError::from(e).into_response()
        }
    }
}

fn authenticated(parts: &Parts) -> Result<AuthenticatedUser, ApiError> {
    parts
        .extensions
        .get::<AuthenticatedUser>()
        .cloned()
        .ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))
}

fn with_role(parts: &Parts, role: UserRole) -> Result<AuthenticatedUser, ApiError> {
    let user = authenticated(parts)?;
    if !user.has_role(role) {
        tracing::debug!(user_id = %user.id, required = %role, actual = %user.role, "Role check failed");
        return Err(AuthError::InsufficientPermissions.into());
    }
    Ok(user)
}

/// Any authenticated user.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        authenticated(parts).map(RequireAuth)
    }
}

/// An authenticated user with the `founder` role; 403 otherwise.
#[derive(Debug, Clone)]
pub struct RequireFounder(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for RequireFounder
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        with_role(parts, UserRole::Founder).map(RequireFounder)
    }
}

/// An authenticated user with the `vc` role; 403 otherwise.
#[derive(Debug, Clone)]
pub struct RequireVc(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for RequireVc
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        with_role(parts, UserRole::Vc).map(RequireVc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockSessionValidator;
    use crate::domain::foundation::UserId;
    use axum::body::Body;
    use axum::http::{Request as HttpRequest, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    fn user(role: UserRole) -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new("user-123").unwrap(), role, None)
    }

    fn parts_with(user: Option<AuthenticatedUser>) -> Parts {
        let mut request = HttpRequest::builder().uri("/test").body(()).unwrap();
        if let Some(user) = user {
            request.extensions_mut().insert(user);
        }
        request.into_parts().0
    }

    #[tokio::test]
    async fn require_auth_extracts_user_from_extensions() {
        let mut parts = parts_with(Some(user(UserRole::Founder)));

        let RequireAuth(extracted) = RequireAuth::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(extracted.id.as_str(), "user-123");
    }

    #[tokio::test]
    async fn require_auth_fails_without_user() {
        let mut parts = parts_with(None);

        let err = RequireAuth::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn role_guards_reject_other_role() {
        let mut parts = parts_with(Some(user(UserRole::Founder)));
        let err = RequireVc::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::FORBIDDEN);

        let mut parts = parts_with(Some(user(UserRole::Founder)));
        assert!(RequireFounder::from_request_parts(&mut parts, &()).await.is_ok());
    }

    fn app() -> Router {
        let validator: AuthState = Arc::new(
            MockSessionValidator::new().with_founder("good", UserId::new("founder-1").unwrap()),
        );
        Router::new()
            .route(
                "/me",
                get(|RequireAuth(user): RequireAuth| async move { user.id.to_string() }),
            )
            .route("/open", get(|| async { "ok" }))
            .layer(axum::middleware::from_fn_with_state(validator, auth_middleware))
    }

    async fn status_of(uri: &str, token: Option<&str>) -> StatusCode {
        let mut builder = HttpRequest::builder().uri(uri);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        app()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn middleware_injects_user_for_valid_token() {
        assert_eq!(status_of("/me", Some("good")).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn middleware_rejects_invalid_token() {
        assert_eq!(status_of("/open", Some("bad")).await, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn missing_header_passes_through_to_extractor() {
        assert_eq!(status_of("/open", None).await, StatusCode::OK);
        assert_eq!(status_of("/me", None).await, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unreachable_validator_is_service_unavailable() {
        let validator: AuthState = Arc::new(
            MockSessionValidator::new()
                .with_error(AuthError::service_unavailable("issuer offline")),
        );
        let app = Router::new()
            .route("/open", get(|| async { "ok" }))
            .layer(axum::middleware::from_fn_with_state(validator, auth_middleware));

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/open")
                    .header("Authorization", "Bearer any")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
