//! HTTP middleware for axum.
//!
//! - `auth` - Authentication middleware, extractors, and role guards

pub mod auth;

pub use auth::{auth_middleware, AuthState, RequireAuth, RequireFounder, RequireVc};
