//! Adapters - Implementations of port interfaces.
//!
//! - `ai` - generative backend clients (OpenAI-compatible, mock)
//! - `auth` - bearer token validation
//! - `http` - axum REST API
//! - `memory` - in-memory repositories for tests and local runs
//! - `postgres` - sqlx repositories

pub mod ai;
pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
