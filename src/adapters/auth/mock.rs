//! Mock session validator for tests.
//!
//! Maps fixed tokens to users so HTTP tests can authenticate without a
//! signed JWT.
//!
//! ```ignore
//! let validator = MockSessionValidator::new()
//!     .with_founder("founder-token", UserId::new("founder-1")?)
//!     .with_vc("vc-token", UserId::new("vc-1")?);
//! ```

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId, UserRole};
use crate::ports::SessionValidator;

/// Tokens not registered return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    tokens: Mutex<HashMap<String, AuthenticatedUser>>,
    force_error: Mutex<Option<AuthError>>,
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        lock(&self.tokens).insert(token.into(), user);
        self
    }

    /// Registers a token for a founder.
    pub fn with_founder(self, token: impl Into<String>, user_id: UserId) -> Self {
        self.with_role(token, user_id, UserRole::Founder)
    }

    /// Registers a token for a VC.
    pub fn with_vc(self, token: impl Into<String>, user_id: UserId) -> Self {
        self.with_role(token, user_id, UserRole::Vc)
    }

    fn with_role(self, token: impl Into<String>, user_id: UserId, role: UserRole) -> Self {
        let email = format!("{}@test.example.com", user_id);
        self.with_user(token, AuthenticatedUser::new(user_id, role, Some(email)))
    }

    /// Forces every validation to fail with `error`.
    pub fn with_error(self, error: AuthError) -> Self {
        *lock(&self.force_error) = Some(error);
        self
    }

    pub fn token_count(&self) -> usize {
        lock(&self.tokens).len()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = lock(&self.force_error).clone() {
            return Err(error);
        }

        lock(&self.tokens)
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
