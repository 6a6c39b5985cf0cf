//! Authentication configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Shortest HS256 secret accepted in production.
pub const MIN_PRODUCTION_SECRET_BYTES: usize = 32;

/// Bearer token settings. Tokens are issued by the external auth service.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared HS256 signing secret
    pub jwt_secret: Secret<String>,

    /// Expected `iss` claim, if tokens carry one
    #[serde(default)]
    pub issuer: Option<String>,
}

impl AuthConfig {
    /// Validate authentication configuration
    ///
    /// Any non-empty secret is accepted outside production.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secret = self.jwt_secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("BATVC__AUTH__JWT_SECRET"));
        }
        if *environment == Environment::Production && secret.len() < MIN_PRODUCTION_SECRET_BYTES {
            return Err(ValidationError::JwtSecretTooShort(MIN_PRODUCTION_SECRET_BYTES));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: Secret::new(secret.to_string()),
            issuer: None,
        }
    }

    #[test]
    fn test_validation_missing_secret() {
        assert!(config("").validate(&Environment::Development).is_err());
    }

    #[test]
    fn test_short_secret_only_allowed_outside_production() {
        let config = config("dev-secret");
        assert!(config.validate(&Environment::Development).is_ok());
        assert!(matches!(
            config.validate(&Environment::Production),
            Err(ValidationError::JwtSecretTooShort(32))
        ));
    }

    #[test]
    fn test_validation_valid_production_secret() {
        let config = config("0123456789abcdef0123456789abcdef");
        assert!(config.validate(&Environment::Production).is_ok());
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let config = config("super-secret-value");
        assert!(!format!("{:?}", config).contains("super-secret-value"));
    }
}
