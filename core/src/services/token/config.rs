//! Configuration for the token issuer

use cv_shared::config::JwtConfig;

/// Configuration for the token issuer
///
/// The signing secret is owned by the issuer for its lifetime; nothing
/// else reads it.
#[derive(Debug, Clone)]
pub struct TokenIssuerConfig {
    /// Symmetric JWT signing secret
    pub jwt_secret: String,
    /// Issuer claim expected and stamped on access tokens
    pub issuer: String,
    /// Audience claim expected and stamped on access tokens
    pub audience: String,
    /// Access token expiry in minutes
    pub access_token_expiry_minutes: i64,
    /// Refresh token expiry in days
    pub refresh_token_expiry_days: i64,
    /// Allowed clock skew in seconds when validating expiry
    pub leeway_seconds: u64,
}

impl Default for TokenIssuerConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            issuer: "carevault".to_string(),
            audience: "carevault-api".to_string(),
            access_token_expiry_minutes: 15,
            refresh_token_expiry_days: 1,
            leeway_seconds: 30,
        }
    }
}

impl From<JwtConfig> for TokenIssuerConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret,
            issuer: config.issuer,
            audience: config.audience,
            access_token_expiry_minutes: config.access_token_expiry_minutes,
            refresh_token_expiry_days: config.refresh_token_expiry_days,
            leeway_seconds: config.leeway_seconds,
        }
    }
}
