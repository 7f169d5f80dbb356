//! Token entities for the session lifecycle.
//!
//! A single tagged entity covers all three token usages (access, refresh,
//! password reset) because lookups are keyed uniformly by the opaque token
//! string before the kind is known.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Password reset token lifetime (1 hour)
pub const RESET_TOKEN_EXPIRY_HOURS: i64 = 1;

/// Distinguishes the three usages of a stored token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Short-lived signed credential proving identity and role
    Access,
    /// Longer-lived opaque credential used solely to mint a new pair
    Refresh,
    /// Single-use opaque credential authorizing one password change
    PasswordReset,
}

impl TokenKind {
    /// String representation for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Refresh => "refresh",
            Self::PasswordReset => "password_reset",
        }
    }
}

/// Claims structure for signed access tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account ID)
    pub sub: String,

    /// Account email, a stable identity claim
    pub email: String,

    /// Role reference claim
    pub role: String,

    /// Unique token identifier (uniquifying nonce)
    pub jti: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,
}

impl Claims {
    /// Creates new claims for an access token
    pub fn new_access_token(
        account_id: Uuid,
        email: String,
        role_id: Uuid,
        issuer: String,
        audience: String,
        expiry_minutes: i64,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::minutes(expiry_minutes);

        Self {
            sub: account_id.to_string(),
            email,
            role: role_id.to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer,
            aud: audience,
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the account ID from the claims
    pub fn account_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Persisted token record
///
/// Expiry and revocation are independent kill signals: either one alone
/// makes the token unusable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    /// Internal surrogate identifier
    pub id: Uuid,

    /// The opaque token string itself, unique system-wide
    pub token_value: String,

    /// Which of the three usages this token serves
    pub kind: TokenKind,

    /// Account this token belongs to
    pub account_id: Uuid,

    /// Absolute expiry timestamp
    pub expires_at: DateTime<Utc>,

    /// Whether the token has been explicitly revoked
    pub is_revoked: bool,

    /// Timestamp when the token was issued
    pub created_at: DateTime<Utc>,
}

impl AuthToken {
    /// Creates a new unrevoked token record
    pub fn new(
        kind: TokenKind,
        account_id: Uuid,
        token_value: String,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            token_value,
            kind,
            account_id,
            expires_at,
            is_revoked: false,
            created_at: Utc::now(),
        }
    }

    /// Checks if the token has passed its expiry timestamp
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Checks if the token may still be accepted
    pub fn is_usable(&self) -> bool {
        !self.is_expired() && !self.is_revoked
    }

    /// Revokes the token
    pub fn revoke(&mut self) {
        self.is_revoked = true;
    }
}
