//! Session token pair value object returned to the client.

use serde::{Deserialize, Serialize};

/// Access/refresh token pair issued by a successful login or refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTokens {
    /// Signed JWT access token for API authorization
    pub access_token: String,

    /// Opaque refresh token used solely to mint a new pair
    pub refresh_token: String,

    /// Access token expiry time in seconds
    pub expires_in: i64,
}

impl SessionTokens {
    /// Creates a new session token pair
    pub fn new(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_tokens_serialization() {
        let tokens = SessionTokens::new(
            "access-jwt".to_string(),
            "opaque-refresh".to_string(),
            900,
        );

        let json = serde_json::to_string(&tokens).unwrap();
        let deserialized: SessionTokens = serde_json::from_str(&json).unwrap();

        assert_eq!(tokens, deserialized);
        assert_eq!(deserialized.expires_in, 900);
    }
}
