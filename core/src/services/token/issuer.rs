//! Token issuer: mints signed access tokens and opaque refresh/reset tokens.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::RngCore;

use crate::domain::entities::account::Account;
use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenIssuerConfig;

/// Issues and validates tokens
///
/// Pure: a function of its input and the injected signing secret. The
/// issuer never touches the token store.
pub struct TokenIssuer {
    config: TokenIssuerConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    validation_ignore_expiry: Validation,
}

impl TokenIssuer {
    /// Creates a new token issuer from explicit configuration
    pub fn new(config: TokenIssuerConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.leeway = config.leeway_seconds;
        validation.validate_exp = true;

        let mut validation_ignore_expiry = validation.clone();
        validation_ignore_expiry.validate_exp = false;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
            validation_ignore_expiry,
        }
    }

    /// Mints a signed access token for an account
    ///
    /// Claims carry the subject id, email, role reference, a uniquifying
    /// nonce and the issued-at timestamp.
    pub fn issue_access_token(&self, account: &Account) -> DomainResult<String> {
        let claims = Claims::new_access_token(
            account.id,
            account.email.clone(),
            account.role_id,
            self.config.issuer.clone(),
            self.config.audience.clone(),
            self.config.access_token_expiry_minutes,
        );

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Generates an opaque refresh token
    ///
    /// Carries no embedded claims; its only meaning is as a lookup key in
    /// the token store.
    pub fn issue_refresh_token(&self) -> String {
        Self::random_opaque()
    }

    /// Generates an opaque single-use password-reset token
    pub fn issue_reset_token(&self) -> String {
        Self::random_opaque()
    }

    /// Verifies an access token and returns its claims
    ///
    /// Signature, issuer and audience are always checked; expiry only when
    /// `check_expiry` is set, with the configured clock-skew leeway. Every
    /// failure collapses to the same `InvalidToken` result so callers
    /// cannot distinguish "expired" from "tampered".
    pub fn validate_access_token(
        &self,
        token: &str,
        check_expiry: bool,
    ) -> DomainResult<Claims> {
        let validation = if check_expiry {
            &self.validation
        } else {
            &self.validation_ignore_expiry
        };

        decode::<Claims>(token, &self.decoding_key, validation)
            .map(|data| data.claims)
            .map_err(|_| DomainError::Token(TokenError::InvalidToken))
    }

    /// Absolute expiry timestamp for an access token minted now
    pub fn access_token_expiry(&self) -> DateTime<Utc> {
        Utc::now() + Duration::minutes(self.config.access_token_expiry_minutes)
    }

    /// Absolute expiry timestamp for a refresh token minted now
    pub fn refresh_token_expiry(&self) -> DateTime<Utc> {
        Utc::now() + Duration::days(self.config.refresh_token_expiry_days)
    }

    /// Access token lifetime in seconds, for client responses
    pub fn access_expires_in(&self) -> i64 {
        self.config.access_token_expiry_minutes * 60
    }

    /// 64 cryptographically random bytes, base64-encoded
    fn random_opaque() -> String {
        let mut bytes = [0u8; 64];
        rand::thread_rng().fill_bytes(&mut bytes);
        BASE64.encode(bytes)
    }
}
