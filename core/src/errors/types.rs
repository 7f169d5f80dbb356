//! Error type definitions for authentication, token and validation failures.
//!
//! Expected business outcomes (wrong password, revoked token, double lock)
//! are expressed as typed errors, never as panics. The presentation layer
//! maps each variant to a response category via its error code.

use cv_shared::types::response::ErrorResponse;
use thiserror::Error;

/// Authentication and account lifecycle errors
///
/// `InvalidCredentials` deliberately collapses "no such email" and "wrong
/// password" so responses cannot be used to enumerate accounts.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account deactivated")]
    AccountDeactivated,

    #[error("Account not found")]
    AccountNotFound,

    #[error("Account already locked")]
    AlreadyLocked,

    #[error("Account already unlocked")]
    AlreadyUnlocked,

    #[error("Email address is required")]
    MissingEmail,

    #[error("Email not found")]
    EmailNotFound,

    #[error("Failed to deliver email")]
    EmailDeliveryFailed,
}

/// Token validation and management errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token is required")]
    MissingToken,

    /// Collapses not-found, revoked and expired on the logout path
    #[error("Invalid or expired token")]
    InvalidOrExpiredToken,

    /// Uniform validation failure: signature mismatch, malformed, expired
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token revoked")]
    TokenRevoked,

    #[error("Token expired")]
    TokenExpired,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors, rejected before any store access
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid email")]
    InvalidEmail,
}

/// Convert AuthError to ErrorResponse
impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        let error_code = match &err {
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::AccountDeactivated => "ACCOUNT_DEACTIVATED",
            AuthError::AccountNotFound => "ACCOUNT_NOT_FOUND",
            AuthError::AlreadyLocked => "ALREADY_LOCKED",
            AuthError::AlreadyUnlocked => "ALREADY_UNLOCKED",
            AuthError::MissingEmail => "MISSING_EMAIL",
            AuthError::EmailNotFound => "EMAIL_NOT_FOUND",
            AuthError::EmailDeliveryFailed => "EMAIL_DELIVERY_FAILED",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert TokenError to ErrorResponse
impl From<TokenError> for ErrorResponse {
    fn from(err: TokenError) -> Self {
        let error_code = match &err {
            TokenError::MissingToken => "MISSING_TOKEN",
            TokenError::InvalidOrExpiredToken => "INVALID_OR_EXPIRED_TOKEN",
            TokenError::InvalidToken => "INVALID_TOKEN",
            TokenError::TokenRevoked => "TOKEN_REVOKED",
            TokenError::TokenExpired => "TOKEN_EXPIRED",
            TokenError::TokenGenerationFailed => "TOKEN_GENERATION_FAILED",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert ValidationError to ErrorResponse
impl From<ValidationError> for ErrorResponse {
    fn from(err: ValidationError) -> Self {
        let error_code = match &err {
            ValidationError::RequiredField { .. } => "REQUIRED_FIELD",
            ValidationError::InvalidEmail => "INVALID_EMAIL",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}
