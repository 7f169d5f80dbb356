//! Tests for the token issuer.

use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenIssuer, TokenIssuerConfig};

fn test_account() -> Account {
    Account::new(
        "doctor@clinic.example.com".to_string(),
        "hash".to_string(),
        Uuid::new_v4(),
    )
}

#[test]
fn test_issue_and_validate_access_token() {
    let issuer = TokenIssuer::new(TokenIssuerConfig::default());
    let account = test_account();

    let token = issuer.issue_access_token(&account).unwrap();
    let claims = issuer.validate_access_token(&token, true).unwrap();

    assert_eq!(claims.account_id().unwrap(), account.id);
    assert_eq!(claims.email, account.email);
    assert_eq!(claims.iss, "carevault");
    assert_eq!(claims.aud, "carevault-api");
}

#[test]
fn test_validate_rejects_tampered_token() {
    let issuer = TokenIssuer::new(TokenIssuerConfig::default());
    let token = issuer.issue_access_token(&test_account()).unwrap();

    let mut tampered = token.clone();
    tampered.pop();
    tampered.push('x');

    let err = issuer.validate_access_token(&tampered, true).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::InvalidToken)));
}

#[test]
fn test_validate_rejects_token_signed_with_other_secret() {
    let issuer_a = TokenIssuer::new(TokenIssuerConfig::default());
    let issuer_b = TokenIssuer::new(TokenIssuerConfig {
        jwt_secret: "a-completely-different-secret".to_string(),
        ..TokenIssuerConfig::default()
    });

    let token = issuer_a.issue_access_token(&test_account()).unwrap();

    let err = issuer_b.validate_access_token(&token, true).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::InvalidToken)));
}

#[test]
fn test_validate_rejects_wrong_audience() {
    let issuer_a = TokenIssuer::new(TokenIssuerConfig::default());
    let issuer_b = TokenIssuer::new(TokenIssuerConfig {
        audience: "some-other-api".to_string(),
        ..TokenIssuerConfig::default()
    });

    let token = issuer_a.issue_access_token(&test_account()).unwrap();

    let err = issuer_b.validate_access_token(&token, true).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::InvalidToken)));
}

#[test]
fn test_expiry_check_can_be_skipped() {
    // Minted already expired, well beyond the leeway window
    let issuer = TokenIssuer::new(TokenIssuerConfig {
        access_token_expiry_minutes: -10,
        ..TokenIssuerConfig::default()
    });
    let token = issuer.issue_access_token(&test_account()).unwrap();

    let err = issuer.validate_access_token(&token, true).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::InvalidToken)));

    // Signature and claims still verify when expiry is ignored
    let claims = issuer.validate_access_token(&token, false).unwrap();
    assert_eq!(claims.email, "doctor@clinic.example.com");
}

#[test]
fn test_opaque_tokens_are_unique() {
    let issuer = TokenIssuer::new(TokenIssuerConfig::default());

    let a = issuer.issue_refresh_token();
    let b = issuer.issue_refresh_token();
    let c = issuer.issue_reset_token();

    assert_ne!(a, b);
    assert_ne!(b, c);
    // 64 random bytes base64-encoded
    assert!(a.len() >= 64);
}

#[test]
fn test_access_tokens_for_same_account_differ() {
    let issuer = TokenIssuer::new(TokenIssuerConfig::default());
    let account = test_account();

    // The jti nonce uniquifies tokens minted within the same second
    let a = issuer.issue_access_token(&account).unwrap();
    let b = issuer.issue_access_token(&account).unwrap();
    assert_ne!(a, b);
}
