//! Password reset service implementation.

use std::sync::Arc;
use chrono::{Duration, Utc};
use tracing::info;

use cv_shared::utils::is_blank;

use crate::domain::entities::token::{AuthToken, TokenKind, RESET_TOKEN_EXPIRY_HOURS};
use crate::errors::{AuthError, DomainResult, TokenError, ValidationError};
use crate::repositories::{
    AccountRepository, AuditLogRepository, NoOpAuditLogRepository, TokenRepository,
};
use crate::services::audit::AuditService;
use crate::services::email::EmailSender;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenIssuer;

/// Two-step password reset: a token is mailed to the account's address,
/// then redeemed exactly once with the new password.
pub struct PasswordResetService<A, T, E, H, L = NoOpAuditLogRepository>
where
    A: AccountRepository,
    T: TokenRepository,
    E: EmailSender,
    H: PasswordHasher,
    L: AuditLogRepository + 'static,
{
    account_repository: Arc<A>,
    token_repository: Arc<T>,
    token_issuer: Arc<TokenIssuer>,
    email_sender: Arc<E>,
    password_hasher: Arc<H>,
    audit_service: Option<Arc<AuditService<L>>>,
}

impl<A, T, E, H, L> PasswordResetService<A, T, E, H, L>
where
    A: AccountRepository,
    T: TokenRepository,
    E: EmailSender,
    H: PasswordHasher,
    L: AuditLogRepository + 'static,
{
    /// Create a new password reset service
    pub fn new(
        account_repository: Arc<A>,
        token_repository: Arc<T>,
        token_issuer: Arc<TokenIssuer>,
        email_sender: Arc<E>,
        password_hasher: Arc<H>,
    ) -> Self {
        Self {
            account_repository,
            token_repository,
            token_issuer,
            email_sender,
            password_hasher,
            audit_service: None,
        }
    }

    /// Create a new password reset service with audit logging
    pub fn with_audit(
        account_repository: Arc<A>,
        token_repository: Arc<T>,
        token_issuer: Arc<TokenIssuer>,
        email_sender: Arc<E>,
        password_hasher: Arc<H>,
        audit_service: Arc<AuditService<L>>,
    ) -> Self {
        Self {
            account_repository,
            token_repository,
            token_issuer,
            email_sender,
            password_hasher,
            audit_service: Some(audit_service),
        }
    }

    /// Issue a reset token for the given email and mail it out
    ///
    /// The email lookup happens before any token is written, so an
    /// unknown address leaves the token store untouched.
    pub async fn forgot_password(&self, email: &str) -> DomainResult<()> {
        if is_blank(email) {
            return Err(AuthError::MissingEmail.into());
        }

        let account = self
            .account_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::EmailNotFound)?;

        let reset_value = self.token_issuer.issue_reset_token();
        let reset = AuthToken::new(
            TokenKind::PasswordReset,
            account.id,
            reset_value.clone(),
            Utc::now() + Duration::hours(RESET_TOKEN_EXPIRY_HOURS),
        );
        self.token_repository.save_token(reset).await?;

        self.email_sender
            .send(
                &account.email,
                "Password reset request",
                &format!(
                    "A password reset was requested for your account. \
                     Use this token within {} hour(s): {}",
                    RESET_TOKEN_EXPIRY_HOURS, reset_value
                ),
            )
            .await
            .map_err(|_| AuthError::EmailDeliveryFailed)?;

        info!(account_id = %account.id, "Password reset token issued");

        if let Some(ref audit) = self.audit_service {
            audit.log_password_reset_requested(account.id).await;
        }

        Ok(())
    }

    /// Redeem a reset token and install the new password
    ///
    /// The token is revoked on success so it cannot be redeemed twice.
    /// Unlike login, failures here are specific (revoked vs expired):
    /// the caller already holds the token, so there is nothing to hide.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> DomainResult<()> {
        if is_blank(token) {
            return Err(ValidationError::RequiredField {
                field: "token".to_string(),
            }
            .into());
        }
        if is_blank(new_password) {
            return Err(ValidationError::RequiredField {
                field: "new_password".to_string(),
            }
            .into());
        }

        let stored = match self.token_repository.find_by_value(token).await? {
            Some(stored) if stored.kind == TokenKind::PasswordReset => stored,
            _ => return Err(TokenError::InvalidToken.into()),
        };

        if stored.is_revoked {
            return Err(TokenError::TokenRevoked.into());
        }
        if stored.is_expired() {
            return Err(TokenError::TokenExpired.into());
        }

        let account = self
            .account_repository
            .find_by_id(stored.account_id)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        let hash = self.password_hasher.hash(new_password)?;
        self.account_repository
            .update_password(account.id, &hash)
            .await?;

        self.token_repository
            .revoke_token(&stored.token_value)
            .await?;

        info!(account_id = %account.id, "Password reset completed");

        if let Some(ref audit) = self.audit_service {
            audit.log_password_reset_completed(account.id).await;
        }

        Ok(())
    }
}
