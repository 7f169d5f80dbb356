//! Session lifecycle service implementation.

use std::sync::Arc;
use chrono::Utc;
use tracing::{debug, warn};

use cv_shared::utils::is_blank;

use crate::domain::entities::account::Account;
use crate::domain::entities::token::{AuthToken, TokenKind};
use crate::domain::value_objects::SessionTokens;
use crate::errors::{AuthError, DomainResult, TokenError};
use crate::repositories::{
    AccountRepository, AuditLogRepository, NoOpAuditLogRepository, TokenRepository,
};
use crate::services::audit::AuditService;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenIssuer;

/// Orchestrates the session lifecycle for an account
///
/// Per-account sessions are not a stored state machine: they are derived
/// from the token rows. Multiple concurrent sessions per account are
/// permitted; login never touches prior sessions.
///
/// Note: there is no optimistic concurrency token on token rows. Two
/// refresh calls racing on the same still-valid refresh token can both
/// pass the revocation check before either writes, so both may succeed.
pub struct SessionService<A, T, H, L = NoOpAuditLogRepository>
where
    A: AccountRepository,
    T: TokenRepository,
    H: PasswordHasher,
    L: AuditLogRepository + 'static,
{
    /// Account repository for identity and status lookups
    account_repository: Arc<A>,
    /// Token repository for persistence of issued credentials
    token_repository: Arc<T>,
    /// Issuer for signed access tokens and opaque refresh tokens
    token_issuer: Arc<TokenIssuer>,
    /// Hasher used to verify account passwords
    password_hasher: Arc<H>,
    /// Optional audit service for recording session events
    audit_service: Option<Arc<AuditService<L>>>,
}

impl<A, T, H, L> SessionService<A, T, H, L>
where
    A: AccountRepository,
    T: TokenRepository,
    H: PasswordHasher,
    L: AuditLogRepository + 'static,
{
    /// Create a new session service
    pub fn new(
        account_repository: Arc<A>,
        token_repository: Arc<T>,
        token_issuer: Arc<TokenIssuer>,
        password_hasher: Arc<H>,
    ) -> Self {
        Self {
            account_repository,
            token_repository,
            token_issuer,
            password_hasher,
            audit_service: None,
        }
    }

    /// Create a new session service with audit logging
    pub fn with_audit(
        account_repository: Arc<A>,
        token_repository: Arc<T>,
        token_issuer: Arc<TokenIssuer>,
        password_hasher: Arc<H>,
        audit_service: Arc<AuditService<L>>,
    ) -> Self {
        Self {
            account_repository,
            token_repository,
            token_issuer,
            password_hasher,
            audit_service: Some(audit_service),
        }
    }

    /// Authenticate with email and password and open a new session
    ///
    /// "No such email" and "wrong password" are collapsed into one
    /// `InvalidCredentials` failure so responses cannot be used to
    /// enumerate accounts. A deactivated account fails with
    /// `AccountDeactivated` regardless of the presented password.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<SessionTokens> {
        let account = match self.account_repository.find_by_email(email).await? {
            Some(account) => account,
            None => {
                if let Some(ref audit) = self.audit_service {
                    audit.log_login(None, false, Some("unknown email")).await;
                }
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        // A deactivated account fails the same way no matter what password
        // was presented
        if !account.is_active {
            if let Some(ref audit) = self.audit_service {
                audit
                    .log_login(Some(account.id), false, Some("account deactivated"))
                    .await;
            }
            return Err(AuthError::AccountDeactivated.into());
        }

        if !self
            .password_hasher
            .verify(password, &account.password_hash)?
        {
            if let Some(ref audit) = self.audit_service {
                audit
                    .log_login(Some(account.id), false, Some("wrong password"))
                    .await;
            }
            return Err(AuthError::InvalidCredentials.into());
        }

        let tokens = self.issue_session(&account).await?;

        if let Some(ref audit) = self.audit_service {
            audit.log_login(Some(account.id), true, None).await;
        }

        Ok(tokens)
    }

    /// Rotate a refresh token into a new access/refresh pair
    ///
    /// This is a routine client-retry path, so most invalid inputs yield
    /// an empty result rather than a hard failure: missing, unknown or
    /// revoked refresh tokens all mean "please log in again". An expired
    /// refresh token, or one owned by a missing or inactive account,
    /// additionally triggers the hard-expire cascade.
    pub async fn refresh(
        &self,
        refresh_token: &str,
        access_token: Option<&str>,
    ) -> DomainResult<Option<SessionTokens>> {
        if is_blank(refresh_token) {
            return Ok(None);
        }

        let stored = match self.token_repository.find_refresh_token(refresh_token).await? {
            Some(token) if !token.is_revoked => token,
            _ => return Ok(None),
        };

        if stored.is_expired() {
            self.hard_expire(&stored).await?;
            return Ok(None);
        }

        let account = match self.account_repository.find_by_id(stored.account_id).await? {
            Some(account) if account.is_active => account,
            _ => {
                self.hard_expire(&stored).await?;
                return Ok(None);
            }
        };

        // Retire the access token the caller presented when it belongs to
        // this account; fall back to the account's latest access token.
        let old_access = match access_token {
            Some(value) if !is_blank(value) => {
                match self.token_repository.find_by_value(value).await? {
                    Some(token)
                        if token.kind == TokenKind::Access
                            && token.account_id == account.id =>
                    {
                        Some(token)
                    }
                    _ => {
                        self.token_repository
                            .find_access_token_by_account(account.id)
                            .await?
                    }
                }
            }
            _ => {
                self.token_repository
                    .find_access_token_by_account(account.id)
                    .await?
            }
        };

        if let Some(token) = old_access {
            self.token_repository
                .revoke_token(&token.token_value)
                .await?;
        }

        // The old refresh token is retired unconditionally
        self.token_repository
            .revoke_token(&stored.token_value)
            .await?;

        let tokens = self.issue_session(&account).await?;

        if let Some(ref audit) = self.audit_service {
            audit.log_token_refreshed(account.id).await;
        }

        Ok(Some(tokens))
    }

    /// Revoke a session by its refresh token
    ///
    /// Not-found, already-revoked and expired are collapsed into one
    /// `InvalidOrExpiredToken` failure; which of the three occurred is
    /// not leaked. The account's outstanding access token is revoked
    /// best-effort: its absence is not an error.
    pub async fn logout(&self, refresh_token: &str) -> DomainResult<bool> {
        if is_blank(refresh_token) {
            return Err(TokenError::MissingToken.into());
        }

        let stored = match self.token_repository.find_refresh_token(refresh_token).await? {
            Some(token) => token,
            None => return Err(TokenError::InvalidOrExpiredToken.into()),
        };

        if stored.is_revoked || stored.expires_at <= Utc::now() {
            return Err(TokenError::InvalidOrExpiredToken.into());
        }

        self.token_repository
            .revoke_token(&stored.token_value)
            .await?;

        if let Some(access) = self
            .token_repository
            .find_access_token_by_account(stored.account_id)
            .await?
        {
            // Best-effort: the session is already over once the refresh
            // token is revoked, so a store fault here must not fail logout
            if let Err(e) = self
                .token_repository
                .revoke_token(&access.token_value)
                .await
            {
                warn!(
                    account_id = %stored.account_id,
                    "Failed to revoke access token during logout: {}", e
                );
            }
        }

        if let Some(ref audit) = self.audit_service {
            audit.log_logout(stored.account_id).await;
        }

        Ok(true)
    }

    /// Mint and persist a fresh access/refresh pair for an account
    async fn issue_session(&self, account: &Account) -> DomainResult<SessionTokens> {
        let access_value = self.token_issuer.issue_access_token(account)?;
        let refresh_value = self.token_issuer.issue_refresh_token();

        let access = AuthToken::new(
            TokenKind::Access,
            account.id,
            access_value.clone(),
            self.token_issuer.access_token_expiry(),
        );
        let refresh = AuthToken::new(
            TokenKind::Refresh,
            account.id,
            refresh_value.clone(),
            self.token_issuer.refresh_token_expiry(),
        );

        self.token_repository
            .save_tokens(vec![access, refresh])
            .await?;

        Ok(SessionTokens::new(
            access_value,
            refresh_value,
            self.token_issuer.access_expires_in(),
        ))
    }

    /// An expired refresh token means the session is truly over: delete
    /// the refresh row and the account's outstanding access rows so no
    /// orphaned access tokens remain.
    async fn hard_expire(&self, refresh: &AuthToken) -> DomainResult<()> {
        debug!(
            account_id = %refresh.account_id,
            "Hard-expiring session for stale refresh token"
        );

        self.token_repository
            .remove_token(&refresh.token_value)
            .await?;

        for token in self
            .token_repository
            .find_by_account_id(refresh.account_id)
            .await?
        {
            if token.kind == TokenKind::Access {
                self.token_repository
                    .remove_token(&token.token_value)
                    .await?;
            }
        }

        Ok(())
    }
}
