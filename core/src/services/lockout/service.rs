//! Lockout service implementation.

use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::errors::{AuthError, DomainResult};
use crate::repositories::{
    AccountRepository, AuditLogRepository, NoOpAuditLogRepository, TokenRepository,
};
use crate::services::audit::AuditService;

/// Administrative lockout operations over accounts
///
/// Lock and unlock toggle the account's active flag; purge removes the
/// account and its token rows outright. All three are operator actions
/// and record the acting operator in the audit trail when auditing is
/// configured.
pub struct LockoutService<A, T, L = NoOpAuditLogRepository>
where
    A: AccountRepository,
    T: TokenRepository,
    L: AuditLogRepository + 'static,
{
    account_repository: Arc<A>,
    token_repository: Arc<T>,
    audit_service: Option<Arc<AuditService<L>>>,
}

impl<A, T, L> LockoutService<A, T, L>
where
    A: AccountRepository,
    T: TokenRepository,
    L: AuditLogRepository + 'static,
{
    /// Create a new lockout service
    pub fn new(account_repository: Arc<A>, token_repository: Arc<T>) -> Self {
        Self {
            account_repository,
            token_repository,
            audit_service: None,
        }
    }

    /// Create a new lockout service with audit logging
    pub fn with_audit(
        account_repository: Arc<A>,
        token_repository: Arc<T>,
        audit_service: Arc<AuditService<L>>,
    ) -> Self {
        Self {
            account_repository,
            token_repository,
            audit_service: Some(audit_service),
        }
    }

    /// Lock an account and revoke every token it holds
    ///
    /// Tokens are revoked before the account row is updated, so even if
    /// the update fails the account's credentials are already dead.
    pub async fn lock(&self, account_id: Uuid, actor_id: Uuid) -> DomainResult<()> {
        let mut account = self
            .account_repository
            .find_by_id(account_id)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        if !account.is_active {
            return Err(AuthError::AlreadyLocked.into());
        }

        let revoked = self
            .token_repository
            .revoke_all_account_tokens(account_id)
            .await?;

        account.deactivate();
        self.account_repository.update(account).await?;

        info!(%account_id, revoked, "Account locked");

        if let Some(ref audit) = self.audit_service {
            audit.log_account_locked(account_id, actor_id).await;
        }

        Ok(())
    }

    /// Unlock a previously locked account
    ///
    /// Restores the active flag only. Tokens revoked by the lock stay
    /// revoked; the account holder must log in again.
    pub async fn unlock(&self, account_id: Uuid, actor_id: Uuid) -> DomainResult<()> {
        let mut account = self
            .account_repository
            .find_by_id(account_id)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        if account.is_active {
            return Err(AuthError::AlreadyUnlocked.into());
        }

        account.activate();
        self.account_repository.update(account).await?;

        info!(%account_id, "Account unlocked");

        if let Some(ref audit) = self.audit_service {
            audit.log_account_unlocked(account_id, actor_id).await;
        }

        Ok(())
    }

    /// Permanently delete an account and all of its token rows
    ///
    /// No precondition on the account's active state: a live account may
    /// be purged directly.
    pub async fn purge(&self, account_id: Uuid, actor_id: Uuid) -> DomainResult<()> {
        if self
            .account_repository
            .find_by_id(account_id)
            .await?
            .is_none()
        {
            return Err(AuthError::AccountNotFound.into());
        }

        let deleted_tokens = self
            .token_repository
            .delete_account_tokens(account_id)
            .await?;
        self.account_repository.delete(account_id).await?;

        info!(%account_id, deleted_tokens, "Account purged");

        if let Some(ref audit) = self.audit_service {
            audit.log_account_purged(account_id, actor_id).await;
        }

        Ok(())
    }
}
