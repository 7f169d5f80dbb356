//! Audit service implementation.
//!
//! Every helper is best-effort: a failed write is logged and swallowed so
//! audit emission can never fail the flow that produced the event.

use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::domain::entities::audit::{AuditEvent, AuditEventType};
use crate::repositories::AuditLogRepository;

/// Service for recording audit events
pub struct AuditService<R>
where
    R: AuditLogRepository,
{
    repository: Arc<R>,
}

impl<R> AuditService<R>
where
    R: AuditLogRepository,
{
    /// Create a new audit service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Record a login outcome
    pub async fn log_login(
        &self,
        account_id: Option<Uuid>,
        success: bool,
        failure_reason: Option<&str>,
    ) {
        let event_type = if success {
            AuditEventType::LoginSuccess
        } else {
            AuditEventType::LoginFailure
        };

        let mut event = AuditEvent::new(event_type);
        if let Some(id) = account_id {
            event = event.with_account(id);
        }
        if let Some(reason) = failure_reason {
            event = event.with_failure(reason);
        }

        self.write(event).await;
    }

    /// Record a successful token rotation
    pub async fn log_token_refreshed(&self, account_id: Uuid) {
        self.write(AuditEvent::new(AuditEventType::TokenRefreshed).with_account(account_id))
            .await;
    }

    /// Record a logout
    pub async fn log_logout(&self, account_id: Uuid) {
        self.write(AuditEvent::new(AuditEventType::Logout).with_account(account_id))
            .await;
    }

    /// Record an administrative account lock
    pub async fn log_account_locked(&self, account_id: Uuid, actor_id: Uuid) {
        self.write(
            AuditEvent::new(AuditEventType::AccountLocked)
                .with_account(account_id)
                .with_actor(actor_id),
        )
        .await;
    }

    /// Record an administrative account unlock
    pub async fn log_account_unlocked(&self, account_id: Uuid, actor_id: Uuid) {
        self.write(
            AuditEvent::new(AuditEventType::AccountUnlocked)
                .with_account(account_id)
                .with_actor(actor_id),
        )
        .await;
    }

    /// Record an administrative account purge
    pub async fn log_account_purged(&self, account_id: Uuid, actor_id: Uuid) {
        self.write(
            AuditEvent::new(AuditEventType::AccountPurged)
                .with_account(account_id)
                .with_actor(actor_id),
        )
        .await;
    }

    /// Record a password reset request
    pub async fn log_password_reset_requested(&self, account_id: Uuid) {
        self.write(
            AuditEvent::new(AuditEventType::PasswordResetRequested).with_account(account_id),
        )
        .await;
    }

    /// Record a completed password reset
    pub async fn log_password_reset_completed(&self, account_id: Uuid) {
        self.write(
            AuditEvent::new(AuditEventType::PasswordResetCompleted).with_account(account_id),
        )
        .await;
    }

    async fn write(&self, event: AuditEvent) {
        if let Err(e) = self.repository.create(&event).await {
            warn!(
                event_type = event.event_type.as_str(),
                "Failed to write audit event: {}", e
            );
        }
    }
}
