//! Audit log repository trait defining the interface for audit persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::audit::AuditEvent;
use crate::errors::DomainError;

/// Repository trait for AuditEvent persistence operations
///
/// Implementations should write efficiently; audit persistence must never
/// block or fail the authentication flow that produced the event.
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Create a new audit log entry
    async fn create(&self, event: &AuditEvent) -> Result<(), DomainError>;

    /// Find audit events concerning an account, newest first
    ///
    /// # Arguments
    /// * `account_id` - The account to search for
    /// * `limit` - Maximum number of records to return
    async fn find_by_account(
        &self,
        account_id: Uuid,
        limit: usize,
    ) -> Result<Vec<AuditEvent>, DomainError>;
}
