//! No-op implementation of AuditLogRepository for when audit logging is not needed

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::audit::AuditEvent;
use crate::errors::DomainError;

use super::AuditLogRepository;

/// No-op implementation of AuditLogRepository
///
/// Used as the default audit backend when no durable audit store is wired.
pub struct NoOpAuditLogRepository;

impl NoOpAuditLogRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpAuditLogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuditLogRepository for NoOpAuditLogRepository {
    async fn create(&self, _event: &AuditEvent) -> Result<(), DomainError> {
        Ok(())
    }

    async fn find_by_account(
        &self,
        _account_id: Uuid,
        _limit: usize,
    ) -> Result<Vec<AuditEvent>, DomainError> {
        Ok(Vec::new())
    }
}

// Also implement for () to allow simple type defaults
#[async_trait]
impl AuditLogRepository for () {
    async fn create(&self, _event: &AuditEvent) -> Result<(), DomainError> {
        Ok(())
    }

    async fn find_by_account(
        &self,
        _account_id: Uuid,
        _limit: usize,
    ) -> Result<Vec<AuditEvent>, DomainError> {
        Ok(Vec::new())
    }
}
