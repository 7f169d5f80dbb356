//! Mock implementation of AuditLogRepository for testing

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::domain::entities::audit::{AuditEvent, AuditEventType};
use crate::errors::DomainError;

use super::r#trait::AuditLogRepository;

/// Mock audit log repository for testing
pub struct MockAuditLogRepository {
    pub events: Arc<Mutex<Vec<AuditEvent>>>,
}

impl MockAuditLogRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Count recorded events of a given type
    pub fn count_of(&self, event_type: AuditEventType) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.event_type == event_type)
            .count()
    }
}

impl Default for MockAuditLogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuditLogRepository for MockAuditLogRepository {
    async fn create(&self, event: &AuditEvent) -> Result<(), DomainError> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }

    async fn find_by_account(
        &self,
        account_id: Uuid,
        limit: usize,
    ) -> Result<Vec<AuditEvent>, DomainError> {
        let mut events: Vec<AuditEvent> = self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.account_id == Some(account_id))
            .cloned()
            .collect();
        events.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        events.truncate(limit);
        Ok(events)
    }
}
