//! Audit log repository interface, no-op and mock implementations.

mod mock;
mod noop;
mod r#trait;

pub use mock::MockAuditLogRepository;
pub use noop::NoOpAuditLogRepository;
pub use r#trait::AuditLogRepository;
