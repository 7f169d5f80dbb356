//! Audit service for recording authentication and administrative events.

mod service;

pub use service::AuditService;
