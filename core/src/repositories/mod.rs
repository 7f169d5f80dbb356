//! Repository interfaces consumed by the domain services.
//!
//! Concrete implementations live in the infrastructure layer. The mock
//! implementations are compiled unconditionally so the crate's own
//! integration tests and downstream crates can drive the services
//! without a database.

pub mod account;
pub mod audit;
pub mod token;

pub use account::AccountRepository;
pub use audit::{AuditLogRepository, NoOpAuditLogRepository};
pub use token::TokenRepository;

pub use account::MockAccountRepository;
pub use audit::MockAuditLogRepository;
pub use token::MockTokenRepository;
