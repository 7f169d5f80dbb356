//! Domain entities.

pub mod account;
pub mod audit;
pub mod token;

pub use account::Account;
pub use audit::{AuditEvent, AuditEventType};
pub use token::{AuthToken, Claims, TokenKind};
