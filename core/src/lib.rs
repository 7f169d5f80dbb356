//! # CareVault Core
//!
//! Core business logic and domain layer for the CareVault backend.
//! This crate contains domain entities, the authentication and session
//! lifecycle services, repository interfaces, and error types that form
//! the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::account::Account;
pub use domain::entities::token::{AuthToken, Claims, TokenKind};
pub use domain::value_objects::SessionTokens;
pub use errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
pub use repositories::{AccountRepository, AuditLogRepository, TokenRepository};
pub use services::session::SessionService;
pub use services::token::{TokenIssuer, TokenIssuerConfig};
