//! Business services containing domain logic and use cases.

pub mod audit;
pub mod email;
pub mod lockout;
pub mod password;
pub mod password_reset;
pub mod session;
pub mod token;

// Re-export commonly used types
pub use audit::AuditService;
pub use email::EmailSender;
pub use lockout::LockoutService;
pub use password::{BcryptPasswordHasher, PasswordHasher};
pub use password_reset::PasswordResetService;
pub use session::SessionService;
pub use token::{TokenCleanupConfig, TokenCleanupService, TokenIssuer, TokenIssuerConfig};
