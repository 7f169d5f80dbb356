//! Password hashing behind a narrow interface.
//!
//! Used for account secrets only, never for tokens.

use crate::errors::{DomainError, DomainResult};

/// One-way hash and verify contract for account passwords
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password for storage
    fn hash(&self, plain: &str) -> DomainResult<String>;

    /// Verify a plaintext password against a stored hash
    fn verify(&self, plain: &str, hash: &str) -> DomainResult<bool>;
}

/// bcrypt-backed implementation of [`PasswordHasher`]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with the bcrypt default cost
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Create a hasher with an explicit cost (lower costs for tests only)
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plain: &str) -> DomainResult<String> {
        bcrypt::hash(plain, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Failed to hash password: {}", e),
        })
    }

    fn verify(&self, plain: &str, hash: &str) -> DomainResult<bool> {
        bcrypt::verify(plain, hash).map_err(|e| DomainError::Internal {
            message: format!("Failed to verify password: {}", e),
        })
    }
}
