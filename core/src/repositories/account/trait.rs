//! Account repository trait defining the interface for account persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository trait for Account entity persistence operations
///
/// Account provisioning is handled elsewhere; this subsystem only reads
/// accounts, mutates their active flag and password hash, and deletes
/// them on an explicit purge.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its ID
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with the given ID
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError>;

    /// Find an account by its email, matched exactly as stored
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Persist changes to an existing account
    ///
    /// # Returns
    /// * `Ok(Account)` - The updated account
    /// * `Err(DomainError)` - Account missing or update failed
    async fn update(&self, account: Account) -> Result<Account, DomainError>;

    /// Overwrite only the stored password hash of an account
    ///
    /// Must not touch any other account field.
    async fn update_password(
        &self,
        account_id: Uuid,
        password_hash: &str,
    ) -> Result<(), DomainError>;

    /// Hard-delete an account row
    ///
    /// # Returns
    /// * `Ok(true)` - Account was deleted
    /// * `Ok(false)` - Account not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
