//! Mock implementation of AccountRepository for testing

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::{AuthError, DomainError};

use super::r#trait::AccountRepository;

/// Mock account repository for testing
pub struct MockAccountRepository {
    pub accounts: Arc<Mutex<Vec<Account>>>,
}

impl MockAccountRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock repository pre-seeded with an account
    pub fn with_existing_account(account: Account) -> Self {
        let repo = Self::new();
        repo.accounts.lock().unwrap().push(account);
        repo
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.iter().find(|a| a.email == email).cloned())
    }

    async fn update(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.lock().unwrap();
        if let Some(existing) = accounts.iter_mut().find(|a| a.id == account.id) {
            *existing = account.clone();
            Ok(account)
        } else {
            Err(DomainError::Auth(AuthError::AccountNotFound))
        }
    }

    async fn update_password(
        &self,
        account_id: Uuid,
        password_hash: &str,
    ) -> Result<(), DomainError> {
        let mut accounts = self.accounts.lock().unwrap();
        if let Some(existing) = accounts.iter_mut().find(|a| a.id == account_id) {
            existing.password_hash = password_hash.to_string();
            Ok(())
        } else {
            Err(DomainError::Auth(AuthError::AccountNotFound))
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut accounts = self.accounts.lock().unwrap();
        if let Some(index) = accounts.iter().position(|a| a.id == id) {
            accounts.remove(index);
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
