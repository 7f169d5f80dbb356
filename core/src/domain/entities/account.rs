//! Account entity representing a staff login account in the CareVault system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account entity representing a provisioned login account
///
/// An inactive account can authenticate for nothing: every entry point
/// that mints or renews tokens checks `is_active` first, and locking an
/// account revokes all of its live tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Login email, matched exactly as stored
    pub email: String,

    /// Salted bcrypt hash of the account password
    pub password_hash: String,

    /// Whether the account may authenticate
    pub is_active: bool,

    /// Reference to the account's role
    pub role_id: Uuid,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new active account
    pub fn new(email: String, password_hash: String, role_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            is_active: true,
            role_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Deactivates the account, blocking all token issuance and renewal
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    /// Reactivates the account
    ///
    /// Does not restore any previously revoked tokens; a fresh login is
    /// required to obtain a live session.
    pub fn activate(&mut self) {
        self.is_active = true;
        self.updated_at = Utc::now();
    }

    /// Replaces the stored password hash
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_is_active() {
        let account = Account::new(
            "nurse@clinic.example.com".to_string(),
            "bcrypt-hash".to_string(),
            Uuid::new_v4(),
        );

        assert_eq!(account.email, "nurse@clinic.example.com");
        assert!(account.is_active);
        assert_eq!(account.created_at, account.updated_at);
    }

    #[test]
    fn test_deactivate_and_activate() {
        let mut account = Account::new(
            "admin@clinic.example.com".to_string(),
            "hash".to_string(),
            Uuid::new_v4(),
        );

        account.deactivate();
        assert!(!account.is_active);

        account.activate();
        assert!(account.is_active);
    }

    #[test]
    fn test_set_password_hash() {
        let mut account = Account::new(
            "doctor@clinic.example.com".to_string(),
            "old-hash".to_string(),
            Uuid::new_v4(),
        );

        account.set_password_hash("new-hash".to_string());
        assert_eq!(account.password_hash, "new-hash");
    }
}
