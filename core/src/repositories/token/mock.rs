//! Mock implementation of TokenRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::{AuthToken, TokenKind};
use crate::errors::DomainError;

use super::r#trait::TokenRepository;

/// Mock token repository for testing
pub struct MockTokenRepository {
    tokens: Arc<RwLock<HashMap<String, AuthToken>>>,
}

impl MockTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert a token directly, bypassing uniqueness checks
    pub async fn insert(&self, token: AuthToken) {
        self.tokens
            .write()
            .await
            .insert(token.token_value.clone(), token);
    }

    /// Total number of stored rows, of any kind or state
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }
}

impl Default for MockTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn save_token(&self, token: AuthToken) -> Result<AuthToken, DomainError> {
        let mut tokens = self.tokens.write().await;

        // Token strings are unique system-wide
        if tokens.contains_key(&token.token_value) {
            return Err(DomainError::Validation {
                message: "Token already exists".to_string(),
            });
        }

        tokens.insert(token.token_value.clone(), token.clone());
        Ok(token)
    }

    async fn find_by_value(&self, token_value: &str) -> Result<Option<AuthToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(token_value).cloned())
    }

    async fn find_access_token_by_account(
        &self,
        account_id: Uuid,
    ) -> Result<Option<AuthToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens
            .values()
            .filter(|t| {
                t.account_id == account_id && t.kind == TokenKind::Access && !t.is_revoked
            })
            .max_by_key(|t| t.created_at)
            .cloned())
    }

    async fn find_by_account_id(&self, account_id: Uuid) -> Result<Vec<AuthToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens
            .values()
            .filter(|t| t.account_id == account_id)
            .cloned()
            .collect())
    }

    async fn revoke_token(&self, token_value: &str) -> Result<bool, DomainError> {
        let mut tokens = self.tokens.write().await;

        if let Some(token) = tokens.get_mut(token_value) {
            token.revoke();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn revoke_all_account_tokens(&self, account_id: Uuid) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let mut count = 0;

        for token in tokens.values_mut() {
            if token.account_id == account_id && !token.is_revoked {
                token.revoke();
                count += 1;
            }
        }

        Ok(count)
    }

    async fn remove_token(&self, token_value: &str) -> Result<bool, DomainError> {
        let mut tokens = self.tokens.write().await;
        Ok(tokens.remove(token_value).is_some())
    }

    async fn delete_account_tokens(&self, account_id: Uuid) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let initial_count = tokens.len();

        tokens.retain(|_, token| token.account_id != account_id);

        Ok(initial_count - tokens.len())
    }

    async fn delete_expired_tokens(&self) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let initial_count = tokens.len();

        tokens.retain(|_, token| !token.is_expired());

        Ok(initial_count - tokens.len())
    }
}
