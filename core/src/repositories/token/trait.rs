//! Token repository trait defining the interface for token persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::{AuthToken, TokenKind};
use crate::errors::DomainError;

/// Repository trait for AuthToken entity persistence operations
///
/// The opaque token string is the natural key: a lookup may not know the
/// token's kind yet, so all three kinds live in one store keyed by value.
///
/// # Security Considerations
/// - A token string, once issued, is unique system-wide
/// - Revoked tokens must be immediately invalidated
/// - Expired tokens should be periodically hard-deleted
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Save a new token to the repository
    ///
    /// # Returns
    /// * `Ok(AuthToken)` - The saved token
    /// * `Err(DomainError)` - Save failed (e.g., duplicate token string)
    async fn save_token(&self, token: AuthToken) -> Result<AuthToken, DomainError>;

    /// Save several tokens at once
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of tokens saved
    async fn save_tokens(&self, tokens: Vec<AuthToken>) -> Result<usize, DomainError> {
        let mut saved = 0;
        for token in tokens {
            self.save_token(token).await?;
            saved += 1;
        }
        Ok(saved)
    }

    /// Find a token of any kind by its opaque string value
    async fn find_by_value(&self, token_value: &str) -> Result<Option<AuthToken>, DomainError>;

    /// Find a refresh token by its string value
    ///
    /// Returns `None` when the value exists but belongs to a token of a
    /// different kind.
    async fn find_refresh_token(
        &self,
        token_value: &str,
    ) -> Result<Option<AuthToken>, DomainError> {
        match self.find_by_value(token_value).await? {
            Some(token) if token.kind == TokenKind::Refresh => Ok(Some(token)),
            _ => Ok(None),
        }
    }

    /// Find the account's most recently issued live access token
    ///
    /// Under normal flow there is at most one live access token per
    /// account; recency is a defensive tie-break, not a ranking.
    async fn find_access_token_by_account(
        &self,
        account_id: Uuid,
    ) -> Result<Option<AuthToken>, DomainError>;

    /// Find all tokens owned by an account, of any kind
    async fn find_by_account_id(&self, account_id: Uuid) -> Result<Vec<AuthToken>, DomainError>;

    /// Mark a token revoked by its string value
    ///
    /// # Returns
    /// * `Ok(true)` - Token was revoked
    /// * `Ok(false)` - Token not found
    async fn revoke_token(&self, token_value: &str) -> Result<bool, DomainError>;

    /// Revoke every non-revoked token owned by an account
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of tokens revoked
    async fn revoke_all_account_tokens(&self, account_id: Uuid) -> Result<usize, DomainError>;

    /// Hard-delete a token row by its string value
    ///
    /// # Returns
    /// * `Ok(true)` - Token was deleted
    /// * `Ok(false)` - Token not found
    async fn remove_token(&self, token_value: &str) -> Result<bool, DomainError>;

    /// Hard-delete every token row owned by an account
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of tokens deleted
    async fn delete_account_tokens(&self, account_id: Uuid) -> Result<usize, DomainError>;

    /// Hard-delete token rows whose expiry has passed
    ///
    /// Called by the periodic sweep, not by request handlers.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of expired tokens deleted
    async fn delete_expired_tokens(&self) -> Result<usize, DomainError>;

    /// Check if a token exists and is usable (not expired, not revoked)
    async fn is_token_usable(&self, token_value: &str) -> Result<bool, DomainError> {
        match self.find_by_value(token_value).await? {
            Some(token) => Ok(token.is_usable()),
            None => Ok(false),
        }
    }
}
