//! Tests for the administrative lockout service.

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::domain::entities::audit::AuditEventType;
use crate::domain::entities::token::{AuthToken, TokenKind};
use crate::errors::{AuthError, DomainError};
use crate::repositories::{
    AccountRepository, MockAccountRepository, MockAuditLogRepository, MockTokenRepository,
    TokenRepository,
};
use crate::services::audit::AuditService;
use crate::services::lockout::LockoutService;

type TestService = LockoutService<MockAccountRepository, MockTokenRepository>;

struct Harness {
    service: TestService,
    accounts: Arc<MockAccountRepository>,
    tokens: Arc<MockTokenRepository>,
    account: Account,
    actor_id: Uuid,
}

fn harness() -> Harness {
    let account = Account::new(
        "nurse@clinic.example.com".to_string(),
        "hash".to_string(),
        Uuid::new_v4(),
    );
    let accounts = Arc::new(MockAccountRepository::with_existing_account(account.clone()));
    let tokens = Arc::new(MockTokenRepository::new());
    let service = LockoutService::new(accounts.clone(), tokens.clone());

    Harness {
        service,
        accounts,
        tokens,
        account,
        actor_id: Uuid::new_v4(),
    }
}

async fn seed_live_session(tokens: &MockTokenRepository, account_id: Uuid) {
    tokens
        .insert(AuthToken::new(
            TokenKind::Access,
            account_id,
            "live-access".to_string(),
            Utc::now() + Duration::minutes(15),
        ))
        .await;
    tokens
        .insert(AuthToken::new(
            TokenKind::Refresh,
            account_id,
            "live-refresh".to_string(),
            Utc::now() + Duration::days(1),
        ))
        .await;
}

#[tokio::test]
async fn test_lock_deactivates_account_and_revokes_tokens() {
    let h = harness();
    seed_live_session(&h.tokens, h.account.id).await;

    h.service.lock(h.account.id, h.actor_id).await.unwrap();

    let locked = h
        .accounts
        .find_by_id(h.account.id)
        .await
        .unwrap()
        .unwrap();
    assert!(!locked.is_active);

    for token in h.tokens.find_by_account_id(h.account.id).await.unwrap() {
        assert!(token.is_revoked);
    }
}

#[tokio::test]
async fn test_lock_unknown_account_fails() {
    let h = harness();

    let err = h.service.lock(Uuid::new_v4(), h.actor_id).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::AccountNotFound)));
}

#[tokio::test]
async fn test_lock_already_locked_account_fails() {
    let h = harness();
    h.service.lock(h.account.id, h.actor_id).await.unwrap();

    let err = h.service.lock(h.account.id, h.actor_id).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::AlreadyLocked)));
}

#[tokio::test]
async fn test_unlock_restores_active_flag() {
    let h = harness();
    h.service.lock(h.account.id, h.actor_id).await.unwrap();

    h.service.unlock(h.account.id, h.actor_id).await.unwrap();

    let unlocked = h
        .accounts
        .find_by_id(h.account.id)
        .await
        .unwrap()
        .unwrap();
    assert!(unlocked.is_active);
}

#[tokio::test]
async fn test_unlock_does_not_restore_revoked_tokens() {
    let h = harness();
    seed_live_session(&h.tokens, h.account.id).await;
    h.service.lock(h.account.id, h.actor_id).await.unwrap();

    h.service.unlock(h.account.id, h.actor_id).await.unwrap();

    for token in h.tokens.find_by_account_id(h.account.id).await.unwrap() {
        assert!(token.is_revoked);
    }
}

#[tokio::test]
async fn test_unlock_active_account_fails() {
    let h = harness();

    let err = h
        .service
        .unlock(h.account.id, h.actor_id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::AlreadyUnlocked)));
}

#[tokio::test]
async fn test_purge_deletes_account_and_tokens() {
    let h = harness();
    seed_live_session(&h.tokens, h.account.id).await;

    h.service.purge(h.account.id, h.actor_id).await.unwrap();

    assert!(h
        .accounts
        .find_by_id(h.account.id)
        .await
        .unwrap()
        .is_none());
    assert_eq!(h.tokens.len().await, 0);
}

#[tokio::test]
async fn test_purge_does_not_require_prior_lock() {
    let h = harness();

    // Account is still active
    h.service.purge(h.account.id, h.actor_id).await.unwrap();

    assert!(h
        .accounts
        .find_by_id(h.account.id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_purge_unknown_account_fails() {
    let h = harness();

    let err = h
        .service
        .purge(Uuid::new_v4(), h.actor_id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::AccountNotFound)));
}

#[tokio::test]
async fn test_admin_actions_are_audited_with_actor() {
    let account = Account::new(
        "nurse@clinic.example.com".to_string(),
        "hash".to_string(),
        Uuid::new_v4(),
    );
    let account_id = account.id;
    let actor_id = Uuid::new_v4();
    let accounts = Arc::new(MockAccountRepository::with_existing_account(account));
    let tokens = Arc::new(MockTokenRepository::new());
    let audit_repo = Arc::new(MockAuditLogRepository::new());
    let service = LockoutService::with_audit(
        accounts,
        tokens,
        Arc::new(AuditService::new(audit_repo.clone())),
    );

    service.lock(account_id, actor_id).await.unwrap();
    service.unlock(account_id, actor_id).await.unwrap();
    service.purge(account_id, actor_id).await.unwrap();

    assert_eq!(audit_repo.count_of(AuditEventType::AccountLocked), 1);
    assert_eq!(audit_repo.count_of(AuditEventType::AccountUnlocked), 1);
    assert_eq!(audit_repo.count_of(AuditEventType::AccountPurged), 1);

    let events = audit_repo.events.lock().unwrap();
    for event in events.iter() {
        assert_eq!(event.account_id, Some(account_id));
        assert_eq!(event.actor_id, Some(actor_id));
    }
}
