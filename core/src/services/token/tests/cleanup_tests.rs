//! Tests for the expired-token sweep.

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::token::{AuthToken, TokenKind};
use crate::repositories::MockTokenRepository;
use crate::services::token::{TokenCleanupConfig, TokenCleanupService};

async fn seeded_repository() -> Arc<MockTokenRepository> {
    let repository = Arc::new(MockTokenRepository::new());
    let account_id = Uuid::new_v4();

    repository
        .insert(AuthToken::new(
            TokenKind::Access,
            account_id,
            "expired-access".to_string(),
            Utc::now() - Duration::minutes(5),
        ))
        .await;
    repository
        .insert(AuthToken::new(
            TokenKind::PasswordReset,
            account_id,
            "expired-reset".to_string(),
            Utc::now() - Duration::hours(2),
        ))
        .await;
    repository
        .insert(AuthToken::new(
            TokenKind::Refresh,
            account_id,
            "live-refresh".to_string(),
            Utc::now() + Duration::days(1),
        ))
        .await;

    repository
}

#[tokio::test]
async fn test_cleanup_deletes_only_expired_rows() {
    let repository = seeded_repository().await;
    let service = TokenCleanupService::new(repository.clone(), TokenCleanupConfig::default());

    let deleted = service.run_cleanup().await.unwrap();

    assert_eq!(deleted, 2);
    assert_eq!(repository.len().await, 1);
}

#[tokio::test]
async fn test_disabled_cleanup_is_a_noop() {
    let repository = seeded_repository().await;
    let config = TokenCleanupConfig {
        enabled: false,
        ..TokenCleanupConfig::default()
    };
    let service = TokenCleanupService::new(repository.clone(), config);

    let deleted = service.run_cleanup().await.unwrap();

    assert_eq!(deleted, 0);
    assert_eq!(repository.len().await, 3);
}

#[tokio::test(start_paused = true)]
async fn test_background_sweep_runs_on_interval() {
    let repository = seeded_repository().await;
    let config = TokenCleanupConfig {
        interval_seconds: 60,
        enabled: true,
    };
    let service = Arc::new(TokenCleanupService::new(repository.clone(), config));

    service.start_background_task();

    // Nothing happens before the first interval elapses
    tokio::time::sleep(std::time::Duration::from_secs(30)).await;
    assert_eq!(repository.len().await, 3);

    tokio::time::sleep(std::time::Duration::from_secs(40)).await;
    assert_eq!(repository.len().await, 1);
}

#[tokio::test(start_paused = true)]
async fn test_background_sweep_starts_only_once() {
    let repository = Arc::new(MockTokenRepository::new());
    let config = TokenCleanupConfig {
        interval_seconds: 60,
        enabled: true,
    };
    let service = Arc::new(TokenCleanupService::new(repository, config));

    service.clone().start_background_task();
    // Second start is ignored rather than spawning a duplicate sweeper
    service.start_background_task();
}
