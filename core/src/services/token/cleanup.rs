//! Periodic sweep that hard-deletes expired token rows.
//!
//! Housekeeping only: the sweep runs on its own schedule, independent of
//! the request path, and shares the token store with the handlers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::errors::DomainError;
use crate::repositories::TokenRepository;

/// Configuration for the token cleanup sweep
#[derive(Debug, Clone)]
pub struct TokenCleanupConfig {
    /// How often to run the sweep (in seconds)
    pub interval_seconds: u64,
    /// Whether to enable the sweep
    pub enabled: bool,
}

impl Default for TokenCleanupConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 86_400, // Run every 24 hours
            enabled: true,
        }
    }
}

/// Service for cleaning up expired token rows of every kind
pub struct TokenCleanupService<R: TokenRepository + 'static> {
    repository: Arc<R>,
    config: TokenCleanupConfig,
    started: AtomicBool,
}

impl<R: TokenRepository> TokenCleanupService<R> {
    /// Create a new token cleanup service
    pub fn new(repository: Arc<R>, config: TokenCleanupConfig) -> Self {
        Self {
            repository,
            config,
            started: AtomicBool::new(false),
        }
    }

    /// Run a single sweep cycle
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of expired rows deleted
    /// * `Err(DomainError)` - If the sweep fails
    pub async fn run_cleanup(&self) -> Result<usize, DomainError> {
        if !self.config.enabled {
            return Ok(0);
        }

        let deleted = self.repository.delete_expired_tokens().await?;
        info!(deleted, "Token sweep deleted expired rows");
        Ok(deleted)
    }

    /// Start the sweep as a background task
    ///
    /// Spawns a single long-lived tokio task that sleeps between sweeps.
    /// Guarded so it cannot be started twice in one process; no
    /// cross-process coordination is attempted.
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            warn!("Token cleanup sweep is disabled");
            return;
        }

        if self
            .started
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            warn!("Token cleanup sweep already running, ignoring second start");
            return;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds);

        tokio::spawn(async move {
            info!(
                interval_seconds = self.config.interval_seconds,
                "Token cleanup sweep started"
            );

            let mut interval_timer = tokio::time::interval(interval);
            // The first tick fires immediately; skip it so the initial
            // sweep happens one full interval after startup.
            interval_timer.tick().await;

            loop {
                interval_timer.tick().await;

                if let Err(e) = self.run_cleanup().await {
                    error!("Token sweep cycle failed: {}", e);
                }
            }
        });
    }
}
