//! Email delivery contract.
//!
//! Delivery mechanics live in the infrastructure layer; the domain only
//! needs fire-and-await semantics where failure propagates to the caller.

use async_trait::async_trait;

/// Contract for sending a single email
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send an email; a delivery failure is returned, never masked
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), String>;
}
