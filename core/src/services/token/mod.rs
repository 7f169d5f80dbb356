//! Token service module
//!
//! This module handles token minting and validation:
//! - JWT access token issuance and verification
//! - Opaque refresh and password-reset token generation
//! - Background cleanup of expired token rows

mod cleanup;
mod config;
mod issuer;

#[cfg(test)]
mod tests;

pub use cleanup::{TokenCleanupConfig, TokenCleanupService};
pub use config::TokenIssuerConfig;
pub use issuer::TokenIssuer;
