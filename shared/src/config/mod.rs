//! Configuration types loaded from the environment.

pub mod auth;

pub use auth::{AuthConfig, JwtConfig};
