//! # CareVault Shared
//!
//! Shared types, configuration and utilities used across the CareVault
//! backend crates.

pub mod config;
pub mod types;
pub mod utils;
