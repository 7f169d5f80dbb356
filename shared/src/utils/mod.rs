//! Shared utility helpers.

pub mod validation;

pub use validation::{is_blank, is_valid_email};
