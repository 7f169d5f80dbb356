//! Shared response and API types.

pub mod response;

pub use response::{ApiResponse, ErrorResponse};
