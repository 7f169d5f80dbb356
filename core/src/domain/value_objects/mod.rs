//! Value objects returned by the domain services.

pub mod session_tokens;

pub use session_tokens::SessionTokens;
