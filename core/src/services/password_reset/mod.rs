//! Password reset flow: request a reset token by email, then redeem it.

mod service;

#[cfg(test)]
mod tests;

pub use service::PasswordResetService;
