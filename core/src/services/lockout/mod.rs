//! Administrative account lockout: lock, unlock and purge.

mod service;

#[cfg(test)]
mod tests;

pub use service::LockoutService;
