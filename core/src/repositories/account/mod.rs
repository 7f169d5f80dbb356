//! Account repository interface and mock.

mod mock;
mod r#trait;

pub use mock::MockAccountRepository;
pub use r#trait::AccountRepository;
