//! Test doubles local to the password reset tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::errors::DomainResult;
use crate::services::email::EmailSender;
use crate::services::password::PasswordHasher;

/// Records outgoing mail instead of sending it
pub struct MockEmailSender {
    pub sent: Arc<Mutex<Vec<(String, String, String)>>>,
    fail: bool,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// A sender whose every delivery attempt fails
    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        if self.fail {
            return Err("smtp unavailable".to_string());
        }
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), subject.to_string(), body.to_string()));
        Ok(())
    }
}

/// Reversible stand-in for bcrypt so tests stay fast
pub struct PlainTextHasher;

impl PlainTextHasher {
    pub fn hash_value(plain: &str) -> String {
        format!("plain:{}", plain)
    }
}

impl PasswordHasher for PlainTextHasher {
    fn hash(&self, plain: &str) -> DomainResult<String> {
        Ok(Self::hash_value(plain))
    }

    fn verify(&self, plain: &str, hash: &str) -> DomainResult<bool> {
        Ok(hash == Self::hash_value(plain))
    }
}
