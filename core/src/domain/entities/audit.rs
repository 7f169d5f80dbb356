//! Audit event entity for recording authentication and administrative actions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event types recorded by the auth subsystem
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditEventType {
    // Session events
    LoginSuccess,
    LoginFailure,
    TokenRefreshed,
    Logout,

    // Administrative account events
    AccountLocked,
    AccountUnlocked,
    AccountPurged,

    // Password reset events
    PasswordResetRequested,
    PasswordResetCompleted,
}

impl AuditEventType {
    /// Convert to string representation for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LoginSuccess => "LOGIN_SUCCESS",
            Self::LoginFailure => "LOGIN_FAILURE",
            Self::TokenRefreshed => "TOKEN_REFRESHED",
            Self::Logout => "LOGOUT",
            Self::AccountLocked => "ACCOUNT_LOCKED",
            Self::AccountUnlocked => "ACCOUNT_UNLOCKED",
            Self::AccountPurged => "ACCOUNT_PURGED",
            Self::PasswordResetRequested => "PASSWORD_RESET_REQUESTED",
            Self::PasswordResetCompleted => "PASSWORD_RESET_COMPLETED",
        }
    }

    /// Parse from string representation
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "LOGIN_SUCCESS" => Some(Self::LoginSuccess),
            "LOGIN_FAILURE" => Some(Self::LoginFailure),
            "TOKEN_REFRESHED" => Some(Self::TokenRefreshed),
            "LOGOUT" => Some(Self::Logout),
            "ACCOUNT_LOCKED" => Some(Self::AccountLocked),
            "ACCOUNT_UNLOCKED" => Some(Self::AccountUnlocked),
            "ACCOUNT_PURGED" => Some(Self::AccountPurged),
            "PASSWORD_RESET_REQUESTED" => Some(Self::PasswordResetRequested),
            "PASSWORD_RESET_COMPLETED" => Some(Self::PasswordResetCompleted),
            _ => None,
        }
    }
}

/// An audit log entry
///
/// Audit emission is a best-effort logging side effect; a failed write
/// never fails the flow that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuditEvent {
    /// Unique identifier for the log entry
    pub id: Uuid,

    /// Type of event
    pub event_type: AuditEventType,

    /// Account the event concerns, if known
    pub account_id: Option<Uuid>,

    /// Administrator who performed the action, for administrative events
    pub actor_id: Option<Uuid>,

    /// Failure reason for failed attempts
    pub failure_reason: Option<String>,

    /// Timestamp when the event occurred
    pub created_at: DateTime<Utc>,
}

impl AuditEvent {
    /// Creates a new audit event
    pub fn new(event_type: AuditEventType) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_type,
            account_id: None,
            actor_id: None,
            failure_reason: None,
            created_at: Utc::now(),
        }
    }

    /// Attaches the account the event concerns
    pub fn with_account(mut self, account_id: Uuid) -> Self {
        self.account_id = Some(account_id);
        self
    }

    /// Attaches the acting administrator
    pub fn with_actor(mut self, actor_id: Uuid) -> Self {
        self.actor_id = Some(actor_id);
        self
    }

    /// Attaches a failure reason
    pub fn with_failure(mut self, reason: impl Into<String>) -> Self {
        self.failure_reason = Some(reason.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_builder() {
        let account_id = Uuid::new_v4();
        let actor_id = Uuid::new_v4();
        let event = AuditEvent::new(AuditEventType::AccountLocked)
            .with_account(account_id)
            .with_actor(actor_id);

        assert_eq!(event.event_type, AuditEventType::AccountLocked);
        assert_eq!(event.account_id, Some(account_id));
        assert_eq!(event.actor_id, Some(actor_id));
        assert!(event.failure_reason.is_none());
    }

    #[test]
    fn test_event_type_round_trip() {
        let types = [
            AuditEventType::LoginSuccess,
            AuditEventType::LoginFailure,
            AuditEventType::TokenRefreshed,
            AuditEventType::Logout,
            AuditEventType::AccountLocked,
            AuditEventType::AccountUnlocked,
            AuditEventType::AccountPurged,
            AuditEventType::PasswordResetRequested,
            AuditEventType::PasswordResetCompleted,
        ];

        for event_type in types {
            assert_eq!(
                AuditEventType::from_str(event_type.as_str()),
                Some(event_type)
            );
        }
    }

    #[test]
    fn test_failure_reason() {
        let event = AuditEvent::new(AuditEventType::LoginFailure)
            .with_failure("invalid credentials");

        assert_eq!(
            event.failure_reason.as_deref(),
            Some("invalid credentials")
        );
    }
}
