// File: contact-form/src/notification.rs
// Purpose: Toast shown after a submission settles

use std::time::{Duration, Instant};

/// How long the success toast stays up
pub const SUCCESS_TOAST_TTL: Duration = Duration::from_secs(5);

const SUCCESS_MESSAGE: &str = "Thanks! Your message has been sent.";
const ERROR_MESSAGE: &str = "Your message could not be sent. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// When a notification goes away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    /// Disappears on its own after the delay
    After(Duration),
    /// Stays until the user closes it
    Manual,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    /// Underlying reason, for error toasts
    pub detail: Option<String>,
    pub dismissal: Dismissal,
    pub shown_at: Instant,
}

impl Notification {
    pub fn success(shown_at: Instant) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: SUCCESS_MESSAGE.to_string(),
            detail: None,
            dismissal: Dismissal::After(SUCCESS_TOAST_TTL),
            shown_at,
        }
    }

    pub fn error(detail: impl Into<String>, shown_at: Instant) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: ERROR_MESSAGE.to_string(),
            detail: Some(detail.into()),
            dismissal: Dismissal::Manual,
            shown_at,
        }
    }

    /// True once an auto-dismissing notification has outlived its delay
    pub fn is_expired(&self, now: Instant) -> bool {
        match self.dismissal {
            Dismissal::After(ttl) => now.saturating_duration_since(self.shown_at) >= ttl,
            Dismissal::Manual => false,
        }
    }
}

/// Outcome of the last submission as the UI sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success,
    Error,
}

impl From<Option<&Notification>> for SubmissionStatus {
    fn from(notification: Option<&Notification>) -> Self {
        match notification.map(|n| n.kind) {
            None => SubmissionStatus::Idle,
            Some(NotificationKind::Success) => SubmissionStatus::Success,
            Some(NotificationKind::Error) => SubmissionStatus::Error,
        }
    }
}
