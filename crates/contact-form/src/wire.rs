// File: contact-form/src/wire.rs
// Purpose: JSON envelope exchanged with the relay endpoint

use serde::{Deserialize, Serialize};

use crate::relay::RelayError;

/// Status the relay reports for a delivered message
pub const STATUS_SENT: u16 = 200;

/// Callable-function envelope: every request and response body is `{"data": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    pub fn into_inner(self) -> T {
        self.data
    }
}

/// The three strings sent to the relay
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Relay response body: `{"status": 200, "message": "sent"}` or an error status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayStatus {
    pub status: u16,
    pub message: String,
}

impl RelayStatus {
    pub fn sent() -> Self {
        Self {
            status: STATUS_SENT,
            message: "sent".to_string(),
        }
    }

    pub fn failed(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn is_sent(&self) -> bool {
        self.status == STATUS_SENT
    }

    /// Binary outcome: only status 200 counts as delivered
    pub fn into_result(self) -> Result<(), RelayError> {
        if self.is_sent() {
            Ok(())
        } else {
            Err(RelayError::Rejected {
                status: self.status,
                message: self.message,
            })
        }
    }
}
