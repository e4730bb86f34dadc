// File: contact-form/src/relay.rs
// Purpose: Seam between the form and whatever delivers the message

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::wire::ContactPayload;

/// Why a relay attempt failed. Terminal for that attempt; never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    /// Request never completed (connection refused, TLS, DNS, ...)
    #[error("relay request failed: {0}")]
    Transport(String),

    /// Relay answered with a non-200 status
    #[error("relay rejected the message ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Relay answered with something that is not a status envelope
    #[error("unexpected relay response: {0}")]
    Decode(String),
}

/// Single-shot delivery of a contact payload
///
/// Implementations make exactly one attempt per call: no retries, no
/// idempotency key. Timeouts belong to the underlying transport.
#[async_trait]
pub trait RelayClient: Send + Sync {
    async fn submit(&self, payload: &ContactPayload) -> Result<(), RelayError>;
}

#[async_trait]
impl<T: RelayClient + ?Sized> RelayClient for Arc<T> {
    async fn submit(&self, payload: &ContactPayload) -> Result<(), RelayError> {
        (**self).submit(payload).await
    }
}
