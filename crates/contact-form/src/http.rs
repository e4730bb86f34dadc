// File: contact-form/src/http.rs
// Purpose: RelayClient over HTTP, speaking the `{"data": ...}` envelope

use async_trait::async_trait;
use tracing::debug;

use crate::relay::{RelayClient, RelayError};
use crate::wire::{ContactPayload, Envelope, RelayStatus};

/// Posts the contact payload to a relay endpoint
#[derive(Debug, Clone)]
pub struct HttpRelayClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRelayClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Use a preconfigured client (timeouts, proxies, TLS roots)
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RelayClient for HttpRelayClient {
    async fn submit(&self, payload: &ContactPayload) -> Result<(), RelayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&Envelope::new(payload))
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let http_status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        debug!(status = %http_status, bytes = body.len(), "relay responded");

        // The envelope status is authoritative; the HTTP status only shows up
        // in the error when the body is not an envelope.
        let envelope: Envelope<RelayStatus> = serde_json::from_slice(&body)
            .map_err(|e| RelayError::Decode(format!("HTTP {}: {}", http_status, e)))?;

        envelope.into_inner().into_result()
    }
}
