// File: src/error.rs
// Purpose: Endpoint errors rendered as `{"data": {"status", "message"}}`

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contact_form::{Envelope, RelayStatus};
use thiserror::Error;
use tracing::{error, warn};

use crate::mailer::MailError;

/// Public description of any mailer failure
pub const MAIL_FAILED: &str = "Failed to send email";

#[derive(Debug, Error)]
pub enum RelayServerError {
    /// Body is not a `{"data": {name, email, message}}` envelope
    #[error("malformed request: {0}")]
    Malformed(String),

    /// Envelope parsed but a field fails its rules
    #[error("invalid submission: {0}")]
    Invalid(String),

    #[error(transparent)]
    Mail(#[from] MailError),
}

impl RelayServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayServerError::Malformed(_) | RelayServerError::Invalid(_) => StatusCode::BAD_REQUEST,
            RelayServerError::Mail(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to the browser; mailer details stay in the log
    pub fn public_message(&self) -> String {
        match self {
            RelayServerError::Mail(_) => MAIL_FAILED.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for RelayServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "relay failed");
        } else {
            warn!(error = %self, "relay request rejected");
        }

        let body = Envelope::new(RelayStatus::failed(status.as_u16(), self.public_message()));
        (status, Json(body)).into_response()
    }
}
