// File: src/relay.rs
// Purpose: The JSON relay endpoint and the in-process RelayClient used by the HTML form

use async_trait::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use contact_form::{
    ContactPayload, Envelope, FieldEvent, FieldId, FormState, RelayClient, RelayError, RelayStatus,
};
use tracing::{error, info};

use crate::error::RelayServerError;
use crate::mailer::{MailError, OutgoingEmail};
use crate::AppState;

/// Compose the message sent to the site owner
pub fn compose(state: &AppState, payload: &ContactPayload) -> OutgoingEmail {
    OutgoingEmail {
        from: state.mail.from.clone(),
        to: state.mail.to.clone(),
        reply_to: Some(payload.email.trim().to_string()),
        subject: format!("{} {}", state.mail.subject_prefix, payload.name.trim()),
        text: format!(
            "Name: {}\nEmail: {}\n\n{}\n",
            payload.name.trim(),
            payload.email.trim(),
            payload.message
        ),
    }
}

/// Same rules as the browser form, applied to every field at once
pub fn validate(payload: &ContactPayload) -> Result<(), RelayServerError> {
    let mut form = FormState::new();
    form.update_field(FieldId::Name, payload.name.as_str(), FieldEvent::Blur);
    form.update_field(FieldId::Email, payload.email.as_str(), FieldEvent::Blur);
    form.update_field(FieldId::Message, payload.message.as_str(), FieldEvent::Blur);

    if form.form_is_valid() {
        return Ok(());
    }

    let problems: Vec<String> = form.fields().filter_map(|f| f.visible_error()).collect();
    Err(RelayServerError::Invalid(problems.join("; ")))
}

/// Compose and hand the message to the configured mailer
pub async fn deliver(state: &AppState, payload: &ContactPayload) -> Result<(), MailError> {
    let email = compose(state, payload);
    state.mailer.send(&email).await?;
    info!(mailer = state.mailer.name(), to = %email.to, "contact message relayed");
    Ok(())
}

/// `POST /sendEmail`
///
/// Request `{"data": {name, email, message}}`; response
/// `{"data": {"status": 200, "message": "sent"}}` or an error status envelope.
pub async fn send_email(
    State(state): State<AppState>,
    body: Result<Json<Envelope<ContactPayload>>, JsonRejection>,
) -> Result<Json<Envelope<RelayStatus>>, RelayServerError> {
    let Json(envelope) = body.map_err(|e| RelayServerError::Malformed(e.body_text()))?;
    let payload = envelope.into_inner();

    validate(&payload)?;
    deliver(&state, &payload).await?;

    Ok(Json(Envelope::new(RelayStatus::sent())))
}

/// RelayClient that skips HTTP and calls the mailer directly
pub struct MailerRelay {
    state: AppState,
}

impl MailerRelay {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl RelayClient for MailerRelay {
    async fn submit(&self, payload: &ContactPayload) -> Result<(), RelayError> {
        deliver(&self.state, payload).await.map_err(|e| {
            error!(error = %e, "in-process relay failed");
            RelayError::Rejected {
                status: 500,
                message: RelayServerError::from(e).public_message(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MailConfig;
    use crate::mailer::MemoryMailer;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn state() -> AppState {
        let mail = MailConfig {
            from: "site@example.com".to_string(),
            to: "owner@example.com".to_string(),
            ..MailConfig::default()
        };
        AppState::new(Arc::new(MemoryMailer::new()), mail)
    }

    fn ada() -> ContactPayload {
        ContactPayload {
            name: "Ada".to_string(),
            email: "ada@x.com".to_string(),
            message: "hi".to_string(),
        }
    }

    #[test]
    fn test_compose() {
        let email = compose(&state(), &ada());
        assert_eq!(
            email,
            OutgoingEmail {
                from: "site@example.com".to_string(),
                to: "owner@example.com".to_string(),
                reply_to: Some("ada@x.com".to_string()),
                subject: "New contact form submission from Ada".to_string(),
                text: "Name: Ada\nEmail: ada@x.com\n\nhi\n".to_string(),
            }
        );
    }

    #[test]
    fn test_validate() {
        assert!(validate(&ada()).is_ok());

        let mut payload = ada();
        payload.email = "not-an-email".to_string();
        payload.message = "  ".to_string();
        let err = validate(&payload).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid submission: Please enter a valid email address; Message is required"
        );
    }

    #[tokio::test]
    async fn test_mailer_relay_maps_failure() {
        let mailer = Arc::new(MemoryMailer::new());
        mailer.fail_with("connection refused");
        let state = AppState::new(mailer, state().mail.as_ref().clone());

        let err = MailerRelay::new(state).submit(&ada()).await.unwrap_err();
        assert_eq!(
            err,
            RelayError::Rejected {
                status: 500,
                message: "Failed to send email".to_string(),
            }
        );
    }
}
