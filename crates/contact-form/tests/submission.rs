/// End-to-end submission scenarios against a recording relay
///
/// Covers the round trip (fill, blur, submit, settle) on success and failure,
/// and the honeypot drop which must never reach the relay.

use async_trait::async_trait;
use contact_form::{
    BlockReason, ContactForm, ContactPayload, FieldEvent, FieldId, FieldRules, FormState,
    NotificationKind, RelayClient, RelayError, SubmissionStatus, SubmitOutcome,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::sync::{Arc, Mutex};

/// Records every payload and answers with a fixed result
struct RecordingRelay {
    calls: Mutex<Vec<ContactPayload>>,
    result: Result<(), RelayError>,
}

impl RecordingRelay {
    fn succeeding() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            result: Ok(()),
        }
    }

    fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            result: Err(RelayError::Rejected {
                status: 500,
                message: "smtp unavailable".to_string(),
            }),
        }
    }

    fn calls(&self) -> Vec<ContactPayload> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RelayClient for RecordingRelay {
    async fn submit(&self, payload: &ContactPayload) -> Result<(), RelayError> {
        self.calls.lock().unwrap().push(payload.clone());
        self.result.clone()
    }
}

fn ada() -> ContactForm {
    let mut form = ContactForm::new();
    form.update_field(FieldId::Name, "Ada", FieldEvent::Change);
    form.update_field(FieldId::Name, "Ada", FieldEvent::Blur);
    form.update_field(FieldId::Email, "ada@x.com", FieldEvent::Change);
    form.update_field(FieldId::Email, "ada@x.com", FieldEvent::Blur);
    form.update_field(FieldId::Message, "hi", FieldEvent::Change);
    form.update_field(FieldId::Message, "hi", FieldEvent::Blur);
    form
}

fn ada_payload() -> ContactPayload {
    ContactPayload {
        name: "Ada".to_string(),
        email: "ada@x.com".to_string(),
        message: "hi".to_string(),
    }
}

#[tokio::test]
async fn test_round_trip_success() {
    let relay = RecordingRelay::succeeding();
    let mut form = ada();
    assert!(form.state().form_is_valid());

    let outcome = form.submit(&relay).await;

    assert_eq!(outcome, SubmitOutcome::Sent);
    assert_eq!(relay.calls(), vec![ada_payload()]);
    assert_eq!(form.state(), &FormState::new());
    assert_eq!(form.status(), SubmissionStatus::Success);
    assert!(!form.is_loading());
}

#[tokio::test]
async fn test_round_trip_failure_keeps_values() {
    let relay = RecordingRelay::failing();
    let mut form = ada();

    let outcome = form.submit(&relay).await;

    assert!(matches!(outcome, SubmitOutcome::Failed(RelayError::Rejected { status: 500, .. })));
    assert_eq!(relay.calls(), vec![ada_payload()]);
    assert_eq!(form.state().submittable_payload(), ada_payload());
    assert!(form.state().form_is_valid());
    assert!(form.has_error());
    assert_eq!(form.notification().map(|n| n.kind), Some(NotificationKind::Error));
    assert!(!form.is_loading());
}

#[tokio::test]
async fn test_retry_after_failure_sends_again() {
    let failing = RecordingRelay::failing();
    let succeeding = RecordingRelay::succeeding();
    let mut form = ada();

    form.submit(&failing).await;
    let outcome = form.submit(&succeeding).await;

    assert_eq!(outcome, SubmitOutcome::Sent);
    assert_eq!(failing.calls().len(), 1);
    assert_eq!(succeeding.calls(), vec![ada_payload()]);
}

#[rstest]
#[case("1")]
#[case("spam text")]
#[case("bot")]
#[tokio::test]
async fn test_honeypot_makes_no_calls(#[case] trap: &str) {
    let relay = RecordingRelay::succeeding();
    let mut form = ada();
    form.update_field(FieldId::Honeypot, trap, FieldEvent::Change);

    let outcome = form.submit(&relay).await;

    assert_eq!(outcome, SubmitOutcome::Dropped);
    assert!(relay.calls().is_empty());
    assert!(form.notification().is_none());
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert_eq!(form.state().submittable_payload(), ada_payload());
}

#[tokio::test]
async fn test_invalid_form_makes_no_calls() {
    let relay = RecordingRelay::succeeding();
    let mut form = ada();
    form.update_field(FieldId::Email, "not-an-email", FieldEvent::Blur);

    let outcome = form.submit(&relay).await;

    assert_eq!(outcome, SubmitOutcome::Blocked(BlockReason::Invalid));
    assert!(relay.calls().is_empty());
    assert_eq!(
        form.state().error_for(FieldId::Email).as_deref(),
        Some("Please enter a valid email address")
    );
}

#[tokio::test]
async fn test_shared_relay_behind_arc() {
    let relay: Arc<dyn RelayClient> = Arc::new(RecordingRelay::succeeding());
    let mut form = ada();
    assert_eq!(form.submit(&relay).await, SubmitOutcome::Sent);
}

#[tokio::test]
async fn test_optional_message_form_sends_without_message() {
    let relay = RecordingRelay::succeeding();
    let state = FormState::with_rules([(FieldId::Message, FieldRules::NONE)]);
    let mut form = ContactForm::with_state(state);
    assert!(!form.can_submit());

    form.update_field(FieldId::Name, "Ada", FieldEvent::Blur);
    form.update_field(FieldId::Email, "ada@x.com", FieldEvent::Blur);
    assert!(form.state().form_is_valid());

    assert_eq!(form.submit(&relay).await, SubmitOutcome::Sent);
    assert_eq!(
        relay.calls(),
        vec![ContactPayload {
            name: "Ada".to_string(),
            email: "ada@x.com".to_string(),
            message: String::new(),
        }]
    );
    assert_eq!(form.state().field(FieldId::Message).rules(), FieldRules::NONE);
}
