// File: contact-form/src/form.rs
// Purpose: Submission gating, honeypot drop, and settling the relay call

use std::time::Instant;
use tracing::{debug, info, warn};

use crate::field::{FieldEvent, FieldId};
use crate::notification::{Notification, SubmissionStatus};
use crate::relay::{RelayClient, RelayError};
use crate::state::FormState;
use crate::wire::ContactPayload;

/// Why the submit control is disabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    /// A relay call is already outstanding
    InFlight,
    /// At least one field fails its rules
    Invalid,
}

/// Result of pressing submit, before any network activity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    Blocked(BlockReason),
    /// Honeypot filled: nothing is sent and nothing is shown
    Dropped,
    /// Loading is now set; send this payload and call `finish_submit`
    Dispatch(ContactPayload),
}

/// What a full `submit` round ended with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed(RelayError),
    Dropped,
    Blocked(BlockReason),
}

/// Contact form controller: field state plus loading, error and toast state
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    state: FormState,
    loading: bool,
    error: bool,
    notification: Option<Notification>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: FormState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Edits stay allowed while a call is in flight
    pub fn update_field(&mut self, id: FieldId, value: impl Into<String>, event: FieldEvent) {
        self.state.update_field(id, value, event);
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        !self.loading && self.state.form_is_valid()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn status(&self) -> SubmissionStatus {
        SubmissionStatus::from(self.notification.as_ref())
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Drop an auto-dismissing toast whose delay has passed
    pub fn expire_notification(&mut self, now: Instant) {
        if self.notification.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notification = None;
        }
    }

    /// Gate the submission and, if it may go out, mark the form as loading
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.loading {
            return SubmitAttempt::Blocked(BlockReason::InFlight);
        }
        if !self.state.form_is_valid() {
            return SubmitAttempt::Blocked(BlockReason::Invalid);
        }
        if self.state.is_bot() {
            debug!("honeypot filled, dropping submission");
            return SubmitAttempt::Dropped;
        }

        self.loading = true;
        SubmitAttempt::Dispatch(self.state.submittable_payload())
    }

    /// Settle an outstanding call started by `begin_submit`
    ///
    /// Success resets the form and shows a self-dismissing toast. Failure keeps
    /// every value so the user can retry, and shows a toast that stays until
    /// dismissed.
    pub fn finish_submit(&mut self, result: Result<(), RelayError>) -> SubmitOutcome {
        self.finish_submit_at(result, Instant::now())
    }

    pub fn finish_submit_at(&mut self, result: Result<(), RelayError>, now: Instant) -> SubmitOutcome {
        self.loading = false;

        match result {
            Ok(()) => {
                info!("contact message sent");
                self.state.reset();
                self.error = false;
                self.notification = Some(Notification::success(now));
                SubmitOutcome::Sent
            }
            Err(err) => {
                warn!(error = %err, "contact message failed");
                self.error = true;
                self.notification = Some(Notification::error(err.to_string(), now));
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Gate, send once, and settle
    pub async fn submit<R>(&mut self, relay: &R) -> SubmitOutcome
    where
        R: RelayClient + ?Sized,
    {
        let payload = match self.begin_submit() {
            SubmitAttempt::Dispatch(payload) => payload,
            SubmitAttempt::Dropped => return SubmitOutcome::Dropped,
            SubmitAttempt::Blocked(reason) => return SubmitOutcome::Blocked(reason),
        };

        let result = relay.submit(&payload).await;
        self.finish_submit(result)
    }
}
