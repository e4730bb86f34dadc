// File: contact-form/src/lib.rs
// Purpose: Main entry point for the contact-form library

//! # contact-form
//!
//! Field-level state for a contact form, the derived "may submit" flag, a
//! honeypot trap for automated fillers, and a single-shot call to a mail
//! relay endpoint.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use contact_form::{ContactForm, FieldEvent, FieldId, HttpRelayClient};
//!
//! let relay = HttpRelayClient::new("https://example.com/sendEmail");
//! let mut form = ContactForm::new();
//!
//! form.update_field(FieldId::Name, "Ada", FieldEvent::Blur);
//! form.update_field(FieldId::Email, "ada@x.com", FieldEvent::Blur);
//! form.update_field(FieldId::Message, "hi", FieldEvent::Blur);
//!
//! let outcome = form.submit(&relay).await;
//! ```

pub mod field;
pub mod form;
pub mod notification;
pub mod relay;
pub mod state;
pub mod wire;

#[cfg(feature = "http")]
pub mod http;

// Re-export main types
pub use field::{FieldEvent, FieldId, FieldState};
pub use form::{BlockReason, ContactForm, SubmitAttempt, SubmitOutcome};
pub use notification::{Dismissal, Notification, NotificationKind, SubmissionStatus, SUCCESS_TOAST_TTL};
pub use relay::{RelayClient, RelayError};
pub use state::FormState;
pub use wire::{ContactPayload, Envelope, RelayStatus};

#[cfg(feature = "http")]
pub use http::HttpRelayClient;

pub use contact_validation::FieldRules;
