//! Mail delivery backends
//!
//! The relay hands a fully composed [`OutgoingEmail`] to a [`Mailer`]. The SMTP
//! backend speaks to a real server through lettre; the memory backend keeps
//! messages in process for tests and local runs.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::config::{Config, MailBackend};

pub mod memory;
pub mod smtp;

pub use memory::MemoryMailer;
pub use smtp::SmtpMailer;

/// Errors from composing or delivering a message
#[derive(Debug, Clone, Error)]
pub enum MailError {
    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    #[error("could not build message: {0}")]
    Build(String),

    #[error("SMTP error: {0}")]
    Smtp(String),

    #[error("mailer not configured: {0}")]
    MissingConfig(String),
}

/// A plain-text message ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub text: String,
}

/// Async email sending
///
/// Implement this to provide alternative delivery backends.
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;

    /// Backend name for logs
    fn name(&self) -> &'static str;
}

/// Build the mailer selected by `smtp.backend`
pub fn from_config(config: &Config) -> Result<Arc<dyn Mailer>, MailError> {
    match config.smtp.backend {
        MailBackend::Smtp => Ok(Arc::new(SmtpMailer::from_config(&config.smtp)?)),
        MailBackend::Memory => Ok(Arc::new(MemoryMailer::new())),
    }
}
