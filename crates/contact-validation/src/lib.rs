//! Contact Validation
//!
//! Pure validity rules for contact form fields. Used by the client-side form
//! state machine and re-checked by the relay endpoint before sending mail.

pub mod email;
pub mod rules;
pub mod string;

// Re-export all validators
pub use email::*;
pub use rules::*;
pub use string::*;
