//! Field rule sets and the validity rule

use serde::{Deserialize, Serialize};

use crate::email::is_valid_email;
use crate::string::{is_blank, is_present};

/// Validation rules for a single field
///
/// Serialized with the same camelCase keys the browser form uses
/// (`{"required": true, "isEmail": true}`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRules {
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub is_email: bool,
}

impl FieldRules {
    /// No rules: the field is always valid
    pub const NONE: FieldRules = FieldRules { required: false, is_email: false };

    pub const fn required() -> Self {
        Self { required: true, is_email: false }
    }

    pub const fn required_email() -> Self {
        Self { required: true, is_email: true }
    }

    pub fn is_empty(&self) -> bool {
        !self.required && !self.is_email
    }
}

/// A single failed rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Required,
    Email,
}

impl Violation {
    /// Inline message shown next to the field
    pub fn message(&self, label: &str) -> String {
        match self {
            Violation::Required => format!("{} is required", label),
            Violation::Email => "Please enter a valid email address".to_string(),
        }
    }
}

/// Evaluate every configured rule against the value
///
/// All rules run; a blank required email reports both violations.
pub fn violations(value: &str, rules: &FieldRules) -> Vec<Violation> {
    let mut found = Vec::new();

    if rules.required && is_blank(value) {
        found.push(Violation::Required);
    }

    if rules.is_email && !is_valid_email(value) {
        found.push(Violation::Email);
    }

    found
}

/// Validity rule: true iff every configured rule passes
pub fn check(value: &str, rules: &FieldRules) -> bool {
    let required_ok = !rules.required || is_present(value);
    let email_ok = !rules.is_email || is_valid_email(value);
    required_ok && email_ok
}

/// Human-readable messages for every failed rule
pub fn messages(label: &str, value: &str, rules: &FieldRules) -> Vec<String> {
    violations(value, rules)
        .iter()
        .map(|v| v.message(label))
        .collect()
}
