// File: contact-form/src/field.rs
// Purpose: Per-field value, rules, validity and touched status

use contact_validation::{self as validation, FieldRules};
use serde::{Deserialize, Serialize};

/// The fields of the contact form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Name,
    Email,
    Message,
    /// Hidden from humans; anything typed here marks the submission as automated
    Honeypot,
}

impl FieldId {
    pub const ALL: [FieldId; 4] = [FieldId::Name, FieldId::Email, FieldId::Message, FieldId::Honeypot];

    /// Input name used in HTML and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Message => "message",
            FieldId::Honeypot => "honeypot",
        }
    }

    /// Label shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Email => "Email",
            FieldId::Message => "Message",
            FieldId::Honeypot => "Leave this field empty",
        }
    }

    /// Parse an input name; unknown names yield `None`
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == name)
    }

    /// Rules the contact form ships with
    pub fn default_rules(&self) -> FieldRules {
        match self {
            FieldId::Name | FieldId::Message => FieldRules::required(),
            FieldId::Email => FieldRules::required_email(),
            FieldId::Honeypot => FieldRules::NONE,
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What triggered a field update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    /// Value edited (keystroke, paste)
    Change,
    /// Field lost focus
    Blur,
}

/// State of a single form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    id: FieldId,
    value: String,
    rules: FieldRules,
    valid: bool,
    touched: bool,
}

impl FieldState {
    /// Empty field with the given rules. The honeypot never carries rules.
    pub fn new(id: FieldId, rules: FieldRules) -> Self {
        let rules = if id == FieldId::Honeypot { FieldRules::NONE } else { rules };
        let mut field = Self {
            id,
            value: String::new(),
            rules,
            valid: false,
            touched: false,
        };
        field.revalidate();
        field
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn rules(&self) -> FieldRules {
        self.rules
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Messages for every failing rule, regardless of touched status
    pub fn violations(&self) -> Vec<String> {
        if self.id == FieldId::Honeypot {
            return Vec::new();
        }
        validation::messages(self.id.label(), &self.value, &self.rules)
    }

    /// First message to show inline; only once the field has been touched
    pub fn visible_error(&self) -> Option<String> {
        if !self.touched || self.valid {
            return None;
        }
        self.violations().into_iter().next()
    }

    pub(crate) fn apply(&mut self, value: String, event: FieldEvent) {
        self.value = value;
        if event == FieldEvent::Blur {
            self.touched = true;
        }
        self.revalidate();
    }

    pub(crate) fn clear(&mut self) {
        self.value.clear();
        self.touched = false;
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.valid = match self.id {
            FieldId::Honeypot => true,
            _ => validation::check(&self.value, &self.rules),
        };
    }
}
