// File: contact-form/src/state.rs
// Purpose: Ordered field states and the aggregate validity flag

use contact_validation::FieldRules;
use tracing::trace;

use crate::field::{FieldEvent, FieldId, FieldState};
use crate::wire::ContactPayload;

/// All field states of the contact form, in display order
///
/// `form_is_valid` is recomputed after every mutation and is the AND of each
/// field's `valid` flag. The honeypot is always valid, so it never blocks a
/// submission on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    fields: Vec<FieldState>,
    form_is_valid: bool,
}

impl FormState {
    /// Fresh form with the default rules for every field
    pub fn new() -> Self {
        Self::with_rules(std::iter::empty())
    }

    /// Fresh form with the given rule overrides; the honeypot's rules stay empty
    pub fn with_rules(overrides: impl IntoIterator<Item = (FieldId, FieldRules)>) -> Self {
        let mut rules: Vec<FieldRules> = FieldId::ALL.iter().map(|id| id.default_rules()).collect();
        for (id, r) in overrides {
            rules[id.index()] = r;
        }

        let fields = FieldId::ALL
            .iter()
            .zip(rules)
            .map(|(id, r)| FieldState::new(*id, r))
            .collect();

        let mut state = Self { fields, form_is_valid: false };
        state.recompute();
        state
    }

    /// Apply a new value to one field
    ///
    /// Only `FieldEvent::Blur` marks the field touched, so errors stay hidden
    /// while the user is still typing.
    pub fn update_field(&mut self, id: FieldId, value: impl Into<String>, event: FieldEvent) {
        let field = &mut self.fields[id.index()];
        field.apply(value.into(), event);
        trace!(field = %id, valid = field.is_valid(), touched = field.is_touched(), "field updated");
        self.recompute();
    }

    pub fn field(&self, id: FieldId) -> &FieldState {
        &self.fields[id.index()]
    }

    pub fn value(&self, id: FieldId) -> &str {
        self.field(id).value()
    }

    /// Fields in display order
    pub fn fields(&self) -> impl Iterator<Item = &FieldState> {
        self.fields.iter()
    }

    pub fn form_is_valid(&self) -> bool {
        self.form_is_valid
    }

    /// Inline error for a field; `None` until the field has been touched
    pub fn error_for(&self, id: FieldId) -> Option<String> {
        self.field(id).visible_error()
    }

    /// The `{name, email, message}` triple; the honeypot is never sent
    pub fn submittable_payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.value(FieldId::Name).to_string(),
            email: self.value(FieldId::Email).to_string(),
            message: self.value(FieldId::Message).to_string(),
        }
    }

    /// Any non-empty honeypot value marks the submission as automated
    pub fn is_bot(&self) -> bool {
        !self.value(FieldId::Honeypot).is_empty()
    }

    /// Back to the initial shape: values cleared, nothing touched
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.recompute();
    }

    fn recompute(&mut self) {
        self.form_is_valid = self.fields.iter().all(FieldState::is_valid);
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
