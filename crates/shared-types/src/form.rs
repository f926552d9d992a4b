//! Contact form state and its transition function.
//!
//! [`ContactForm::reduce`] is pure: it takes the current state and an action
//! and returns the next state plus the effects the host must perform. The
//! host (a Dioxus component, or `ContactController` in tests) owns the
//! network call and the notification.

use std::collections::BTreeSet;

use crate::contact::{ContactField, ContactResponse, ContactValues, ResponseType, CONTACT_FIELDS};
use crate::validation::{validate_all, validate_field, FieldError, FieldErrors};

/// Something the user or the submission client did.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    /// A keystroke or selection changed one field.
    SetField(ContactField, String),
    /// A field lost focus.
    Touch(ContactField),
    /// The submit control was activated.
    Submit,
    /// The submission client produced a result.
    Settled(ContactResponse),
}

/// Work the host must do after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEffect {
    /// Hand these values to the submission client.
    Submit(ContactValues),
    /// Hand this message to the notification sink.
    Notify(ResponseType, String),
}

/// Everything the contact form knows.
///
/// `errors` always mirrors the current values; `touched` only decides which
/// of them are shown.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    values: ContactValues,
    touched: BTreeSet<ContactField>,
    errors: FieldErrors,
    is_submitting: bool,
}

impl Default for ContactForm {
    fn default() -> Self {
        let values = ContactValues::default();
        Self {
            errors: validate_all(&values),
            values,
            touched: BTreeSet::new(),
            is_submitting: false,
        }
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &ContactValues {
        &self.values
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn is_touched(&self, field: ContactField) -> bool {
        self.touched.contains(&field)
    }

    /// The field's recorded error, whether or not it is visible yet.
    pub fn error(&self, field: ContactField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Error to display: only for fields that are touched and invalid.
    pub fn visible_error(&self, field: ContactField) -> Option<&'static str> {
        if !self.is_touched(field) {
            return None;
        }
        self.errors.get(&field).map(|err| err.message)
    }

    /// Apply `action` and return the next state together with its effects.
    pub fn reduce(mut self, action: FormAction) -> (Self, Vec<FormEffect>) {
        let effects = match action {
            FormAction::SetField(field, value) => {
                if self.values.set(field, &value) {
                    self.revalidate(field);
                }
                Vec::new()
            }
            FormAction::Touch(field) => {
                self.touched.insert(field);
                self.revalidate(field);
                Vec::new()
            }
            FormAction::Submit => self.submit(),
            FormAction::Settled(response) => self.settle(response),
        };
        (self, effects)
    }

    fn submit(&mut self) -> Vec<FormEffect> {
        // A submission is already in flight; ignore the repeat.
        if self.is_submitting {
            return Vec::new();
        }

        self.errors = validate_all(&self.values);
        if !self.errors.is_empty() {
            self.touched.extend(CONTACT_FIELDS.iter().copied());
            return Vec::new();
        }

        self.is_submitting = true;
        vec![FormEffect::Submit(self.values.clone())]
    }

    fn settle(&mut self, response: ContactResponse) -> Vec<FormEffect> {
        if response.is_success() {
            *self = Self::new();
        } else {
            self.is_submitting = false;
        }
        vec![FormEffect::Notify(response.kind, response.message)]
    }

    fn revalidate(&mut self, field: ContactField) {
        match validate_field(&self.values, field) {
            Some(err) => {
                self.errors.insert(field, err);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }
}
