//! Validation rules for the contact form.
//!
//! Each field owns an ordered list of [`Rule`]s. Rules run top to bottom and
//! the first failing rule decides the field's error. The same table backs
//! inline errors in the browser and the server-side re-check.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use validator::ValidateEmail;

use crate::contact::{ContactField, ContactValues, CONTACT_FIELDS};

/// Minimum message length, counted in characters.
pub const COMMENT_MIN_CHARS: usize = 25;

/// Category of a failed rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ErrorKind {
    Required,
    Format,
    Length,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Required => write!(f, "RequiredError"),
            ErrorKind::Format => write!(f, "FormatError"),
            ErrorKind::Length => write!(f, "LengthError"),
        }
    }
}

/// A field's current violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: &'static str,
}

/// Per-field errors, keyed in render order.
pub type FieldErrors = BTreeMap<ContactField, FieldError>;

/// One row of the predicate table: `check` must hold or the field fails
/// with `kind` and `message`.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub check: fn(&str) -> bool,
    pub kind: ErrorKind,
    pub message: &'static str,
}

const FIRST_NAME_RULES: &[Rule] = &[Rule {
    check: is_present,
    kind: ErrorKind::Required,
    message: "Name Required",
}];

const EMAIL_RULES: &[Rule] = &[
    Rule {
        check: is_present,
        kind: ErrorKind::Required,
        message: "Email Required",
    },
    Rule {
        check: is_email,
        kind: ErrorKind::Format,
        message: "Invalid email address",
    },
];

const COMMENT_RULES: &[Rule] = &[
    Rule {
        check: is_present,
        kind: ErrorKind::Required,
        message: "Comments Required",
    },
    Rule {
        check: has_min_comment_length,
        kind: ErrorKind::Length,
        message: "Must be at least 25 characters",
    },
];

/// Rules for one field. `Type` is chosen from a fixed set and has none.
pub fn rules_for(field: ContactField) -> &'static [Rule] {
    match field {
        ContactField::FirstName => FIRST_NAME_RULES,
        ContactField::Email => EMAIL_RULES,
        ContactField::Type => &[],
        ContactField::Comment => COMMENT_RULES,
    }
}

/// Run a field's rules against its current value.
pub fn validate_field(values: &ContactValues, field: ContactField) -> Option<FieldError> {
    let value = values.get(field);
    rules_for(field)
        .iter()
        .find(|rule| !(rule.check)(value))
        .map(|rule| FieldError {
            kind: rule.kind,
            message: rule.message,
        })
}

/// Run every rule. An empty map means the values may be submitted.
pub fn validate_all(values: &ContactValues) -> FieldErrors {
    CONTACT_FIELDS
        .iter()
        .filter_map(|&field| validate_field(values, field).map(|err| (field, err)))
        .collect()
}

/// Flatten errors into `field key -> message`, the shape `AppError` carries.
pub fn error_messages(errors: &FieldErrors) -> std::collections::HashMap<String, String> {
    errors
        .iter()
        .map(|(field, err)| (field.key().to_string(), err.message.to_string()))
        .collect()
}

// ── Predicates ──────────────────────────────────────────────────────

/// Non-empty after trimming whitespace.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Syntactically valid address with a dotted domain, e.g. `jane@example.com`.
///
/// `validator` accepts single-label domains such as `a@b`; the form does not,
/// so the domain must also end in an alphabetic label of two or more letters.
pub fn is_email(value: &str) -> bool {
    if !value.to_string().validate_email() {
        return false;
    }
    let Some((_, domain)) = value.rsplit_once('@') else {
        return false;
    };
    match domain.rsplit_once('.') {
        Some((host, tld)) => {
            !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    }
}

pub fn has_min_comment_length(value: &str) -> bool {
    value.chars().count() >= COMMENT_MIN_CHARS
}
