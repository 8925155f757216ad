use serde::Serialize;
use std::fmt;

use crate::constants::{DESCRIPTION_MAX_LENGTH, NAME_MAX_LENGTH};

pub const MUST_BE_SET: &str = "Must be set.";
pub const NAME_TOO_LONG: &str = "Must be shorter than 64 characters.";
pub const DESCRIPTION_TOO_LONG: &str = "Must be shorter than 512 characters.";
pub const INVALID_EPIC_ID: &str = "Must be a valid epic ID.";
pub const INVALID_ISSUE_TYPE: &str = "Must be a valid issue type.";
pub const INVALID_STATUS: &str = "Must be a valid status.";

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Renders errors as `[ field: message, field: message ]`
pub fn format_errors(errors: &[ValidationError]) -> String {
    let joined = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[ {} ]", joined)
}

/// True when the value is present and not only whitespace
pub fn is_set(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// True when the value is absent or at most `max` characters long
pub fn within_length(value: Option<&str>, max: usize) -> bool {
    value.map_or(0, |v| v.chars().count()) <= max
}

/// Checks a name: required, and at most 64 characters once set.
pub fn validate_name(name: Option<&str>, errors: &mut Vec<ValidationError>) {
    if !is_set(name) {
        errors.push(ValidationError::new("name", MUST_BE_SET));
    } else if !within_length(name, NAME_MAX_LENGTH) {
        errors.push(ValidationError::new("name", NAME_TOO_LONG));
    }
}

/// Checks an optional description
pub fn validate_description(description: Option<&str>, errors: &mut Vec<ValidationError>) {
    if !within_length(description, DESCRIPTION_MAX_LENGTH) {
        errors.push(ValidationError::new("description", DESCRIPTION_TOO_LONG));
    }
}

/// Name and description rules shared by projects and epics
pub fn validate_named_entity(name: Option<&str>, description: Option<&str>) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    validate_name(name, &mut errors);
    validate_description(description, &mut errors);
    errors
}
