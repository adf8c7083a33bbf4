// error.rs — Validation errors for contact form fields.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// What was wrong with a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Problem {
    /// A required field was missing or blank.
    Required,
    /// The email field does not look like `local@domain.tld`.
    InvalidEmail,
    /// The project type is not one of the form's options.
    UnknownOption,
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::Required => write!(f, "is required"),
            Problem::InvalidEmail => write!(f, "is not a valid email address"),
            Problem::UnknownOption => write!(f, "is not a recognised option"),
        }
    }
}

/// A problem attached to the form field that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("field '{field}' {problem}")]
pub struct FieldError {
    /// Form field name, as it appears in the HTML form (e.g. `project-type`).
    pub field: String,
    pub problem: Problem,
}

impl FieldError {
    pub fn new(field: impl Into<String>, problem: Problem) -> Self {
        Self {
            field: field.into(),
            problem,
        }
    }
}

/// Every field problem found in one pass over the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("form validation failed: {}", summary(.errors))]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// True if the named field has at least one problem.
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Names of the offending fields, in form order.
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }
}

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
