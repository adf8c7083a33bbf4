// fields.rs — Flat form field map and pre-submission validation.
//
// The form layer hands over `name → value` exactly as the HTML form posts it.
// Validation runs here, before any submit strategy is involved: a submission
// that fails these checks never reaches the network.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{FieldError, Problem, ValidationErrors};
use crate::project_type::ProjectType;
use crate::submission::ContactSubmission;

pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const COMPANY: &str = "company";
pub const PHONE: &str = "phone";
pub const PROJECT_TYPE: &str = "project-type";
pub const TIMELINE: &str = "timeline";
pub const MESSAGE: &str = "message";

/// Fields that must be non-blank, in form order.
pub const REQUIRED: [&str; 3] = [NAME, EMAIL, MESSAGE];

/// Raw form values keyed by HTML field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormFields(BTreeMap<String, String>);

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    /// Trimmed value, or `None` when the field is missing or blank.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

/// Basic `local@domain.tld` shape check, usable per field as the user types.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

impl ContactSubmission {
    /// Validate the form's fields and build a submission.
    ///
    /// All problems are collected so every offending field can be flagged at
    /// once. Blank optional fields become absent.
    pub fn from_fields(fields: &FormFields) -> Result<Self, ValidationErrors> {
        let mut errors = Vec::new();

        for field in REQUIRED {
            if fields.get(field).is_none() {
                errors.push(FieldError::new(field, Problem::Required));
            }
        }

        if let Some(email) = fields.get(EMAIL) {
            if !is_valid_email(email) {
                errors.push(FieldError::new(EMAIL, Problem::InvalidEmail));
            }
        }

        let project_type = match fields.get(PROJECT_TYPE).map(str::parse::<ProjectType>) {
            Some(Ok(kind)) => Some(kind),
            Some(Err(_)) => {
                errors.push(FieldError::new(PROJECT_TYPE, Problem::UnknownOption));
                None
            }
            None => None,
        };

        if !errors.is_empty() {
            tracing::debug!(fields = ?errors, "contact form rejected");
            return Err(ValidationErrors { errors });
        }

        let owned = |field: &str| fields.get(field).map(str::to_string);
        Ok(ContactSubmission::from_parts(
            owned(NAME).unwrap_or_default(),
            owned(EMAIL).unwrap_or_default(),
            owned(COMPANY),
            owned(PHONE),
            project_type,
            owned(TIMELINE),
            owned(MESSAGE).unwrap_or_default(),
        ))
    }
}
