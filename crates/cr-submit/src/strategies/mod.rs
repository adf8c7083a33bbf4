//! The four built-in submit strategies.

pub mod airtable;
pub mod emailjs;
pub mod google_forms;
pub mod netlify;

pub use airtable::AirtableAdapter;
pub use emailjs::EmailJsAdapter;
pub use google_forms::GoogleFormsAdapter;
pub use netlify::NetlifyAdapter;

use crate::error::{Result, SubmitError};

/// Parse a configured endpoint, reporting a bad one as a configuration error.
pub(crate) fn parse_endpoint(service: &str, key: &str, value: &str) -> Result<reqwest::Url> {
    reqwest::Url::parse(value).map_err(|e| {
        SubmitError::Configuration(format!("invalid {} {} '{}': {}", service, key, value, e))
    })
}
