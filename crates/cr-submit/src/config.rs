//! Relay configuration structures
//!
//! Read once at startup from `relay.toml`. Every value has a default equal to
//! the setup placeholder the site ships with, so a partial file still parses.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SubmitError};

/// Top-level configuration from relay.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelayConfig {
    #[serde(default)]
    pub submit: SubmitConfig,
}

/// Submit strategy configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitConfig {
    /// Strategy identifier: "google", "airtable", "emailjs" or "netlify"
    #[serde(default = "default_strategy")]
    pub strategy: String,

    #[serde(default)]
    pub google: GoogleFormsConfig,

    #[serde(default)]
    pub airtable: AirtableConfig,

    #[serde(default)]
    pub emailjs: EmailJsConfig,

    #[serde(default)]
    pub netlify: NetlifyConfig,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
            google: GoogleFormsConfig::default(),
            airtable: AirtableConfig::default(),
            emailjs: EmailJsConfig::default(),
            netlify: NetlifyConfig::default(),
        }
    }
}

/// Google Forms strategy configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoogleFormsConfig {
    /// The form's `formResponse` URL
    #[serde(default = "default_google_form_url")]
    pub form_url: String,

    /// `entry.N` identifiers Google assigned to each question
    #[serde(default)]
    pub fields: GoogleFormFields,
}

impl Default for GoogleFormsConfig {
    fn default() -> Self {
        Self {
            form_url: default_google_form_url(),
            fields: GoogleFormFields::default(),
        }
    }
}

/// Opaque Google Forms entry ids, one per contact form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoogleFormFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub project_type: String,
    pub timeline: String,
    pub message: String,
}

impl Default for GoogleFormFields {
    fn default() -> Self {
        Self {
            name: "entry.1234567890".to_string(),
            email: "entry.0987654321".to_string(),
            company: "entry.1122334455".to_string(),
            phone: "entry.5566778899".to_string(),
            project_type: "entry.9988776655".to_string(),
            timeline: "entry.4433221100".to_string(),
            message: "entry.7788990011".to_string(),
        }
    }
}

/// Airtable strategy configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirtableConfig {
    pub api_base: String,
    pub base_id: String,
    pub table_name: String,
    /// Personal access token sent as a bearer credential
    pub api_key: String,
}

impl Default for AirtableConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.airtable.com/v0".to_string(),
            base_id: "YOUR_BASE_ID".to_string(),
            table_name: "Contact Submissions".to_string(),
            api_key: "YOUR_API_KEY".to_string(),
        }
    }
}

/// EmailJS strategy configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Client library fetched once before the first send
    pub sdk_url: String,
    /// Send endpoint used by the initialized client
    pub api_url: String,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            service_id: "YOUR_SERVICE_ID".to_string(),
            template_id: "YOUR_TEMPLATE_ID".to_string(),
            public_key: "YOUR_PUBLIC_KEY".to_string(),
            sdk_url: "https://cdn.jsdelivr.net/npm/@emailjs/browser@3/dist/email.min.js"
                .to_string(),
            api_url: "https://api.emailjs.com/api/v1.0/email/send".to_string(),
        }
    }
}

/// Netlify Forms strategy configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetlifyConfig {
    /// Origin the site is served from; submissions post to its root path
    pub site_origin: String,
    /// Value of the hidden `form-name` field
    pub form_name: String,
}

impl Default for NetlifyConfig {
    fn default() -> Self {
        Self {
            site_origin: "http://localhost:8888".to_string(),
            form_name: "contact".to_string(),
        }
    }
}

// Serde default functions
fn default_strategy() -> String {
    "google".to_string()
}

fn default_google_form_url() -> String {
    "https://docs.google.com/forms/d/e/YOUR_FORM_ID/formResponse".to_string()
}

impl RelayConfig {
    /// Load relay config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SubmitError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::parse(&content).map_err(|e| match e {
            SubmitError::ConfigLoad { reason, .. } => SubmitError::ConfigLoad {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })
    }

    /// Load config, falling back to defaults only if the file doesn't exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no relay config, using defaults");
            Ok(Self::default())
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SubmitError::ConfigLoad {
            path: Default::default(),
            reason: e.to_string(),
        })
    }

    /// Commented starter file written by `contact-relay init`.
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }
}

const DEFAULT_TOML: &str = r#"# Contact Relay configuration
#
# Pick one strategy and fill in its section. Unused sections can stay as-is.

[submit]
# One of: google, airtable, emailjs, netlify
strategy = "google"

[submit.google]
# Google Form > Send > link, with /viewform replaced by /formResponse
form_url = "https://docs.google.com/forms/d/e/YOUR_FORM_ID/formResponse"

[submit.google.fields]
# Entry ids from the form's prefilled link
name = "entry.1234567890"
email = "entry.0987654321"
company = "entry.1122334455"
phone = "entry.5566778899"
project_type = "entry.9988776655"
timeline = "entry.4433221100"
message = "entry.7788990011"

[submit.airtable]
api_base = "https://api.airtable.com/v0"
base_id = "YOUR_BASE_ID"
table_name = "Contact Submissions"
api_key = "YOUR_API_KEY"

[submit.emailjs]
service_id = "YOUR_SERVICE_ID"
template_id = "YOUR_TEMPLATE_ID"
public_key = "YOUR_PUBLIC_KEY"
sdk_url = "https://cdn.jsdelivr.net/npm/@emailjs/browser@3/dist/email.min.js"
api_url = "https://api.emailjs.com/api/v1.0/email/send"

[submit.netlify]
# Origin the site is deployed on; the form posts to its root path
site_origin = "http://localhost:8888"
form_name = "contact"
"#;
