// submission.rs — The validated contact submission and its normalized view.
//
// Optional fields stay `Option` on the submission itself. Encoders never see
// that: they ask for `normalized(&placeholders)` and get a view in which every
// field is a plain string, absent ones replaced by the strategy's placeholder.

use serde::Serialize;

use crate::error::ValidationErrors;
use crate::fields::FormFields;
use crate::project_type::ProjectType;

/// One contact form submission. Built per submit, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    name: String,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    #[serde(rename = "project-type", skip_serializing_if = "Option::is_none")]
    project_type: Option<ProjectType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timeline: Option<String>,
    message: String,
}

impl ContactSubmission {
    /// Build a submission from the three required fields.
    ///
    /// Runs the same checks as the form path, so a `ContactSubmission` can
    /// never hold a blank name or message or a malformed email.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ValidationErrors> {
        let mut fields = FormFields::new();
        fields.insert("name", name);
        fields.insert("email", email);
        fields.insert("message", message);
        Self::from_fields(&fields)
    }

    /// Assemble from already-validated parts. Only the validator calls this.
    pub(crate) fn from_parts(
        name: String,
        email: String,
        company: Option<String>,
        phone: Option<String>,
        project_type: Option<ProjectType>,
        timeline: Option<String>,
        message: String,
    ) -> Self {
        Self {
            name,
            email,
            company,
            phone,
            project_type,
            timeline,
            message,
        }
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = non_blank(company.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = non_blank(phone.into());
        self
    }

    pub fn with_project_type(mut self, project_type: ProjectType) -> Self {
        self.project_type = Some(project_type);
        self
    }

    pub fn with_timeline(mut self, timeline: impl Into<String>) -> Self {
        self.timeline = non_blank(timeline.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn project_type(&self) -> Option<ProjectType> {
        self.project_type
    }

    pub fn timeline(&self) -> Option<&str> {
        self.timeline.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Every field as a string, absent optional fields filled from `placeholders`.
    pub fn normalized<'a>(&'a self, placeholders: &Placeholders) -> NormalizedFields<'a> {
        NormalizedFields {
            name: &self.name,
            email: &self.email,
            company: self.company.as_deref().unwrap_or(placeholders.company),
            phone: self.phone.as_deref().unwrap_or(placeholders.phone),
            project_type: self
                .project_type
                .map(|p| p.as_str())
                .unwrap_or(placeholders.project_type),
            timeline: self.timeline.as_deref().unwrap_or(placeholders.timeline),
            message: &self.message,
        }
    }

    /// JSON echo of the submission, keyed like the HTML form.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Strings substituted for absent optional fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholders {
    pub company: &'static str,
    pub phone: &'static str,
    pub project_type: &'static str,
    pub timeline: &'static str,
}

impl Placeholders {
    /// Empty string for every optional field.
    pub const EMPTY: Placeholders = Placeholders::uniform("");

    pub const fn uniform(value: &'static str) -> Self {
        Self {
            company: value,
            phone: value,
            project_type: value,
            timeline: value,
        }
    }
}

/// Borrowed, fully-populated view of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedFields<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub company: &'a str,
    pub phone: &'a str,
    pub project_type: &'a str,
    pub timeline: &'a str,
    pub message: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> ContactSubmission {
        ContactSubmission::new("Ada", "ada@x.com", "Hi").unwrap()
    }

    #[test]
    fn new_rejects_bad_email() {
        let err = ContactSubmission::new("Ada", "not-an-email", "Hi").unwrap_err();
        assert!(err.has_error("email"));
    }

    #[test]
    fn normalized_fills_placeholders() {
        let placeholders = Placeholders {
            company: "Not provided",
            phone: "Not provided",
            project_type: "Not specified",
            timeline: "Not specified",
        };
        let submission = ada();
        let fields = submission.normalized(&placeholders);
        assert_eq!(fields.name, "Ada");
        assert_eq!(fields.email, "ada@x.com");
        assert_eq!(fields.message, "Hi");
        assert_eq!(fields.company, "Not provided");
        assert_eq!(fields.phone, "Not provided");
        assert_eq!(fields.project_type, "Not specified");
        assert_eq!(fields.timeline, "Not specified");
    }

    #[test]
    fn normalized_prefers_real_values() {
        let submission = ada()
            .with_company("Analytical Engines Ltd")
            .with_phone("+44 20 7946 0000")
            .with_project_type(ProjectType::Commercial)
            .with_timeline("Q3");
        let fields = submission.normalized(&Placeholders::EMPTY);
        assert_eq!(fields.company, "Analytical Engines Ltd");
        assert_eq!(fields.phone, "+44 20 7946 0000");
        assert_eq!(fields.project_type, "commercial");
        assert_eq!(fields.timeline, "Q3");
    }

    #[test]
    fn blank_optional_is_absent() {
        let submission = ada().with_company("   ");
        assert_eq!(submission.company(), None);
        assert_eq!(submission.normalized(&Placeholders::EMPTY).company, "");
    }

    #[test]
    fn json_echo_omits_absent_fields() {
        let json = ada().with_project_type(ProjectType::Other).to_json();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["project-type"], "other");
        assert!(json.get("company").is_none());
        assert!(json.as_object().unwrap().values().all(|v| !v.is_null()));
    }
}
