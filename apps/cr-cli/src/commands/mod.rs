// mod.rs — Subcommands and the shared field-input arguments.

pub mod init;
pub mod strategies;
pub mod submit;
pub mod validate;

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use cr_contact::{ContactSubmission, FormFields, ValidationErrors};

/// Shown to the visitor after a successful submission.
pub const SUCCESS_MESSAGE: &str =
    "Thank you for your message! We'll get back to you within 24 hours.";

/// Shown to the visitor after any failed submission.
pub const ERROR_MESSAGE: &str = "There was an error sending your message. Please try again.";

/// Where the form's field values come from.
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Form field as KEY=VALUE (e.g. --field name=Ada --field project-type=residential).
    #[arg(long = "field", value_parser = parse_key_value)]
    pub fields: Vec<(String, String)>,

    /// JSON object of field values; --field entries override it.
    #[arg(long)]
    pub fields_json: Option<PathBuf>,
}

impl FieldArgs {
    /// Merge the JSON file (if any) with the --field pairs.
    pub fn read(&self) -> anyhow::Result<FormFields> {
        let mut form = match &self.fields_json {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str::<FormFields>(&content)
                    .with_context(|| format!("parsing {} as a JSON object", path.display()))?
            }
            None => FormFields::new(),
        };
        for (key, value) in &self.fields {
            form.insert(key.clone(), value.clone());
        }
        Ok(form)
    }
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", s)),
    }
}

/// Validate the form, printing each offending field on failure.
pub fn validated_submission(form: &FormFields) -> anyhow::Result<ContactSubmission> {
    ContactSubmission::from_fields(form).map_err(|errors| {
        print_validation_errors(&errors);
        anyhow::Error::new(errors)
    })
}

fn print_validation_errors(errors: &ValidationErrors) {
    eprintln!("Please fix the following fields:");
    for error in &errors.errors {
        eprintln!("  {:<14} {}", error.field, error.problem);
    }
}
