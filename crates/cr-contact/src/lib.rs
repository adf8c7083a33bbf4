//! # cr-contact
//!
//! Contact form model for Contact Relay.
//!
//! A `ContactSubmission` is built fresh from the form's flat field map at
//! submit time, validated, handed to a submit strategy, and dropped once the
//! request settles. Nothing here talks to the network.

pub mod error;
pub mod fields;
pub mod project_type;
pub mod submission;

pub use error::{FieldError, Problem, ValidationErrors};
pub use fields::{is_valid_email, FormFields};
pub use project_type::ProjectType;
pub use submission::{ContactSubmission, NormalizedFields, Placeholders};
