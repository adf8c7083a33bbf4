//! Submit strategies for contact form submissions
//!
//! This crate forwards a validated `ContactSubmission` to one of several
//! third-party services. The core abstraction is the `SubmitAdapter` trait,
//! with four built-in strategies selected by static configuration:
//! - **google**: Google Forms, fire-and-forget multipart post
//! - **airtable**: Airtable records API, bearer-authenticated JSON
//! - **emailjs**: EmailJS relay, lazily-loaded client then JSON send
//! - **netlify**: Netlify Forms, multipart post to the site root
//!
//! Every outbound request goes through the `Transport` trait, so callers
//! (and tests) can swap the reqwest-backed `HttpTransport` for `MockTransport`.

pub mod adapter;
pub mod config;
pub mod error;
pub mod mock;
pub mod strategies;
pub mod transport;

pub use adapter::{submit_contact_form, ContactRelay, Strategy, StrategyKind, SubmitAdapter};
pub use config::{
    AirtableConfig, EmailJsConfig, GoogleFormFields, GoogleFormsConfig, NetlifyConfig,
    RelayConfig, SubmitConfig,
};
pub use error::{FailureKind, Result, SubmissionResult, SubmitError};
pub use mock::{MockReply, MockTransport};
pub use strategies::{AirtableAdapter, EmailJsAdapter, GoogleFormsAdapter, NetlifyAdapter};
pub use transport::{
    HttpTransport, Method, OutboundRequest, RequestBody, RequestMode, Transport, TransportError,
    TransportResponse,
};
