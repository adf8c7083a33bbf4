//! Core SubmitAdapter trait and strategy dispatch

use std::sync::Arc;

use async_trait::async_trait;
use cr_contact::ContactSubmission;

use crate::config::SubmitConfig;
use crate::error::{Result, SubmissionResult, SubmitError};
use crate::strategies::{AirtableAdapter, EmailJsAdapter, GoogleFormsAdapter, NetlifyAdapter};
use crate::transport::Transport;

/// Forwards one contact submission to a third-party service.
///
/// Implementations perform exactly one outbound request per call (EmailJS
/// may add a one-time library load) and never retry.
#[async_trait]
pub trait SubmitAdapter: Send + Sync {
    /// Send the submission. `Ok` carries the echo or the service's response.
    async fn submit(&self, submission: &ContactSubmission) -> Result<serde_json::Value>;

    /// Adapter display name (for logs and CLI output)
    fn name(&self) -> &str;
}

/// Strategy identifiers accepted in `submit.strategy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    GoogleForms,
    Airtable,
    EmailJs,
    Netlify,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::GoogleForms,
        StrategyKind::Airtable,
        StrategyKind::EmailJs,
        StrategyKind::Netlify,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            StrategyKind::GoogleForms => "google",
            StrategyKind::Airtable => "airtable",
            StrategyKind::EmailJs => "emailjs",
            StrategyKind::Netlify => "netlify",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StrategyKind::GoogleForms => "Google Forms (multipart, fire-and-forget)",
            StrategyKind::Airtable => "Airtable records API (JSON, bearer token)",
            StrategyKind::EmailJs => "EmailJS relay (template params, lazy client)",
            StrategyKind::Netlify => "Netlify Forms (multipart to site root)",
        }
    }
}

impl std::str::FromStr for StrategyKind {
    type Err = SubmitError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "google" => Ok(StrategyKind::GoogleForms),
            "airtable" => Ok(StrategyKind::Airtable),
            "emailjs" => Ok(StrategyKind::EmailJs),
            "netlify" => Ok(StrategyKind::Netlify),
            _ => Err(SubmitError::Configuration(format!(
                "invalid form integration method '{}'. Valid strategies: google, airtable, emailjs, netlify",
                s
            ))),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// The closed set of strategies, one variant per service.
pub enum Strategy {
    GoogleForms(GoogleFormsAdapter),
    Airtable(AirtableAdapter),
    EmailJs(EmailJsAdapter),
    Netlify(NetlifyAdapter),
}

impl Strategy {
    /// Select and build the configured strategy.
    ///
    /// Fails with `SubmitError::Configuration` for an unknown identifier or an
    /// unusable endpoint, before any request is made.
    pub fn from_config(config: &SubmitConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let kind: StrategyKind = config.strategy.trim().parse()?;
        let strategy = match kind {
            StrategyKind::GoogleForms => {
                Strategy::GoogleForms(GoogleFormsAdapter::new(config.google.clone(), transport)?)
            }
            StrategyKind::Airtable => {
                Strategy::Airtable(AirtableAdapter::new(config.airtable.clone(), transport)?)
            }
            StrategyKind::EmailJs => {
                Strategy::EmailJs(EmailJsAdapter::new(config.emailjs.clone(), transport)?)
            }
            StrategyKind::Netlify => {
                Strategy::Netlify(NetlifyAdapter::new(config.netlify.clone(), transport)?)
            }
        };
        tracing::debug!(strategy = %kind, "submit strategy selected");
        Ok(strategy)
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::GoogleForms(_) => StrategyKind::GoogleForms,
            Strategy::Airtable(_) => StrategyKind::Airtable,
            Strategy::EmailJs(_) => StrategyKind::EmailJs,
            Strategy::Netlify(_) => StrategyKind::Netlify,
        }
    }

    fn adapter(&self) -> &dyn SubmitAdapter {
        match self {
            Strategy::GoogleForms(a) => a,
            Strategy::Airtable(a) => a,
            Strategy::EmailJs(a) => a,
            Strategy::Netlify(a) => a,
        }
    }
}

#[async_trait]
impl SubmitAdapter for Strategy {
    async fn submit(&self, submission: &ContactSubmission) -> Result<serde_json::Value> {
        self.adapter().submit(submission).await
    }

    fn name(&self) -> &str {
        self.adapter().name()
    }
}

/// Entry point for the form layer: one configured strategy, uniform results.
pub struct ContactRelay {
    strategy: Strategy,
}

impl ContactRelay {
    pub fn new(config: &SubmitConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        Ok(Self {
            strategy: Strategy::from_config(config, transport)?,
        })
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Submit once. Every error comes back as `SubmissionResult::Failure`.
    pub async fn submit(&self, submission: &ContactSubmission) -> SubmissionResult {
        let name = self.strategy.name();
        match self.strategy.submit(submission).await {
            Ok(data) => {
                tracing::info!(strategy = name, "contact form submitted");
                SubmissionResult::Success { data }
            }
            Err(e) => {
                tracing::error!(strategy = name, error = %e, "contact form submission failed");
                e.into()
            }
        }
    }
}

/// Select the configured strategy and submit once.
///
/// An unknown strategy identifier yields a `Configuration` failure without
/// touching the transport.
pub async fn submit_contact_form(
    config: &SubmitConfig,
    transport: Arc<dyn Transport>,
    submission: &ContactSubmission,
) -> SubmissionResult {
    match ContactRelay::new(config, transport) {
        Ok(relay) => relay.submit(submission).await,
        Err(e) => {
            tracing::error!(error = %e, "contact relay misconfigured");
            e.into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use crate::mock::MockTransport;

    #[test]
    fn parse_every_identifier() {
        for kind in StrategyKind::ALL {
            assert_eq!(kind.id().parse::<StrategyKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_identifier_is_configuration_error() {
        let err = "carrier-pigeon".parse::<StrategyKind>().unwrap_err();
        assert_eq!(err.kind(), FailureKind::Configuration);
        assert!(err.to_string().contains("carrier-pigeon"));
    }

    #[test]
    fn from_config_picks_variant() {
        let transport = Arc::new(MockTransport::new());
        for kind in StrategyKind::ALL {
            let config = SubmitConfig {
                strategy: kind.id().to_string(),
                ..Default::default()
            };
            let strategy = Strategy::from_config(&config, transport.clone()).unwrap();
            assert_eq!(strategy.kind(), kind);
            assert_eq!(strategy.name(), kind.id());
        }
    }

    #[tokio::test]
    async fn unknown_strategy_sends_nothing() {
        let transport = Arc::new(MockTransport::new());
        let config = SubmitConfig {
            strategy: "formspree".to_string(),
            ..Default::default()
        };
        let submission = ContactSubmission::new("Ada", "ada@x.com", "Hi").unwrap();

        let result = submit_contact_form(&config, transport.clone(), &submission).await;

        assert_eq!(result.failure_kind(), Some(FailureKind::Configuration));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn unusable_endpoint_fails_at_selection() {
        let transport = Arc::new(MockTransport::new());
        let mut google = SubmitConfig::default();
        google.google.form_url = "not a url".to_string();
        let mut emailjs = SubmitConfig {
            strategy: "emailjs".to_string(),
            ..Default::default()
        };
        emailjs.emailjs.sdk_url = "::bad".to_string();
        let submission = ContactSubmission::new("Ada", "ada@x.com", "Hi").unwrap();

        for config in [google, emailjs] {
            assert!(ContactRelay::new(&config, transport.clone()).is_err());
            let result = submit_contact_form(&config, transport.clone(), &submission).await;
            assert_eq!(result.failure_kind(), Some(FailureKind::Configuration));
        }
        assert_eq!(transport.request_count(), 0);
    }
}
