//! Airtable strategy - one record per submission via the REST API

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use cr_contact::{ContactSubmission, Placeholders};
use serde_json::json;

use crate::adapter::SubmitAdapter;
use crate::config::AirtableConfig;
use crate::error::{Result, SubmitError};
use crate::strategies::parse_endpoint;
use crate::transport::{OutboundRequest, RequestBody, Transport, TransportError};

/// Creates a record in an Airtable table with a bearer token.
pub struct AirtableAdapter {
    config: AirtableConfig,
    endpoint: String,
    transport: Arc<dyn Transport>,
}

impl AirtableAdapter {
    pub fn new(config: AirtableConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let endpoint = records_url(&config)?;
        Ok(Self {
            config,
            endpoint,
            transport,
        })
    }

    /// `{api_base}/{base_id}/{table_name}`, with the table name percent-encoded.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn build_request(&self, submission: &ContactSubmission) -> OutboundRequest {
        self.build_request_at(submission, Utc::now())
    }

    /// Build the request with an explicit "Submitted At" time.
    pub fn build_request_at(
        &self,
        submission: &ContactSubmission,
        submitted_at: DateTime<Utc>,
    ) -> OutboundRequest {
        let f = submission.normalized(&Placeholders::EMPTY);
        let record = json!({
            "fields": {
                "Name": f.name,
                "Email": f.email,
                "Company": f.company,
                "Phone": f.phone,
                "Project Type": f.project_type,
                "Timeline": f.timeline,
                "Message": f.message,
                "Submitted At": submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            }
        });

        OutboundRequest::post(&self.endpoint)
            .bearer(&self.config.api_key)
            .header("Content-Type", "application/json")
            .body(RequestBody::Json(record))
    }
}

fn records_url(config: &AirtableConfig) -> Result<String> {
    let mut url = parse_endpoint("Airtable", "api_base", &config.api_base)?;
    url.path_segments_mut()
        .map_err(|_| {
            SubmitError::Configuration(format!(
                "Airtable api_base '{}' cannot carry a path",
                config.api_base
            ))
        })?
        .pop_if_empty()
        .push(&config.base_id)
        .push(&config.table_name);
    Ok(url.to_string())
}

#[async_trait]
impl SubmitAdapter for AirtableAdapter {
    async fn submit(&self, submission: &ContactSubmission) -> Result<serde_json::Value> {
        let response = self.transport.execute(self.build_request(submission)).await?;
        let status = response.status.unwrap_or_default();
        if !response.is_success() {
            return Err(SubmitError::RemoteRejection {
                service: "Airtable",
                status,
            });
        }
        let record: serde_json::Value = serde_json::from_str(&response.body)
            .map_err(|e| TransportError::Decode(format!("Airtable response: {}", e)))?;
        Ok(record)
    }

    fn name(&self) -> &str {
        "airtable"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FailureKind, SubmissionResult};
    use crate::mock::{MockReply, MockTransport};
    use chrono::TimeZone;

    fn config() -> AirtableConfig {
        AirtableConfig {
            base_id: "appBASE".to_string(),
            api_key: "patKEY".to_string(),
            ..Default::default()
        }
    }

    fn ada() -> ContactSubmission {
        ContactSubmission::new("Ada", "ada@x.com", "Hi").unwrap()
    }

    #[test]
    fn endpoint_encodes_table_name() {
        let adapter = AirtableAdapter::new(config(), Arc::new(MockTransport::new())).unwrap();
        assert_eq!(
            adapter.endpoint(),
            "https://api.airtable.com/v0/appBASE/Contact%20Submissions"
        );
    }

    #[test]
    fn trailing_slash_on_api_base_is_tolerated() {
        let adapter = AirtableAdapter::new(
            AirtableConfig {
                api_base: "https://api.airtable.com/v0/".to_string(),
                ..config()
            },
            Arc::new(MockTransport::new()),
        )
        .unwrap();
        assert!(adapter.endpoint().starts_with("https://api.airtable.com/v0/appBASE/"));
    }

    #[test]
    fn bad_api_base_is_configuration_error() {
        let err = AirtableAdapter::new(
            AirtableConfig {
                api_base: "not a url".to_string(),
                ..config()
            },
            Arc::new(MockTransport::new()),
        )
        .err()
        .unwrap();
        assert_eq!(err.kind(), FailureKind::Configuration);
    }

    #[test]
    fn record_has_readable_keys_and_timestamp() {
        let adapter = AirtableAdapter::new(config(), Arc::new(MockTransport::new())).unwrap();
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        let request = adapter.build_request_at(&ada().with_phone("555-0100"), at);

        assert_eq!(request.header_value("Authorization"), Some("Bearer patKEY"));
        let fields = &request.body.as_json().unwrap()["fields"];
        assert_eq!(fields["Name"], "Ada");
        assert_eq!(fields["Email"], "ada@x.com");
        assert_eq!(fields["Message"], "Hi");
        assert_eq!(fields["Phone"], "555-0100");
        assert_eq!(fields["Company"], "");
        assert_eq!(fields["Project Type"], "");
        assert_eq!(fields["Timeline"], "");
        assert_eq!(fields["Submitted At"], "2026-03-01T09:30:00.000Z");
    }

    #[tokio::test]
    async fn success_wraps_remote_record() {
        let mock = Arc::new(MockTransport::new().with_reply(MockReply::ok(r#"{"id":"rec123"}"#)));
        let adapter = AirtableAdapter::new(config(), mock).unwrap();

        let data = adapter.submit(&ada()).await.unwrap();
        assert_eq!(data, json!({"id": "rec123"}));
    }

    #[tokio::test]
    async fn server_error_carries_status() {
        let mock = Arc::new(MockTransport::new().with_reply(MockReply::status(500)));
        let adapter = AirtableAdapter::new(config(), mock).unwrap();

        let result: SubmissionResult = adapter.submit(&ada()).await.into();
        match result {
            SubmissionResult::Failure { kind, reason } => {
                assert_eq!(kind, FailureKind::RemoteRejection);
                assert!(reason.contains("500"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn unparseable_body_is_transport_error() {
        let mock = Arc::new(MockTransport::new().with_reply(MockReply::ok("<html>")));
        let adapter = AirtableAdapter::new(config(), mock).unwrap();

        let err = adapter.submit(&ada()).await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::Transport);
    }
}
