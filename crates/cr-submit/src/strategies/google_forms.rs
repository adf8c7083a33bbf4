//! Google Forms strategy - fire-and-forget multipart post

use std::sync::Arc;

use async_trait::async_trait;
use cr_contact::{ContactSubmission, Placeholders};

use crate::adapter::SubmitAdapter;
use crate::config::GoogleFormsConfig;
use crate::error::Result;
use crate::strategies::parse_endpoint;
use crate::transport::{OutboundRequest, RequestBody, Transport};

/// Posts the form to Google's `formResponse` endpoint.
///
/// Google Forms sends no CORS headers, so the post is opaque: success means
/// the request was dispatched, not that Google accepted it. This strategy can
/// fail on the network but never with a status code.
pub struct GoogleFormsAdapter {
    config: GoogleFormsConfig,
    transport: Arc<dyn Transport>,
}

impl GoogleFormsAdapter {
    pub fn new(config: GoogleFormsConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        parse_endpoint("Google Forms", "form_url", &config.form_url)?;
        Ok(Self { config, transport })
    }

    pub fn build_request(&self, submission: &ContactSubmission) -> OutboundRequest {
        let f = submission.normalized(&Placeholders::EMPTY);
        let ids = &self.config.fields;
        let fields = [
            (&ids.name, f.name),
            (&ids.email, f.email),
            (&ids.company, f.company),
            (&ids.phone, f.phone),
            (&ids.project_type, f.project_type),
            (&ids.timeline, f.timeline),
            (&ids.message, f.message),
        ]
        .into_iter()
        .map(|(id, value)| (id.clone(), value.to_string()))
        .collect();

        OutboundRequest::post(&self.config.form_url)
            .body(RequestBody::Multipart(fields))
            .opaque()
    }
}

#[async_trait]
impl SubmitAdapter for GoogleFormsAdapter {
    async fn submit(&self, submission: &ContactSubmission) -> Result<serde_json::Value> {
        let request = self.build_request(submission);
        // Response is opaque; only a transport error can fail this.
        self.transport.execute(request).await?;
        Ok(submission.to_json())
    }

    fn name(&self) -> &str {
        "google"
    }
}
