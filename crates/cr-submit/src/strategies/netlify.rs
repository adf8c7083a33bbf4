//! Netlify Forms strategy - multipart post to the site root

use std::sync::Arc;

use async_trait::async_trait;
use cr_contact::{ContactSubmission, Placeholders};

use crate::adapter::SubmitAdapter;
use crate::config::NetlifyConfig;
use crate::error::{Result, SubmitError};
use crate::strategies::parse_endpoint;
use crate::transport::{OutboundRequest, RequestBody, Transport};

/// Posts to `/` on the site's own origin, where Netlify intercepts forms
/// carrying a `form-name` field.
pub struct NetlifyAdapter {
    config: NetlifyConfig,
    endpoint: String,
    transport: Arc<dyn Transport>,
}

impl NetlifyAdapter {
    pub fn new(config: NetlifyConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let mut url = parse_endpoint("Netlify", "site_origin", &config.site_origin)?;
        url.set_path("/");
        url.set_query(None);
        url.set_fragment(None);
        Ok(Self {
            endpoint: url.to_string(),
            config,
            transport,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn build_request(&self, submission: &ContactSubmission) -> OutboundRequest {
        let f = submission.normalized(&Placeholders::EMPTY);
        let fields = [
            ("form-name", self.config.form_name.as_str()),
            ("name", f.name),
            ("email", f.email),
            ("company", f.company),
            ("phone", f.phone),
            ("project-type", f.project_type),
            ("timeline", f.timeline),
            ("message", f.message),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        OutboundRequest::post(&self.endpoint).body(RequestBody::Multipart(fields))
    }
}

#[async_trait]
impl SubmitAdapter for NetlifyAdapter {
    async fn submit(&self, submission: &ContactSubmission) -> Result<serde_json::Value> {
        let response = self.transport.execute(self.build_request(submission)).await?;
        if !response.is_success() {
            return Err(SubmitError::RemoteRejection {
                service: "Netlify",
                status: response.status.unwrap_or_default(),
            });
        }
        Ok(submission.to_json())
    }

    fn name(&self) -> &str {
        "netlify"
    }
}
