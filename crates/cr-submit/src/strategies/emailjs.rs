//! EmailJS strategy - template email via a lazily-loaded client
//!
//! The EmailJS client has to be loaded and initialized with the public key
//! before the first send. The adapter owns that client in a `OnceCell`: the
//! first submit fetches the library and initializes it, later submits reuse
//! it. A failed load is not cached, so the next submit tries again.

use std::sync::Arc;

use async_trait::async_trait;
use cr_contact::{ContactSubmission, Placeholders};
use serde_json::json;
use tokio::sync::OnceCell;

use crate::adapter::SubmitAdapter;
use crate::config::EmailJsConfig;
use crate::error::{Result, SubmitError};
use crate::strategies::parse_endpoint;
use crate::transport::{OutboundRequest, RequestBody, Transport, TransportError};

/// What EmailJS templates show for fields the visitor left empty.
pub const EMAILJS_PLACEHOLDERS: Placeholders = Placeholders {
    company: "Not provided",
    phone: "Not provided",
    project_type: "Not specified",
    timeline: "Not specified",
};

/// An initialized EmailJS client, bound to one public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsClient {
    public_key: String,
    api_url: String,
}

impl EmailJsClient {
    fn init(config: &EmailJsConfig) -> Self {
        Self {
            public_key: config.public_key.clone(),
            api_url: config.api_url.clone(),
        }
    }

    /// The send call: service, template and params under the client's key.
    pub fn send_request(
        &self,
        service_id: &str,
        template_id: &str,
        template_params: serde_json::Value,
    ) -> OutboundRequest {
        OutboundRequest::post(&self.api_url)
            .header("Content-Type", "application/json")
            .body(RequestBody::Json(json!({
                "service_id": service_id,
                "template_id": template_id,
                "user_id": self.public_key,
                "template_params": template_params,
            })))
    }
}

pub struct EmailJsAdapter {
    config: EmailJsConfig,
    transport: Arc<dyn Transport>,
    client: OnceCell<EmailJsClient>,
}

impl EmailJsAdapter {
    pub fn new(config: EmailJsConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        parse_endpoint("EmailJS", "sdk_url", &config.sdk_url)?;
        parse_endpoint("EmailJS", "api_url", &config.api_url)?;
        Ok(Self {
            config,
            transport,
            client: OnceCell::new(),
        })
    }

    /// True once the client library has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.client.initialized()
    }

    /// Flat params matching the email template's placeholders.
    pub fn template_params(submission: &ContactSubmission) -> serde_json::Value {
        let f = submission.normalized(&EMAILJS_PLACEHOLDERS);
        json!({
            "from_name": f.name,
            "from_email": f.email,
            "company": f.company,
            "phone": f.phone,
            "project_type": f.project_type,
            "timeline": f.timeline,
            "message": f.message,
        })
    }

    async fn client(&self) -> Result<&EmailJsClient> {
        self.client.get_or_try_init(|| self.load_library()).await
    }

    async fn load_library(&self) -> Result<EmailJsClient> {
        let url = &self.config.sdk_url;
        tracing::debug!(url = %url, "loading EmailJS client library");

        let response = self
            .transport
            .execute(OutboundRequest::get(url))
            .await
            .map_err(|e| TransportError::LibraryLoad(format!("{}: {}", url, e)))?;
        if !response.is_success() {
            return Err(TransportError::LibraryLoad(format!(
                "{} returned status {}",
                url,
                response.status.unwrap_or_default()
            ))
            .into());
        }

        Ok(EmailJsClient::init(&self.config))
    }
}

#[async_trait]
impl SubmitAdapter for EmailJsAdapter {
    async fn submit(&self, submission: &ContactSubmission) -> Result<serde_json::Value> {
        let client = self.client().await?;
        let request = client.send_request(
            &self.config.service_id,
            &self.config.template_id,
            Self::template_params(submission),
        );

        let response = self.transport.execute(request).await?;
        let status = response.status.unwrap_or_default();
        if !response.is_success() {
            return Err(SubmitError::RemoteRejection {
                service: "EmailJS",
                status,
            });
        }
        Ok(json!({ "status": status, "text": response.body }))
    }

    fn name(&self) -> &str {
        "emailjs"
    }
}
