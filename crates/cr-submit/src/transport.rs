// transport.rs — The single seam every outbound request passes through.
//
// Strategies describe requests as plain data (`OutboundRequest`) and hand them
// to a `Transport`. `HttpTransport` sends them with reqwest; `MockTransport`
// records them. No reqwest type leaks past this module.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Errors raised below the strategy layer.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be sent or no response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// The request itself was malformed (bad URL, bad header).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A response arrived but its body could not be read or decoded.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// A client library needed before sending could not be loaded.
    #[error("failed to load client library: {0}")]
    LibraryLoad(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

/// Whether the caller gets to see the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestMode {
    /// Status and body are returned to the caller.
    Observed,
    /// Fire-and-forget: the response is dropped unread, like a `no-cors` fetch.
    Opaque,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum RequestBody {
    Empty,
    /// Text fields of a `multipart/form-data` body, in order.
    Multipart(Vec<(String, String)>),
    Json(serde_json::Value),
}

impl RequestBody {
    /// Value of a multipart field, if this is a multipart body carrying it.
    pub fn multipart_field(&self, key: &str) -> Option<&str> {
        match self {
            RequestBody::Multipart(fields) => fields
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            RequestBody::Json(value) => Some(value),
            _ => None,
        }
    }
}

/// A fully-described HTTP request, independent of any client library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
    pub mode: RequestMode,
}

impl OutboundRequest {
    fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: RequestBody::Empty,
            mode: RequestMode::Observed,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn bearer(self, token: &str) -> Self {
        self.header("Authorization", format!("Bearer {}", token))
    }

    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    pub fn opaque(mut self) -> Self {
        self.mode = RequestMode::Opaque;
        self
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Copy with credentials masked, for printing.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        for (name, value) in copy.headers.iter_mut() {
            if name.eq_ignore_ascii_case("authorization") {
                *value = "Bearer ***".to_string();
            }
        }
        copy
    }
}

/// What came back. `status` is `None` for opaque requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: Option<u16>,
    pub body: String,
}

impl TransportResponse {
    pub fn observed(status: u16, body: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            body: body.into(),
        }
    }

    pub fn opaque() -> Self {
        Self {
            status: None,
            body: String::new(),
        }
    }

    /// True only for an observed status in the 2xx range.
    pub fn is_success(&self) -> bool {
        matches!(self.status, Some(200..=299))
    }
}

/// Sends one request and reports what came back.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(
        &self,
        request: OutboundRequest,
    ) -> std::result::Result<TransportResponse, TransportError>;
}

/// reqwest-backed transport used in production.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> std::result::Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("contact-relay/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an existing client (shared connection pool, custom TLS, proxies).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(
        &self,
        request: OutboundRequest,
    ) -> std::result::Result<TransportResponse, TransportError> {
        let OutboundRequest {
            method,
            url,
            headers,
            body,
            mode,
        } = request;

        let parsed = reqwest::Url::parse(&url)
            .map_err(|e| TransportError::InvalidRequest(format!("{}: {}", url, e)))?;

        let mut builder = match method {
            Method::Get => self.client.get(parsed),
            Method::Post => self.client.post(parsed),
        };
        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Multipart(fields) => {
                let form = fields
                    .into_iter()
                    .fold(reqwest::multipart::Form::new(), |form, (k, v)| form.text(k, v));
                builder.multipart(form)
            }
            RequestBody::Json(value) => builder.json(&value),
        };

        tracing::debug!(method = ?method, url = %url, mode = ?mode, "sending request");
        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        match mode {
            RequestMode::Opaque => Ok(TransportResponse::opaque()),
            RequestMode::Observed => {
                let status = response.status().as_u16();
                let body = response
                    .text()
                    .await
                    .map_err(|e| TransportError::Decode(e.to_string()))?;
                tracing::debug!(status, url = %url, "response received");
                Ok(TransportResponse::observed(status, body))
            }
        }
    }
}
