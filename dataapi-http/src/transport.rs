use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use dataapi_core::{
    action::{Action, RequestMethod},
    error::{DataApiError, DataApiResult},
    request::ActionRequest,
    response::ActionResponse,
    transport::{Transport, TransportBuilder},
};

/// Default user agent sent with every request.
pub const USER_AGENT: &str = concat!("dataapi-rs/", env!("CARGO_PKG_VERSION"));

/// `reqwest`-backed transport.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::new()
    }

    fn send_error(action: Action, collection: &str, err: reqwest::Error) -> DataApiError {
        let status = err.status().map(|s| s.as_u16());

        if err.is_timeout() {
            DataApiError::transport(action, collection, status, "request timeout")
        } else if err.is_connect() {
            DataApiError::transport(action, collection, status, format!("connection failed: {err}"))
        } else if err.is_builder() {
            DataApiError::transport(action, collection, status, format!("invalid request: {err}"))
        } else {
            DataApiError::transport(action, collection, status, format!("request failed: {err}"))
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn perform(&self, request: ActionRequest) -> DataApiResult<ActionResponse> {
        let ActionRequest {
            action,
            collection,
            url,
            method,
            headers,
            body,
        } = request;

        debug!(%action, %collection, %url, "sending data API request");

        let mut builder = match method {
            RequestMethod::Post => self.client.post(&url),
        };
        for (name, value) in &headers {
            builder = builder.header(*name, value);
        }

        let response = builder
            .body(body)
            .send()
            .await
            .map_err(|e| Self::send_error(action, &collection, e))?;

        let status = response.status();

        if !status.is_success() {
            let text = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    warn!(%action, %collection, error = %e, "failed to read error response body");
                    format!("<unreadable body: {e}>")
                }
            };
            warn!(%action, %collection, status = status.as_u16(), "data API request failed");

            return Err(DataApiError::transport(
                action,
                &collection,
                Some(status.as_u16()),
                format!("API error ({status}): {text}"),
            ));
        }

        let body = response.bytes().await.map_err(|e| {
            DataApiError::transport(
                action,
                &collection,
                Some(status.as_u16()),
                format!("failed to read response: {e}"),
            )
        })?;

        debug!(%action, %collection, status = status.as_u16(), bytes = body.len(), "received data API response");

        Ok(ActionResponse::new(
            action,
            collection,
            status.as_u16(),
            body.to_vec(),
        ))
    }
}

/// Builder for [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct HttpTransportBuilder {
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: String,
}

impl HttpTransportBuilder {
    pub fn new() -> Self {
        Self {
            timeout: None,
            connect_timeout: None,
            user_agent: USER_AGENT.to_string(),
        }
    }

    /// Total time allowed for a request, including reading the body.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for HttpTransportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransportBuilder for HttpTransportBuilder {
    type Transport = HttpTransport;

    async fn build(self) -> DataApiResult<Self::Transport> {
        let mut builder = reqwest::Client::builder().user_agent(self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        Ok(HttpTransport::new(builder.build().map_err(|e| {
            DataApiError::Configuration(format!("failed to create HTTP client: {e}"))
        })?))
    }
}
