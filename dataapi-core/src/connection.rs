//! Connection descriptor for a data API endpoint.
//!
//! A [`ConnectionDescriptor`] holds the API root and the tenant identifiers every
//! request needs. It is immutable once built and can be shared freely across
//! concurrent calls.
//!
//! # Example
//!
//! ```ignore
//! use dataapi_core::connection::ConnectionDescriptor;
//!
//! let descriptor = ConnectionDescriptor::builder(
//!     "https://data.example.com/app/data-abc/endpoint/data/v1",
//!     "shop",
//!     "Cluster0",
//! )
//! .credential("my-api-key")
//! .build()?;
//! ```
//!
//! Descriptors can also be deserialized from configuration:
//!
//! ```json
//! {
//!   "baseAddress": "https://data.example.com/app/data-abc/endpoint/data/v1",
//!   "database": "shop",
//!   "dataSource": "Cluster0",
//!   "credential": "my-api-key"
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    action::Action,
    error::{DataApiError, DataApiResult},
};

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const ACCESS_CONTROL_REQUEST_HEADERS_HEADER: &str = "Access-Control-Request-Headers";
pub const ACCEPT_HEADER: &str = "Accept";
pub const API_KEY_HEADER: &str = "api-key";

/// Header name to value, ordered by name.
pub type Headers = BTreeMap<&'static str, String>;

fn default_content_type() -> String {
    "application/json".to_string()
}

fn default_access_control_request_headers() -> String {
    "*".to_string()
}

fn default_accept() -> String {
    "application/json".to_string()
}

/// Immutable description of the endpoint and tenant a request is addressed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ConnectionConfig")]
pub struct ConnectionDescriptor {
    base_address: String,
    database: String,
    data_source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    credential: Option<String>,
    content_type: String,
    access_control_request_headers: String,
    accept: String,
}

impl ConnectionDescriptor {
    /// Creates a builder for a descriptor with the three required values.
    pub fn builder(
        base_address: impl Into<String>,
        database: impl Into<String>,
        data_source: impl Into<String>,
    ) -> ConnectionDescriptorBuilder {
        ConnectionDescriptorBuilder::new(base_address, database, data_source)
    }

    /// The API root, without a trailing slash.
    pub fn base_address(&self) -> &str {
        &self.base_address
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn data_source(&self) -> &str {
        &self.data_source
    }

    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn access_control_request_headers(&self) -> &str {
        &self.access_control_request_headers
    }

    pub fn accept(&self) -> &str {
        &self.accept
    }

    /// Returns the URL an action is posted to: `<base>/action/<name>`.
    pub fn action_url(&self, action: Action) -> String {
        format!("{}/action/{}", self.base_address, action.as_str())
    }

    /// Builds the header set sent with every request.
    ///
    /// The set always holds exactly `Content-Type`, `Access-Control-Request-Headers`,
    /// `Accept` and `api-key`. A missing credential is sent as an empty `api-key`
    /// rather than leaving the header out.
    pub fn headers(&self) -> Headers {
        Headers::from([
            (CONTENT_TYPE_HEADER, self.content_type.clone()),
            (
                ACCESS_CONTROL_REQUEST_HEADERS_HEADER,
                self.access_control_request_headers.clone(),
            ),
            (ACCEPT_HEADER, self.accept.clone()),
            (API_KEY_HEADER, self.credential.clone().unwrap_or_default()),
        ])
    }
}

/// Builder for [`ConnectionDescriptor`].
///
/// Optional values fall back to `application/json` for the content type and
/// accept headers and `*` for the CORS request headers.
#[derive(Debug, Clone)]
pub struct ConnectionDescriptorBuilder {
    base_address: String,
    database: String,
    data_source: String,
    credential: Option<String>,
    content_type: Option<String>,
    access_control_request_headers: Option<String>,
    accept: Option<String>,
}

impl ConnectionDescriptorBuilder {
    pub fn new(
        base_address: impl Into<String>,
        database: impl Into<String>,
        data_source: impl Into<String>,
    ) -> Self {
        Self {
            base_address: base_address.into(),
            database: database.into(),
            data_source: data_source.into(),
            credential: None,
            content_type: None,
            access_control_request_headers: None,
            accept: None,
        }
    }

    /// Sets the API key sent in the `api-key` header.
    pub fn credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(credential.into());
        self
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn access_control_request_headers(mut self, value: impl Into<String>) -> Self {
        self.access_control_request_headers = Some(value.into());
        self
    }

    pub fn accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    /// Validates the values and builds the descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`DataApiError::Configuration`] if the base address, database or
    /// data source is empty.
    pub fn build(self) -> DataApiResult<ConnectionDescriptor> {
        let base_address = self.base_address.trim_end_matches('/').to_string();

        if base_address.is_empty() {
            return Err(DataApiError::Configuration(
                "base address must not be empty".to_string(),
            ));
        }
        if self.database.is_empty() {
            return Err(DataApiError::Configuration(
                "database must not be empty".to_string(),
            ));
        }
        if self.data_source.is_empty() {
            return Err(DataApiError::Configuration(
                "data source must not be empty".to_string(),
            ));
        }

        Ok(ConnectionDescriptor {
            base_address,
            database: self.database,
            data_source: self.data_source,
            credential: self.credential,
            content_type: self.content_type.unwrap_or_else(default_content_type),
            access_control_request_headers: self
                .access_control_request_headers
                .unwrap_or_else(default_access_control_request_headers),
            accept: self.accept.unwrap_or_else(default_accept),
        })
    }
}

/// Raw configuration shape, validated into a [`ConnectionDescriptor`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConnectionConfig {
    base_address: String,
    database: String,
    data_source: String,
    #[serde(default)]
    credential: Option<String>,
    #[serde(default = "default_content_type")]
    content_type: String,
    #[serde(default = "default_access_control_request_headers")]
    access_control_request_headers: String,
    #[serde(default = "default_accept")]
    accept: String,
}

impl TryFrom<ConnectionConfig> for ConnectionDescriptor {
    type Error = DataApiError;

    fn try_from(config: ConnectionConfig) -> Result<Self, Self::Error> {
        let mut builder = ConnectionDescriptor::builder(
            config.base_address,
            config.database,
            config.data_source,
        )
        .content_type(config.content_type)
        .access_control_request_headers(config.access_control_request_headers)
        .accept(config.accept);

        if let Some(credential) = config.credential {
            builder = builder.credential(credential);
        }

        builder.build()
    }
}
