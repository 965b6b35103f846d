//! Transport-agnostic description of an outgoing action request.

use crate::{
    action::{Action, RequestMethod},
    connection::Headers,
};

/// A fully built action request, ready to hand to a transport.
///
/// The action and collection travel with the request so transports can attach
/// them to errors and log lines.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionRequest {
    pub action: Action,
    pub collection: String,
    /// `<base>/action/<name>`.
    pub url: String,
    pub method: RequestMethod,
    pub headers: Headers,
    /// Serialized JSON envelope.
    pub body: Vec<u8>,
}

impl ActionRequest {
    /// Returns the body as UTF-8 text.
    ///
    /// Bodies are produced by `serde_json`, which always emits valid UTF-8.
    pub fn body_str(&self) -> &str {
        std::str::from_utf8(&self.body).unwrap_or_default()
    }

    /// Parses the body back into a JSON value.
    pub fn body_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_slice(&self.body)
    }
}
