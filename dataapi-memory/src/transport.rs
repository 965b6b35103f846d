//! Scripted in-memory transport.
//!
//! Responses are queued up front and handed out in order, one per request.
//! Every request is recorded so tests can assert on exactly what would have
//! gone over the wire.

use std::{collections::VecDeque, sync::Arc};

use async_trait::async_trait;
use mea::rwlock::RwLock;
use serde_json::Value;

use dataapi_core::{
    error::{DataApiError, DataApiResult},
    request::ActionRequest,
    response::ActionResponse,
    transport::{Transport, TransportBuilder},
};

/// A queued response: status code and raw body.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ScriptedResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A `200` response with `value` as its JSON body.
    pub fn json(value: Value) -> Self {
        Self::new(200, value.to_string())
    }

    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Thread-safe transport that replays scripted responses.
///
/// `InMemoryTransport` is cloneable and uses `Arc`-wrapped state, so a clone
/// kept by a test observes the requests made through a client that owns
/// another clone.
///
/// Failure handling mirrors a real HTTP transport: a non-2xx scripted status
/// becomes a [`DataApiError::Transport`] carrying that status, and running out
/// of scripted responses is a transport error without a status.
///
/// # Example
///
/// ```ignore
/// use dataapi_memory::InMemoryTransport;
/// use serde_json::json;
///
/// let transport = InMemoryTransport::new();
/// transport.push_json(json!({ "document": { "name": "Alice" } })).await;
///
/// let client = DataApiClient::new(descriptor, transport.clone());
/// let alice: Option<Value> = client
///     .collection("users")
///     .find_one(FindOneOptions::new())
///     .await?
///     .into_document()?;
///
/// assert_eq!(transport.requests().await.len(), 1);
/// ```
#[derive(Default, Clone, Debug)]
pub struct InMemoryTransport {
    /// Responses not yet handed out, front first.
    responses: Arc<RwLock<VecDeque<ScriptedResponse>>>,
    /// Every request received, in arrival order.
    requests: Arc<RwLock<Vec<ActionRequest>>>,
}

impl InMemoryTransport {
    /// Creates a transport with an empty response queue.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(RwLock::new(VecDeque::new())),
            requests: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn builder() -> InMemoryTransportBuilder {
        InMemoryTransportBuilder::default()
    }

    /// Queues a response with an arbitrary status and body.
    pub async fn push_response(&self, status: u16, body: impl Into<Vec<u8>>) {
        self.responses
            .write()
            .await
            .push_back(ScriptedResponse::new(status, body));
    }

    /// Queues a `200` response with a JSON body.
    pub async fn push_json(&self, value: Value) {
        self.responses
            .write()
            .await
            .push_back(ScriptedResponse::json(value));
    }

    /// Returns a copy of every request received so far.
    pub async fn requests(&self) -> Vec<ActionRequest> {
        self.requests.read().await.clone()
    }

    /// Returns the most recent request, if any.
    pub async fn last_request(&self) -> Option<ActionRequest> {
        self.requests.read().await.last().cloned()
    }

    /// Number of scripted responses not yet consumed.
    pub async fn pending(&self) -> usize {
        self.responses.read().await.len()
    }
}

#[async_trait]
impl Transport for InMemoryTransport {
    async fn perform(&self, request: ActionRequest) -> DataApiResult<ActionResponse> {
        let action = request.action;
        let collection = request.collection.clone();

        self.requests.write().await.push(request);

        let scripted = self
            .responses
            .write()
            .await
            .pop_front()
            .ok_or_else(|| {
                DataApiError::transport(action, &collection, None, "no scripted response left")
            })?;

        if !scripted.is_success() {
            return Err(DataApiError::transport(
                action,
                &collection,
                Some(scripted.status),
                String::from_utf8_lossy(&scripted.body),
            ));
        }

        Ok(ActionResponse::new(
            action,
            collection,
            scripted.status,
            scripted.body,
        ))
    }
}

/// Builder for an [`InMemoryTransport`] with a pre-filled response queue.
#[derive(Debug, Default)]
pub struct InMemoryTransportBuilder {
    responses: Vec<ScriptedResponse>,
}

impl InMemoryTransportBuilder {
    pub fn response(mut self, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.responses.push(ScriptedResponse::new(status, body));
        self
    }

    pub fn json(mut self, value: Value) -> Self {
        self.responses.push(ScriptedResponse::json(value));
        self
    }
}

#[async_trait]
impl TransportBuilder for InMemoryTransportBuilder {
    type Transport = InMemoryTransport;

    async fn build(self) -> DataApiResult<Self::Transport> {
        Ok(InMemoryTransport {
            responses: Arc::new(RwLock::new(self.responses.into())),
            requests: Arc::new(RwLock::new(Vec::new())),
        })
    }
}
