//! Transport abstraction: the one place a request actually leaves the process.
//!
//! The mapping layer only builds [`ActionRequest`]s and unwraps
//! [`ActionResponse`]s. Sending bytes is delegated to a [`Transport`]
//! implementation, such as the `reqwest`-backed transport in `dataapi-http` or
//! the scripted in-memory transport in `dataapi-memory`.
//!
//! # Traits
//!
//! - [`Transport`]: The core trait for transports
//! - [`DynTransport`]: An object-safe mirror for dynamic dispatch
//! - [`TransportBuilder`]: Factory trait for creating transport instances
//!
//! # Contract
//!
//! A transport returns `Ok` only for a 2xx response. Network failures, non-2xx
//! statuses and unreadable bodies are reported as
//! [`DataApiError::Transport`](crate::error::DataApiError::Transport) and are
//! passed through by the client unchanged. Timeouts and cancellation are the
//! transport's business; no state needs cleaning up when a call is dropped.

use async_trait::async_trait;
use std::{any::Any, fmt::Debug};

use crate::{error::DataApiResult, request::ActionRequest, response::ActionResponse};

/// Executes action requests.
///
/// Implementations must be thread-safe: the same transport is shared by every
/// concurrent call made through a client.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    /// Sends the request and returns the successful response.
    ///
    /// # Errors
    ///
    /// Returns [`DataApiError::Transport`](crate::error::DataApiError::Transport)
    /// for network failures and non-2xx statuses.
    async fn perform(&self, request: ActionRequest) -> DataApiResult<ActionResponse>;

    /// Releases any resources held by the transport.
    ///
    /// The default implementation is a no-op.
    async fn shutdown(self) -> DataApiResult<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}

#[async_trait]
impl<T> Transport for &T
where
    T: Transport,
{
    async fn perform(&self, request: ActionRequest) -> DataApiResult<ActionResponse> {
        (*self).perform(request).await
    }
}

#[async_trait]
pub trait DynTransport: Send + Sync + Debug {
    async fn perform(&self, request: ActionRequest) -> DataApiResult<ActionResponse>;
    async fn shutdown_boxed(self: Box<Self>) -> DataApiResult<()>;

    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

#[async_trait]
impl<T: Transport + 'static> DynTransport for T {
    async fn perform(&self, request: ActionRequest) -> DataApiResult<ActionResponse> {
        Transport::perform(self, request).await
    }

    async fn shutdown_boxed(self: Box<Self>) -> DataApiResult<()> {
        (*self).shutdown().await
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

#[async_trait]
impl Transport for Box<dyn DynTransport> {
    async fn perform(&self, request: ActionRequest) -> DataApiResult<ActionResponse> {
        DynTransport::perform(&**self, request).await
    }

    async fn shutdown(self) -> DataApiResult<()> {
        self.shutdown_boxed().await
    }
}

#[async_trait]
pub trait TransportBuilder {
    type Transport: Transport;

    async fn build(self) -> DataApiResult<Self::Transport>;
}
