//! Client entry point pairing a connection descriptor with a transport.
//!
//! # Example
//!
//! ```ignore
//! use dataapi_core::{client::DataApiClient, connection::ConnectionDescriptor};
//!
//! let client = DataApiClient::new(descriptor, transport);
//! let response = client.collection("users").find(FindOptions::new()).await?;
//! ```

use crate::{
    collection::{Collection, TypedCollection},
    connection::ConnectionDescriptor,
    document::Document,
    error::DataApiResult,
    transport::{DynTransport, Transport},
};

/// A data API client bound to one descriptor and one transport.
///
/// The client owns no mutable state; any number of collection handles and
/// concurrent calls can share it.
#[derive(Debug)]
pub struct DataApiClient<T: Transport> {
    descriptor: ConnectionDescriptor,
    transport: T,
}

impl<T: Transport> DataApiClient<T> {
    pub fn new(descriptor: ConnectionDescriptor, transport: T) -> Self {
        Self {
            descriptor,
            transport,
        }
    }

    pub fn descriptor(&self) -> &ConnectionDescriptor {
        &self.descriptor
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Gets an untyped handle for the named collection.
    pub fn collection<'a>(&'a self, name: &str) -> Collection<'a, T> {
        Collection::new(name.to_string(), &self.descriptor, &self.transport)
    }

    /// Gets a typed handle for `D`'s collection.
    pub fn typed_collection<'a, D: Document>(&'a self) -> TypedCollection<'a, T, D> {
        TypedCollection::new(&self.descriptor, &self.transport)
    }

    /// Shuts down the underlying transport.
    pub async fn shutdown(self) -> DataApiResult<()> {
        self.transport.shutdown().await
    }
}

impl<T: Transport + 'static> DataApiClient<T> {
    /// Erases the transport type, for selecting a transport at runtime.
    pub fn into_dyn(self) -> DataApiClient<Box<dyn DynTransport>> {
        DataApiClient {
            descriptor: self.descriptor,
            transport: Box::new(self.transport),
        }
    }
}
