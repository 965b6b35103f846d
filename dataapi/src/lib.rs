//! Main dataapi crate providing typed access to a REST document-database data API.
//!
//! This crate is the primary entry point for users of the dataapi project.
//! It re-exports the core types from `dataapi-core` and provides access to the
//! available transports.
//!
//! # Features
//!
//! - **Typed documents** - Read and write any Serde type; no shared base type required
//! - **Exact request bodies** - Unset optional parameters never appear in the payload, not even as `null`
//! - **Pluggable transports** - In-memory for tests, `reqwest` for production, or your own
//! - **Typed errors** - Serialization, transport and decode failures carry the action and collection
//!
//! # Quick Start
//!
//! ```ignore
//! use dataapi::{prelude::*, memory::InMemoryTransport};
//! use serde::{Serialize, Deserialize};
//! use serde_json::json;
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct User {
//!     pub name: String,
//!     pub status: String,
//! }
//!
//! impl Document for User {
//!     fn collection_name() -> &'static str { "users" }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let descriptor = ConnectionDescriptor::builder(
//!         "https://data.example.com/app/data-abc/endpoint/data/v1",
//!         "shop",
//!         "Cluster0",
//!     )
//!     .credential("my-api-key")
//!     .build()
//!     .unwrap();
//!
//!     let transport = InMemoryTransport::builder()
//!         .json(json!({ "documents": [{ "name": "Alice", "status": "active" }] }))
//!         .build()
//!         .await
//!         .unwrap();
//!
//!     let client = DataApiClient::new(descriptor, transport);
//!     let users = client.typed_collection::<User>();
//!
//!     let active = users
//!         .find(FindOptions::new().filter(json!({ "status": "active" })).limit(10))
//!         .await
//!         .unwrap();
//!
//!     println!("Active users: {:?}", active);
//!
//!     client.shutdown().await.unwrap();
//! }
//! ```
//!
//! # Raw Requests
//!
//! The request builder can be used on its own when requests are sent by
//! other means:
//!
//! ```ignore
//! use dataapi::{builder, prelude::*};
//!
//! let request = builder::find_one(&descriptor, "users", &FindOneOptions::new())?;
//! // POST https://.../action/findOne
//! // {"collection":"users","database":"shop","dataSource":"Cluster0"}
//! ```
//!
//! # Dynamic Dispatch
//!
//! A client can erase its transport type with [`into_dyn`](client::DataApiClient::into_dyn),
//! which allows choosing the transport at runtime:
//!
//! ```ignore
//! let client: DataApiClient<Box<dyn DynTransport>> = if offline {
//!     DataApiClient::new(descriptor, InMemoryTransport::new()).into_dyn()
//! } else {
//!     DataApiClient::new(descriptor, HttpTransport::builder().build().await?).into_dyn()
//! };
//! ```
//!
//! # Transports
//!
//! - [`memory`] - Scripted in-memory transport for tests and offline development
//! - `http` - `reqwest` transport (requires the `http` feature)

pub mod prelude;

pub use dataapi_core::{
    action, builder, client, collection, connection, document, envelope, error, options, request,
    response, transport,
};

// Re-export BSON types for convenience
pub use bson;

/// In-memory transport implementations.
pub mod memory {
    pub use dataapi_memory::{InMemoryTransport, InMemoryTransportBuilder, ScriptedResponse};
}

/// HTTP transport implementations.
///
/// This module is only available when the `http` feature is enabled.
#[cfg(feature = "http")]
pub mod http {
    pub use dataapi_http::{HttpTransport, HttpTransportBuilder};
}
