//! In-memory transport for dataapi.
//!
//! This crate provides a scripted, thread-safe implementation of the
//! `Transport` trait. Nothing leaves the process: responses are queued ahead of
//! time and every request is recorded, which makes it the transport of choice
//! for tests and offline development.
//!
//! # Features
//!
//! - **Thread-safe access** - Shared state behind async-aware read-write locks
//! - **Ordered replay** - Responses are handed out first in, first out
//! - **Request capture** - Inspect URLs, headers and bodies after the fact
//! - **Realistic failures** - Non-2xx statuses surface as transport errors
//!
//! # Quick Start
//!
//! ```ignore
//! use dataapi::{prelude::*, memory::InMemoryTransport};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = InMemoryTransport::builder()
//!         .json(json!({ "insertedId": "64f0c1" }))
//!         .build()
//!         .await?;
//!     let client = DataApiClient::new(descriptor, transport.clone());
//!
//!     client.collection("users").insert_one(&json!({ "name": "Alice" })).await?;
//!
//!     let sent = transport.last_request().await.unwrap();
//!     assert!(sent.url.ends_with("/action/insertOne"));
//!
//!     Ok(())
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as dataapi_memory;

pub mod transport;

pub use transport::{InMemoryTransport, InMemoryTransportBuilder, ScriptedResponse};
