//! HTTP transport implementation for dataapi.
//!
//! This crate provides a `reqwest`-based implementation of the `Transport`
//! trait that posts action requests to a live data API endpoint.
//!
//! To use this transport, include the `http` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! dataapi = { version = "x.y.z", features = ["http"] }
//! ```
//!
//! # Behavior
//!
//! - **Pass-through** - Requests are sent exactly as built: URL, headers and body
//! - **Status mapping** - Any non-2xx status becomes a transport error carrying the status and body text
//! - **No retries** - Backoff and retry policy are left to the caller
//! - **Tracing** - Requests and responses are logged at `debug`, failures at `warn`
//!
//! # Example
//!
//! ```ignore
//! use dataapi::{prelude::*, http::HttpTransport};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = HttpTransport::builder()
//!         .timeout(Duration::from_secs(30))
//!         .build()
//!         .await?;
//!     let client = DataApiClient::new(descriptor, transport);
//!
//!     Ok(())
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as dataapi_http;

pub mod transport;

pub use transport::{HttpTransport, HttpTransportBuilder};
