//! Typed request/response mapping for a REST document-database data API.
//!
//! The data API exposes document operations as `POST <base>/action/<name>`
//! calls carrying a JSON envelope. This crate is the core of the dataapi
//! project and provides:
//!
//! - **Actions** ([`action`]) - The fixed set of operations and their wire names
//! - **Connection descriptor** ([`connection`]) - Endpoint, tenant and header configuration
//! - **Options** ([`options`]) - Per-action optional parameters, absent by default
//! - **Request envelopes** ([`envelope`]) - The JSON body shape of each action
//! - **Request builder** ([`builder`]) - Pure functions turning parameters into requests
//! - **Response unwrapping** ([`response`]) - Envelope projection and typed write results
//! - **Transport abstraction** ([`transport`]) - The seam where requests leave the process
//! - **Client and collections** ([`client`], [`collection`]) - Application-facing handles
//! - **Error handling** ([`error`]) - Error and result types
//!
//! # Example
//!
//! ```ignore
//! use dataapi_core::{builder, connection::ConnectionDescriptor, options::FindOptions};
//! use serde_json::json;
//!
//! let descriptor = ConnectionDescriptor::builder("https://api.example/data/v1", "db", "cluster0")
//!     .credential("k")
//!     .build()?;
//!
//! let request = builder::find(
//!     &descriptor,
//!     "users",
//!     &FindOptions::new().filter(json!({ "status": "active" })).limit(10),
//! )?;
//!
//! // {"collection":"users","database":"db","dataSource":"cluster0","filter":{"status":"active"},"limit":10}
//! println!("{}", request.body_str());
//! ```

#[allow(unused_extern_crates)]
extern crate self as dataapi_core;

pub mod action;
pub mod builder;
pub mod client;
pub mod collection;
pub mod connection;
pub mod document;
pub mod envelope;
pub mod error;
pub mod options;
pub mod request;
pub mod response;
pub mod transport;
