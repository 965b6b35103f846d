//! Convenient re-exports of commonly used types from dataapi.
//!
//! Import this prelude module to quickly access the most frequently used types
//! and traits without needing to import from multiple sub-modules:
//!
//! ```ignore
//! use dataapi::prelude::*;
//! ```
//!
//! This provides access to:
//! - The client, collection handles and the document trait
//! - The connection descriptor and its builder
//! - Per-action options
//! - Transport traits
//! - Response helpers, typed results and error types

pub use dataapi_core::{
    action::{Action, RequestMethod},
    client::DataApiClient,
    collection::{Collection, TypedCollection},
    connection::{ConnectionDescriptor, ConnectionDescriptorBuilder, Headers},
    document::Document,
    error::{DataApiError, DataApiResult},
    options::{FindOneOptions, FindOptions, UpdateOptions},
    request::ActionRequest,
    response::{
        ActionResponse, DeleteResult, DocumentEnvelope, DocumentsEnvelope, InsertManyResult,
        InsertOneResult, UpdateResult, decode_document, decode_documents, unwrap_document,
        unwrap_documents,
    },
    transport::{DynTransport, Transport, TransportBuilder},
};
