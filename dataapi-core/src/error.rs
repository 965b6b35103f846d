//! Error types and result types for data API calls.
//!
//! Every failure carries the action and collection it happened in, so a caller
//! can diagnose it without looking at the wire body. Use [`DataApiResult<T>`]
//! as the return type for fallible operations.

use thiserror::Error;

use crate::action::Action;

/// Represents all possible errors that can occur while building, sending or
/// decoding a data API call.
///
/// None of these are recovered locally; they propagate to the caller unchanged.
#[derive(Error, Debug)]
pub enum DataApiError {
    /// A caller-supplied value could not be turned into the JSON request body.
    #[error("Serialization error in {action} on collection {collection}: {message}")]
    Serialization {
        action: Action,
        collection: String,
        message: String,
    },
    /// The transport failed: network error, non-2xx status, or an unreadable body.
    #[error("Transport error in {action} on collection {collection}: {message}")]
    Transport {
        action: Action,
        collection: String,
        /// HTTP status, when a response was received at all.
        status: Option<u16>,
        message: String,
    },
    /// The response body does not have the expected envelope shape.
    #[error("Decode error in {action} on collection {collection}: {message}")]
    Decode {
        action: Action,
        collection: String,
        message: String,
    },
    /// The connection descriptor or transport is misconfigured.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// A specialized `Result` type for data API operations.
pub type DataApiResult<T> = Result<T, DataApiError>;

impl DataApiError {
    pub fn serialization(action: Action, collection: &str, message: impl ToString) -> Self {
        DataApiError::Serialization {
            action,
            collection: collection.to_string(),
            message: message.to_string(),
        }
    }

    pub fn transport(
        action: Action,
        collection: &str,
        status: Option<u16>,
        message: impl ToString,
    ) -> Self {
        DataApiError::Transport {
            action,
            collection: collection.to_string(),
            status,
            message: message.to_string(),
        }
    }

    pub fn decode(action: Action, collection: &str, message: impl ToString) -> Self {
        DataApiError::Decode {
            action,
            collection: collection.to_string(),
            message: message.to_string(),
        }
    }

    /// Returns the action the error occurred in, if it is tied to one.
    pub fn action(&self) -> Option<Action> {
        match self {
            Self::Serialization { action, .. }
            | Self::Transport { action, .. }
            | Self::Decode { action, .. } => Some(*action),
            Self::Configuration(_) => None,
        }
    }

    /// Returns the collection the error occurred in, if it is tied to one.
    pub fn collection(&self) -> Option<&str> {
        match self {
            Self::Serialization { collection, .. }
            | Self::Transport { collection, .. }
            | Self::Decode { collection, .. } => Some(collection),
            Self::Configuration(_) => None,
        }
    }

    /// Returns the HTTP status of a transport failure, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }
}
