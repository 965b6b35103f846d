//! The fixed set of data API actions and the HTTP method they are sent with.

use std::fmt;

/// A single data API action.
///
/// Each variant maps to a fixed path segment under `<base>/action/`. The set is
/// closed: the API exposes exactly these operations to this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Return the first document matching an optional filter.
    FindOne,
    /// Return every document matching an optional filter.
    Find,
    /// Insert a single document.
    InsertOne,
    /// Insert a sequence of documents.
    InsertMany,
    /// Apply an update to the first matching document.
    UpdateOne,
    /// Apply an update to every matching document.
    UpdateMany,
    /// Replace the first matching document wholesale.
    ReplaceOne,
    /// Delete the first matching document.
    DeleteOne,
    /// Run an aggregation pipeline.
    Aggregate,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Action; 9] = [
        Action::FindOne,
        Action::Find,
        Action::InsertOne,
        Action::InsertMany,
        Action::UpdateOne,
        Action::UpdateMany,
        Action::ReplaceOne,
        Action::DeleteOne,
        Action::Aggregate,
    ];

    /// Returns the literal used in the action path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FindOne => "findOne",
            Self::Find => "find",
            Self::InsertOne => "insertOne",
            Self::InsertMany => "insertMany",
            Self::UpdateOne => "updateOne",
            Self::UpdateMany => "updateMany",
            Self::ReplaceOne => "replaceOne",
            Self::DeleteOne => "deleteOne",
            Self::Aggregate => "aggregate",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP method used for an action request.
///
/// The API models reads as well as writes as `POST` bodies carrying an action
/// descriptor, so this is the only method there is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RequestMethod {
    #[default]
    Post,
}

impl RequestMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_literals() {
        let names: Vec<&str> = Action::ALL.iter().map(Action::as_str).collect();
        assert_eq!(
            names,
            vec![
                "findOne",
                "find",
                "insertOne",
                "insertMany",
                "updateOne",
                "updateMany",
                "replaceOne",
                "deleteOne",
                "aggregate",
            ]
        );
    }

    #[test]
    fn display_matches_literal() {
        assert_eq!(Action::ReplaceOne.to_string(), "replaceOne");
        assert_eq!(RequestMethod::Post.to_string(), "POST");
    }
}
