//! Trait for application document types bound to a collection.

use serde::{Serialize, de::DeserializeOwned};

/// An application-defined document stored in a named collection.
///
/// The data API imposes no base type on documents; this trait only ties a
/// serde type to its collection so it can be used through a
/// [`TypedCollection`](crate::collection::TypedCollection).
///
/// # Example
///
/// ```ignore
/// use dataapi_core::document::Document;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// pub struct User {
///     pub name: String,
///     pub email: String,
/// }
///
/// impl Document for User {
///     fn collection_name() -> &'static str {
///         "users"
///     }
/// }
/// ```
pub trait Document: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Returns the name of the collection this document belongs to.
    fn collection_name() -> &'static str;
}
