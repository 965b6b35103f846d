//! Optional parameters for data API actions.
//!
//! Each options value starts with every field absent. A field only reaches the
//! request body when it has been set, so a `find` without a filter sends no
//! `filter` key at all (which the server treats differently from `"filter": {}`).
//!
//! Filter, projection and sort are generic: any `Serialize` shape works, from
//! `serde_json::Value` to `bson::Document` to a caller-defined struct. Setting
//! one changes the corresponding type parameter, so unset fields need no type
//! annotations.
//!
//! # Example
//!
//! ```ignore
//! use dataapi_core::options::FindOptions;
//! use serde_json::json;
//!
//! let options = FindOptions::new()
//!     .filter(json!({ "status": "active" }))
//!     .sort(json!({ "createdAt": -1 }))
//!     .limit(10);
//! ```

use serde_json::Value;

/// Optional parameters of a `findOne` action.
#[derive(Debug, Clone, PartialEq)]
pub struct FindOneOptions<F = Value, P = Value> {
    pub filter: Option<F>,
    pub projection: Option<P>,
}

impl FindOneOptions {
    /// Creates options with no filter and no projection.
    pub fn new() -> Self {
        FindOneOptions {
            filter: None,
            projection: None,
        }
    }
}

impl Default for FindOneOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl<F, P> FindOneOptions<F, P> {
    /// Sets the query filter.
    pub fn filter<F2>(self, filter: F2) -> FindOneOptions<F2, P> {
        FindOneOptions {
            filter: Some(filter),
            projection: self.projection,
        }
    }

    /// Sets the projection applied to the returned document.
    pub fn projection<P2>(self, projection: P2) -> FindOneOptions<F, P2> {
        FindOneOptions {
            filter: self.filter,
            projection: Some(projection),
        }
    }
}

/// Optional parameters of a `find` action.
#[derive(Debug, Clone, PartialEq)]
pub struct FindOptions<F = Value, P = Value, S = Value> {
    pub filter: Option<F>,
    pub projection: Option<P>,
    pub sort: Option<S>,
    /// Maximum number of documents to return.
    pub limit: Option<u64>,
    /// Number of matching documents to skip.
    pub skip: Option<u64>,
}

impl FindOptions {
    /// Creates options with every field absent.
    pub fn new() -> Self {
        FindOptions {
            filter: None,
            projection: None,
            sort: None,
            limit: None,
            skip: None,
        }
    }
}

impl Default for FindOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl<F, P, S> FindOptions<F, P, S> {
    /// Sets the query filter.
    pub fn filter<F2>(self, filter: F2) -> FindOptions<F2, P, S> {
        FindOptions {
            filter: Some(filter),
            projection: self.projection,
            sort: self.sort,
            limit: self.limit,
            skip: self.skip,
        }
    }

    /// Sets the projection applied to every returned document.
    pub fn projection<P2>(self, projection: P2) -> FindOptions<F, P2, S> {
        FindOptions {
            filter: self.filter,
            projection: Some(projection),
            sort: self.sort,
            limit: self.limit,
            skip: self.skip,
        }
    }

    /// Sets the sort specification.
    pub fn sort<S2>(self, sort: S2) -> FindOptions<F, P, S2> {
        FindOptions {
            filter: self.filter,
            projection: self.projection,
            sort: Some(sort),
            limit: self.limit,
            skip: self.skip,
        }
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }
}

/// Optional parameters of `updateOne`, `updateMany` and `replaceOne`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateOptions {
    /// Insert a new document when nothing matches the filter.
    pub upsert: Option<bool>,
}

impl UpdateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(mut self, upsert: bool) -> Self {
        self.upsert = Some(upsert);
        self
    }
}
