//! Collection handles for issuing actions.
//!
//! - [`Collection`] - One method per action, returning the raw [`ActionResponse`]
//! - [`TypedCollection`] - Decodes and unwraps responses into a [`Document`] type
//!
//! Both are cheap views over a client's descriptor and transport; they hold no
//! state of their own.
//!
//! # Example
//!
//! ```ignore
//! let users = client.typed_collection::<User>();
//!
//! users.insert_one(&User { name: "Alice".into(), email: "a@example.com".into() }).await?;
//!
//! let alice = users
//!     .find_one(FindOneOptions::new().filter(json!({ "name": "Alice" })))
//!     .await?;
//! ```

use serde::{Serialize, de::DeserializeOwned};
use std::marker::PhantomData;

use crate::{
    builder,
    connection::ConnectionDescriptor,
    document::Document,
    error::DataApiResult,
    options::{FindOneOptions, FindOptions, UpdateOptions},
    request::ActionRequest,
    response::{ActionResponse, DeleteResult, InsertManyResult, InsertOneResult, UpdateResult},
    transport::Transport,
};

/// An untyped collection handle.
///
/// Every method builds the action's request, hands it to the transport and
/// returns the response as received. Use [`ActionResponse::into_document`] and
/// friends to decode it, or [`TypedCollection`] to have that done for you.
#[derive(Debug)]
pub struct Collection<'a, T: Transport> {
    name: String,
    descriptor: &'a ConnectionDescriptor,
    transport: &'a T,
}

impl<'a, T: Transport> Collection<'a, T> {
    pub(crate) fn new(name: String, descriptor: &'a ConnectionDescriptor, transport: &'a T) -> Self {
        Self {
            name,
            descriptor,
            transport,
        }
    }

    /// Returns the name of this collection.
    pub fn name(&self) -> &str {
        &self.name
    }

    async fn send(&self, request: ActionRequest) -> DataApiResult<ActionResponse> {
        self.transport.perform(request).await
    }

    /// Sends a `findOne` action.
    pub async fn find_one<F, P>(
        &self,
        options: FindOneOptions<F, P>,
    ) -> DataApiResult<ActionResponse>
    where
        F: Serialize,
        P: Serialize,
    {
        self.send(builder::find_one(self.descriptor, &self.name, &options)?)
            .await
    }

    /// Sends a `find` action.
    pub async fn find<F, P, S>(
        &self,
        options: FindOptions<F, P, S>,
    ) -> DataApiResult<ActionResponse>
    where
        F: Serialize,
        P: Serialize,
        S: Serialize,
    {
        self.send(builder::find(self.descriptor, &self.name, &options)?)
            .await
    }

    /// Sends an `insertOne` action.
    pub async fn insert_one<D: Serialize>(&self, document: &D) -> DataApiResult<ActionResponse> {
        self.send(builder::insert_one(self.descriptor, &self.name, document)?)
            .await
    }

    /// Sends an `insertMany` action.
    pub async fn insert_many<D: Serialize>(&self, documents: &[D]) -> DataApiResult<ActionResponse> {
        self.send(builder::insert_many(self.descriptor, &self.name, documents)?)
            .await
    }

    /// Sends an `updateOne` action.
    pub async fn update_one<F, U>(
        &self,
        filter: &F,
        update: &U,
        options: UpdateOptions,
    ) -> DataApiResult<ActionResponse>
    where
        F: Serialize,
        U: Serialize,
    {
        self.send(builder::update_one(
            self.descriptor,
            &self.name,
            filter,
            update,
            &options,
        )?)
        .await
    }

    /// Sends an `updateMany` action.
    pub async fn update_many<F, U>(
        &self,
        filter: &F,
        update: &U,
        options: UpdateOptions,
    ) -> DataApiResult<ActionResponse>
    where
        F: Serialize,
        U: Serialize,
    {
        self.send(builder::update_many(
            self.descriptor,
            &self.name,
            filter,
            update,
            &options,
        )?)
        .await
    }

    /// Sends a `replaceOne` action.
    pub async fn replace_one<F, R>(
        &self,
        filter: &F,
        replacement: &R,
        options: UpdateOptions,
    ) -> DataApiResult<ActionResponse>
    where
        F: Serialize,
        R: Serialize,
    {
        self.send(builder::replace_one(
            self.descriptor,
            &self.name,
            filter,
            replacement,
            &options,
        )?)
        .await
    }

    /// Sends a `deleteOne` action.
    pub async fn delete_one<F: Serialize>(&self, filter: &F) -> DataApiResult<ActionResponse> {
        self.send(builder::delete_one(self.descriptor, &self.name, filter)?)
            .await
    }

    /// Sends an `aggregate` action.
    pub async fn aggregate<P: Serialize>(&self, pipeline: &[P]) -> DataApiResult<ActionResponse> {
        self.send(builder::aggregate(self.descriptor, &self.name, pipeline)?)
            .await
    }
}

/// A collection handle that decodes responses into `D`.
///
/// Reads unwrap the `document`/`documents` envelope; writes decode the action's
/// result body. A projection that drops fields `D` requires will fail to
/// decode; use [`Collection`] with a dedicated target type for those reads.
#[derive(Debug)]
pub struct TypedCollection<'a, T: Transport, D: Document> {
    inner: Collection<'a, T>,
    _marker: PhantomData<D>,
}

impl<'a, T: Transport, D: Document> TypedCollection<'a, T, D> {
    pub(crate) fn new(descriptor: &'a ConnectionDescriptor, transport: &'a T) -> Self {
        Self {
            inner: Collection::new(D::collection_name().to_string(), descriptor, transport),
            _marker: PhantomData,
        }
    }

    /// Returns the name of this collection.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Returns the untyped handle for the same collection.
    pub fn untyped(&self) -> &Collection<'a, T> {
        &self.inner
    }

    /// Returns the first matching document, or `None` when nothing matches.
    pub async fn find_one<F, P>(&self, options: FindOneOptions<F, P>) -> DataApiResult<Option<D>>
    where
        F: Serialize,
        P: Serialize,
    {
        self.inner.find_one(options).await?.into_document()
    }

    /// Returns every matching document.
    pub async fn find<F, P, S>(&self, options: FindOptions<F, P, S>) -> DataApiResult<Vec<D>>
    where
        F: Serialize,
        P: Serialize,
        S: Serialize,
    {
        self.inner.find(options).await?.into_documents()
    }

    pub async fn insert_one(&self, document: &D) -> DataApiResult<InsertOneResult> {
        self.inner.insert_one(document).await?.decode()
    }

    pub async fn insert_many(&self, documents: &[D]) -> DataApiResult<InsertManyResult> {
        self.inner.insert_many(documents).await?.decode()
    }

    pub async fn update_one<F, U>(
        &self,
        filter: &F,
        update: &U,
        options: UpdateOptions,
    ) -> DataApiResult<UpdateResult>
    where
        F: Serialize,
        U: Serialize,
    {
        self.inner
            .update_one(filter, update, options)
            .await?
            .decode()
    }

    pub async fn update_many<F, U>(
        &self,
        filter: &F,
        update: &U,
        options: UpdateOptions,
    ) -> DataApiResult<UpdateResult>
    where
        F: Serialize,
        U: Serialize,
    {
        self.inner
            .update_many(filter, update, options)
            .await?
            .decode()
    }

    pub async fn replace_one<F: Serialize>(
        &self,
        filter: &F,
        replacement: &D,
        options: UpdateOptions,
    ) -> DataApiResult<UpdateResult> {
        self.inner
            .replace_one(filter, replacement, options)
            .await?
            .decode()
    }

    pub async fn delete_one<F: Serialize>(&self, filter: &F) -> DataApiResult<DeleteResult> {
        self.inner.delete_one(filter).await?.decode()
    }

    /// Runs a pipeline and decodes each output document as `R`.
    ///
    /// Pipeline stages usually reshape documents, so the output type is chosen
    /// per call rather than fixed to `D`.
    pub async fn aggregate<P, R>(&self, pipeline: &[P]) -> DataApiResult<Vec<R>>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        self.inner.aggregate(pipeline).await?.into_documents()
    }
}
