//! Request envelopes: the JSON bodies posted for each action.
//!
//! `collection`, `database` and `dataSource` are always present. Optional
//! fields are skipped entirely when absent, never written as `null`. Caller
//! values are borrowed and serialized opaquely under their field.

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindOneRequest<'a, F, P> {
    pub collection: &'a str,
    pub database: &'a str,
    pub data_source: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<&'a F>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection: Option<&'a P>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindRequest<'a, F, P, S> {
    pub collection: &'a str,
    pub database: &'a str,
    pub data_source: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<&'a F>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection: Option<&'a P>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<&'a S>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOneRequest<'a, D> {
    pub collection: &'a str,
    pub database: &'a str,
    pub data_source: &'a str,
    pub document: &'a D,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertManyRequest<'a, D> {
    pub collection: &'a str,
    pub database: &'a str,
    pub data_source: &'a str,
    pub documents: &'a [D],
}

/// Body of both `updateOne` and `updateMany`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest<'a, F, U> {
    pub collection: &'a str,
    pub database: &'a str,
    pub data_source: &'a str,
    pub filter: &'a F,
    pub update: &'a U,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upsert: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceRequest<'a, F, R> {
    pub collection: &'a str,
    pub database: &'a str,
    pub data_source: &'a str,
    pub filter: &'a F,
    pub replacement: &'a R,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upsert: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRequest<'a, F> {
    pub collection: &'a str,
    pub database: &'a str,
    pub data_source: &'a str,
    pub filter: &'a F,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateRequest<'a, P> {
    pub collection: &'a str,
    pub database: &'a str,
    pub data_source: &'a str,
    pub pipeline: &'a [P],
}
