//! Response unwrapping and typed action results.
//!
//! Read actions answer with `{"document": <T>}` (findOne) or `{"documents": <T>}`
//! (find, aggregate). Unwrapping is a plain projection of that field: document
//! contents are neither inspected nor altered.
//!
//! The named key is mandatory. A body without it fails to decode even when the
//! target is an `Option`, while an explicit `"document": null` decodes to `None`.

use bson::Bson;
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};

use crate::{
    action::Action,
    error::{DataApiError, DataApiResult},
};

fn required<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer)
}

/// Single-document response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct DocumentEnvelope<T> {
    #[serde(deserialize_with = "required")]
    pub document: T,
}

/// Multi-document response envelope; `T` is usually a `Vec` of the caller's type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct DocumentsEnvelope<T> {
    #[serde(deserialize_with = "required")]
    pub documents: T,
}

impl<T> DocumentEnvelope<T> {
    pub fn new(document: T) -> Self {
        Self { document }
    }
}

impl<T> DocumentsEnvelope<T> {
    pub fn new(documents: T) -> Self {
        Self { documents }
    }
}

/// Extracts the payload of a single-document envelope.
pub fn unwrap_document<T>(envelope: DocumentEnvelope<T>) -> T {
    envelope.document
}

/// Extracts the payload of a multi-document envelope.
pub fn unwrap_documents<T>(envelope: DocumentsEnvelope<T>) -> T {
    envelope.documents
}

fn decode<T: DeserializeOwned>(action: Action, collection: &str, body: &[u8]) -> DataApiResult<T> {
    serde_json::from_slice(body).map_err(|e| DataApiError::decode(action, collection, e))
}

/// Decodes a raw body as a single-document envelope and unwraps it.
///
/// # Errors
///
/// Returns [`DataApiError::Decode`] if the body is not JSON, has no `document`
/// key, or the value does not match `T`.
pub fn decode_document<T: DeserializeOwned>(
    action: Action,
    collection: &str,
    body: &[u8],
) -> DataApiResult<T> {
    decode::<DocumentEnvelope<T>>(action, collection, body).map(unwrap_document)
}

/// Decodes a raw body as a multi-document envelope and unwraps it.
///
/// # Errors
///
/// Returns [`DataApiError::Decode`] if the body is not JSON, has no `documents`
/// key, or the value does not match `T`.
pub fn decode_documents<T: DeserializeOwned>(
    action: Action,
    collection: &str,
    body: &[u8],
) -> DataApiResult<T> {
    decode::<DocumentsEnvelope<T>>(action, collection, body).map(unwrap_documents)
}

/// A successful response as returned by a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionResponse {
    pub action: Action,
    pub collection: String,
    pub status: u16,
    pub body: Vec<u8>,
}

impl ActionResponse {
    pub fn new(action: Action, collection: impl Into<String>, status: u16, body: Vec<u8>) -> Self {
        Self {
            action,
            collection: collection.into(),
            status,
            body,
        }
    }

    /// Decodes the whole body into `T`.
    pub fn decode<T: DeserializeOwned>(self) -> DataApiResult<T> {
        decode(self.action, &self.collection, &self.body)
    }

    /// Decodes a `{"document": ..}` body and returns the inner value.
    pub fn into_document<T: DeserializeOwned>(self) -> DataApiResult<T> {
        decode_document(self.action, &self.collection, &self.body)
    }

    /// Decodes a `{"documents": ..}` body and returns the inner value.
    pub fn into_documents<T: DeserializeOwned>(self) -> DataApiResult<T> {
        decode_documents(self.action, &self.collection, &self.body)
    }
}

/// Result of an `insertOne` action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOneResult {
    pub inserted_id: Bson,
}

/// Result of an `insertMany` action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertManyResult {
    pub inserted_ids: Vec<Bson>,
}

/// Result of `updateOne`, `updateMany` and `replaceOne`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub matched_count: u64,
    pub modified_count: u64,
    /// Present only when an upsert inserted a new document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upserted_id: Option<Bson>,
}

/// Result of a `deleteOne` action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub deleted_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Item {
        a: i64,
    }

    #[test]
    fn decode_single_document() {
        let item: Item = decode_document(Action::FindOne, "items", br#"{"document":{"a":1}}"#)
            .unwrap();

        assert_eq!(item, Item { a: 1 });
    }

    #[test]
    fn decode_rejects_wrong_key() {
        let err = decode_document::<Value>(Action::FindOne, "items", br#"{"docs":{"a":1}}"#)
            .unwrap_err();

        match err {
            DataApiError::Decode {
                action, collection, ..
            } => {
                assert_eq!(action, Action::FindOne);
                assert_eq!(collection, "items");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_key_fails_even_for_option() {
        let result = decode_document::<Option<Item>>(Action::FindOne, "items", b"{}");

        assert!(matches!(result, Err(DataApiError::Decode { .. })));
    }

    #[test]
    fn null_document_is_none() {
        let item: Option<Item> =
            decode_document(Action::FindOne, "items", br#"{"document":null}"#).unwrap();

        assert_eq!(item, None);
    }

    #[test]
    fn shape_mismatch_fails() {
        let result =
            decode_document::<Item>(Action::FindOne, "items", br#"{"document":{"a":"x"}}"#);

        assert!(matches!(result, Err(DataApiError::Decode { .. })));
    }

    #[test]
    fn decode_documents_sequence() {
        let items: Vec<Item> = decode_documents(
            Action::Find,
            "items",
            br#"{"documents":[{"a":1},{"a":2}]}"#,
        )
        .unwrap();

        assert_eq!(items, vec![Item { a: 1 }, Item { a: 2 }]);
    }

    #[test]
    fn decode_documents_missing_key() {
        let result = decode_documents::<Vec<Item>>(Action::Find, "items", br#"{"document":[]}"#);

        assert!(matches!(result, Err(DataApiError::Decode { .. })));
    }

    #[test]
    fn invalid_json_fails() {
        let result = decode_documents::<Vec<Item>>(Action::Find, "items", b"not json");

        assert!(matches!(result, Err(DataApiError::Decode { .. })));
    }

    #[test]
    fn unwrap_inverts_wrap() {
        let values = vec![
            json!({ "a": 1, "nested": { "b": [1, 2, 3] } }),
            json!([1, "two", null]),
            json!("plain"),
            json!(null),
        ];

        for value in values {
            assert_eq!(unwrap_document(DocumentEnvelope::new(value.clone())), value);
            assert_eq!(unwrap_documents(DocumentsEnvelope::new(value.clone())), value);

            let wire = serde_json::to_vec(&DocumentEnvelope::new(value.clone())).unwrap();
            let decoded: Value = decode_document(Action::FindOne, "c", &wire).unwrap();
            assert_eq!(decoded, value);
        }
    }

    #[test]
    fn response_helpers() {
        let response = ActionResponse::new(
            Action::Find,
            "items",
            200,
            br#"{"documents":[{"a":3}]}"#.to_vec(),
        );

        assert_eq!(
            response.clone().into_documents::<Vec<Item>>().unwrap(),
            vec![Item { a: 3 }]
        );
        assert_eq!(
            response.decode::<Value>().unwrap(),
            json!({ "documents": [{ "a": 3 }] })
        );
    }

    #[test]
    fn write_results() {
        let inserted: InsertOneResult =
            serde_json::from_value(json!({ "insertedId": "5f1a" })).unwrap();
        assert_eq!(inserted.inserted_id, Bson::String("5f1a".into()));

        let inserted: InsertManyResult =
            serde_json::from_value(json!({ "insertedIds": ["a", "b"] })).unwrap();
        assert_eq!(inserted.inserted_ids.len(), 2);

        let updated: UpdateResult =
            serde_json::from_value(json!({ "matchedCount": 1, "modifiedCount": 1 })).unwrap();
        assert_eq!(updated.matched_count, 1);
        assert_eq!(updated.upserted_id, None);

        let deleted: DeleteResult = serde_json::from_value(json!({ "deletedCount": 0 })).unwrap();
        assert_eq!(deleted.deleted_count, 0);
    }
}
