//! Request builder: one pure function per action.
//!
//! Each function combines a [`ConnectionDescriptor`], a collection name and the
//! action's parameters into an [`ActionRequest`]. Nothing here performs I/O or
//! holds state, so the functions are safe to call concurrently.
//!
//! # Example
//!
//! ```ignore
//! use dataapi_core::{builder, options::FindOptions};
//! use serde_json::json;
//!
//! let request = builder::find(
//!     &descriptor,
//!     "users",
//!     &FindOptions::new().filter(json!({ "status": "active" })).limit(10),
//! )?;
//!
//! assert_eq!(request.url, "https://api.example/data/v1/action/find");
//! ```

use serde::Serialize;

use crate::{
    action::{Action, RequestMethod},
    connection::ConnectionDescriptor,
    envelope::{
        AggregateRequest, DeleteRequest, FindOneRequest, FindRequest, InsertManyRequest,
        InsertOneRequest, ReplaceRequest, UpdateRequest,
    },
    error::{DataApiError, DataApiResult},
    options::{FindOneOptions, FindOptions, UpdateOptions},
    request::ActionRequest,
};

fn build<E: Serialize>(
    descriptor: &ConnectionDescriptor,
    action: Action,
    collection: &str,
    envelope: &E,
) -> DataApiResult<ActionRequest> {
    let body = serde_json::to_vec(envelope)
        .map_err(|e| DataApiError::serialization(action, collection, e))?;

    Ok(ActionRequest {
        action,
        collection: collection.to_string(),
        url: descriptor.action_url(action),
        method: RequestMethod::Post,
        headers: descriptor.headers(),
        body,
    })
}

/// Builds a `findOne` request.
pub fn find_one<F, P>(
    descriptor: &ConnectionDescriptor,
    collection: &str,
    options: &FindOneOptions<F, P>,
) -> DataApiResult<ActionRequest>
where
    F: Serialize,
    P: Serialize,
{
    build(
        descriptor,
        Action::FindOne,
        collection,
        &FindOneRequest {
            collection,
            database: descriptor.database(),
            data_source: descriptor.data_source(),
            filter: options.filter.as_ref(),
            projection: options.projection.as_ref(),
        },
    )
}

/// Builds a `find` request.
pub fn find<F, P, S>(
    descriptor: &ConnectionDescriptor,
    collection: &str,
    options: &FindOptions<F, P, S>,
) -> DataApiResult<ActionRequest>
where
    F: Serialize,
    P: Serialize,
    S: Serialize,
{
    build(
        descriptor,
        Action::Find,
        collection,
        &FindRequest {
            collection,
            database: descriptor.database(),
            data_source: descriptor.data_source(),
            filter: options.filter.as_ref(),
            projection: options.projection.as_ref(),
            sort: options.sort.as_ref(),
            limit: options.limit,
            skip: options.skip,
        },
    )
}

/// Builds an `insertOne` request.
pub fn insert_one<D: Serialize>(
    descriptor: &ConnectionDescriptor,
    collection: &str,
    document: &D,
) -> DataApiResult<ActionRequest> {
    build(
        descriptor,
        Action::InsertOne,
        collection,
        &InsertOneRequest {
            collection,
            database: descriptor.database(),
            data_source: descriptor.data_source(),
            document,
        },
    )
}

/// Builds an `insertMany` request. An empty slice is sent as `"documents": []`.
pub fn insert_many<D: Serialize>(
    descriptor: &ConnectionDescriptor,
    collection: &str,
    documents: &[D],
) -> DataApiResult<ActionRequest> {
    build(
        descriptor,
        Action::InsertMany,
        collection,
        &InsertManyRequest {
            collection,
            database: descriptor.database(),
            data_source: descriptor.data_source(),
            documents,
        },
    )
}

fn update<F: Serialize, U: Serialize>(
    descriptor: &ConnectionDescriptor,
    action: Action,
    collection: &str,
    filter: &F,
    update: &U,
    options: &UpdateOptions,
) -> DataApiResult<ActionRequest> {
    build(
        descriptor,
        action,
        collection,
        &UpdateRequest {
            collection,
            database: descriptor.database(),
            data_source: descriptor.data_source(),
            filter,
            update,
            upsert: options.upsert,
        },
    )
}

/// Builds an `updateOne` request.
pub fn update_one<F: Serialize, U: Serialize>(
    descriptor: &ConnectionDescriptor,
    collection: &str,
    filter: &F,
    update_doc: &U,
    options: &UpdateOptions,
) -> DataApiResult<ActionRequest> {
    update(descriptor, Action::UpdateOne, collection, filter, update_doc, options)
}

/// Builds an `updateMany` request.
pub fn update_many<F: Serialize, U: Serialize>(
    descriptor: &ConnectionDescriptor,
    collection: &str,
    filter: &F,
    update_doc: &U,
    options: &UpdateOptions,
) -> DataApiResult<ActionRequest> {
    update(descriptor, Action::UpdateMany, collection, filter, update_doc, options)
}

/// Builds a `replaceOne` request.
pub fn replace_one<F: Serialize, R: Serialize>(
    descriptor: &ConnectionDescriptor,
    collection: &str,
    filter: &F,
    replacement: &R,
    options: &UpdateOptions,
) -> DataApiResult<ActionRequest> {
    build(
        descriptor,
        Action::ReplaceOne,
        collection,
        &ReplaceRequest {
            collection,
            database: descriptor.database(),
            data_source: descriptor.data_source(),
            filter,
            replacement,
            upsert: options.upsert,
        },
    )
}

/// Builds a `deleteOne` request.
///
/// The filter is required; pass an empty object to match any document.
pub fn delete_one<F: Serialize>(
    descriptor: &ConnectionDescriptor,
    collection: &str,
    filter: &F,
) -> DataApiResult<ActionRequest> {
    build(
        descriptor,
        Action::DeleteOne,
        collection,
        &DeleteRequest {
            collection,
            database: descriptor.database(),
            data_source: descriptor.data_source(),
            filter,
        },
    )
}

/// Builds an `aggregate` request.
pub fn aggregate<P: Serialize>(
    descriptor: &ConnectionDescriptor,
    collection: &str,
    pipeline: &[P],
) -> DataApiResult<ActionRequest> {
    build(
        descriptor,
        Action::Aggregate,
        collection,
        &AggregateRequest {
            collection,
            database: descriptor.database(),
            data_source: descriptor.data_source(),
            pipeline,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;
    use serde::{Serialize, Serializer};
    use serde_json::{Value, json};

    fn descriptor() -> ConnectionDescriptor {
        ConnectionDescriptor::builder("https://api.example/data/v1", "db", "cluster0")
            .credential("k")
            .build()
            .unwrap()
    }

    fn body(request: &ActionRequest) -> Value {
        request.body_json().unwrap()
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("refusing to serialize"))
        }
    }

    #[derive(Serialize)]
    struct User {
        name: String,
        age: u32,
    }

    #[test]
    fn find_one_without_options() {
        let request = find_one(&descriptor(), "users", &FindOneOptions::new()).unwrap();

        assert_eq!(
            body(&request),
            json!({ "collection": "users", "database": "db", "dataSource": "cluster0" })
        );
        assert_eq!(request.url, "https://api.example/data/v1/action/findOne");
        assert_eq!(request.method, RequestMethod::Post);
        assert_eq!(request.headers["api-key"], "k");
        assert_eq!(request.action, Action::FindOne);
        assert_eq!(request.collection, "users");
    }

    #[test]
    fn find_one_body_text_has_no_nulls() {
        let request = find_one(&descriptor(), "users", &FindOneOptions::new()).unwrap();

        assert_eq!(
            request.body_str(),
            r#"{"collection":"users","database":"db","dataSource":"cluster0"}"#
        );
    }

    #[test]
    fn find_one_with_filter_only() {
        let options = FindOneOptions::new().filter(json!({ "email": "a@example.com" }));
        let body = body(&find_one(&descriptor(), "users", &options).unwrap());

        assert_eq!(body["filter"], json!({ "email": "a@example.com" }));
        assert!(body.get("projection").is_none());
    }

    #[test]
    fn find_one_with_projection_only() {
        let options = FindOneOptions::new().projection(doc! { "name": 1 });
        let body = body(&find_one(&descriptor(), "users", &options).unwrap());

        assert_eq!(body["projection"], json!({ "name": 1 }));
        assert!(body.get("filter").is_none());
    }

    #[test]
    fn find_with_filter_and_limit() {
        let options = FindOptions::new()
            .filter(json!({ "status": "active" }))
            .limit(10);
        let body = body(&find(&descriptor(), "users", &options).unwrap());

        assert_eq!(
            body,
            json!({
                "collection": "users",
                "database": "db",
                "dataSource": "cluster0",
                "filter": { "status": "active" },
                "limit": 10,
            })
        );
    }

    #[test]
    fn find_with_every_option() {
        let options = FindOptions::new()
            .filter(json!({ "age": { "$gt": 18 } }))
            .projection(json!({ "name": 1 }))
            .sort(json!({ "age": -1 }))
            .limit(20)
            .skip(40);
        let body = body(&find(&descriptor(), "users", &options).unwrap());

        assert_eq!(body["filter"], json!({ "age": { "$gt": 18 } }));
        assert_eq!(body["projection"], json!({ "name": 1 }));
        assert_eq!(body["sort"], json!({ "age": -1 }));
        assert_eq!(body["limit"], json!(20));
        assert_eq!(body["skip"], json!(40));
        assert!(body["limit"].is_u64());
    }

    #[test]
    fn find_without_options_omits_every_optional_key() {
        let body = body(&find(&descriptor(), "users", &FindOptions::new()).unwrap());
        let object = body.as_object().unwrap();

        assert_eq!(object.len(), 3);
        for key in ["filter", "projection", "sort", "limit", "skip"] {
            assert!(!object.contains_key(key), "unexpected key {key}");
        }
    }

    #[test]
    fn empty_filter_is_sent_when_supplied() {
        let options = FindOptions::new().filter(json!({}));
        let body = body(&find(&descriptor(), "users", &options).unwrap());

        assert_eq!(body["filter"], json!({}));
    }

    #[test]
    fn insert_one_embeds_document() {
        let user = User {
            name: "Alice".into(),
            age: 30,
        };
        let request = insert_one(&descriptor(), "users", &user).unwrap();

        assert_eq!(request.url, "https://api.example/data/v1/action/insertOne");
        assert_eq!(
            body(&request),
            json!({
                "collection": "users",
                "database": "db",
                "dataSource": "cluster0",
                "document": { "name": "Alice", "age": 30 },
            })
        );
    }

    #[test]
    fn insert_many_embeds_documents() {
        let documents = vec![json!({ "a": 1 }), json!({ "a": 2 })];
        let body = body(&insert_many(&descriptor(), "items", &documents).unwrap());

        assert_eq!(
            body,
            json!({
                "collection": "items",
                "database": "db",
                "dataSource": "cluster0",
                "documents": [{ "a": 1 }, { "a": 2 }],
            })
        );
    }

    #[test]
    fn insert_many_with_no_documents() {
        let documents: Vec<Value> = Vec::new();
        let body = body(&insert_many(&descriptor(), "items", &documents).unwrap());

        assert_eq!(body["documents"], json!([]));
    }

    #[test]
    fn update_one_and_many() {
        let filter = json!({ "_id": "abc" });
        let update = json!({ "$set": { "status": "done" } });

        let one = update_one(&descriptor(), "tasks", &filter, &update, &UpdateOptions::new())
            .unwrap();
        let many = update_many(
            &descriptor(),
            "tasks",
            &filter,
            &update,
            &UpdateOptions::new().upsert(true),
        )
        .unwrap();

        assert_eq!(one.url, "https://api.example/data/v1/action/updateOne");
        assert_eq!(many.url, "https://api.example/data/v1/action/updateMany");
        assert_eq!(
            body(&one),
            json!({
                "collection": "tasks",
                "database": "db",
                "dataSource": "cluster0",
                "filter": { "_id": "abc" },
                "update": { "$set": { "status": "done" } },
            })
        );
        assert_eq!(body(&many)["upsert"], json!(true));
    }

    #[test]
    fn upsert_false_is_sent() {
        let request = update_one(
            &descriptor(),
            "tasks",
            &json!({}),
            &json!({ "$inc": { "n": 1 } }),
            &UpdateOptions::new().upsert(false),
        )
        .unwrap();

        assert_eq!(body(&request)["upsert"], json!(false));
    }

    #[test]
    fn replace_one_embeds_replacement() {
        let replacement = User {
            name: "Bob".into(),
            age: 41,
        };
        let request = replace_one(
            &descriptor(),
            "users",
            &doc! { "name": "Bob" },
            &replacement,
            &UpdateOptions::new(),
        )
        .unwrap();
        let body = body(&request);

        assert_eq!(request.url, "https://api.example/data/v1/action/replaceOne");
        assert_eq!(body["filter"], json!({ "name": "Bob" }));
        assert_eq!(body["replacement"], json!({ "name": "Bob", "age": 41 }));
        assert!(body.get("upsert").is_none());
    }

    #[test]
    fn delete_one_requires_filter() {
        let request = delete_one(&descriptor(), "users", &json!({ "name": "Eve" })).unwrap();

        assert_eq!(request.url, "https://api.example/data/v1/action/deleteOne");
        assert_eq!(
            body(&request),
            json!({
                "collection": "users",
                "database": "db",
                "dataSource": "cluster0",
                "filter": { "name": "Eve" },
            })
        );
    }

    #[test]
    fn aggregate_embeds_pipeline() {
        let pipeline = vec![
            json!({ "$match": { "status": "active" } }),
            json!({ "$group": { "_id": "$team", "count": { "$sum": 1 } } }),
        ];
        let request = aggregate(&descriptor(), "users", &pipeline).unwrap();

        assert_eq!(request.url, "https://api.example/data/v1/action/aggregate");
        assert_eq!(body(&request)["pipeline"], Value::Array(pipeline));
    }

    #[test]
    fn every_request_carries_the_header_set() {
        let d = descriptor();
        let filter = json!({});
        let requests = vec![
            find_one(&d, "c", &FindOneOptions::new()).unwrap(),
            find(&d, "c", &FindOptions::new()).unwrap(),
            insert_one(&d, "c", &filter).unwrap(),
            insert_many(&d, "c", &[filter.clone()]).unwrap(),
            update_one(&d, "c", &filter, &filter, &UpdateOptions::new()).unwrap(),
            update_many(&d, "c", &filter, &filter, &UpdateOptions::new()).unwrap(),
            replace_one(&d, "c", &filter, &filter, &UpdateOptions::new()).unwrap(),
            delete_one(&d, "c", &filter).unwrap(),
            aggregate(&d, "c", &[filter.clone()]).unwrap(),
        ];

        for (request, action) in requests.iter().zip(Action::ALL) {
            assert_eq!(request.action, action);
            assert_eq!(request.url, d.action_url(action));
            assert_eq!(request.method, RequestMethod::Post);
            assert_eq!(request.headers, d.headers());
        }
    }

    #[test]
    fn serialization_failure_is_surfaced() {
        let err = insert_one(&descriptor(), "users", &Unserializable).unwrap_err();

        match err {
            DataApiError::Serialization {
                action,
                collection,
                message,
            } => {
                assert_eq!(action, Action::InsertOne);
                assert_eq!(collection, "users");
                assert!(message.contains("refusing to serialize"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn serialization_failure_in_optional_field() {
        let options = FindOptions::new().sort(Unserializable);
        let err = find(&descriptor(), "users", &options).unwrap_err();

        assert_eq!(err.action(), Some(Action::Find));
        assert!(matches!(err, DataApiError::Serialization { .. }));
    }
}
