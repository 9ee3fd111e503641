//! Conversions between BSON documents and the JSON bodies on the wire.
//!
//! Stored documents carry BSON-only types; clients expect plain JSON the way
//! the Node driver renders it, with `_id` as a hex string rather than
//! extended-JSON `{"$oid": ...}`.

use mongodb::bson::{Bson, Document};
use serde_json::Value;

use crate::error::ApiError;

pub fn document_to_json(document: &Document) -> Value {
    Value::Object(
        document
            .iter()
            .map(|(key, value)| (key.clone(), bson_to_json(value)))
            .collect(),
    )
}

fn bson_to_json(value: &Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => dt
            .try_to_rfc3339_string()
            .map(Value::String)
            .unwrap_or(Value::Null),
        Bson::Document(document) => document_to_json(document),
        Bson::Array(items) => Value::Array(items.iter().map(bson_to_json).collect()),
        other => other.clone().into_relaxed_extjson(),
    }
}

/// Convert a JSON request body into a BSON document. Non-object bodies are
/// a client error surfaced as a generic failure, matching the store's own
/// rejection of non-document inserts.
pub fn json_to_document(value: Value) -> Result<Document, ApiError> {
    mongodb::bson::to_document(&value)
        .map_err(|e| ApiError::internal(format!("Failed to convert request payload: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId};
    use serde_json::json;

    #[test]
    fn test_object_id_renders_as_hex_string() {
        let oid = ObjectId::new();
        let document = doc! { "_id": oid, "title": "Night Shift" };

        let value = document_to_json(&document);
        assert_eq!(value["_id"], oid.to_hex());
        assert_eq!(value["title"], "Night Shift");
    }

    #[test]
    fn test_nested_documents_and_arrays_convert() {
        let oid = ObjectId::new();
        let document = doc! {
            "meta": { "owner": oid, "tags": ["a", "b"] },
            "count": 3_i32,
            "active": true,
        };

        let value = document_to_json(&document);
        assert_eq!(value["meta"]["owner"], oid.to_hex());
        assert_eq!(value["meta"]["tags"], json!(["a", "b"]));
        assert_eq!(value["count"], 3);
        assert_eq!(value["active"], true);
    }

    #[test]
    fn test_json_object_converts_to_document() {
        let document =
            json_to_document(json!({ "title": "Night Shift", "duration": "1h 42m" })).unwrap();
        assert_eq!(document.get_str("title").unwrap(), "Night Shift");
        assert_eq!(document.get_str("duration").unwrap(), "1h 42m");
    }

    #[test]
    fn test_empty_object_converts_to_empty_document() {
        let document = json_to_document(json!({})).unwrap();
        assert!(document.is_empty());
    }

    #[test]
    fn test_non_object_payload_is_rejected() {
        assert!(json_to_document(json!(["not", "a", "document"])).is_err());
        assert!(json_to_document(json!("scalar")).is_err());
    }
}
