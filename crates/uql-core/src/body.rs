//! JSON request-body decoding.
//!
//! Bodies decode into ordered field lists so that emitted column order
//! always matches the order fields appeared in the request — the one
//! canonical ordering policy shared by every dialect.

use serde_json::Value;

use crate::error::{CompileError, Result};
use crate::value::Literal;

/// One decoded record: field names and literals in source order.
pub type Record = Vec<(String, Literal)>;

/// Decodes a POST body: a JSON object or an array of objects.
pub fn decode_records(body: &[u8]) -> Result<Vec<Record>> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| CompileError::InvalidBody(e.to_string()))?;
    match value {
        Value::Object(map) => Ok(vec![object_to_record(&map)]),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Object(map) => Ok(object_to_record(map)),
                other => Err(CompileError::InvalidBody(format!(
                    "expected an object, got {other}"
                ))),
            })
            .collect(),
        other => Err(CompileError::InvalidBody(format!(
            "expected an object or array of objects, got {other}"
        ))),
    }
}

/// Decodes an update body: exactly one JSON object.
pub fn decode_fields(body: &[u8]) -> Result<Record> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| CompileError::InvalidBody(e.to_string()))?;
    match value {
        Value::Object(map) => Ok(object_to_record(&map)),
        other => Err(CompileError::InvalidBody(format!(
            "expected an object, got {other}"
        ))),
    }
}

fn object_to_record(map: &serde_json::Map<String, Value>) -> Record {
    map.iter()
        .map(|(k, v)| (k.clone(), Literal::from_json(v)))
        .collect()
}

/// Re-serializes records as a compact JSON array, for dialects that embed
/// record data in the query text.
#[must_use]
pub fn records_to_json(records: &[Record]) -> String {
    let array: Vec<Value> = records
        .iter()
        .map(|record| {
            let mut map = serde_json::Map::new();
            for (key, value) in record {
                map.insert(key.clone(), value.to_json());
            }
            Value::Object(map)
        })
        .collect();
    Value::Array(array).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_object_keeps_field_order() {
        let records = decode_records(br#"{"name":"A","price":100,"active":true}"#).unwrap();
        assert_eq!(records.len(), 1);
        let keys: Vec<&str> = records[0].iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["name", "price", "active"]);
        assert_eq!(records[0][1].1, Literal::Int(100));
    }

    #[test]
    fn test_array_of_objects() {
        let records = decode_records(br#"[{"a":1},{"a":2}]"#).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_array_with_non_object_fails() {
        assert!(matches!(
            decode_records(br#"[{"a":1},2]"#),
            Err(CompileError::InvalidBody(_))
        ));
    }

    #[test]
    fn test_malformed_json_fails() {
        assert!(matches!(
            decode_records(br#"{"invalid json"#),
            Err(CompileError::InvalidBody(_))
        ));
        assert!(matches!(
            decode_fields(b"[1,2]"),
            Err(CompileError::InvalidBody(_))
        ));
    }

    #[test]
    fn test_records_round_trip_to_json() {
        let records = decode_records(br#"[{"name":"Venus","temp":462}]"#).unwrap();
        assert_eq!(records_to_json(&records), r#"[{"name":"Venus","temp":462}]"#);
    }
}
