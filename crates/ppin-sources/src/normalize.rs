//! JSON reshaping into interaction tables
//!
//! BioGRID answers with an object keyed by interaction id, STRING with an
//! array of records. Both end up as an [`InteractionTable`].

use crate::error::{Result, RetrievalError};
use crate::Database;
use ppin_common::InteractionTable;
use serde_json::{Map, Value};

/// Separator between nested key segments
pub const KEY_SEPARATOR: char = '.';

/// Reshape an id-keyed object of flat records
///
/// Rows are labelled by the object keys. An empty object or empty array is an
/// empty table.
pub fn table_from_keyed_records(database: Database, body: Value) -> Result<InteractionTable> {
    let entries = match body {
        Value::Object(map) => map,
        Value::Array(items) if items.is_empty() => return Ok(InteractionTable::new()),
        other => {
            return Err(RetrievalError::unexpected_shape(
                database,
                format!("expected an object keyed by interaction id, got {}", kind(&other)),
            ))
        },
    };

    let mut records = Vec::with_capacity(entries.len());
    for (id, value) in entries {
        match value {
            Value::Object(record) => records.push((id, record)),
            other => {
                return Err(RetrievalError::unexpected_shape(
                    database,
                    format!("interaction '{}' is {} rather than a record", id, kind(&other)),
                ))
            },
        }
    }

    Ok(InteractionTable::from_records(records))
}

/// Reshape an array of records, flattening nested objects
///
/// Rows are labelled by their zero-based position.
pub fn table_from_record_array(database: Database, body: Value) -> Result<InteractionTable> {
    let items = match body {
        Value::Array(items) => items,
        other => {
            return Err(RetrievalError::unexpected_shape(
                database,
                format!("expected an array of records, got {}", kind(&other)),
            ))
        },
    };

    let mut records = Vec::with_capacity(items.len());
    for (position, value) in items.into_iter().enumerate() {
        match value {
            Value::Object(record) => records.push((position.to_string(), flatten_record(record))),
            other => {
                return Err(RetrievalError::unexpected_shape(
                    database,
                    format!("element {} is {} rather than a record", position, kind(&other)),
                ))
            },
        }
    }

    Ok(InteractionTable::from_records(records))
}

/// Flatten nested objects into dotted keys
///
/// `{"a": {"b": 1}, "c": [1]}` becomes `{"a.b": 1, "c": [1]}`. Arrays and
/// empty objects are kept as values.
pub fn flatten_record(record: Map<String, Value>) -> Map<String, Value> {
    let mut flat = Map::new();
    flatten_into(&mut flat, None, record);
    flat
}

fn flatten_into(flat: &mut Map<String, Value>, prefix: Option<&str>, record: Map<String, Value>) {
    for (key, value) in record {
        let name = match prefix {
            Some(p) => format!("{}{}{}", p, KEY_SEPARATOR, key),
            None => key,
        };
        match value {
            Value::Object(nested) if !nested.is_empty() => flatten_into(flat, Some(&name), nested),
            other => {
                flat.insert(name, other);
            },
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_keyed_records_use_ids_as_index() {
        let body = json!({
            "103": {"OFFICIAL_SYMBOL_A": "TP53", "OFFICIAL_SYMBOL_B": "MDM2"},
            "207": {"OFFICIAL_SYMBOL_A": "TP53", "OFFICIAL_SYMBOL_B": "EP300"}
        });

        let table = table_from_keyed_records(Database::BioGrid, body).unwrap();
        assert_eq!(table.index(), &["103", "207"]);
        assert_eq!(table.columns(), &["OFFICIAL_SYMBOL_A", "OFFICIAL_SYMBOL_B"]);
    }

    #[test]
    fn test_keyed_records_empty_forms() {
        assert!(table_from_keyed_records(Database::BioGrid, json!({}))
            .unwrap()
            .is_empty());
        assert!(table_from_keyed_records(Database::BioGrid, json!([]))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_keyed_records_reject_other_layouts() {
        let err = table_from_keyed_records(Database::BioGrid, json!("Invalid access key"))
            .unwrap_err();
        assert!(matches!(err, RetrievalError::UnexpectedShape { .. }));

        let err = table_from_keyed_records(Database::BioGrid, json!({"1": 5})).unwrap_err();
        assert!(err.to_string().contains("interaction '1'"));
    }

    #[test]
    fn test_record_array_flattens_and_indexes() {
        let body = json!([
            {"preferredName_A": "TP53", "preferredName_B": "MDM2", "score": 0.999},
            {"preferredName_A": "TP53", "preferredName_B": "SIRT1", "meta": {"source": "x"}}
        ]);

        let table = table_from_record_array(Database::String, body).unwrap();
        assert_eq!(table.index(), &["0", "1"]);
        assert_eq!(
            table.columns(),
            &["preferredName_A", "preferredName_B", "score", "meta.source"]
        );
    }

    #[test]
    fn test_record_array_rejects_object() {
        let body = json!({"Error": "not found", "ErrorMessage": "no such identifier"});
        let err = table_from_record_array(Database::String, body).unwrap_err();
        assert!(err.to_string().contains("expected an array"));
    }

    #[test]
    fn test_flatten_record_nested() {
        let record = json!({"a": {"b": {"c": 1}}, "d": [1, 2], "e": {}})
            .as_object()
            .cloned()
            .unwrap();

        let flat = flatten_record(record);
        assert_eq!(flat.get("a.b.c"), Some(&json!(1)));
        assert_eq!(flat.get("d"), Some(&json!([1, 2])));
        assert_eq!(flat.get("e"), Some(&json!({})));
        assert_eq!(flat.len(), 3);
    }
}
