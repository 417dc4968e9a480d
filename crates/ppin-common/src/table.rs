//! Interaction table
//!
//! A column-ordered, row-indexed table of interaction records. Column order is
//! the first-seen order of field names across all records, and a field missing
//! from a record reads as `null`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered table of interaction records as returned by a source adapter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionTable {
    columns: Vec<String>,
    index: Vec<String>,
    rows: Vec<Vec<Value>>,
}

/// Borrowed view of one table row
#[derive(Debug, Clone, Copy)]
pub struct TableRow<'a> {
    /// Row label (interaction id or row position)
    pub label: &'a str,
    values: &'a [Value],
}

impl<'a> TableRow<'a> {
    /// Cell at a column position
    pub fn get(&self, column: usize) -> Option<&'a Value> {
        self.values.get(column)
    }

    /// All cells in column order
    pub fn values(&self) -> &'a [Value] {
        self.values
    }
}

impl InteractionTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from labelled flat records
    ///
    /// Every record contributes its field names to the column set in the order
    /// they are first seen.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (String, Map<String, Value>)>,
    {
        let records: Vec<(String, Map<String, Value>)> = records.into_iter().collect();

        let mut columns: Vec<String> = Vec::new();
        for (_, record) in &records {
            for key in record.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }

        let mut index = Vec::with_capacity(records.len());
        let mut rows = Vec::with_capacity(records.len());
        for (label, mut record) in records {
            let row = columns
                .iter()
                .map(|c| record.remove(c).unwrap_or(Value::Null))
                .collect();
            index.push(label);
            rows.push(row);
        }

        Self {
            columns,
            index,
            rows,
        }
    }

    /// Column names in order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Position of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Check whether a column exists
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Row labels in order
    pub fn index(&self) -> &[String] {
        &self.index
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row at a position
    pub fn row(&self, position: usize) -> Option<TableRow<'_>> {
        Some(TableRow {
            label: self.index.get(position)?,
            values: self.rows.get(position)?,
        })
    }

    /// Iterate over rows in order
    pub fn rows(&self) -> impl Iterator<Item = TableRow<'_>> {
        self.index
            .iter()
            .zip(&self.rows)
            .map(|(label, values)| TableRow { label, values })
    }

    /// Copy of the first `n` rows
    pub fn head(&self, n: usize) -> Self {
        Self {
            columns: self.columns.clone(),
            index: self.index.iter().take(n).cloned().collect(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// Rows as JSON objects keyed by column name
    pub fn to_records(&self) -> Vec<Map<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect::<Map<String, Value>>()
            })
            .collect()
    }
}

/// Render a cell for display
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(arr) => {
            format!("[{}]", arr.iter().map(display_value).collect::<Vec<_>>().join(", "))
        },
        Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_from_records_keeps_first_seen_column_order() {
        let table = InteractionTable::from_records(vec![
            ("1".to_string(), record(json!({"b": 1, "a": 2}))),
            ("2".to_string(), record(json!({"a": 3, "c": 4}))),
        ]);

        assert_eq!(table.columns(), &["b", "a", "c"]);
        assert_eq!(table.index(), &["1", "2"]);
    }

    #[test]
    fn test_missing_cells_read_as_null() {
        let table = InteractionTable::from_records(vec![
            ("1".to_string(), record(json!({"a": 1}))),
            ("2".to_string(), record(json!({"b": "x"}))),
        ]);

        let first = table.row(0).unwrap();
        assert_eq!(first.get(1), Some(&Value::Null));
        let second = table.row(1).unwrap();
        assert_eq!(second.get(0), Some(&Value::Null));
        assert_eq!(second.get(1), Some(&json!("x")));
    }

    #[test]
    fn test_empty_table() {
        let table = InteractionTable::from_records(Vec::new());
        assert!(table.is_empty());
        assert!(table.columns().is_empty());
        assert!(table.row(0).is_none());
    }

    #[test]
    fn test_head_and_records() {
        let table = InteractionTable::from_records(
            (0..5).map(|i| (i.to_string(), record(json!({"n": i})))),
        );

        let head = table.head(2);
        assert_eq!(head.len(), 2);
        assert_eq!(head.columns(), table.columns());

        let records = head.to_records();
        assert_eq!(records[1].get("n"), Some(&json!(1)));
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&Value::Null), "");
        assert_eq!(display_value(&json!(0.5)), "0.5");
        assert_eq!(display_value(&json!("TP53")), "TP53");
        assert_eq!(display_value(&json!(["a", 1])), "[a, 1]");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn records() -> impl Strategy<Value = Vec<Map<String, Value>>> {
            let key = prop::sample::select(vec!["a", "b", "c", "d", "e"]);
            let row = prop::collection::btree_map(key, any::<i32>(), 0..5).prop_map(|cells| {
                cells
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), json!(v)))
                    .collect::<Map<String, Value>>()
            });
            prop::collection::vec(row, 0..12)
        }

        proptest! {
            #[test]
            fn rows_are_rectangular(rows in records()) {
                let table = InteractionTable::from_records(
                    rows.iter().cloned().enumerate().map(|(i, r)| (i.to_string(), r)),
                );

                prop_assert_eq!(table.len(), rows.len());
                for row in table.rows() {
                    prop_assert_eq!(row.values().len(), table.columns().len());
                }
            }

            #[test]
            fn every_cell_survives(rows in records()) {
                let table = InteractionTable::from_records(
                    rows.iter().cloned().enumerate().map(|(i, r)| (i.to_string(), r)),
                );

                for (original, rebuilt) in rows.iter().zip(table.to_records()) {
                    for (key, value) in original {
                        prop_assert_eq!(rebuilt.get(key), Some(value));
                    }
                }
            }
        }
    }
}
