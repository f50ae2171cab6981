use anyhow::Result;
use serde_json::{json, Value};
use std::collections::HashMap;
use tidy_fields::{nullify_fields, FieldStore, Record};

/// A record kept as ordered column/value pairs, like a row handed out by an ORM.
struct Row {
    columns: Vec<(String, Value)>,
    writes: usize,
}

impl FieldStore for Row {
    fn read_all_fields(&self) -> HashMap<String, Value> {
        self.columns.iter().cloned().collect()
    }

    fn write_all_fields(&mut self, fields: HashMap<String, Value>) {
        for (column, value) in self.columns.iter_mut() {
            if let Some(new_value) = fields.get(column) {
                *value = new_value.clone();
            }
        }
        self.writes += 1;
    }
}

#[test]
fn test_record_nullify_in_place() -> Result<()> {
    let mut record: Record = serde_json::from_value(json!({
        "data": {
            "first_name": "Shaquille",
            "middle_name": "   ",
            "nickname": "",
            "teams": [],
            "stats": {},
            "retired": true
        }
    }))?;

    assert_eq!(record.nullify(), 4);
    assert_eq!(record.data["first_name"], json!("Shaquille"));
    assert_eq!(record.data["middle_name"], Value::Null);
    assert_eq!(record.data["nickname"], Value::Null);
    assert_eq!(record.data["teams"], Value::Null);
    assert_eq!(record.data["stats"], Value::Null);
    assert_eq!(record.data["retired"], json!(true));
    assert_eq!(record.data.len(), 6);

    // a second pass finds nothing
    let before = record.clone();
    assert_eq!(record.nullify(), 0);
    assert_eq!(record, before);

    Ok(())
}

#[test]
fn test_nullify_through_custom_field_store() -> Result<()> {
    let mut row = Row {
        columns: vec![
            ("id".to_string(), json!(42)),
            ("email".to_string(), json!(" ")),
            ("phone".to_string(), json!("555-0100")),
        ],
        writes: 0,
    };

    assert_eq!(nullify_fields(&mut row), 1);
    assert_eq!(row.writes, 1);
    assert_eq!(
        row.columns,
        vec![
            ("id".to_string(), json!(42)),
            ("email".to_string(), Value::Null),
            ("phone".to_string(), json!("555-0100")),
        ]
    );

    Ok(())
}

#[test]
fn test_record_serializes_nulls_after_nullify() -> Result<()> {
    let mut record = Record::default();
    record.data.insert("note".to_string(), json!("\t"));
    record.nullify();

    let serialized = serde_json::to_value(&record)?;
    assert_eq!(serialized, json!({"data": {"note": null}}));

    Ok(())
}
