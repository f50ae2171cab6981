//! Blank-to-null normalization of field maps.
//!
//! A value is blank when it is a whitespace-only string or an empty array or
//! object. Blank values become `Value::Null`; keys and all other values are
//! left alone. Normalization always builds a new map from a read-only view of
//! the input, so nothing is mutated while it is being walked.

use crate::domain::ports::FieldStore;
use serde_json::{Map, Value};
use std::collections::HashMap;

pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.as_str().is_blank()
    }
}

impl<T> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for Value {
    /// `Null` is already absent and is not reported as blank; booleans and
    /// numbers are never blank.
    fn is_blank(&self) -> bool {
        match self {
            Value::String(s) => s.is_blank(),
            Value::Array(items) => items.is_empty(),
            Value::Object(fields) => fields.is_empty(),
            Value::Null | Value::Bool(_) | Value::Number(_) => false,
        }
    }
}

fn nullify_value(value: &Value) -> Value {
    if value.is_blank() {
        Value::Null
    } else {
        value.clone()
    }
}

pub trait Nullify {
    /// Returns a copy with every blank value replaced by `null`.
    fn nullified(&self) -> Self;
}

impl Nullify for HashMap<String, Value> {
    fn nullified(&self) -> Self {
        self.iter()
            .map(|(key, value)| (key.clone(), nullify_value(value)))
            .collect()
    }
}

impl Nullify for Map<String, Value> {
    fn nullified(&self) -> Self {
        self.iter()
            .map(|(key, value)| (key.clone(), nullify_value(value)))
            .collect()
    }
}

pub fn nullify(fields: &HashMap<String, Value>) -> HashMap<String, Value> {
    fields.nullified()
}

/// Reads a snapshot of the store's fields, normalizes it and writes it back.
/// Returns the number of fields that were cleared.
pub fn nullify_fields<S: FieldStore + ?Sized>(store: &mut S) -> usize {
    let snapshot = store.read_all_fields();
    let cleared = snapshot.values().filter(|value| value.is_blank()).count();

    if cleared == 0 {
        tracing::trace!("No blank fields among {} fields", snapshot.len());
        return 0;
    }

    let normalized = snapshot.nullified();
    tracing::debug!(
        "Cleared {} blank field(s) out of {}",
        cleared,
        normalized.len()
    );
    store.write_all_fields(normalized);
    cleared
}

/// Normalizes a JSON object, or every object inside a JSON array.
/// Any other JSON value is returned unchanged.
pub fn nullify_json(value: Value) -> Value {
    match value {
        Value::Object(fields) => Value::Object(fields.nullified()),
        Value::Array(items) => {
            tracing::debug!("Normalizing batch of {} item(s)", items.len());
            Value::Array(
                items
                    .into_iter()
                    .map(|item| match item {
                        Value::Object(fields) => Value::Object(fields.nullified()),
                        other => other,
                    })
                    .collect(),
            )
        }
        other => other,
    }
}
