use serde_json::Value;
use std::collections::HashMap;

/// A record-like object whose fields can be read and written as a whole.
pub trait FieldStore {
    fn read_all_fields(&self) -> HashMap<String, Value>;
    fn write_all_fields(&mut self, fields: HashMap<String, Value>);
}
