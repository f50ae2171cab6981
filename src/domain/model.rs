use crate::domain::ports::FieldStore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
}

impl Record {
    pub fn new(data: HashMap<String, serde_json::Value>) -> Self {
        Self { data }
    }

    /// Replaces blank field values with `null` in place. Returns how many fields changed.
    pub fn nullify(&mut self) -> usize {
        crate::core::blank::nullify_fields(self)
    }
}

impl FieldStore for Record {
    fn read_all_fields(&self) -> HashMap<String, serde_json::Value> {
        self.data.clone()
    }

    fn write_all_fields(&mut self, fields: HashMap<String, serde_json::Value>) {
        self.data = fields;
    }
}
