use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::OrderState;

/// Page size requested when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Request handed to the list query collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub order_by: Vec<String>,
    pub count: u32,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub variables: Map<String, Value>,
}

impl ListQuery {
    pub fn new(order: &OrderState, count: u32) -> Self {
        Self {
            order_by: order.to_order_by_list(),
            count,
            variables: Map::new(),
        }
    }

    pub fn with_variables(mut self, variables: Map<String, Value>) -> Self {
        self.variables = variables;
        self
    }

    /// Flat variables bag. Caller variables are applied last, so an explicit
    /// `orderBy` or `count` among them wins.
    pub fn variables(&self) -> Map<String, Value> {
        let mut merged = Map::new();
        merged.insert(
            "orderBy".to_string(),
            Value::Array(self.order_by.iter().cloned().map(Value::String).collect()),
        );
        merged.insert("count".to_string(), Value::from(self.count));
        for (name, value) in &self.variables {
            merged.insert(name.clone(), value.clone());
        }
        merged
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
