use std::collections::HashMap;

use serde_json::{Map, Value};
use shared::{
    domain::{FieldPosition, FieldView, OrderState},
    protocol::{ListQuery, DEFAULT_PAGE_SIZE},
};

use crate::{
    config::Settings,
    reducer::{reduce, OrderAction},
};

/// Owns the current order snapshot of a filterable list and derives what the
/// toggle buttons and the list query need from it.
#[derive(Debug, Clone)]
pub struct OrderController {
    sortable_fields: Vec<String>,
    state: OrderState,
    count: u32,
    variables: Map<String, Value>,
}

impl OrderController {
    pub fn new(sortable_fields: Vec<String>, initial: OrderState) -> Self {
        Self {
            sortable_fields,
            state: initial,
            count: DEFAULT_PAGE_SIZE,
            variables: Map::new(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.sortable_fields.clone(),
            settings.initial_order.clone(),
        )
        .with_count(settings.page_size)
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn with_variables(mut self, variables: Map<String, Value>) -> Self {
        self.variables = variables;
        self
    }

    pub fn dispatch(&mut self, action: OrderAction) -> &OrderState {
        if !self.is_sortable(action.key()) {
            tracing::debug!(key = %action.key(), "order action for field without a toggle");
        }
        self.state = reduce(&self.state, &action);
        &self.state
    }

    pub fn toggle_field(&mut self, key: impl Into<String>) -> &OrderState {
        self.dispatch(OrderAction::ToggleField(key.into()))
    }

    pub fn toggle_direction(&mut self, key: impl Into<String>) -> &OrderState {
        self.dispatch(OrderAction::ToggleDirection(key.into()))
    }

    pub fn state(&self) -> &OrderState {
        &self.state
    }

    pub fn sortable_fields(&self) -> &[String] {
        &self.sortable_fields
    }

    pub fn is_sortable(&self, key: &str) -> bool {
        self.sortable_fields.iter().any(|field| field == key)
    }

    pub fn order_by(&self) -> Vec<String> {
        self.state.to_order_by_list()
    }

    pub fn field_index(&self) -> HashMap<String, FieldPosition> {
        self.state.to_field_index()
    }

    pub fn field_views(&self) -> Vec<(String, FieldView)> {
        let index = self.field_index();
        self.sortable_fields
            .iter()
            .map(|field| (field.clone(), FieldView::from(index.get(field))))
            .collect()
    }

    pub fn list_query(&self) -> ListQuery {
        ListQuery::new(&self.state, self.count).with_variables(self.variables.clone())
    }
}

impl Default for OrderController {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
