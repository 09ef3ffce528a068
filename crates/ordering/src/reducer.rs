//! State transitions for the sort order.

use serde::{Deserialize, Serialize};
use shared::domain::OrderState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum OrderAction {
    /// Add the field at the lowest priority, or drop it if already ordered.
    ToggleField(String),
    /// Flip ascending/descending for an ordered field.
    ToggleDirection(String),
}

impl OrderAction {
    pub fn key(&self) -> &str {
        match self {
            OrderAction::ToggleField(key) | OrderAction::ToggleDirection(key) => key,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            OrderAction::ToggleField(_) => "toggle_field",
            OrderAction::ToggleDirection(_) => "toggle_direction",
        }
    }
}

pub fn reduce(state: &OrderState, action: &OrderAction) -> OrderState {
    let next = match action {
        OrderAction::ToggleField(key) => state.with_field_toggled(key),
        OrderAction::ToggleDirection(key) => {
            if !state.contains(key) {
                tracing::debug!(key = %key, "direction toggle for unordered field ignored");
            }
            state.with_direction_toggled(key)
        }
    };

    tracing::debug!(
        action = action.name(),
        key = %action.key(),
        order_by = ?next.to_order_by_list(),
        "applied order action"
    );
    next
}

pub fn toggle_field(state: &OrderState, key: &str) -> OrderState {
    reduce(state, &OrderAction::ToggleField(key.to_string()))
}

pub fn toggle_direction(state: &OrderState, key: &str) -> OrderState {
    reduce(state, &OrderAction::ToggleDirection(key.to_string()))
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
