//! Multi-key sort order for filterable lists: a pure reducer over
//! [`OrderState`] snapshots plus a controller that owns the current snapshot
//! and feeds the list query.

pub mod config;
pub mod controller;
pub mod reducer;

pub use controller::OrderController;
pub use reducer::{reduce, OrderAction};
pub use shared::domain::{FieldPosition, FieldView, OrderEntry, OrderState, NEW_ENTRY_ASCENDING};
