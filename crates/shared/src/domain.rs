use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::OrderError;

/// Direction given to a field the first time it joins the ordering.
pub const NEW_ENTRY_ASCENDING: bool = false;

/// Prefix marking a descending key in the flattened `orderBy` form.
pub const DESCENDING_PREFIX: char = '-';

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderEntry {
    pub key: String,
    #[serde(alias = "asc")]
    pub ascending: bool,
}

impl OrderEntry {
    pub fn new(key: impl Into<String>, ascending: bool) -> Self {
        Self {
            key: key.into(),
            ascending,
        }
    }

    pub fn ascending(key: impl Into<String>) -> Self {
        Self::new(key, true)
    }

    pub fn descending(key: impl Into<String>) -> Self {
        Self::new(key, false)
    }

    pub fn to_order_by(&self) -> String {
        if self.ascending {
            self.key.clone()
        } else {
            format!("{DESCENDING_PREFIX}{}", self.key)
        }
    }

    pub fn flipped(&self) -> Self {
        Self::new(self.key.clone(), !self.ascending)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPosition {
    pub index: usize,
    pub ascending: bool,
}

/// Per-field rendering state of a sortable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FieldView {
    Inactive,
    Active { rank: usize, ascending: bool },
}

impl From<Option<&FieldPosition>> for FieldView {
    fn from(value: Option<&FieldPosition>) -> Self {
        match value {
            Some(position) => FieldView::Active {
                rank: position.index,
                ascending: position.ascending,
            },
            None => FieldView::Inactive,
        }
    }
}

/// Multi-key sort order. The first entry is the primary key and keys are
/// unique across the sequence.
///
/// Values are never edited in place by the transitions; each one builds the
/// next snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OrderState {
    entries: Vec<OrderEntry>,
}

impl OrderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = OrderEntry>) -> Result<Self, OrderError> {
        let entries: Vec<OrderEntry> = entries.into_iter().collect();
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.key.as_str()) {
                return Err(OrderError::DuplicateKey(entry.key.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Parses the flattened form produced by [`OrderState::to_order_by_list`].
    ///
    /// Reverses that projection except for an ascending key that itself
    /// starts with [`DESCENDING_PREFIX`], which reads back as a descending
    /// key without the prefix.
    pub fn from_order_by<I, S>(items: I) -> Result<Self, OrderError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = items
            .into_iter()
            .map(|item| {
                let item = item.as_ref();
                match item.strip_prefix(DESCENDING_PREFIX) {
                    Some(key) => OrderEntry::descending(key),
                    None => OrderEntry::ascending(item),
                }
            })
            .collect::<Vec<_>>();
        Self::from_entries(entries)
    }

    /// Builds a snapshot without re-checking invariants. Callers must only
    /// pass entries derived from an existing valid state.
    pub(crate) fn from_entries_unchecked(entries: Vec<OrderEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[OrderEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key == key)
    }

    /// Removes `key` if present, otherwise appends it with
    /// [`NEW_ENTRY_ASCENDING`].
    pub fn with_field_toggled(&self, key: &str) -> Self {
        let mut existed = false;
        let mut entries: Vec<OrderEntry> = self
            .entries
            .iter()
            .filter(|entry| {
                let matches = entry.key == key;
                existed |= matches;
                !matches
            })
            .cloned()
            .collect();
        if !existed {
            entries.push(OrderEntry::new(key, NEW_ENTRY_ASCENDING));
        }
        Self::from_entries_unchecked(entries)
    }

    /// Flips the direction of `key`. Unknown keys leave the order untouched.
    pub fn with_direction_toggled(&self, key: &str) -> Self {
        let entries = self
            .entries
            .iter()
            .map(|entry| {
                if entry.key == key {
                    entry.flipped()
                } else {
                    entry.clone()
                }
            })
            .collect();
        Self::from_entries_unchecked(entries)
    }

    pub fn to_order_by_list(&self) -> Vec<String> {
        self.entries.iter().map(OrderEntry::to_order_by).collect()
    }

    pub fn to_field_index(&self) -> HashMap<String, FieldPosition> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                (
                    entry.key.clone(),
                    FieldPosition {
                        index,
                        ascending: entry.ascending,
                    },
                )
            })
            .collect()
    }
}

impl<'de> Deserialize<'de> for OrderState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = Vec::<OrderEntry>::deserialize(deserializer)?;
        Self::from_entries(entries).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a OrderState {
    type Item = &'a OrderEntry;
    type IntoIter = std::slice::Iter<'a, OrderEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
