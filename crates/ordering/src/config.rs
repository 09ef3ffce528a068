use std::{fs, path::Path};

use anyhow::Context;
use serde::Deserialize;
use shared::{domain::OrderState, protocol::DEFAULT_PAGE_SIZE};

pub const SETTINGS_FILE: &str = "ordering.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub sortable_fields: Vec<String>,
    pub initial_order: OrderState,
    pub page_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sortable_fields: vec!["id".into(), "created".into()],
            initial_order: OrderState::new(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    sortable_fields: Option<Vec<String>>,
    initial_order: Option<Vec<String>>,
    page_size: Option<u32>,
}

/// Defaults, then `ordering.toml` in the working directory when present,
/// then `ORDERING_*` environment variables.
pub fn load_settings() -> Settings {
    load_settings_with(SETTINGS_FILE, |name| std::env::var(name).ok())
}

/// Like [`load_settings`] with an explicit settings file path and
/// variable lookup. A file that cannot be read or parsed is logged and the
/// defaults are kept.
pub fn load_settings_with<F>(path: impl AsRef<Path>, lookup: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    let path = path.as_ref();
    let mut settings = Settings::default();

    if path.exists() {
        match load_settings_from(path) {
            Ok(from_file) => settings = from_file,
            Err(err) => {
                tracing::warn!(file = %path.display(), error = %format!("{err:#}"), "ignoring settings file")
            }
        }
    }

    apply_env_overrides(&mut settings, lookup);
    settings
}

pub fn load_settings_from(path: impl AsRef<Path>) -> anyhow::Result<Settings> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    let file_cfg: FileSettings = toml::from_str(&raw)
        .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;

    let mut settings = Settings::default();
    if let Some(fields) = file_cfg.sortable_fields {
        settings.sortable_fields = fields;
    }
    if let Some(order) = file_cfg.initial_order {
        settings.initial_order = OrderState::from_order_by(&order)
            .with_context(|| format!("invalid initial_order in '{}'", path.display()))?;
    }
    if let Some(page_size) = file_cfg.page_size {
        settings.page_size = page_size;
    }
    Ok(settings)
}

/// Applies `ORDERING_SORTABLE_FIELDS`, `ORDERING_INITIAL_ORDER` and
/// `ORDERING_PAGE_SIZE`. Values that do not parse keep the previous setting.
pub fn apply_env_overrides<F>(settings: &mut Settings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup("ORDERING_SORTABLE_FIELDS") {
        settings.sortable_fields = split_list(&v);
    }

    if let Some(v) = lookup("ORDERING_INITIAL_ORDER") {
        match OrderState::from_order_by(split_list(&v)) {
            Ok(order) => settings.initial_order = order,
            Err(err) => tracing::warn!(value = %v, error = %err, "ignoring ORDERING_INITIAL_ORDER"),
        }
    }

    if let Some(v) = lookup("ORDERING_PAGE_SIZE") {
        match v.trim().parse::<u32>() {
            Ok(parsed) => settings.page_size = parsed,
            Err(err) => tracing::warn!(value = %v, error = %err, "ignoring ORDERING_PAGE_SIZE"),
        }
    }
}

pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
