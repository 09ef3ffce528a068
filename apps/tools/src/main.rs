use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ordering::{
    config::{self, split_list, Settings},
    OrderAction, OrderController, OrderState,
};
use shared::domain::FieldView;
use tracing_subscriber::EnvFilter;

/// Replays sort toggles against a list ordering and prints the result.
#[derive(Parser, Debug)]
#[command(name = "order-tool")]
struct Cli {
    /// Settings file, default ./ordering.toml. ORDERING_* variables override it.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Initial order in orderBy form, e.g. `-id,created`.
    #[arg(long, allow_hyphen_values = true)]
    initial: Option<String>,
    /// Fields offered as toggles, comma separated.
    #[arg(long)]
    fields: Option<String>,
    #[arg(long)]
    count: Option<u32>,
    /// `+key` toggles a field in or out, `~key` flips its direction.
    #[arg(value_parser = parse_action, allow_hyphen_values = true)]
    actions: Vec<OrderAction>,
}

fn parse_action(raw: &str) -> Result<OrderAction, String> {
    let (kind, key) = raw.split_at(raw.chars().next().map_or(0, char::len_utf8));
    if key.is_empty() {
        return Err(format!("missing field name in action '{raw}'"));
    }
    match kind {
        "+" => Ok(OrderAction::ToggleField(key.to_string())),
        "~" => Ok(OrderAction::ToggleDirection(key.to_string())),
        _ => Err(format!("action '{raw}' must start with '+' or '~'")),
    }
}

fn describe(view: &FieldView) -> String {
    match view {
        FieldView::Inactive => "inactive".to_string(),
        FieldView::Active { rank, ascending } => {
            let direction = if *ascending { "asc" } else { "desc" };
            format!("#{} {direction}", rank + 1)
        }
    }
}

fn resolve_settings<F>(cli: &Cli, lookup: F) -> Result<Settings>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = match &cli.config {
        Some(path) => {
            let mut settings = config::load_settings_from(path)?;
            config::apply_env_overrides(&mut settings, lookup);
            settings
        }
        None => config::load_settings_with(config::SETTINGS_FILE, lookup),
    };
    if let Some(initial) = &cli.initial {
        settings.initial_order = OrderState::from_order_by(split_list(initial))
            .with_context(|| format!("invalid --initial '{initial}'"))?;
    }
    if let Some(fields) = &cli.fields {
        settings.sortable_fields = split_list(fields);
    }
    if let Some(count) = cli.count {
        settings.page_size = count;
    }
    Ok(settings)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let settings = resolve_settings(&cli, |name| std::env::var(name).ok())?;

    let mut controller = OrderController::from_settings(&settings);
    for action in cli.actions {
        controller.dispatch(action);
    }

    println!("orderBy: {}", controller.order_by().join(","));
    for (field, view) in controller.field_views() {
        println!("  {field}: {}", describe(&view));
    }
    println!(
        "query: {}",
        serde_json::to_string(&controller.list_query().variables())?
    );

    Ok(())
}
