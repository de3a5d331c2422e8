//! # cafe-cli
//!
//! Library half of the `cafe` binary; `main.rs` only parses arguments and
//! calls [`run`].
//!
//! ## Module Organization
//! ```text
//! cafe_cli/
//! ├── lib.rs          ◄─── You are here (wiring, logging, output)
//! ├── cli.rs          ◄─── clap arguments
//! ├── config.rs       ◄─── AppConfig (file + CAFE_* env)
//! ├── menu_file.rs    ◄─── TOML menu loading
//! └── error.rs        ◄─── CliError and exit codes
//! ```
//!
//! ## Run Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Load configuration ──────────────► error → stderr, exit 2           │
//! │  2. Initialize tracing (stderr)                                         │
//! │  3. Build menu (file or standard)  ──► error → stderr, exit 2           │
//! │  4. No items? ───────────────────────► "Please pick something..." exit 1│
//! │  5. calculate_bill ──────────────────► unavailable → stdout, exit 1     │
//! │  6. Print bill ──────────────────────► exit 0                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod menu_file;

use std::process::ExitCode;

use cafe_core::{Bill, BillCalculator, InMemoryMenu};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, OutputFormat};
use crate::config::AppConfig;
use crate::error::CliResult;

/// Shown when no items are given.
pub const EMPTY_ORDER_MESSAGE: &str = "Please pick something from the menu";

/// Log filter when neither RUST_LOG nor configuration sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Runs the CLI and returns the process exit code.
pub fn run(cli: Cli) -> ExitCode {
    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return e.exit_code();
        }
    };

    init_tracing(config.log_filter.as_deref());
    debug!(?config, "Configuration loaded");

    match execute(&cli, &config) {
        Ok(Some(output)) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Ok(None) => {
            println!("{}", EMPTY_ORDER_MESSAGE);
            ExitCode::from(1)
        }
        Err(e) if e.is_unavailable_items() => {
            println!("{}", e);
            e.exit_code()
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

/// Does the work behind [`run`] without touching stdout.
///
/// Returns `Ok(None)` for an empty order.
pub fn execute(cli: &Cli, config: &AppConfig) -> CliResult<Option<String>> {
    let menu = build_menu(cli, config)?;

    if cli.show_menu {
        return Ok(Some(render_menu(&menu)));
    }

    if cli.items.is_empty() {
        return Ok(None);
    }

    let calculator = BillCalculator::with_policy(menu, config.service_charge_policy()?);
    let bill = calculator.calculate_bill(&cli.items)?;
    info!(total = %bill.total(), items = cli.items.len(), "Order priced");

    render_bill(&bill, cli.output_format()).map(Some)
}

fn build_menu(cli: &Cli, config: &AppConfig) -> CliResult<InMemoryMenu> {
    match config.menu_path(cli.menu.as_deref()) {
        Some(path) => menu_file::load_menu(path),
        None => Ok(InMemoryMenu::standard()),
    }
}

/// JSON shape of a bill; amounts as two-decimal strings.
#[derive(Debug, Serialize)]
struct BillView {
    item_total: String,
    service_charge: String,
    total: String,
}

impl From<&Bill> for BillView {
    fn from(bill: &Bill) -> Self {
        BillView {
            item_total: bill.item_total().to_string(),
            service_charge: bill.service_charge().to_string(),
            total: bill.total().to_string(),
        }
    }
}

/// Formats a bill for printing.
pub fn render_bill(bill: &Bill, format: OutputFormat) -> CliResult<String> {
    let rendered = match format {
        OutputFormat::Total => bill.total().to_string(),
        OutputFormat::Itemized => format!(
            "Items:          {:>8}\nService charge: {:>8}\nTotal:          {:>8}",
            bill.item_total(),
            bill.service_charge(),
            bill.total()
        ),
        OutputFormat::Json => serde_json::to_string(&BillView::from(bill))?,
    };
    Ok(rendered)
}

/// One line per item, sorted by name.
pub fn render_menu(menu: &InMemoryMenu) -> String {
    menu.items()
        .iter()
        .map(|item| {
            format!(
                "{:<20} {:<6} {:<5} {:>8}",
                item.name(),
                item.category(),
                item.temperature(),
                item.unit_cost()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=cafe_core=debug` - Show resolution details only
/// - Otherwise the configured `log_filter`, then `warn`
///
/// Logs go to stderr; stdout carries only the bill.
fn init_tracing(configured: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured.unwrap_or(DEFAULT_LOG_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // try_init: a subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
