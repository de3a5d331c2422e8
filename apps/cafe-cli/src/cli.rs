//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Prices a café order.
///
/// Name each ordered item as its own argument; quote names that contain
/// spaces. Repeat an item to order it more than once.
#[derive(Debug, Clone, Parser)]
#[command(name = "cafe", version, about)]
pub struct Cli {
    /// Items ordered, e.g. "Steak Sandwich" Cola Cola
    #[arg(value_name = "ITEM")]
    pub items: Vec<String>,

    /// Menu file (TOML) to price against instead of the standard menu
    #[arg(long, value_name = "PATH")]
    pub menu: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(long, value_name = "PATH", env = "CAFE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print item total and service charge as well as the total
    #[arg(long, conflicts_with = "json")]
    pub itemized: bool,

    /// Print the bill as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the menu and exit
    #[arg(long)]
    pub show_menu: bool,
}

/// How a bill is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Just the total, e.g. `8.40`
    Total,
    Itemized,
    Json,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.itemized {
            OutputFormat::Itemized
        } else {
            OutputFormat::Total
        }
    }
}
