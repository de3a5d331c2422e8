//! # CLI Error Type
//!
//! Everything that can stop the `cafe` binary.
//!
//! ## Exit Codes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Outcome                                   stream    exit               │
//! │  ───────────────────────────────────────   ───────   ────               │
//! │  Bill printed                              stdout    0                  │
//! │  No items given                            stdout    1                  │
//! │  Core(UnavailableItems)                    stdout    1                  │
//! │  Anything else (config, menu file, ...)    stderr    2                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use cafe_core::CoreError;
use thiserror::Error;

/// Errors raised by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file missing, unreadable, or of the wrong shape.
    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    /// The menu file could not be read.
    #[error("Cannot read menu file {}: {source}", .path.display())]
    MenuRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The menu file is not valid TOML or not shaped like a menu.
    #[error("Invalid menu file: {0}")]
    MenuParse(#[from] toml::de::Error),

    /// JSON rendering failed.
    #[error("Cannot render bill as JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Billing or validation failure from cafe-core.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CliError {
    /// Unavailable items are an ordinary "no" to the customer; everything
    /// else is a setup problem.
    pub fn exit_code(&self) -> ExitCode {
        if self.is_unavailable_items() {
            ExitCode::from(1)
        } else {
            ExitCode::from(2)
        }
    }

    pub fn is_unavailable_items(&self) -> bool {
        matches!(self, CliError::Core(CoreError::UnavailableItems { .. }))
    }
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;
