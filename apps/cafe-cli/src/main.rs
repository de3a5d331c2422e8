//! # `cafe` Entry Point
//!
//! ```text
//! $ cafe "Steak Sandwich" Cola "Cheese Sandwich"
//! 8.40
//! ```
//!
//! The actual work is in lib.rs for better testability.

use std::process::ExitCode;

use cafe_cli::cli::Cli;
use clap::Parser;

fn main() -> ExitCode {
    cafe_cli::run(Cli::parse())
}
