//! Command-line interface for tictactoe_tui.

use crate::settings::Theme;
use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe for the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_tui")]
#[command(about = "Two-player tic-tac-toe with themes and a result log", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file holding the saved theme
    #[arg(long, default_value = "tictactoe.toml")]
    pub settings: PathBuf,

    /// Start with this theme instead of the saved one
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Log file for tracing output (the TUI owns the terminal)
    #[arg(long, default_value = "tictactoe_tui.log")]
    pub log_file: PathBuf,
}
