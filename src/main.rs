//! Tic-tac-toe terminal game.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tictactoe_tui::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    tictactoe_tui::tui::run(cli)
}
