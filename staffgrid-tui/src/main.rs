mod error;
mod events;
mod layout;
mod render;
mod roster;
mod shell;
mod terminal;

use std::fs::File;
use std::path::PathBuf;

use simplelog::{Config, LevelFilter, WriteLogger};

use staffgrid_core::controller::GridController;

use crate::error::ShellError;
use crate::shell::Shell;

#[tokio::main]
async fn main() {
    let log_file = File::create("staffgrid-tui.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
    }
}

async fn run() -> Result<(), ShellError> {
    let rows = match std::env::args().nth(1) {
        Some(path) => roster::load_seed(&PathBuf::from(path))?,
        None => roster::sample_roster(),
    };
    Shell::new(GridController::with_rows(rows)).run().await
}
