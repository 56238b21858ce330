//! Runs a frontend project locally.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin devserve              # Serve the current directory
//! cargo run --bin devserve -- ./dist    # Serve a specific project folder
//! ```

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Run a frontend project locally")]
struct Args {
    /// Path to the project folder
    #[arg(default_value = ".")]
    project_path: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = devserve::run(&args.project_path).await {
        eprintln!("Error: {err}.");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
