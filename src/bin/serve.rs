//! Serves the current directory for local development.
//!
//! Takes no arguments; the first free preferred port is picked automatically.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin serve
//! ```

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = devserve::run(".").await {
        eprintln!("Error: {err}.");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
