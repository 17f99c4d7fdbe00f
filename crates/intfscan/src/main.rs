//! intfscan entry point.
//!
//! Wires stdin and stdout into the scan pipeline and maps the result to
//! the process exit code. All logging goes to stderr so stdout carries
//! nothing but the structured rows.

use std::io;
use std::process::ExitCode;

use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Initialize tracing/logging on stderr.
fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

fn main() -> ExitCode {
    init_logging();

    info!("--- Starting intfscan ---");
    info!("reading configuration from stdin");

    let stdin = io::stdin();
    let stdout = io::stdout();

    match intfscan::run(stdin.lock(), stdout.lock()) {
        Ok(_) => {
            info!("intfscan exiting normally");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("intfscan error: {}", e);
            ExitCode::FAILURE
        }
    }
}
