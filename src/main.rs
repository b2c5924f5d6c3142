//! ut2u CLI - UT2004 mod and mutator build tool
//!
//! Entry point for the ut2u command-line application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ut2u::cli::output::display_error;
use ut2u::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over -v/-q
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(cli.log_level().into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Run the command and handle errors
    match cli.run().await {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
