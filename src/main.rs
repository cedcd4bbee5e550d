mod application;
mod cli;
mod data;
mod domain;
mod scoring;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so JSON on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("cgpa_predictor=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
