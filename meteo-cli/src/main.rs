//! Binary crate for the `meteo` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Calling into `meteo-core`
//! - Printing results as JSON or plain numbers

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
