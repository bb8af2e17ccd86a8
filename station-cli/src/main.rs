//! Binary crate for the `station` weather dashboard.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Prompting for locations and configuration
//! - Rendering the dashboard in the terminal

use clap::Parser;

mod cli;
mod view;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
