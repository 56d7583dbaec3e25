use anyhow::Result;
use clap::Parser;

use citizen_report::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run().await
}
