//! Demo entry-point: attempt the selected operation, print the outcome, then
//! re-raise a captured failure.

use attempt::Attempter;
use clap::Parser;

use hello_attempt::cli::Cli;
use hello_attempt::error::{DemoError, Result};
use hello_attempt::operations::execute;
use hello_attempt::report::print_outcome;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    run().await.map_err(color_eyre::eyre::Report::from)
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let attempter = Attempter::new(cli.policy()?);
    let outcome = execute(&attempter, &cli.command).await;
    print_outcome(&outcome)?;
    outcome.assert_value().map_err(DemoError::from)?;
    Ok(())
}
