use clap::Parser;
use wortschatz_trainer::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    wortschatz_trainer::run(Cli::parse()).await
}
