use clap::Parser;
use weather_odds::cli::{run, Cli};
use weather_odds::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
