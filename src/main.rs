use clap::Parser;
use isd_extractor::cli::{run, Cli};
use isd_extractor::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
