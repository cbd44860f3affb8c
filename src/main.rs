use clap::Parser;
use edgematch::adapter::inbound::cli::{self, command::Cli};

#[tokio::main]
async fn main() -> miette::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    cli::dispatch(cli).await
}
