use clap::Parser;
use kb_lambda_handlers::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    cli::lambda::run(cli.handler).await
}
