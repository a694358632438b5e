mod cli;

use clap::Parser;
use tracing::debug;

use cli::Cli;
use textile_client::{ApiConfig, TextileClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "textile_client=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.connection.apply(ApiConfig::from_env()?);
    debug!(base_url = %config.base_url()?, "resolved API base URL");

    let client = TextileClient::new(config)?;
    let output = cli::execute(&client, cli.command).await?;
    println!("{}", output.render()?);

    Ok(())
}
