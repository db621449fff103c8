//! Astro CLI - command line client for the city lookup and forecast services.

use astro_core::config::{BackendConfig, BASE_URL_ENV};
use clap::Parser;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "astro-cli",
    version,
    about = "Free 2026 astrological forecast from birth data"
)]
struct Cli {
    /// Backend base URL; both services live under <BASE_URL>/api
    #[arg(long, env = BASE_URL_ENV)]
    base_url: String,

    /// Request timeout in seconds (transport default when omitted)
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: astro_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut config = BackendConfig::new(cli.base_url);
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    astro_cmd::run(config, cli.command).await
}
