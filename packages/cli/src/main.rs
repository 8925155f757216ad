use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use spriint_cli::config::{parse_host, parse_port, Config};

#[derive(Parser)]
#[command(name = "spriint")]
#[command(about = "Spriint - projects, epics and issues over HTTP")]
#[command(version)]
struct Cli {
    #[arg(long, help = "Port to listen on (overrides PORT)")]
    port: Option<String>,

    #[arg(long, help = "Address to bind (overrides HOST)")]
    host: Option<String>,

    #[arg(long, help = "SQLite database file (overrides SPRIINT_DATABASE_PATH)")]
    database_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(port) = cli.port.as_deref() {
        config.port = parse_port(port)?;
    }
    if let Some(host) = cli.host.as_deref() {
        config.host = parse_host(host)?;
    }
    if let Some(path) = cli.database_path {
        config.database_path = path;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,spriint=debug")),
        )
        .init();

    tracing::info!(
        "Starting Spriint server on {}:{} (database: {})",
        config.host,
        config.port,
        config.database_path.display()
    );

    spriint_cli::run_server(config).await?;
    Ok(())
}
