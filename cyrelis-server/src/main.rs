//! Cyrelis Export Server
//!
//! Serves a single page and an endpoint turning a list of credentials into
//! a CSV file ready for import into Bitwarden. Nothing is stored.

mod config;
mod error;
mod handlers;
mod page;
mod server;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cyrelis-server", about = "Bitwarden CSV export server")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "cyrelis.toml")]
    config: PathBuf,

    /// Listen address override
    #[arg(short, long)]
    listen: Option<String>,

    /// Page template override
    #[arg(short, long)]
    template: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    let mut cfg = if cli.config.exists() {
        config::ServerConfig::load(&cli.config)?
    } else {
        tracing::info!("No config file found, using defaults");
        config::ServerConfig::default()
    };

    if let Some(listen) = cli.listen {
        cfg.listen_addr = listen;
    }
    if let Some(template) = cli.template {
        cfg.template_path = template;
    }

    let state = server::AppState {
        page: page::load_page(&cfg.template_path)?,
    };
    let app = server::build_router(state, &cfg);

    tracing::info!("Starting Cyrelis export server on {}", cfg.listen_addr);

    let listener = tokio::net::TcpListener::bind(&cfg.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
