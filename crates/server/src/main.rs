use clap::Parser;
use tracing::info;

use commhub_server::api::{self, AppState};
use commhub_server::config::ServerConfig;

/// Commhub dashboard HTTP server.
#[derive(Parser, Debug)]
#[command(name = "commhub-server", about = "Multi-platform communication dashboard")]
struct Cli {
    /// Interface to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind.
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
    };

    let state = AppState::new()?;
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %config.bind_addr(), "commhub dashboard listening");

    axum::serve(listener, app).await?;

    Ok(())
}
