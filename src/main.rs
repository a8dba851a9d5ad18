//! `cookie-echo`: serves the cookie parser middleware and echoes the decoded
//! mappings back as JSON.
//!
//! - `GET /` → `{"cookies": <plain cookies>}`
//! - `GET /signed` → `{"cookies": <signed cookies>}`

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use cookie_parser::config::{load_config, AppConfig};
use cookie_parser::observability::{logging, metrics};
use cookie_parser::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "cookie-echo")]
#[command(about = "Echo the cookies of incoming requests", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        secrets = config.cookies.secrets.len(),
        decode = ?config.cookies.parse.decode,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
