mod poll_cmd;
mod status_cmd;
mod terminal_output;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use textra_config::Settings;
use textra_gateway::{start_server, GatewayState};

const DEFAULT_SERVER: &str = "http://localhost:5000";

#[derive(Parser)]
#[command(name = "textra")]
#[command(about = "Textra: upload documents and extract text with Amazon Textract")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the Textra HTTP server
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Check whether a Textra server is up
    Status {
        /// Base URL of the server
        #[arg(long, default_value = DEFAULT_SERVER)]
        server: String,
    },
    /// Query a text detection job once
    Poll {
        /// Job id returned by an upload
        job_id: String,
        /// Base URL of the server
        #[arg(long, default_value = DEFAULT_SERVER)]
        server: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            let settings = Settings::from_env().context("Failed to read settings")?;
            textra_logging::init_logger(settings.log_dir.as_deref(), &settings.log_level);
            let settings = textra_config::validated(with_port_override(settings, port))?;
            run_server(settings).await?;
        }
        Commands::Status { server } => status_cmd::run(&server).await?,
        Commands::Poll { job_id, server } => poll_cmd::run(&server, &job_id).await?,
    }

    Ok(())
}

/// Apply `--port` before validation so it gets the same checks as `TEXTRA_PORT`.
fn with_port_override(mut settings: Settings, port: Option<u16>) -> Settings {
    if let Some(port) = port {
        settings.port = port;
    }
    settings
}

async fn run_server(settings: Settings) -> Result<()> {
    info!(settings = %settings.redacted(), "Starting Textra");

    let (store, ocr) = textra_aws::build_clients(&settings).await;
    let state = GatewayState::new(Arc::new(store), Arc::new(ocr), &settings);

    let addr: SocketAddr = settings
        .listen_addr()
        .parse()
        .with_context(|| format!("Invalid listen address {}", settings.listen_addr()))?;
    start_server(addr, state).await
}
