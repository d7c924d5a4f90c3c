//! Gradebook serve command for running the backend server

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use gradebook_server::{GradebookServer, ServerConfig};

/// Default port for the gradebook server
pub const DEFAULT_PORT: u16 = 5000;
/// Default host for the gradebook server
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Directory holding the JSON data files (defaults to the XDG data dir)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

/// Run the serve command
pub async fn run(args: ServeArgs) -> Result<()> {
    let data_dir = args.data_dir.unwrap_or_else(gradebook_paths::data_dir);
    let config = ServerConfig::new(args.host, args.port, data_dir);

    info!("Starting gradebook server on {}", config.addr());

    let server = GradebookServer::new(config)?;
    server.run().await.map_err(Into::into)
}
