//! Start the Dropcode server.

use clap::Args;

use dropcode_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the uploads directory
    #[arg(long)]
    pub uploads_dir: Option<String>,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, config_path: &str) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if let Some(ref dir) = args.uploads_dir {
        config.storage.uploads_dir = dir.clone();
    }

    println!("Starting Dropcode server...");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);
    println!("  Uploads: {}", config.storage.uploads_dir);

    dropcode_api::run_server(config).await
}
