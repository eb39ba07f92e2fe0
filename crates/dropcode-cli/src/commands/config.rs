//! `dropcode config`: inspect, check, and scaffold configuration.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use dropcode_core::error::AppError;
use dropcode_service::share::expiry::TTL_HOURS;

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration (file plus environment)
    Show {
        /// Print the cleanup secret instead of masking it
        #[arg(long)]
        reveal_secret: bool,
    },
    /// Load the configuration and summarise the values that matter
    Check,
    /// Write the shipped defaults to a new file
    Init {
        /// Destination path
        #[arg(short, long, default_value = "dropcode.toml")]
        output: String,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Shipped defaults, identical to `config/default.toml`.
const DEFAULT_CONFIG: &str = include_str!("../../../../config/default.toml");

pub async fn execute(
    args: &ConfigArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show { reveal_secret } => {
            let mut config = super::load_config(config_path)?;
            if !reveal_secret && !config.cleanup.uses_default_secret() {
                config.cleanup.secret = "********".to_string();
            }
            output::print_item(&config, format);
        }
        ConfigCommand::Check => match super::load_config(config_path) {
            Ok(config) => {
                output::print_success(&format!("Configuration '{config_path}' is valid"));
                output::print_kv(
                    "Server",
                    &format!("{}:{}", config.server.host, config.server.port),
                );
                output::print_kv("Uploads", &config.storage.uploads_dir);
                output::print_kv(
                    "Max file size",
                    &format!("{} bytes", config.share.max_file_size_bytes),
                );
                output::print_kv(
                    "Max text length",
                    &format!("{} UTF-16 units", config.share.max_text_length),
                );
                output::print_kv(
                    "Time-to-live",
                    &format!("{TTL_HOURS} hours (fixed)"),
                );
                output::print_kv(
                    "Scheduled sweep",
                    &if config.cleanup.schedule_enabled {
                        config.cleanup.schedule.clone()
                    } else {
                        "disabled".to_string()
                    },
                );
                if config.cleanup.uses_default_secret() {
                    output::print_warning("cleanup.secret is the shipped default");
                }
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {e}"));
                return Err(e);
            }
        },
        ConfigCommand::Init {
            output: out_path,
            force,
        } => {
            let target = std::path::Path::new(out_path);
            if target.exists() && !force {
                return Err(AppError::validation(format!(
                    "'{out_path}' already exists; pass --force to overwrite it"
                )));
            }
            if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(target, DEFAULT_CONFIG).await?;

            output::print_success(&format!("Default configuration written to '{out_path}'"));
        }
    }

    Ok(())
}
