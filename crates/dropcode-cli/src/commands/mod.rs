//! CLI command definitions and dispatch.

pub mod config;
pub mod serve;
pub mod sweep;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use dropcode_core::config::AppConfig;
use dropcode_core::error::AppError;

/// Dropcode: share files and text behind a six-character code
#[derive(Debug, Parser)]
#[command(name = "dropcode", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the Dropcode server
    Serve(serve::ServeArgs),
    /// Delete expired shares once and report the counts
    Sweep,
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Sweep => sweep::execute(&self.config, self.format).await,
            Commands::Config(args) => config::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}
