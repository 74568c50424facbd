//! Argument parsing - top-level CLI surface

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::completions::CompletionsArgs;
use crate::cli::commands::config::ConfigCommands;
use crate::cli::commands::mat::MatCommands;
use crate::cli::commands::partner::PartnerCommands;
use crate::cli::commands::prod::ProdCommands;
use crate::config::{ConfigError, ConfigFile, StoreConfig};

#[derive(Parser, Debug)]
#[command(
    name = "fpt",
    version,
    about = "Terminal front-end for a PostgreSQL-backed production inventory"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand
#[derive(clap::Args, Debug)]
pub struct GlobalOpts {
    /// Database host
    #[arg(long, global = true, env = "FPT_PG_HOST")]
    pub host: Option<String>,

    /// Database port
    #[arg(long, global = true, env = "FPT_PG_PORT")]
    pub port: Option<u16>,

    /// Database name
    #[arg(long, global = true, env = "FPT_PG_DATABASE")]
    pub database: Option<String>,

    /// Database user
    #[arg(long, global = true, env = "FPT_PG_USER")]
    pub user: Option<String>,

    /// Database password
    #[arg(long, global = true, env = "FPT_PG_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Path to a config file (defaults to the platform config directory)
    #[arg(long, global = true, env = "FPT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for list and show commands
    #[arg(long, short = 'f', global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

impl GlobalOpts {
    /// Connection settings given on the command line (or via `FPT_PG_*`)
    pub fn overrides(&self) -> ConfigFile {
        ConfigFile {
            host: self.host.clone(),
            port: self.port,
            database: self.database.clone(),
            user: self.user.clone(),
            password: self.password.clone(),
        }
    }

    /// Resolve the full store configuration (flags > file > defaults)
    pub fn store_config(&self) -> Result<StoreConfig, ConfigError> {
        StoreConfig::load(self.config.as_deref(), &self.overrides())
    }
}

/// Output format for list and show commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage materials
    #[command(subcommand)]
    Mat(MatCommands),

    /// Inspect products
    #[command(subcommand)]
    Prod(ProdCommands),

    /// Inspect partners
    #[command(subcommand)]
    Partner(PartnerCommands),

    /// Manage the store connection config file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}
