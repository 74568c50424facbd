//! `fpt config` command - Store connection configuration

use clap::Subcommand;
use console::style;
use miette::{miette, IntoDiagnostic, Result};
use std::fs;
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::config::{self, ConfigFile};

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a starter config file
    Init(InitArgs),

    /// Show the resolved connection settings
    Show,
}

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,

    /// Where to write the file (defaults to the platform config directory)
    #[arg(long)]
    pub path: Option<PathBuf>,
}

/// Run a config subcommand
pub fn run(cmd: ConfigCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ConfigCommands::Init(args) => run_init(args, global),
        ConfigCommands::Show => run_show(global),
    }
}

fn run_init(args: InitArgs, global: &GlobalOpts) -> Result<()> {
    let path = args
        .path
        .or_else(|| global.config.clone())
        .or_else(config::default_path)
        .ok_or_else(|| miette!("no config directory available; pass --path"))?;

    if path.exists() && !args.force {
        println!(
            "Config file {} already exists (pass --force to overwrite)",
            style(path.display()).cyan()
        );
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).into_diagnostic()?;
    }
    fs::write(&path, ConfigFile::template()).into_diagnostic()?;

    println!(
        "{} Initialized config at {}",
        style("✓").green(),
        style(path.display()).cyan()
    );
    Ok(())
}

fn run_show(global: &GlobalOpts) -> Result<()> {
    let resolved = global.store_config().into_diagnostic()?;
    println!("{}: {}", style("host").bold(), resolved.host);
    println!("{}: {}", style("port").bold(), resolved.port);
    println!("{}: {}", style("database").bold(), resolved.database);
    println!("{}: {}", style("user").bold(), resolved.user);
    println!(
        "{}: {}",
        style("password").bold(),
        if resolved.password.is_some() {
            "***"
        } else {
            "(none)"
        }
    );
    Ok(())
}
