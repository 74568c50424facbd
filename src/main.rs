use clap::Parser;
use miette::Result;

use fpt::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();

    if cli.global.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fpt=debug,sqlx=warn")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.command {
        Commands::Mat(cmd) => fpt::cli::commands::mat::run(cmd, &cli.global),
        Commands::Prod(cmd) => fpt::cli::commands::prod::run(cmd, &cli.global),
        Commands::Partner(cmd) => fpt::cli::commands::partner::run(cmd, &cli.global),
        Commands::Config(cmd) => fpt::cli::commands::config::run(cmd, &cli.global),
        Commands::Completions(args) => fpt::cli::commands::completions::run(args),
    }
}
