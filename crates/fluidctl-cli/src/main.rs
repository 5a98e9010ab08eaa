mod cli;
mod commands;
mod completions;
mod config;
mod error;
mod output;

use clap::Parser;
use cli::{Cli, Commands, Globals};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = config::CliConfig::load();

    // Logs go to stderr; stdout is reserved for command output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(err) = run(cli, &config).await {
        error::handle_error(err);
    }
}

async fn run(cli: Cli, config: &config::CliConfig) -> anyhow::Result<()> {
    match cli.command {
        Commands::Completions { shell } => {
            completions::generate_completions(shell);
            Ok(())
        }
        command => dispatch(cli.global.resolve(config)?, command).await,
    }
}

async fn dispatch(globals: Globals, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Completions { .. } => unreachable!("handled before dispatch"),
        Commands::Instances { command } => commands::instance::run(&globals, command).await,
        Commands::Projects { command } => commands::project::run(&globals, command).await,
        Commands::Filesystems { command } => commands::filesystem::run(&globals, command).await,
        Commands::Slurm { command } => commands::slurm::run(&globals, command).await,
    }
}
