use std::path::PathBuf;

use anyhow::Result;
use calculator_server::{AppConfig, CliOverrides, logging, server};
use clap::{Parser, Subcommand};

/// Calculator Server - arithmetic over HTTP with a shared history
#[derive(Parser)]
#[command(name = "calculator-server")]
#[command(about = "Calculator Server - arithmetic over HTTP with a shared history")]
#[command(version)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&CliOverrides {
        port: cli.port,
        verbose: cli.verbose,
    });

    // Print config and exit if requested
    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_yaml()?);
        return Ok(());
    }

    logging::init(&config.logging);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Calculator Server starting");

    // Dispatch subcommands (default: run)
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => server::run(&config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(())
}
