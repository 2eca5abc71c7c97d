use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber;

pub mod commands;

/// PoA account-registration transaction tool
#[derive(Parser)]
#[command(name = "poa-register-tx")]
#[command(about = "Decode, construct and inspect PoA account-registration transactions")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Decode a hex-encoded registration record to JSON
    Decode(commands::DecodeCommand),
    /// Construct and serialize a registration record from field values
    Encode(commands::EncodeCommand),
    /// List the registered transaction-type flags
    Flags(commands::FlagsCommand),
    /// Show the chain-master authority account
    ChainMaster(commands::ChainMasterCommand),
}

pub fn run() -> Result<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decode(command) => command.run(),
        Commands::Encode(command) => command.run(),
        Commands::Flags(command) => command.run(),
        Commands::ChainMaster(command) => command.run(),
    }
}
