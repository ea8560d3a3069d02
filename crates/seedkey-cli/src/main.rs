//! Seedkey CLI - derive an Ed25519 private key from a fixed seed
//!
//! Run without arguments to print the private key for the embedded seed.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use seedkey_cli::{execute, CliConfig, Output, DEFAULT_LOG_FILTER};
use seedkey_core::OutputFormat;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "seedkey")]
#[command(about = "Derive an Ed25519 private key from a fixed 32-byte seed", long_about = None)]
#[command(version)]
struct Cli {
    /// Seed to expand (64 hex characters) instead of the embedded one
    #[arg(long, global = true)]
    seed: Option<String>,

    /// Rendering for key bytes
    #[arg(short, long, value_enum, global = true)]
    format: Option<FormatArg>,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the 64-byte private key (default)
    Private,

    /// Print the 32-byte public key
    Public,

    /// Print the checksummed base32 address
    Address,

    /// Print the 25-word mnemonic for the seed
    Mnemonic,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Decimal,
    Hex,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Decimal => OutputFormat::Decimal,
            FormatArg::Hex => OutputFormat::Hex,
        }
    }
}

impl From<Commands> for Output {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Private => Output::PrivateKey,
            Commands::Public => Output::PublicKey,
            Commands::Address => Output::Address,
            Commands::Mnemonic => Output::Mnemonic,
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the result line
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    }
    .with_overrides(cli.seed, cli.format.map(OutputFormat::from));

    let seed = config.seed()?;
    debug!(format = ?config.format, "Configuration resolved");

    let output = cli.command.map(Output::from).unwrap_or_default();
    println!("{}", execute(output, &seed, config.format));
    Ok(())
}
