//! CLI Command Handlers
//!
//! Implementation of all CLI commands for the token scanner.

use clap::{Parser, Subcommand};
use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::sync::Arc;

use crate::adapters::discord;
use crate::adapters::http::ReqwestFetcher;
use crate::application::{MarketDataResolver, MessageScanner};
use crate::config::{load_config_or_default, Config, BOT_TOKEN_ENV, DEFAULT_CONFIG_PATH};
use crate::domain::{classify, detect_address_type};

/// Token Scout - Discord bot that answers token addresses with live market data
#[derive(Parser, Debug)]
#[command(
    name = "token-scout",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Discord bot that answers token addresses with live market data",
    long_about = "Token Scout watches chat for Solana mints, EVM contracts and URLs, \
                  resolves each address against DEX and price APIs, and replies with \
                  a market summary card."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Connect to Discord and start scanning messages
    Run(RunCmd),

    /// Resolve one address and print the market record
    Lookup(LookupCmd),

    /// Show which addresses would be detected in a piece of text
    Scan(ScanCmd),
}

impl Command {
    /// Config file used by this command, if any
    pub fn config_path(&self) -> Option<&PathBuf> {
        match self {
            Command::Run(cmd) => Some(&cmd.config),
            Command::Lookup(cmd) => Some(&cmd.config),
            Command::Scan(_) => None,
        }
    }
}

/// Start the bot
#[derive(Parser, Debug)]
pub struct RunCmd {
    /// Path to configuration file (optional, defaults apply when missing)
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

/// One-shot lookup
#[derive(Parser, Debug)]
pub struct LookupCmd {
    /// Solana mint or EVM contract address
    #[arg(value_name = "ADDRESS")]
    pub address: String,

    /// Path to configuration file (optional, defaults apply when missing)
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

/// Classifier dry run
#[derive(Parser, Debug)]
pub struct ScanCmd {
    /// Text to scan
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Execute the CLI command
pub async fn execute(app: CliApp) -> Result<()> {
    let config = match app.command.config_path() {
        Some(path) => load_config_or_default(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };

    // Initialize logging based on flags
    init_logging(app.verbose, app.debug, &config.logging.level)?;

    match app.command {
        Command::Run(_) => run_command(&config).await,
        Command::Lookup(cmd) => lookup_command(cmd, &config).await,
        Command::Scan(cmd) => scan_command(cmd),
    }
}

/// Pick the log filter: flags, then RUST_LOG, then the configured level
fn log_filter(verbose: bool, debug: bool, configured: &str) -> tracing_subscriber::EnvFilter {
    use tracing_subscriber::EnvFilter;

    if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info,token_scout=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured))
    }
}

/// Initialize logging system
fn init_logging(verbose: bool, debug: bool, configured: &str) -> Result<()> {
    use tracing_subscriber::fmt;

    fmt()
        .with_env_filter(log_filter(verbose, debug, configured))
        .with_target(false)
        .init();

    Ok(())
}

fn build_fetcher(config: &Config) -> Result<Arc<ReqwestFetcher>> {
    let fetcher = ReqwestFetcher::with_config((&config.http).into())
        .context("Failed to create HTTP client")?;
    Ok(Arc::new(fetcher))
}

/// Handle run command
async fn run_command(config: &Config) -> Result<()> {
    let Some(token) = config.bot.bot_token() else {
        bail!(
            "{} is not set.\n\n\
             Add it to the environment or to a .env file:\n  \
             {}=your-discord-bot-token",
            BOT_TOKEN_ENV,
            BOT_TOKEN_ENV
        );
    };

    tracing::info!("Starting token scanner bot...");
    tracing::info!(
        "Per-source timeout: {:?}, command prefix: {:?}",
        config.http.timeout(),
        config.bot.command_prefix
    );

    let scanner = MessageScanner::from_config(config, build_fetcher(config)?);

    discord::run(&token, scanner)
        .await
        .context("Discord client stopped")?;

    tracing::info!("Token scanner stopped");
    Ok(())
}

/// Handle lookup command
async fn lookup_command(cmd: LookupCmd, config: &Config) -> Result<()> {
    let chain = detect_address_type(&cmd.address);
    if !chain.is_token() {
        bail!("Not a Solana or EVM address: {} (detected {})", cmd.address, chain.label());
    }

    tracing::info!("Looking up {} address {}", chain.label(), cmd.address);

    let resolver = MarketDataResolver::from_config(build_fetcher(config)?, &config.sources, config.http.timeout());
    let record = resolver.resolve(&cmd.address, chain).await;

    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

/// Handle scan command
fn scan_command(cmd: ScanCmd) -> Result<()> {
    let matches = classify(&cmd.text);
    if matches.is_empty() {
        println!("No addresses found");
        return Ok(());
    }

    for m in matches {
        println!("{:<20} {}", m.chain_kind.label(), m.raw_text);
    }
    Ok(())
}
