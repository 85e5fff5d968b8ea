//! # Mailscreen
//!
//! Command-line gate for checking whether an email address is safe to
//! use for transactional mail.

mod bootstrap;
mod di;

use clap::Parser;
use mailscreen_domain::{CliOverrides, Verdict};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "mailscreen")]
#[command(version)]
#[command(about = "Check whether an email address is safe for transactional mail")]
struct Cli {
    /// Email address to check
    address: String,

    /// Path to the TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// API key for the paid endpoint (overrides the config file)
    #[arg(long)]
    api_key: Option<String>,

    /// Use the free disposable-check endpoint
    #[arg(long)]
    free: bool,

    /// Disclose only the domain portion of the address to the API
    #[arg(long)]
    private: bool,

    /// Secret for cache-key derivation (overrides the config file)
    #[arg(long)]
    secret_key: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        api_key: cli.api_key,
        free_tier: cli.free.then_some(true),
        privacy_mode: cli.private.then_some(true),
        secret_key: cli.secret_key,
    };

    let config = match bootstrap::load_config(cli.config.as_deref(), overrides) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("mailscreen: configuration error: {e:#}");
            return ExitCode::from(2);
        }
    };

    bootstrap::init_logging(&config);

    let checker = di::build_checker(&config);

    match checker.execute(&cli.address).await {
        Ok(Verdict::Allow) => {
            println!("allow");
            ExitCode::SUCCESS
        }
        Ok(Verdict::Block) => {
            println!("block");
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("mailscreen: {e}");
            ExitCode::from(2)
        }
    }
}
