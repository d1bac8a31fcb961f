//! CLI module for CMS Accounts
//!
//! Provides subcommands that exercise the account entity:
//! - `create`: register an account and print it as JSON
//! - `check-email`: test an address against the email grammar
//! - `permissions`: list permission tiers

pub mod create;
pub mod inspect;

use clap::{Parser, Subcommand};
use tracing::warn;

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// CMS Accounts - Registered account entity for a content-management backend
#[derive(Parser)]
#[command(name = "cms-accounts")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Register a new account from an already-hashed credential
    Create(create::CreateArgs),

    /// Check whether an address is accepted as an account email
    CheckEmail(inspect::CheckEmailArgs),

    /// List permission tiers from least to most privileged
    Permissions,
}

/// Load `.env` and configuration, then install logging
pub fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    logging::init_logging(&config.logging)?;

    if let Some(e) = load_error {
        warn!(error = %e, "Failed to load configuration, using defaults");
    }

    Ok(config)
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = bootstrap()?;

    match cli.command {
        Command::Create(args) => create::run(args, &config),
        Command::CheckEmail(args) => inspect::check_email(args),
        Command::Permissions => inspect::permissions(),
    }
}
