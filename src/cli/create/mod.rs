//! Create command - registers an account and prints it

use clap::Args;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{Account, PermissionLevel};

/// Arguments for the create command
#[derive(Args, Clone)]
pub struct CreateArgs {
    /// Human-readable name
    #[arg(long)]
    pub display_name: String,

    /// Login name
    #[arg(long)]
    pub handle: String,

    #[arg(long)]
    pub email: String,

    /// Already-hashed credential; no hashing is done here
    #[arg(long)]
    pub credential_hash: String,

    /// Initial permission tier (overrides config)
    #[arg(long)]
    pub permission: Option<PermissionLevel>,
}

/// Run the create command
pub fn run(args: CreateArgs, config: &AppConfig) -> anyhow::Result<()> {
    let account = register(args, config)?;

    info!(account_id = %account.id(), "Registered account");
    println!("{}", serde_json::to_string_pretty(&account)?);

    Ok(())
}

fn register(args: CreateArgs, config: &AppConfig) -> anyhow::Result<Account> {
    let permission = args
        .permission
        .unwrap_or(config.accounts.default_permission_level);

    let account = Account::create(
        args.display_name,
        args.handle,
        args.email,
        args.credential_hash,
        permission,
    )?;

    Ok(account)
}
