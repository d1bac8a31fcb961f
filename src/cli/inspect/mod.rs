//! Read-only commands - email grammar check and permission tiers

use clap::Args;

use crate::domain::{account::validate_email, PermissionLevel};

/// Arguments for the check-email command
#[derive(Args, Clone)]
pub struct CheckEmailArgs {
    /// Address to check
    pub email: String,
}

pub fn check_email(args: CheckEmailArgs) -> anyhow::Result<()> {
    match validate_email(&args.email) {
        Ok(()) => println!("valid: {}", args.email),
        Err(e) => println!("invalid: {} ({e})", args.email),
    }

    Ok(())
}

pub fn permissions() -> anyhow::Result<()> {
    for level in PermissionLevel::ALL {
        println!("{level}");
    }

    Ok(())
}
