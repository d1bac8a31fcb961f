//! Account validation utilities
//!
//! Every check is a pure function shared by construction and the mutators,
//! so a value is rejected before any field is written.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use super::permission::PermissionLevel;
use crate::domain::error::{AccountError, AccountField};

/// Accepted email grammar: `local@domain.tld` with a 2-6 letter top-level label
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}$").unwrap());

/// Empty or whitespace-only
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Check an address against the email grammar without the blank check
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn require_non_blank(
    value: &str,
    field: AccountField,
    label: &str,
) -> Result<(), AccountError> {
    if is_blank(value) {
        return Err(AccountError::invalid_argument(
            field,
            format!("{label} cannot be null or blank."),
        ));
    }

    Ok(())
}

pub fn validate_id(id: &str) -> Result<(), AccountError> {
    require_non_blank(id, AccountField::Id, "Account ID")
}

pub fn validate_display_name(display_name: &str) -> Result<(), AccountError> {
    require_non_blank(display_name, AccountField::DisplayName, "Display name")
}

pub fn validate_handle(handle: &str) -> Result<(), AccountError> {
    require_non_blank(handle, AccountField::Handle, "Handle")
}

/// Validate an email address
///
/// Rules:
/// - Cannot be blank
/// - Must match the email grammar
pub fn validate_email(email: &str) -> Result<(), AccountError> {
    require_non_blank(email, AccountField::Email, "Email")?;

    if !is_valid_email(email) {
        return Err(AccountError::invalid_argument(
            AccountField::Email,
            "Invalid email format.",
        ));
    }

    Ok(())
}

pub fn validate_credential_hash(credential_hash: &str) -> Result<(), AccountError> {
    require_non_blank(
        credential_hash,
        AccountField::CredentialHash,
        "Credential hash",
    )
}

pub fn require_permission_level(
    level: Option<PermissionLevel>,
) -> Result<PermissionLevel, AccountError> {
    level.ok_or_else(|| {
        AccountError::invalid_argument(
            AccountField::PermissionLevel,
            "Permission level cannot be null.",
        )
    })
}

pub fn require_created_at(
    created_at: Option<DateTime<Utc>>,
) -> Result<DateTime<Utc>, AccountError> {
    created_at.ok_or_else(|| {
        AccountError::invalid_argument(AccountField::CreatedAt, "Created at cannot be null.")
    })
}

/// Resolve the stored update time; absent means "never updated since creation"
pub fn resolve_updated_at(
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
) -> Result<DateTime<Utc>, AccountError> {
    let updated_at = updated_at.unwrap_or(created_at);

    if updated_at < created_at {
        return Err(AccountError::invalid_argument(
            AccountField::UpdatedAt,
            "Updated at cannot precede created at.",
        ));
    }

    Ok(updated_at)
}
