//! Account domain
//!
//! This module provides the registered-account entity, its permission tiers
//! and the validation rules shared by construction and mutation.

mod entity;
mod permission;
mod validation;

pub use entity::{Account, AccountId, AccountRecord};
pub use permission::PermissionLevel;
pub use validation::{
    is_blank, is_valid_email, validate_credential_hash, validate_display_name, validate_email,
    validate_handle, validate_id,
};
