//! CMS Accounts
//!
//! The registered-account entity of a content-management backend, with support for:
//! - Validated registration and reconstruction from stored state
//! - Email confirmation and permission tiers
//! - Soft deletion and restore
//!
//! Persistence, hashing and authorization belong to the surrounding services.

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{
    Account, AccountError, AccountField, AccountId, AccountRecord, Clock, FixedClock,
    PermissionLevel, SystemClock,
};
