//! Account entity and related types

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use super::permission::PermissionLevel;
use super::validation::{
    is_blank, require_created_at, require_permission_level, resolve_updated_at,
    validate_credential_hash, validate_display_name, validate_email, validate_handle,
    validate_id,
};
use crate::domain::clock::{Clock, SystemClock};
use crate::domain::error::AccountError;

/// Account identifier - opaque, never blank
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(String);

impl AccountId {
    /// Create an AccountId from an existing value after validation
    pub fn new(id: impl Into<String>) -> Result<Self, AccountError> {
        let id = id.into();
        validate_id(&id)?;
        Ok(Self(id))
    }

    /// Generate a fresh random (v4) identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AccountId {
    type Error = AccountError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AccountId> for String {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Flat account state as read from or written to storage.
///
/// Fields are only type-checked; [`Account::reconstruct`] applies the
/// business rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: String,
    pub display_name: String,
    pub handle: String,
    pub email: String,
    pub credential_hash: String,
    #[serde(default)]
    pub email_confirmed: bool,
    pub permission_level: Option<PermissionLevel>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Registered account of the content-management backend.
///
/// Two accounts are equal when their ids match, whatever their other fields.
/// Instances are not internally synchronized; mutation goes through `&mut self`.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    id: AccountId,
    display_name: String,
    handle: String,
    email: String,
    /// Already-hashed secret - never exposed in serialization
    #[serde(skip_serializing)]
    credential_hash: String,
    email_confirmed: bool,
    permission_level: PermissionLevel,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deleted_at: Option<DateTime<Utc>>,
    #[serde(skip)]
    clock: Arc<dyn Clock>,
}

impl Account {
    /// Register a new account, stamping it with the system clock
    pub fn create(
        display_name: impl Into<String>,
        handle: impl Into<String>,
        email: impl Into<String>,
        credential_hash: impl Into<String>,
        permission_level: impl Into<Option<PermissionLevel>>,
    ) -> Result<Self, AccountError> {
        Self::create_with_clock(
            display_name,
            handle,
            email,
            credential_hash,
            permission_level,
            Arc::new(SystemClock),
        )
    }

    /// Register a new account using the given clock for every timestamp
    pub fn create_with_clock(
        display_name: impl Into<String>,
        handle: impl Into<String>,
        email: impl Into<String>,
        credential_hash: impl Into<String>,
        permission_level: impl Into<Option<PermissionLevel>>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, AccountError> {
        let display_name = display_name.into();
        let handle = handle.into();
        let email = email.into();
        let credential_hash = credential_hash.into();

        validate_display_name(&display_name)?;
        validate_handle(&handle)?;
        validate_email(&email)?;
        validate_credential_hash(&credential_hash)?;
        let permission_level = require_permission_level(permission_level.into())?;

        let now = clock.now();
        let account = Self {
            id: AccountId::generate(),
            display_name,
            handle,
            email,
            credential_hash,
            email_confirmed: false,
            permission_level,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            clock,
        };

        debug!(
            account_id = %account.id,
            permission_level = %account.permission_level,
            "Account created"
        );

        Ok(account)
    }

    /// Rebuild an account from stored state with the system clock
    pub fn reconstruct(record: AccountRecord) -> Result<Self, AccountError> {
        Self::reconstruct_with_clock(record, Arc::new(SystemClock))
    }

    /// Rebuild an account from stored state.
    ///
    /// Identity and timestamps are taken as given; fields are checked in the
    /// same order as on creation, with the id first.
    pub fn reconstruct_with_clock(
        record: AccountRecord,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, AccountError> {
        let id = AccountId::new(record.id)?;
        validate_display_name(&record.display_name)?;
        validate_handle(&record.handle)?;
        validate_email(&record.email)?;
        validate_credential_hash(&record.credential_hash)?;
        let permission_level = require_permission_level(record.permission_level)?;
        let created_at = require_created_at(record.created_at)?;
        let updated_at = resolve_updated_at(created_at, record.updated_at)?;

        Ok(Self {
            id,
            display_name: record.display_name,
            handle: record.handle,
            email: record.email,
            credential_hash: record.credential_hash,
            email_confirmed: record.email_confirmed,
            permission_level,
            created_at,
            updated_at,
            deleted_at: record.deleted_at,
            clock,
        })
    }

    /// Snapshot the full state, credential hash included, for storage
    pub fn to_record(&self) -> AccountRecord {
        AccountRecord {
            id: self.id.to_string(),
            display_name: self.display_name.clone(),
            handle: self.handle.clone(),
            email: self.email.clone(),
            credential_hash: self.credential_hash.clone(),
            email_confirmed: self.email_confirmed,
            permission_level: Some(self.permission_level),
            created_at: Some(self.created_at),
            updated_at: Some(self.updated_at),
            deleted_at: self.deleted_at,
        }
    }

    // Getters

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn credential_hash(&self) -> &str {
        &self.credential_hash
    }

    pub fn is_email_confirmed(&self) -> bool {
        self.email_confirmed
    }

    pub fn permission_level(&self) -> PermissionLevel {
        self.permission_level
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Check if the account is soft-deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    // Mutators

    pub fn change_display_name(
        &mut self,
        display_name: impl Into<String>,
    ) -> Result<(), AccountError> {
        let display_name = display_name.into();
        validate_display_name(&display_name)?;

        self.display_name = display_name;
        self.touch();
        Ok(())
    }

    /// Replace the handle.
    ///
    /// The guard checks the handle being replaced, not the incoming one, so a
    /// blank handle is accepted here.
    pub fn change_handle(&mut self, handle: impl Into<String>) -> Result<(), AccountError> {
        validate_handle(&self.handle)?;

        let handle = handle.into();
        if is_blank(&handle) {
            warn!(account_id = %self.id, "Assigning a blank handle");
        }

        self.handle = handle;
        self.touch();
        Ok(())
    }

    /// Replace the email address; confirmation is revoked
    pub fn change_email(&mut self, email: impl Into<String>) -> Result<(), AccountError> {
        let email = email.into();
        validate_email(&email)?;

        self.email = email;
        self.email_confirmed = false;
        self.touch();
        Ok(())
    }

    /// Replace the credential hash (the caller does the hashing)
    pub fn update_credential(
        &mut self,
        credential_hash: impl Into<String>,
    ) -> Result<(), AccountError> {
        let credential_hash = credential_hash.into();
        validate_credential_hash(&credential_hash)?;

        self.credential_hash = credential_hash;
        self.touch();
        Ok(())
    }

    pub fn confirm_email(&mut self) -> Result<(), AccountError> {
        if self.email_confirmed {
            return Err(AccountError::invalid_state("Email is already confirmed."));
        }

        self.email_confirmed = true;
        self.touch();
        debug!(account_id = %self.id, "Account email confirmed");
        Ok(())
    }

    /// Move to any tier; who may do so is decided elsewhere
    pub fn change_permission_level(
        &mut self,
        permission_level: impl Into<Option<PermissionLevel>>,
    ) -> Result<(), AccountError> {
        let permission_level = require_permission_level(permission_level.into())?;

        debug!(
            account_id = %self.id,
            from = %self.permission_level,
            to = %permission_level,
            "Account permission level changed"
        );

        self.permission_level = permission_level;
        self.touch();
        Ok(())
    }

    /// Soft-delete the account; deletion and update share one timestamp
    pub fn mark_deleted(&mut self) -> Result<(), AccountError> {
        if self.deleted_at.is_some() {
            return Err(AccountError::invalid_state(
                "Account is already marked as deleted.",
            ));
        }

        let now = self.touch();
        self.deleted_at = Some(now);
        debug!(account_id = %self.id, "Account marked as deleted");
        Ok(())
    }

    pub fn restore(&mut self) -> Result<(), AccountError> {
        if self.deleted_at.is_none() {
            return Err(AccountError::invalid_state(
                "Account is not marked as deleted.",
            ));
        }

        self.deleted_at = None;
        self.touch();
        debug!(account_id = %self.id, "Account restored");
        Ok(())
    }

    /// Refresh `updated_at`; it never moves behind its previous value
    fn touch(&mut self) -> DateTime<Utc> {
        let now = self.clock.now().max(self.updated_at);
        self.updated_at = now;
        now
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Account {}

impl Hash for Account {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account{{id='{}', display_name='{}', handle='{}', email='{}', email_confirmed={}, \
             permission_level={}, created_at={}, updated_at={}, deleted_at={}}}",
            self.id,
            self.display_name,
            self.handle,
            self.email,
            self.email_confirmed,
            self.permission_level,
            self.created_at.to_rfc3339(),
            self.updated_at.to_rfc3339(),
            self.deleted_at
                .map(|at| at.to_rfc3339())
                .unwrap_or_else(|| "null".to_string()),
        )
    }
}
