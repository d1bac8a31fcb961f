//! Permission tiers assigned to accounts

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::{AccountError, AccountField};

/// Access tier of an account, ordered from least to most privileged
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum PermissionLevel {
    /// Read-only access to published content
    #[default]
    Viewer,
    /// Can draft content
    Author,
    /// Can edit and publish content from any author
    Editor,
    /// Full control over content and accounts
    Admin,
}

impl PermissionLevel {
    /// All tiers in privilege order
    pub const ALL: [PermissionLevel; 4] = [Self::Viewer, Self::Author, Self::Editor, Self::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Viewer => "viewer",
            Self::Author => "author",
            Self::Editor => "editor",
            Self::Admin => "admin",
        }
    }

    /// Check if this tier is the same as or above another
    pub fn at_least(&self, other: PermissionLevel) -> bool {
        *self >= other
    }
}

impl fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionLevel {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "viewer" => Ok(Self::Viewer),
            "author" => Ok(Self::Author),
            "editor" => Ok(Self::Editor),
            "admin" => Ok(Self::Admin),
            other => Err(AccountError::invalid_argument(
                AccountField::PermissionLevel,
                format!("Unknown permission level: '{other}'."),
            )),
        }
    }
}
