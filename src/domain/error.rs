use std::fmt;

use thiserror::Error;

/// Account field named by an argument error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountField {
    Id,
    DisplayName,
    Handle,
    Email,
    CredentialHash,
    PermissionLevel,
    CreatedAt,
    UpdatedAt,
}

impl AccountField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::DisplayName => "display_name",
            Self::Handle => "handle",
            Self::Email => "email",
            Self::CredentialHash => "credential_hash",
            Self::PermissionLevel => "permission_level",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

impl fmt::Display for AccountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by account construction and mutation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Invalid argument ({field}): {message}")]
    InvalidArgument {
        field: AccountField,
        message: String,
    },

    #[error("Invalid state: {message}")]
    InvalidState { message: String },
}

impl AccountError {
    pub fn invalid_argument(field: AccountField, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            message: message.into(),
        }
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }

    /// The offending field, for argument errors
    pub fn field(&self) -> Option<AccountField> {
        match self {
            Self::InvalidArgument { field, .. } => Some(*field),
            Self::InvalidState { .. } => None,
        }
    }
}
