//! Domain layer - Core business logic and entities

pub mod account;
pub mod clock;
pub mod error;

pub use account::{Account, AccountId, AccountRecord, PermissionLevel};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{AccountError, AccountField};
