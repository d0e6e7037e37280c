//! Domain models for the admin API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use zaatar_core::{AccountId, Email};

/// A user account (domain type).
///
/// This is the "identity" the role service grants and revokes against:
/// an opaque identifier plus an email address. Password hashes never leave
/// the repository layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique account ID.
    pub id: AccountId,
    /// The account's email address.
    pub email: Email,
    /// When the account signed up.
    pub created_at: DateTime<Utc>,
}
