//! # Contacts
//!
//! Recent transfer recipients offered for one-tap address fill.

use crate::domain::value_objects::{ContactId, Timestamp, WalletAddress};
use serde::{Deserialize, Serialize};

/// A saved transfer recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Stable identifier.
    pub id: ContactId,
    /// Display name.
    pub name: String,
    /// The recipient's wallet address.
    pub address: WalletAddress,
    /// When this contact was last used.
    pub last_used_at: Timestamp,
}

impl Contact {
    /// Creates a contact.
    #[must_use]
    pub fn new(
        id: ContactId,
        name: impl Into<String>,
        address: WalletAddress,
        last_used_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            address,
            last_used_at,
        }
    }

    /// Returns up to two initials for the avatar badge.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}
