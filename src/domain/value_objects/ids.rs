//! # Identifier Value Objects
//!
//! Typed identifiers for wallet entities.
//!
//! Receipt-bearing identifiers ([`TransactionId`], [`StakeId`], [`PaymentId`])
//! are UUID v4 backed. The prototype derived its ids from the wall clock plus
//! a random suffix; that scheme collides under load, so ids here are proper
//! random UUIDs with a short reference rendering for receipts.
//!
//! # Examples
//!
//! ```
//! use uniwallet_core::domain::value_objects::TransactionId;
//!
//! let id = TransactionId::generate();
//! assert_eq!(id.reference("TXN").len(), 12); // "TXN-" + 8 hex chars
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a new random identifier.
            #[must_use]
            pub fn generate() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wraps an existing UUID.
            #[inline]
            #[must_use]
            pub const fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            /// Returns the underlying UUID.
            #[inline]
            #[must_use]
            pub const fn as_uuid(&self) -> Uuid {
                self.0
            }

            /// Returns a short prefixed reference string for receipts,
            /// e.g. `TXN-9f3a1c2b`.
            #[must_use]
            pub fn reference(&self, prefix: &str) -> String {
                let hex = self.0.simple().to_string();
                let short = hex.get(..8).unwrap_or(&hex);
                format!("{prefix}-{short}")
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from a string.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

uuid_id! {
    /// Identifier of a completed transfer or fiat transaction.
    TransactionId
}

uuid_id! {
    /// Identifier of a stake position.
    StakeId
}

uuid_id! {
    /// Identifier of a QR payment.
    PaymentId
}

string_id! {
    /// Identifier of a merchant in the directory (e.g. `STARBUCKS_MY`).
    MerchantId
}

string_id! {
    /// Identifier of a saved contact.
    ContactId
}
