//! # Wallet Address Value Object
//!
//! Recipient address with a format heuristic.
//!
//! The accepted format is a length window (20 to 100 characters inclusive),
//! which is what the prototype shipped with. Real per-network validation
//! (checksums, bech32, SS58, ...) would replace [`WalletAddress::parse`]
//! without touching any caller; the heuristic is deliberately isolated here.
//!
//! # Examples
//!
//! ```
//! use uniwallet_core::domain::value_objects::WalletAddress;
//!
//! let addr = WalletAddress::parse("bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh").unwrap();
//! assert_eq!(addr.truncated(), "bc1qxy2kgd...fjhx0wlh".to_string());
//!
//! assert!(WalletAddress::parse("tooshort").is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum accepted address length (inclusive).
pub const MIN_ADDRESS_LEN: usize = 20;

/// Maximum accepted address length (inclusive).
pub const MAX_ADDRESS_LEN: usize = 100;

/// A recipient wallet address that passed the format check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Parses an address, applying the format heuristic.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAddress` if the input is empty or its
    /// length falls outside `20..=100`.
    pub fn parse(raw: impl Into<String>) -> DomainResult<Self> {
        let value = raw.into();
        if value.is_empty() {
            return Err(DomainError::InvalidAddress("empty address".to_string()));
        }
        if !Self::is_valid_format(&value) {
            return Err(DomainError::InvalidAddress(format!(
                "address length {} outside {MIN_ADDRESS_LEN}..={MAX_ADDRESS_LEN}",
                value.len()
            )));
        }
        Ok(Self(value))
    }

    /// Returns true if the raw input would pass the format check.
    ///
    /// Used for live field validation while the user is typing, without
    /// constructing the value object.
    #[must_use]
    pub fn is_valid_format(raw: &str) -> bool {
        (MIN_ADDRESS_LEN..=MAX_ADDRESS_LEN).contains(&raw.len())
    }

    /// Returns the full address string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns a shortened `head...tail` rendering for receipts.
    #[must_use]
    pub fn truncated(&self) -> String {
        let head: String = self.0.chars().take(10).collect();
        let tail_start = self.0.chars().count().saturating_sub(8);
        let tail: String = self.0.chars().skip(tail_start).collect();
        format!("{head}...{tail}")
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
