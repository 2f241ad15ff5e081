//! # Asset Symbol Value Object
//!
//! Validated ticker symbol for a currency or cryptocurrency.
//!
//! # Examples
//!
//! ```
//! use uniwallet_core::domain::value_objects::AssetSymbol;
//!
//! let btc = AssetSymbol::new("btc").unwrap();
//! assert_eq!(btc.as_str(), "BTC");
//! assert!(AssetSymbol::new("").is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum symbol length in characters.
const MAX_LEN: usize = 10;

/// A validated, uppercased ticker symbol.
///
/// # Invariants
///
/// - 1 to 10 characters
/// - ASCII alphanumeric only
/// - Stored uppercased; comparisons are therefore case-insensitive
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetSymbol(String);

impl AssetSymbol {
    /// Creates a symbol, uppercasing the input.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSymbol` if the input is empty, longer
    /// than 10 characters, or contains non-alphanumeric characters.
    pub fn new(raw: impl AsRef<str>) -> DomainResult<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidSymbol("empty symbol".to_string()));
        }
        if trimmed.len() > MAX_LEN {
            return Err(DomainError::InvalidSymbol(format!(
                "symbol too long: {trimmed:?}"
            )));
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(DomainError::InvalidSymbol(format!(
                "symbol must be alphanumeric: {trimmed:?}"
            )));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Returns the symbol as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for AssetSymbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_input() {
        assert_eq!(AssetSymbol::new("eth").unwrap().as_str(), "ETH");
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(AssetSymbol::new(" ada ").unwrap().as_str(), "ADA");
    }

    #[test]
    fn rejects_empty() {
        assert!(AssetSymbol::new("").is_err());
        assert!(AssetSymbol::new("   ").is_err());
    }

    #[test]
    fn rejects_too_long() {
        assert!(AssetSymbol::new("ABCDEFGHIJK").is_err());
    }

    #[test]
    fn rejects_non_alphanumeric() {
        assert!(AssetSymbol::new("BTC/USD").is_err());
        assert!(AssetSymbol::new("BT C").is_err());
    }

    #[test]
    fn case_insensitive_equality_via_uppercasing() {
        assert_eq!(
            AssetSymbol::new("Doge").unwrap(),
            AssetSymbol::new("DOGE").unwrap()
        );
    }
}
