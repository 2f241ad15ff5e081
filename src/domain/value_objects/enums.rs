//! # Domain Enums
//!
//! Enumeration types for wallet concepts.
//!
//! This module provides:
//!
//! - [`FeeTier`] - Network fee speed tiers with confirmation-time labels
//! - [`AssetCategory`] - Catalog categories used by list filtering
//! - [`TopUpMethod`] - Fiat top-up funding methods
//!
//! All enums implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
//! `Display`, `FromStr`, and Serde traits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an enum from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {0} value: {1}")]
pub struct ParseEnumError(pub &'static str, pub String);

/// Network fee speed tier.
///
/// Each tier maps to a fixed per-network fee amount (see
/// `domain::services::fees::FeeSchedule`) and a rough confirmation-time
/// label shown next to the option.
///
/// # Examples
///
/// ```
/// use uniwallet_core::domain::value_objects::FeeTier;
///
/// assert_eq!(FeeTier::Fast.confirmation_label(), "~2 min");
/// assert_eq!("standard".parse::<FeeTier>().unwrap(), FeeTier::Standard);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum FeeTier {
    /// Cheapest, slowest confirmation.
    Slow = 0,

    /// Balanced cost and speed.
    #[default]
    Standard = 1,

    /// Highest fee, fastest confirmation.
    Fast = 2,
}

impl FeeTier {
    /// All tiers in display order.
    pub const ALL: [Self; 3] = [Self::Slow, Self::Standard, Self::Fast];

    /// Returns the rough confirmation-time label for this tier.
    #[must_use]
    pub const fn confirmation_label(self) -> &'static str {
        match self {
            Self::Slow => "~30 min",
            Self::Standard => "~10 min",
            Self::Fast => "~2 min",
        }
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slow => write!(f, "slow"),
            Self::Standard => write!(f, "standard"),
            Self::Fast => write!(f, "fast"),
        }
    }
}

impl FromStr for FeeTier {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "slow" => Ok(Self::Slow),
            "standard" => Ok(Self::Standard),
            "fast" => Ok(Self::Fast),
            _ => Err(ParseEnumError("FeeTier", s.to_string())),
        }
    }
}

/// Asset catalog category.
///
/// `All` matches every asset during filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum AssetCategory {
    /// Matches every category.
    #[default]
    All = 0,

    /// Layer 1 base chains.
    Layer1 = 1,

    /// Decentralized finance tokens.
    DeFi = 2,

    /// Meme coins.
    MemeCoins = 3,

    /// AI and big-data tokens.
    AiBigData = 4,

    /// Smart contract platforms.
    SmartContracts = 5,
}

impl AssetCategory {
    /// Returns true if a record in `other` matches a filter set to `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use uniwallet_core::domain::value_objects::AssetCategory;
    ///
    /// assert!(AssetCategory::All.matches(AssetCategory::DeFi));
    /// assert!(!AssetCategory::Layer1.matches(AssetCategory::DeFi));
    /// ```
    #[inline]
    #[must_use]
    pub fn matches(self, other: Self) -> bool {
        self == Self::All || self == other
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::All => "All",
            Self::Layer1 => "Layer 1",
            Self::DeFi => "DeFi",
            Self::MemeCoins => "Meme Coins",
            Self::AiBigData => "AI & Big Data",
            Self::SmartContracts => "Smart Contracts",
        };
        write!(f, "{s}")
    }
}

impl FromStr for AssetCategory {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "layer 1" | "layer1" => Ok(Self::Layer1),
            "defi" => Ok(Self::DeFi),
            "meme coins" | "memecoins" => Ok(Self::MemeCoins),
            "ai & big data" | "aibigdata" => Ok(Self::AiBigData),
            "smart contracts" | "smartcontracts" => Ok(Self::SmartContracts),
            _ => Err(ParseEnumError("AssetCategory", s.to_string())),
        }
    }
}

/// Funding method for a fiat top-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum TopUpMethod {
    /// Debit or credit card.
    #[default]
    Card = 0,

    /// Online bank transfer.
    BankTransfer = 1,
}

impl fmt::Display for TopUpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Card => write!(f, "Card"),
            Self::BankTransfer => write!(f, "Bank Transfer"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod fee_tier {
        use super::*;

        #[test]
        fn labels_match_speed() {
            assert_eq!(FeeTier::Slow.confirmation_label(), "~30 min");
            assert_eq!(FeeTier::Standard.confirmation_label(), "~10 min");
            assert_eq!(FeeTier::Fast.confirmation_label(), "~2 min");
        }

        #[test]
        fn default_is_standard() {
            assert_eq!(FeeTier::default(), FeeTier::Standard);
        }

        #[test]
        fn parses_case_insensitively() {
            assert_eq!("FAST".parse::<FeeTier>().unwrap(), FeeTier::Fast);
            assert!("instant".parse::<FeeTier>().is_err());
        }

        #[test]
        fn serde_uses_lowercase() {
            let json = serde_json::to_string(&FeeTier::Slow).unwrap();
            assert_eq!(json, "\"slow\"");
        }
    }

    mod category {
        use super::*;

        #[test]
        fn all_matches_everything() {
            for cat in [
                AssetCategory::Layer1,
                AssetCategory::DeFi,
                AssetCategory::MemeCoins,
            ] {
                assert!(AssetCategory::All.matches(cat));
            }
        }

        #[test]
        fn specific_matches_only_itself() {
            assert!(AssetCategory::DeFi.matches(AssetCategory::DeFi));
            assert!(!AssetCategory::DeFi.matches(AssetCategory::Layer1));
        }

        #[test]
        fn display_round_trips_through_from_str() {
            for cat in [
                AssetCategory::All,
                AssetCategory::Layer1,
                AssetCategory::DeFi,
                AssetCategory::MemeCoins,
                AssetCategory::AiBigData,
                AssetCategory::SmartContracts,
            ] {
                let parsed: AssetCategory = cat.to_string().parse().unwrap();
                assert_eq!(parsed, cat);
            }
        }
    }
}
