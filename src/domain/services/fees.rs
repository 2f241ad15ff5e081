//! # Network Fee Schedule
//!
//! Fixed per-network transfer fees, keyed by fee tier.
//!
//! Fees are flat amounts denominated in the asset being sent, not
//! percentages. Networks absent from the schedule fall back to a default
//! tier table.
//!
//! # Examples
//!
//! ```
//! use uniwallet_core::domain::services::fees::FeeSchedule;
//! use uniwallet_core::domain::value_objects::{AssetSymbol, FeeTier};
//! use rust_decimal::Decimal;
//!
//! let schedule = FeeSchedule::default();
//! let btc = AssetSymbol::new("BTC").unwrap();
//! let fee = schedule.fee_for(&btc, FeeTier::Standard);
//! assert_eq!(fee.value(), Decimal::new(3, 4)); // 0.0003 BTC
//! ```

use crate::domain::value_objects::{AssetSymbol, FeeTier, Quantity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fee amounts for the three tiers of one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierFees {
    /// Fee for the slow tier.
    pub slow: Quantity,
    /// Fee for the standard tier.
    pub standard: Quantity,
    /// Fee for the fast tier.
    pub fast: Quantity,
}

impl TierFees {
    /// Creates a tier table from three fee amounts.
    #[must_use]
    pub const fn new(slow: Quantity, standard: Quantity, fast: Quantity) -> Self {
        Self {
            slow,
            standard,
            fast,
        }
    }

    /// Creates a tier table with the same fee at every speed.
    #[must_use]
    pub const fn flat(fee: Quantity) -> Self {
        Self {
            slow: fee,
            standard: fee,
            fast: fee,
        }
    }

    /// Returns the fee for the given tier.
    #[inline]
    #[must_use]
    pub const fn for_tier(&self, tier: FeeTier) -> Quantity {
        match tier {
            FeeTier::Slow => self.slow,
            FeeTier::Standard => self.standard,
            FeeTier::Fast => self.fast,
        }
    }
}

/// Per-network fee schedule with a fallback for unknown networks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    networks: HashMap<AssetSymbol, TierFees>,
    fallback: TierFees,
}

impl FeeSchedule {
    /// Creates a schedule from explicit per-network tables.
    #[must_use]
    pub fn new(networks: HashMap<AssetSymbol, TierFees>, fallback: TierFees) -> Self {
        Self { networks, fallback }
    }

    /// Returns the fee for sending `symbol` at the given tier.
    ///
    /// Unknown networks use the fallback table.
    #[must_use]
    pub fn fee_for(&self, symbol: &AssetSymbol, tier: FeeTier) -> Quantity {
        self.networks
            .get(symbol)
            .unwrap_or(&self.fallback)
            .for_tier(tier)
    }

    /// Returns the tier table for `symbol`, falling back for unknown networks.
    #[must_use]
    pub fn tiers_for(&self, symbol: &AssetSymbol) -> &TierFees {
        self.networks.get(symbol).unwrap_or(&self.fallback)
    }
}

impl Default for FeeSchedule {
    /// The schedule the prototype shipped with: BTC, ETH and ADA tables plus
    /// a 0.001 fallback.
    fn default() -> Self {
        let q = |mantissa: i64, scale: u32| {
            Quantity::new(Decimal::new(mantissa, scale)).unwrap_or(Quantity::ZERO)
        };
        let mut networks = HashMap::new();
        if let Ok(btc) = AssetSymbol::new("BTC") {
            networks.insert(btc, TierFees::new(q(1, 4), q(3, 4), q(5, 4)));
        }
        if let Ok(eth) = AssetSymbol::new("ETH") {
            networks.insert(eth, TierFees::new(q(2, 3), q(5, 3), q(8, 3)));
        }
        if let Ok(ada) = AssetSymbol::new("ADA") {
            networks.insert(ada, TierFees::flat(q(17, 2)));
        }
        Self {
            networks,
            fallback: TierFees::flat(q(1, 3)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sym(s: &str) -> AssetSymbol {
        AssetSymbol::new(s).unwrap()
    }

    #[test]
    fn btc_tiers_scale_with_speed() {
        let schedule = FeeSchedule::default();
        let btc = sym("BTC");
        assert_eq!(
            schedule.fee_for(&btc, FeeTier::Slow).value(),
            Decimal::new(1, 4)
        );
        assert_eq!(
            schedule.fee_for(&btc, FeeTier::Standard).value(),
            Decimal::new(3, 4)
        );
        assert_eq!(
            schedule.fee_for(&btc, FeeTier::Fast).value(),
            Decimal::new(5, 4)
        );
    }

    #[test]
    fn ada_fee_is_flat_across_tiers() {
        let schedule = FeeSchedule::default();
        let ada = sym("ADA");
        let flat = schedule.fee_for(&ada, FeeTier::Slow);
        assert_eq!(schedule.fee_for(&ada, FeeTier::Standard), flat);
        assert_eq!(schedule.fee_for(&ada, FeeTier::Fast), flat);
        assert_eq!(flat.value(), Decimal::new(17, 2));
    }

    #[test]
    fn unknown_network_uses_fallback() {
        let schedule = FeeSchedule::default();
        let fee = schedule.fee_for(&sym("DOGE"), FeeTier::Standard);
        assert_eq!(fee.value(), Decimal::new(1, 3));
    }

    #[test]
    fn serde_roundtrip() {
        let schedule = FeeSchedule::default();
        let json = serde_json::to_string(&schedule).unwrap();
        let back: FeeSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(schedule, back);
    }
}
