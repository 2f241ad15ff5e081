//! # Stake Position
//!
//! A locked staking position with a simple-interest reward projection.
//!
//! Staked tokens are locked until the period ends. The projection uses a
//! flat APY: `reward = principal × apy/100 × days/365`.
//!
//! # Examples
//!
//! ```
//! use uniwallet_core::domain::entities::StakePosition;
//! use uniwallet_core::domain::value_objects::{AssetSymbol, Quantity, Timestamp};
//! use rust_decimal::Decimal;
//!
//! let stake = StakePosition::open(
//!     AssetSymbol::new("ADA").unwrap(),
//!     Quantity::parse("500").unwrap(),
//!     Decimal::new(52, 1), // 5.2% APY
//!     60,
//!     Timestamp::now(),
//! )
//! .unwrap();
//!
//! let reward = stake.expected_reward().unwrap();
//! assert!(reward.is_positive());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::services::pricing;
use crate::domain::value_objects::{AssetSymbol, Quantity, StakeId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A locked staking position.
///
/// # Invariants
///
/// - Principal is strictly positive
/// - Period is at least one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakePosition {
    id: StakeId,
    asset: AssetSymbol,
    principal: Quantity,
    apy_percent: Decimal,
    period_days: u32,
    started_at: Timestamp,
}

impl StakePosition {
    /// Opens a new stake position.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuantity` if the principal is not
    /// positive, or `DomainError::ValidationError` for a zero-day period.
    pub fn open(
        asset: AssetSymbol,
        principal: Quantity,
        apy_percent: Decimal,
        period_days: u32,
        started_at: Timestamp,
    ) -> DomainResult<Self> {
        if !principal.is_positive() {
            return Err(DomainError::InvalidQuantity(
                "stake principal must be positive".to_string(),
            ));
        }
        if period_days == 0 {
            return Err(DomainError::ValidationError(
                "staking period must be at least one day".to_string(),
            ));
        }
        Ok(Self {
            id: StakeId::generate(),
            asset,
            principal,
            apy_percent,
            period_days,
            started_at,
        })
    }

    /// Returns the stake identifier.
    #[inline]
    #[must_use]
    pub fn id(&self) -> StakeId {
        self.id
    }

    /// Returns the staked asset.
    #[inline]
    #[must_use]
    pub fn asset(&self) -> &AssetSymbol {
        &self.asset
    }

    /// Returns the staked principal.
    #[inline]
    #[must_use]
    pub fn principal(&self) -> Quantity {
        self.principal
    }

    /// Returns the flat APY percentage.
    #[inline]
    #[must_use]
    pub fn apy_percent(&self) -> Decimal {
        self.apy_percent
    }

    /// Returns the lock period in days.
    #[inline]
    #[must_use]
    pub fn period_days(&self) -> u32 {
        self.period_days
    }

    /// Returns when the stake was opened.
    #[inline]
    #[must_use]
    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    /// Returns when the stake unlocks.
    #[must_use]
    pub fn unlock_at(&self) -> Timestamp {
        self.started_at.add_days(i64::from(self.period_days))
    }

    /// Projects the reward earned over the full period.
    ///
    /// # Errors
    ///
    /// Returns an arithmetic error on overflow.
    pub fn expected_reward(&self) -> DomainResult<Quantity> {
        Ok(pricing::staking_reward(
            self.principal,
            self.apy_percent,
            self.period_days,
        )?)
    }

    /// Returns whole days remaining until unlock, clamped at zero.
    #[must_use]
    pub fn days_left(&self, now: Timestamp) -> i64 {
        now.days_until(&self.unlock_at())
    }

    /// Returns the elapsed fraction of the lock period in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Timestamp) -> Decimal {
        let elapsed = self.started_at.days_until(&now);
        let ratio = Decimal::from(elapsed) / Decimal::from(self.period_days);
        ratio.clamp(Decimal::ZERO, Decimal::ONE)
    }

    /// Projects the reward accrued so far, proportional to elapsed time.
    ///
    /// # Errors
    ///
    /// Returns an arithmetic error on overflow.
    pub fn earned_so_far(&self, now: Timestamp) -> DomainResult<Quantity> {
        let full = self.expected_reward()?;
        let accrued = full.value() * self.progress(now);
        Ok(Quantity::new(accrued)?)
    }
}

/// A stakeable asset offered on the staking screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingOption {
    /// The stakeable asset.
    pub symbol: AssetSymbol,
    /// Display name.
    pub name: String,
    /// Headline APY shown on the option card.
    pub headline_apy_percent: Decimal,
    /// Minimum stakeable amount.
    pub min_stake: Quantity,
    /// Whether staking this asset is currently offered.
    pub available: bool,
}

/// A lock period offered on the staking screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingPeriod {
    /// Lock duration in days.
    pub days: u32,
    /// APY earned over this period.
    pub apy_percent: Decimal,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::arithmetic::round_fiat;

    fn stake(principal: &str, apy_tenths: i64, days: u32) -> StakePosition {
        StakePosition::open(
            AssetSymbol::new("ETH").unwrap(),
            Quantity::parse(principal).unwrap(),
            Decimal::new(apy_tenths, 1),
            days,
            Timestamp::from_secs(1_704_067_200).unwrap(), // 2024-01-01
        )
        .unwrap()
    }

    #[test]
    fn zero_principal_is_rejected() {
        let result = StakePosition::open(
            AssetSymbol::new("ETH").unwrap(),
            Quantity::ZERO,
            Decimal::new(45, 1),
            30,
            Timestamp::now(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn zero_period_is_rejected() {
        let result = StakePosition::open(
            AssetSymbol::new("ETH").unwrap(),
            Quantity::parse("1").unwrap(),
            Decimal::new(45, 1),
            0,
            Timestamp::now(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn reference_reward_scenario() {
        // 500 at 5.2% over 60 days -> 4.27 at display precision
        let s = stake("500", 52, 60);
        let reward = s.expected_reward().unwrap();
        assert_eq!(round_fiat(reward.value()), Decimal::new(427, 2));
    }

    #[test]
    fn unlock_is_period_days_after_start() {
        let s = stake("1", 45, 30);
        assert_eq!(s.unlock_at().date_string(), "2024-01-31");
    }

    #[test]
    fn days_left_counts_down_and_clamps() {
        let s = stake("1", 45, 30);
        let mid = s.started_at().add_days(15);
        assert_eq!(s.days_left(mid), 15);
        let past_unlock = s.started_at().add_days(45);
        assert_eq!(s.days_left(past_unlock), 0);
    }

    #[test]
    fn progress_is_clamped_to_unit_interval() {
        let s = stake("1", 45, 30);
        assert_eq!(s.progress(s.started_at()), Decimal::ZERO);
        assert_eq!(s.progress(s.started_at().add_days(15)), Decimal::new(5, 1));
        assert_eq!(s.progress(s.started_at().add_days(60)), Decimal::ONE);
    }

    #[test]
    fn earned_so_far_is_proportional() {
        let s = stake("500", 52, 60);
        let half_way = s.started_at().add_days(30);
        let half = s.earned_so_far(half_way).unwrap();
        let full = s.expected_reward().unwrap();
        assert_eq!(half.value() * Decimal::TWO, full.value());
    }
}
