//! # Asset Record
//!
//! A currency/cryptocurrency reference entry with the user's holdings.
//!
//! The direction of the 24h change is *derived* from the sign of the change
//! percentage rather than stored separately, so it can never disagree with
//! the number it describes.
//!
//! # Examples
//!
//! ```
//! use uniwallet_core::domain::entities::AssetRecord;
//! use uniwallet_core::domain::value_objects::{AssetCategory, AssetSymbol, FiatAmount};
//! use rust_decimal::Decimal;
//!
//! let eth = AssetRecord::new(
//!     AssetSymbol::new("ETH").unwrap(),
//!     "Ethereum",
//!     FiatAmount::new(Decimal::new(10_323, 0)).unwrap(),
//!     Decimal::new(22, 2), // +0.22%
//!     AssetCategory::Layer1,
//! )
//! .unwrap();
//!
//! assert!(eth.is_positive_change());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::services::pricing;
use crate::domain::value_objects::{AssetCategory, AssetSymbol, FiatAmount, Quantity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A reference entry for one asset, with the user's holdings.
///
/// # Invariants
///
/// - Display name is non-empty
/// - Change direction always agrees with the sign of `change_percent`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    symbol: AssetSymbol,
    name: String,
    unit_price: FiatAmount,
    change_percent: Decimal,
    category: AssetCategory,
    reward_percent: Option<Decimal>,
    holdings: Quantity,
}

impl AssetRecord {
    /// Creates an asset record with zero holdings.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the display name is empty.
    pub fn new(
        symbol: AssetSymbol,
        name: impl Into<String>,
        unit_price: FiatAmount,
        change_percent: Decimal,
        category: AssetCategory,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "asset name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            symbol,
            name,
            unit_price,
            change_percent,
            category,
            reward_percent: None,
            holdings: Quantity::ZERO,
        })
    }

    /// Sets the holdings quantity.
    #[must_use]
    pub fn with_holdings(mut self, holdings: Quantity) -> Self {
        self.holdings = holdings;
        self
    }

    /// Tags the asset with a staking reward percentage.
    #[must_use]
    pub fn with_reward(mut self, reward_percent: Decimal) -> Self {
        self.reward_percent = Some(reward_percent);
        self
    }

    /// Returns the ticker symbol.
    #[inline]
    #[must_use]
    pub fn symbol(&self) -> &AssetSymbol {
        &self.symbol
    }

    /// Returns the display name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the fiat price per coin.
    #[inline]
    #[must_use]
    pub fn unit_price(&self) -> FiatAmount {
        self.unit_price
    }

    /// Returns the signed 24h change percentage.
    #[inline]
    #[must_use]
    pub fn change_percent(&self) -> Decimal {
        self.change_percent
    }

    /// Returns the catalog category.
    #[inline]
    #[must_use]
    pub fn category(&self) -> AssetCategory {
        self.category
    }

    /// Returns the staking reward tag, if any.
    #[inline]
    #[must_use]
    pub fn reward_percent(&self) -> Option<Decimal> {
        self.reward_percent
    }

    /// Returns the user's holdings of this asset.
    #[inline]
    #[must_use]
    pub fn holdings(&self) -> Quantity {
        self.holdings
    }

    /// Returns true if the 24h change is strictly positive.
    ///
    /// Derived from the sign of [`change_percent`](Self::change_percent), so
    /// it cannot disagree with it.
    #[inline]
    #[must_use]
    pub fn is_positive_change(&self) -> bool {
        self.change_percent > Decimal::ZERO
    }

    /// Returns true if there is anything to spend.
    #[inline]
    #[must_use]
    pub fn is_spendable(&self) -> bool {
        self.holdings.is_positive()
    }

    /// Returns the fiat value of the holdings at the current unit price.
    ///
    /// Full precision; display rounding is the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns an arithmetic error on overflow.
    pub fn holdings_value(&self) -> DomainResult<FiatAmount> {
        Ok(pricing::convert(self.holdings, self.unit_price)?)
    }
}

impl fmt::Display for AssetRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}
