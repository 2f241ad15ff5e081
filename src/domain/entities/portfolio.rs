//! # Portfolio
//!
//! The ordered list of assets a user holds or watches.
//!
//! Symbols are unique within the portfolio; adding a duplicate is rejected.
//! Assets joining from the catalog start with zero holdings.

use crate::domain::entities::asset::AssetRecord;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{AssetSymbol, FiatAmount, Quantity};
use serde::{Deserialize, Serialize};

/// An ordered, symbol-unique list of asset records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    assets: Vec<AssetRecord>,
}

impl Portfolio {
    /// Creates an empty portfolio.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a portfolio from a list, enforcing symbol uniqueness.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateSymbol` if two records share a symbol.
    pub fn from_assets(assets: Vec<AssetRecord>) -> DomainResult<Self> {
        let mut portfolio = Self::new();
        for asset in assets {
            portfolio.push_unique(asset)?;
        }
        Ok(portfolio)
    }

    /// Adds a catalog asset to the list with zero holdings.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateSymbol` if the symbol is already
    /// present.
    pub fn add_asset(&mut self, asset: AssetRecord) -> DomainResult<()> {
        self.push_unique(asset.with_holdings(Quantity::ZERO))
    }

    fn push_unique(&mut self, asset: AssetRecord) -> DomainResult<()> {
        if self.find(asset.symbol()).is_some() {
            return Err(DomainError::DuplicateSymbol(
                asset.symbol().as_str().to_string(),
            ));
        }
        self.assets.push(asset);
        Ok(())
    }

    /// Returns the asset with the given symbol, if present.
    #[must_use]
    pub fn find(&self, symbol: &AssetSymbol) -> Option<&AssetRecord> {
        self.assets.iter().find(|a| a.symbol() == symbol)
    }

    /// Returns every asset, in insertion order.
    #[inline]
    #[must_use]
    pub fn assets(&self) -> &[AssetRecord] {
        &self.assets
    }

    /// Returns the assets with a positive balance, in insertion order.
    #[must_use]
    pub fn spendable(&self) -> Vec<&AssetRecord> {
        self.assets.iter().filter(|a| a.is_spendable()).collect()
    }

    /// Returns the number of assets in the list.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Returns true if the list is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Sums the fiat value of all holdings at current prices.
    ///
    /// # Errors
    ///
    /// Returns an arithmetic error on overflow.
    pub fn total_value(&self) -> DomainResult<FiatAmount> {
        let mut total = FiatAmount::ZERO;
        for asset in &self.assets {
            total = total.safe_add(asset.holdings_value()?)?;
        }
        Ok(total)
    }
}
