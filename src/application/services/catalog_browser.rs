//! # Catalog Browser
//!
//! Controller for the add-cryptocurrency screen.
//!
//! Holds the search text and category filter, screens the catalog through
//! them, surfaces the top gainers, and adds a chosen entry to the portfolio
//! with zero holdings.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::asset::AssetRecord;
use crate::domain::entities::portfolio::Portfolio;
use crate::domain::services::screening;
use crate::domain::value_objects::{AssetCategory, AssetSymbol};

/// How many top gainers the screen highlights.
const TOP_GAINERS: usize = 3;

/// Screen controller for browsing the addable asset catalog.
#[derive(Debug)]
pub struct CatalogBrowser {
    catalog: Vec<AssetRecord>,
    search: String,
    category: AssetCategory,
}

impl CatalogBrowser {
    /// Creates a browser over the catalog entries.
    #[must_use]
    pub fn new(catalog: Vec<AssetRecord>) -> Self {
        Self {
            catalog,
            search: String::new(),
            category: AssetCategory::All,
        }
    }

    /// Stores the search text.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Selects the category filter.
    pub fn set_category(&mut self, category: AssetCategory) {
        self.category = category;
    }

    /// Returns the active category filter.
    #[inline]
    #[must_use]
    pub fn category(&self) -> AssetCategory {
        self.category
    }

    /// Returns the catalog entries matching the current search and filter.
    #[must_use]
    pub fn results(&self) -> Vec<&AssetRecord> {
        screening::filter(&self.catalog, &self.search, self.category)
    }

    /// Returns the top three gainers across the whole catalog.
    #[must_use]
    pub fn top_gainers(&self) -> Vec<&AssetRecord> {
        screening::top_movers(&self.catalog, TOP_GAINERS)
    }

    /// Adds a catalog entry to the portfolio with zero holdings.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NotFound` for a symbol outside the
    /// catalog, or the duplicate-symbol domain error if the portfolio
    /// already lists it.
    pub fn add_to_portfolio(
        &self,
        symbol: &AssetSymbol,
        portfolio: &mut Portfolio,
    ) -> ApplicationResult<()> {
        let asset = self
            .catalog
            .iter()
            .find(|a| a.symbol() == symbol)
            .cloned()
            .ok_or_else(|| ApplicationError::not_found("catalog asset", symbol.as_str()))?;
        portfolio.add_asset(asset)?;
        tracing::debug!(symbol = %symbol, "asset added to portfolio");
        Ok(())
    }
}
