//! # Conversion Quote
//!
//! A crypto/fiat pair kept mutually consistent under bidirectional editing.
//!
//! Editing either side recomputes the other at full precision, so
//! `fiat == quantity × rate` holds at all times. Display rounding is applied
//! only when a side is formatted.
//!
//! # Examples
//!
//! ```
//! use uniwallet_core::domain::entities::ConversionQuote;
//! use uniwallet_core::domain::value_objects::{AssetSymbol, FiatAmount, Quantity};
//! use rust_decimal::Decimal;
//!
//! let mut quote = ConversionQuote::new(
//!     AssetSymbol::new("ETH").unwrap(),
//!     FiatAmount::new(Decimal::new(10_323, 0)).unwrap(),
//! ).unwrap();
//!
//! quote.set_quantity(Quantity::parse("0.5").unwrap()).unwrap();
//! assert_eq!(quote.fiat().rounded(), Decimal::new(516_150, 2));
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::services::pricing;
use crate::domain::value_objects::{AssetSymbol, FiatAmount, Quantity};
use serde::{Deserialize, Serialize};

/// A bidirectionally consistent crypto/fiat conversion.
///
/// # Invariants
///
/// - Rate is strictly positive
/// - `fiat == quantity × rate` after every edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionQuote {
    asset: AssetSymbol,
    rate: FiatAmount,
    quantity: Quantity,
    fiat: FiatAmount,
}

impl ConversionQuote {
    /// Creates an empty quote at the given exchange rate.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` if the rate is not strictly
    /// positive.
    pub fn new(asset: AssetSymbol, rate: FiatAmount) -> DomainResult<Self> {
        if !rate.is_positive() {
            return Err(DomainError::InvalidAmount(
                "exchange rate must be positive".to_string(),
            ));
        }
        Ok(Self {
            asset,
            rate,
            quantity: Quantity::ZERO,
            fiat: FiatAmount::ZERO,
        })
    }

    /// Returns the asset side of the quote.
    #[inline]
    #[must_use]
    pub fn asset(&self) -> &AssetSymbol {
        &self.asset
    }

    /// Returns the exchange rate (fiat per coin).
    #[inline]
    #[must_use]
    pub fn rate(&self) -> FiatAmount {
        self.rate
    }

    /// Returns the crypto side.
    #[inline]
    #[must_use]
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Returns the fiat side.
    #[inline]
    #[must_use]
    pub fn fiat(&self) -> FiatAmount {
        self.fiat
    }

    /// Returns true if nothing has been entered yet.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quantity.is_zero() && self.fiat.is_zero()
    }

    /// Sets the crypto side and recomputes the fiat side.
    ///
    /// # Errors
    ///
    /// Returns an arithmetic error on overflow.
    pub fn set_quantity(&mut self, quantity: Quantity) -> DomainResult<()> {
        self.fiat = pricing::convert(quantity, self.rate)?;
        self.quantity = quantity;
        Ok(())
    }

    /// Sets the fiat side and recomputes the crypto side.
    ///
    /// # Errors
    ///
    /// Returns an arithmetic error on overflow.
    pub fn set_fiat(&mut self, fiat: FiatAmount) -> DomainResult<()> {
        self.quantity = pricing::quantity_for(fiat, self.rate)?;
        self.fiat = fiat;
        Ok(())
    }

    /// Clears both sides.
    pub fn clear(&mut self) {
        self.quantity = Quantity::ZERO;
        self.fiat = FiatAmount::ZERO;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn quote(rate: i64) -> ConversionQuote {
        ConversionQuote::new(
            AssetSymbol::new("ETH").unwrap(),
            FiatAmount::new(Decimal::new(rate, 0)).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn zero_rate_is_rejected() {
        let result = ConversionQuote::new(AssetSymbol::new("ETH").unwrap(), FiatAmount::ZERO);
        assert!(result.is_err());
    }

    #[test]
    fn quantity_edit_updates_fiat() {
        let mut q = quote(10_323);
        q.set_quantity(Quantity::parse("0.5").unwrap()).unwrap();
        assert_eq!(q.fiat().amount(), Decimal::new(51_615, 1));
    }

    #[test]
    fn fiat_edit_updates_quantity() {
        let mut q = quote(10_000);
        q.set_fiat(FiatAmount::parse("250").unwrap()).unwrap();
        assert_eq!(q.quantity().value(), Decimal::new(25, 3));
    }

    #[test]
    fn invariant_holds_after_alternating_edits() {
        use crate::domain::value_objects::arithmetic::round_fiat;

        let mut q = quote(453_988);
        // Division rounds at the 28th significant digit, so the fiat side
        // agrees to (far beyond) display precision after a fiat edit.
        q.set_fiat(FiatAmount::parse("100").unwrap()).unwrap();
        assert_eq!(
            round_fiat(q.quantity().value() * q.rate().amount()),
            round_fiat(q.fiat().amount())
        );

        q.set_quantity(Quantity::parse("0.0234").unwrap()).unwrap();
        assert_eq!(q.quantity().value() * q.rate().amount(), q.fiat().amount());
    }

    #[test]
    fn clear_empties_both_sides() {
        let mut q = quote(100);
        q.set_fiat(FiatAmount::parse("50").unwrap()).unwrap();
        q.clear();
        assert!(q.is_empty());
    }
}
