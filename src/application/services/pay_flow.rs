//! # Pay Flow
//!
//! Controller for the crypto-to-fiat payment wizard.
//!
//! Drives `SelectAsset → Convert → Pay`. The convert step keeps a
//! bidirectional [`ConversionQuote`] consistent while either side is edited;
//! the pay step hands the converted amount off to a QR scan session.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::Retreat;
use crate::domain::entities::asset::AssetRecord;
use crate::domain::entities::payment::CryptoFunding;
use crate::domain::entities::quote::ConversionQuote;
use crate::domain::value_objects::{AssetSymbol, FiatAmount, PayStep, Quantity};
use rust_decimal::Decimal;

/// Quick fiat amounts offered on the convert step (RM).
const QUICK_FIAT: [Decimal; 4] = [
    Decimal::from_parts(50, 0, 0, false, 0),
    Decimal::from_parts(100, 0, 0, false, 0),
    Decimal::from_parts(200, 0, 0, false, 0),
    Decimal::from_parts(500, 0, 0, false, 0),
];

/// Converted amount handed from the pay step to the QR scan session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayHandoff {
    /// Crypto being converted.
    pub funding: CryptoFunding,
    /// Fiat amount the merchant will receive.
    pub fiat: FiatAmount,
}

/// Screen controller for the crypto-pay wizard.
#[derive(Debug)]
pub struct PayFlow {
    assets: Vec<AssetRecord>,
    step: PayStep,
    selected: Option<AssetSymbol>,
    quote: Option<ConversionQuote>,
}

impl PayFlow {
    /// Creates a pay flow over the given holdings.
    ///
    /// Only spendable assets are offered; the first one is pre-selected.
    #[must_use]
    pub fn new(assets: Vec<AssetRecord>) -> Self {
        let assets: Vec<AssetRecord> =
            assets.into_iter().filter(AssetRecord::is_spendable).collect();
        let selected = assets.first().map(|a| a.symbol().clone());
        Self {
            assets,
            step: PayStep::SelectAsset,
            selected,
            quote: None,
        }
    }

    /// Returns the current wizard step.
    #[inline]
    #[must_use]
    pub fn step(&self) -> PayStep {
        self.step
    }

    /// Returns the offered holdings.
    #[inline]
    #[must_use]
    pub fn assets(&self) -> &[AssetRecord] {
        &self.assets
    }

    /// Returns the currently selected asset record.
    #[must_use]
    pub fn selected_asset(&self) -> Option<&AssetRecord> {
        let symbol = self.selected.as_ref()?;
        self.assets.iter().find(|a| a.symbol() == symbol)
    }

    /// Returns the live conversion quote, once on the convert step.
    #[inline]
    #[must_use]
    pub fn quote(&self) -> Option<&ConversionQuote> {
        self.quote.as_ref()
    }

    /// Returns the quick fiat amounts offered as one-tap buttons.
    #[must_use]
    pub fn quick_fiat_amounts() -> [FiatAmount; 4] {
        QUICK_FIAT.map(|d| FiatAmount::new(d).unwrap_or(FiatAmount::ZERO))
    }

    /// Selects the asset funding the payment.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NotFound` for a symbol not in the offered
    /// list, or `ApplicationError::InvalidState` outside the selection step.
    pub fn select_asset(&mut self, symbol: &AssetSymbol) -> ApplicationResult<()> {
        if self.step != PayStep::SelectAsset {
            return Err(ApplicationError::invalid_state(format!(
                "cannot change asset at step {}",
                self.step
            )));
        }
        if !self.assets.iter().any(|a| a.symbol() == symbol) {
            return Err(ApplicationError::not_found("asset", symbol.as_str()));
        }
        self.selected = Some(symbol.clone());
        Ok(())
    }

    /// Edits the crypto side of the conversion; the fiat side follows.
    ///
    /// An empty input clears both sides.
    ///
    /// # Errors
    ///
    /// Returns a validation error for non-numeric input, or
    /// `ApplicationError::InvalidState` outside the convert step.
    pub fn set_crypto_amount(&mut self, input: &str) -> ApplicationResult<()> {
        let quote = self.quote_mut()?;
        if input.trim().is_empty() {
            quote.clear();
            return Ok(());
        }
        let quantity = Quantity::parse(input)?;
        quote.set_quantity(quantity)?;
        Ok(())
    }

    /// Edits the fiat side of the conversion; the crypto side follows.
    ///
    /// An empty input clears both sides.
    ///
    /// # Errors
    ///
    /// Returns a validation error for non-numeric input, or
    /// `ApplicationError::InvalidState` outside the convert step.
    pub fn set_fiat_amount(&mut self, input: &str) -> ApplicationResult<()> {
        let quote = self.quote_mut()?;
        if input.trim().is_empty() {
            quote.clear();
            return Ok(());
        }
        let fiat = FiatAmount::parse(input)?;
        quote.set_fiat(fiat)?;
        Ok(())
    }

    fn quote_mut(&mut self) -> ApplicationResult<&mut ConversionQuote> {
        if self.step != PayStep::Convert {
            return Err(ApplicationError::invalid_state(format!(
                "no conversion at step {}",
                self.step
            )));
        }
        self.quote
            .as_mut()
            .ok_or_else(|| ApplicationError::invalid_state("conversion quote missing"))
    }

    /// Returns true if the current step's fields validate.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        match self.step {
            PayStep::SelectAsset => self.selected.is_some(),
            PayStep::Convert => self.converted_within_balance(),
            PayStep::Pay => false,
        }
    }

    fn converted_within_balance(&self) -> bool {
        let (Some(quote), Some(asset)) = (self.quote.as_ref(), self.selected_asset()) else {
            return false;
        };
        quote.fiat().is_positive() && quote.quantity() <= asset.holdings()
    }

    /// Moves forward when the current step validates; no-op otherwise.
    ///
    /// Entering the convert step creates a fresh quote at the selected
    /// asset's unit price.
    pub fn advance(&mut self) {
        if !self.can_advance() {
            return;
        }
        match self.step {
            PayStep::SelectAsset => {
                let quote = self.selected_asset().and_then(|asset| {
                    ConversionQuote::new(asset.symbol().clone(), asset.unit_price()).ok()
                });
                if quote.is_none() {
                    tracing::warn!("selected asset has no usable price");
                    return;
                }
                self.quote = quote;
                self.step = PayStep::Convert;
            }
            PayStep::Convert => self.step = PayStep::Pay,
            PayStep::Pay => {}
        }
        tracing::debug!(step = %self.step, "pay flow advanced");
    }

    /// Moves to the previous step, or signals an exit at the first step.
    ///
    /// Stepping back from the convert step discards the quote.
    pub fn retreat(&mut self) -> Retreat {
        match self.step {
            PayStep::SelectAsset => Retreat::Exit,
            PayStep::Convert => {
                self.quote = None;
                self.step = PayStep::SelectAsset;
                Retreat::SteppedBack
            }
            PayStep::Pay => {
                self.step = PayStep::Convert;
                Retreat::SteppedBack
            }
        }
    }

    /// Returns to the first step and clears the conversion.
    pub fn reset(&mut self) {
        self.step = PayStep::SelectAsset;
        self.quote = None;
        self.selected = self.assets.first().map(|a| a.symbol().clone());
    }

    /// Produces the hand-off for the QR scan session.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::InvalidState` outside the pay step or if
    /// the conversion is empty.
    pub fn handoff(&self) -> ApplicationResult<PayHandoff> {
        if self.step != PayStep::Pay {
            return Err(ApplicationError::invalid_state(format!(
                "no hand-off at step {}",
                self.step
            )));
        }
        let quote = self
            .quote
            .as_ref()
            .filter(|q| !q.is_empty())
            .ok_or_else(|| ApplicationError::invalid_state("conversion is empty"))?;
        Ok(PayHandoff {
            funding: CryptoFunding {
                asset: quote.asset().clone(),
                quantity: quote.quantity(),
                rate: quote.rate(),
            },
            fiat: quote.fiat(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::AssetCategory;

    fn holdings() -> Vec<AssetRecord> {
        vec![
            AssetRecord::new(
                AssetSymbol::new("BTC").unwrap(),
                "Bitcoin",
                FiatAmount::parse("453988").unwrap(),
                Decimal::ZERO,
                AssetCategory::Layer1,
            )
            .unwrap()
            .with_holdings(Quantity::parse("0.0234").unwrap()),
            AssetRecord::new(
                AssetSymbol::new("ADA").unwrap(),
                "Cardano",
                FiatAmount::parse("1.45").unwrap(),
                Decimal::ZERO,
                AssetCategory::Layer1,
            )
            .unwrap()
            .with_holdings(Quantity::parse("850").unwrap()),
            AssetRecord::new(
                AssetSymbol::new("DOT").unwrap(),
                "Polkadot",
                FiatAmount::parse("23.45").unwrap(),
                Decimal::ZERO,
                AssetCategory::Layer1,
            )
            .unwrap(),
        ]
    }

    fn flow_at_convert() -> PayFlow {
        let mut flow = PayFlow::new(holdings());
        flow.advance();
        flow
    }

    #[test]
    fn zero_balance_assets_are_dropped() {
        let flow = PayFlow::new(holdings());
        assert_eq!(flow.assets().len(), 2);
    }

    #[test]
    fn advancing_creates_quote_at_asset_price() {
        let flow = flow_at_convert();
        assert_eq!(flow.step(), PayStep::Convert);
        let quote = flow.quote().unwrap();
        assert_eq!(quote.rate(), FiatAmount::parse("453988").unwrap());
        assert!(quote.is_empty());
    }

    #[test]
    fn crypto_edit_drives_fiat_side() {
        let mut flow = flow_at_convert();
        flow.set_crypto_amount("0.01").unwrap();
        let quote = flow.quote().unwrap();
        assert_eq!(quote.fiat().amount(), Decimal::new(453_988, 2));
    }

    #[test]
    fn fiat_edit_drives_crypto_side() {
        let mut flow = flow_at_convert();
        flow.set_fiat_amount("100").unwrap();
        assert!(flow.quote().unwrap().quantity().is_positive());
    }

    #[test]
    fn empty_input_clears_quote() {
        let mut flow = flow_at_convert();
        flow.set_fiat_amount("100").unwrap();
        flow.set_fiat_amount("  ").unwrap();
        assert!(flow.quote().unwrap().is_empty());
    }

    #[test]
    fn non_numeric_input_is_an_error() {
        let mut flow = flow_at_convert();
        assert!(flow.set_fiat_amount("abc").is_err());
    }

    #[test]
    fn cannot_advance_convert_beyond_balance() {
        let mut flow = flow_at_convert();
        // 0.03 BTC > 0.0234 BTC held
        flow.set_crypto_amount("0.03").unwrap();
        assert!(!flow.can_advance());
        flow.set_crypto_amount("0.01").unwrap();
        assert!(flow.can_advance());
    }

    #[test]
    fn cannot_skip_from_selection_to_pay() {
        let mut flow = PayFlow::new(holdings());
        assert!(flow.handoff().is_err());
        flow.advance(); // -> Convert
        assert_ne!(flow.step(), PayStep::Pay);
    }

    #[test]
    fn handoff_carries_conversion() {
        let mut flow = flow_at_convert();
        flow.set_fiat_amount("100").unwrap();
        flow.advance();
        assert_eq!(flow.step(), PayStep::Pay);

        let handoff = flow.handoff().unwrap();
        assert_eq!(handoff.fiat, FiatAmount::parse("100").unwrap());
        assert_eq!(handoff.funding.asset.as_str(), "BTC");
        assert_eq!(
            handoff.funding.rate,
            FiatAmount::parse("453988").unwrap()
        );
    }

    #[test]
    fn retreat_walks_back_and_exits() {
        let mut flow = flow_at_convert();
        flow.set_fiat_amount("100").unwrap();
        flow.advance();
        assert_eq!(flow.retreat(), Retreat::SteppedBack);
        assert_eq!(flow.step(), PayStep::Convert);
        assert_eq!(flow.retreat(), Retreat::SteppedBack);
        assert_eq!(flow.step(), PayStep::SelectAsset);
        assert_eq!(flow.retreat(), Retreat::Exit);
    }

    #[test]
    fn quick_amounts_match_prototype() {
        let amounts = PayFlow::quick_fiat_amounts();
        assert_eq!(amounts[0], FiatAmount::parse("50").unwrap());
        assert_eq!(amounts[3], FiatAmount::parse("500").unwrap());
    }
}
