//! # Send Flow
//!
//! Controller for the send-crypto wizard.
//!
//! Drives `Form → Confirm → Submitting → Completed` over a spendable asset
//! list handed in by the parent screen. The form gates on live address
//! format validation and the balance invariant (`amount + fee <= holdings`);
//! confirmation submits through a simulated network delay and synthesizes a
//! receipt.
//!
//! # Examples
//!
//! ```no_run
//! # async fn demo() {
//! use std::time::Duration;
//! use uniwallet_core::application::services::SendFlow;
//! use uniwallet_core::domain::services::fees::FeeSchedule;
//!
//! let mut flow = SendFlow::new(vec![], FeeSchedule::default(), Duration::from_secs(2));
//! flow.set_recipient("bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh");
//! flow.set_amount("0.02");
//! if flow.can_advance() {
//!     flow.advance();
//!     let receipt = flow.submit().await.unwrap();
//!     println!("sent: {}", receipt.transaction_id);
//! }
//! # }
//! ```

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::Retreat;
use crate::domain::entities::asset::AssetRecord;
use crate::domain::entities::transfer::{TransferReceipt, TransferRequest};
use crate::domain::services::fees::FeeSchedule;
use crate::domain::value_objects::{
    AssetSymbol, FeeTier, Quantity, Timestamp, TransactionId, TransferStep, WalletAddress,
};
use rust_decimal::Decimal;
use std::time::Duration;

/// Fraction of holdings offered by the "Max" helper, leaving room for fees.
const MAX_SPEND_FRACTION: Decimal = Decimal::from_parts(95, 0, 0, false, 2);

/// Screen controller for the send-crypto wizard.
///
/// Constructed fresh per screen session and discarded on exit. The asset
/// list is a read-only hand-off from the parent wallet screen.
#[derive(Debug)]
pub struct SendFlow {
    assets: Vec<AssetRecord>,
    fees: FeeSchedule,
    submit_delay: Duration,
    step: TransferStep,
    selected: Option<AssetSymbol>,
    recipient_input: String,
    amount_input: String,
    note: String,
    fee_tier: FeeTier,
    receipt: Option<TransferReceipt>,
}

impl SendFlow {
    /// Creates a send flow over the given asset list.
    ///
    /// The first spendable asset is pre-selected.
    #[must_use]
    pub fn new(assets: Vec<AssetRecord>, fees: FeeSchedule, submit_delay: Duration) -> Self {
        let selected = assets
            .iter()
            .find(|a| a.is_spendable())
            .map(|a| a.symbol().clone());
        Self {
            assets,
            fees,
            submit_delay,
            step: TransferStep::Form,
            selected,
            recipient_input: String::new(),
            amount_input: String::new(),
            note: String::new(),
            fee_tier: FeeTier::default(),
            receipt: None,
        }
    }

    /// Returns the current wizard step.
    #[inline]
    #[must_use]
    pub fn step(&self) -> TransferStep {
        self.step
    }

    /// Returns the assets with a positive balance, the only ones offered.
    #[must_use]
    pub fn spendable_assets(&self) -> Vec<&AssetRecord> {
        self.assets.iter().filter(|a| a.is_spendable()).collect()
    }

    /// Returns the currently selected asset record.
    #[must_use]
    pub fn selected_asset(&self) -> Option<&AssetRecord> {
        let symbol = self.selected.as_ref()?;
        self.assets.iter().find(|a| a.symbol() == symbol)
    }

    /// Selects the asset to send.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NotFound` for an unknown symbol and
    /// `ApplicationError::Validation` for one without balance.
    pub fn select_asset(&mut self, symbol: &AssetSymbol) -> ApplicationResult<()> {
        let asset = self
            .assets
            .iter()
            .find(|a| a.symbol() == symbol)
            .ok_or_else(|| ApplicationError::not_found("asset", symbol.as_str()))?;
        if !asset.is_spendable() {
            return Err(ApplicationError::validation(format!(
                "no {symbol} balance to send"
            )));
        }
        self.selected = Some(symbol.clone());
        Ok(())
    }

    /// Stores the recipient address input.
    pub fn set_recipient(&mut self, input: impl Into<String>) {
        self.recipient_input = input.into();
    }

    /// Stores the amount input.
    pub fn set_amount(&mut self, input: impl Into<String>) {
        self.amount_input = input.into();
    }

    /// Stores the optional note.
    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }

    /// Selects the network fee tier.
    pub fn set_fee_tier(&mut self, tier: FeeTier) {
        self.fee_tier = tier;
    }

    /// Returns the selected fee tier.
    #[inline]
    #[must_use]
    pub fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }

    /// Returns the network fee for the selected asset and tier.
    #[must_use]
    pub fn fee(&self) -> Quantity {
        self.selected
            .as_ref()
            .map(|symbol| self.fees.fee_for(symbol, self.fee_tier))
            .unwrap_or(Quantity::ZERO)
    }

    /// Returns true if the recipient input passes the address format check.
    #[must_use]
    pub fn address_valid(&self) -> bool {
        WalletAddress::is_valid_format(self.recipient_input.trim())
    }

    /// Returns the parsed amount, if the input is a positive number.
    #[must_use]
    pub fn parsed_amount(&self) -> Option<Quantity> {
        Quantity::parse(&self.amount_input)
            .ok()
            .filter(Quantity::is_positive)
    }

    /// Returns true if the amount parses and fits the balance with the fee.
    ///
    /// Non-numeric input is invalid, never treated as zero.
    #[must_use]
    pub fn amount_valid(&self) -> bool {
        let Some(amount) = self.parsed_amount() else {
            return false;
        };
        let Some(asset) = self.selected_asset() else {
            return false;
        };
        match amount.safe_add(self.fee()) {
            Ok(required) => required <= asset.holdings(),
            Err(_) => false,
        }
    }

    /// Returns amount plus fee, when the amount parses.
    #[must_use]
    pub fn total(&self) -> Option<Quantity> {
        self.parsed_amount()
            .and_then(|amount| amount.safe_add(self.fee()).ok())
    }

    /// Returns 95% of the selected holdings, the "Max" helper value.
    #[must_use]
    pub fn max_spendable(&self) -> Quantity {
        self.selected_asset()
            .and_then(|asset| {
                Quantity::new(asset.holdings().value() * MAX_SPEND_FRACTION).ok()
            })
            .unwrap_or(Quantity::ZERO)
    }

    /// Fills the amount input with the "Max" helper value at 6 dp.
    pub fn apply_max(&mut self) {
        self.amount_input = format!("{:.6}", self.max_spendable().rounded());
    }

    /// Returns true if the form step is complete and `advance()` will move.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.step == TransferStep::Form
            && self.selected.is_some()
            && self.address_valid()
            && self.amount_valid()
    }

    /// Moves from the form to confirmation when the fields validate.
    ///
    /// No-op otherwise; the caller is expected to have disabled the
    /// affordance via [`can_advance`](Self::can_advance).
    pub fn advance(&mut self) {
        if self.can_advance() {
            self.step = TransferStep::Confirm;
            tracing::debug!(step = %self.step, "send flow advanced");
        }
    }

    /// Moves to the previous step, or signals an exit at the first step.
    pub fn retreat(&mut self) -> Retreat {
        match self.step {
            TransferStep::Form => Retreat::Exit,
            TransferStep::Confirm => {
                self.step = TransferStep::Form;
                Retreat::SteppedBack
            }
            TransferStep::Submitting => Retreat::Blocked,
            TransferStep::Completed => Retreat::Exit,
        }
    }

    /// Returns to the first step and clears every entered value.
    pub fn reset(&mut self) {
        self.step = TransferStep::Form;
        self.recipient_input.clear();
        self.amount_input.clear();
        self.note.clear();
        self.fee_tier = FeeTier::default();
        self.receipt = None;
        self.selected = self
            .assets
            .iter()
            .find(|a| a.is_spendable())
            .map(|a| a.symbol().clone());
    }

    /// Returns the receipt once the transfer completed.
    #[inline]
    #[must_use]
    pub fn receipt(&self) -> Option<&TransferReceipt> {
        self.receipt.as_ref()
    }

    /// Submits the confirmed transfer.
    ///
    /// Runs the simulated network delay, then synthesizes the receipt and
    /// enters the terminal step. Not cancellable; no retry; it cannot fail
    /// once started.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::InvalidState` if not at the confirmation
    /// step, `ApplicationError::SubmissionPending` while a delay is already
    /// in flight, or a validation error if the fields no longer validate.
    pub async fn submit(&mut self) -> ApplicationResult<TransferReceipt> {
        match self.step {
            TransferStep::Confirm => {}
            TransferStep::Submitting => return Err(ApplicationError::SubmissionPending),
            other => {
                return Err(ApplicationError::invalid_state(format!(
                    "cannot submit from step {other}"
                )));
            }
        }

        let request = self.build_request()?;
        let asset = self
            .selected_asset()
            .ok_or_else(|| ApplicationError::validation("no asset selected"))?;
        let fee = self.fee();
        request.validate_against(asset.holdings(), fee)?;

        self.step = TransferStep::Submitting;
        tracing::info!(asset = %request.asset(), quantity = %request.quantity(), "submitting transfer");
        tokio::time::sleep(self.submit_delay).await;

        let receipt = TransferReceipt {
            transaction_id: TransactionId::generate(),
            asset: request.asset().clone(),
            quantity: request.quantity(),
            fee,
            total: request.total_with_fee(fee)?,
            recipient: request.recipient().clone(),
            note: request.note().map(ToString::to_string),
            completed_at: Timestamp::now(),
        };
        self.step = TransferStep::Completed;
        self.receipt = Some(receipt.clone());
        tracing::info!(id = %receipt.transaction_id, "transfer completed");
        Ok(receipt)
    }

    fn build_request(&self) -> ApplicationResult<TransferRequest> {
        let symbol = self
            .selected
            .clone()
            .ok_or_else(|| ApplicationError::validation("no asset selected"))?;
        let recipient = WalletAddress::parse(self.recipient_input.trim())?;
        let quantity = Quantity::parse(&self.amount_input)?;
        let note = if self.note.trim().is_empty() {
            None
        } else {
            Some(self.note.clone())
        };
        Ok(TransferRequest::new(
            symbol,
            recipient,
            quantity,
            self.fee_tier,
            note,
        )?)
    }
}
