//! # Receive Flow
//!
//! Controller for the receive-crypto screen.
//!
//! Shows the deposit address for the selected asset, builds the request QR
//! payload (`address?amount=..&message=..`), writes the address to the
//! clipboard with a transient "copied" flag, and offers a best-effort share.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::value_objects::{AssetSymbol, FiatAmount, Quantity, Timestamp, WalletAddress};
use crate::infrastructure::platform::{Clipboard, ShareSheet};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use std::sync::Arc;

/// How long the "copied" confirmation stays visible.
const COPIED_TTL_SECS: i64 = 2;

/// Screen controller for receiving crypto.
pub struct ReceiveFlow {
    addresses: Vec<(AssetSymbol, WalletAddress)>,
    clipboard: Arc<dyn Clipboard>,
    share: Arc<dyn ShareSheet>,
    selected: AssetSymbol,
    amount_input: String,
    note: String,
    copied_at: Option<Timestamp>,
}

impl ReceiveFlow {
    /// Creates a receive flow over a deposit address book.
    ///
    /// The first asset is pre-selected.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Validation` for an empty address book.
    pub fn new(
        addresses: Vec<(AssetSymbol, WalletAddress)>,
        clipboard: Arc<dyn Clipboard>,
        share: Arc<dyn ShareSheet>,
    ) -> ApplicationResult<Self> {
        let selected = addresses
            .first()
            .map(|(symbol, _)| symbol.clone())
            .ok_or_else(|| ApplicationError::validation("no deposit addresses available"))?;
        Ok(Self {
            addresses,
            clipboard,
            share,
            selected,
            amount_input: String::new(),
            note: String::new(),
            copied_at: None,
        })
    }

    /// Returns the selected asset.
    #[inline]
    #[must_use]
    pub fn selected(&self) -> &AssetSymbol {
        &self.selected
    }

    /// Selects the asset to receive.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NotFound` if the book has no address for
    /// the symbol.
    pub fn select_asset(&mut self, symbol: &AssetSymbol) -> ApplicationResult<()> {
        if !self.addresses.iter().any(|(s, _)| s == symbol) {
            return Err(ApplicationError::not_found("deposit address", symbol.as_str()));
        }
        self.selected = symbol.clone();
        self.copied_at = None;
        Ok(())
    }

    /// Returns the deposit address for the selected asset.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NotFound` if the book lost the entry.
    pub fn address(&self) -> ApplicationResult<&WalletAddress> {
        self.addresses
            .iter()
            .find(|(s, _)| s == &self.selected)
            .map(|(_, address)| address)
            .ok_or_else(|| {
                ApplicationError::not_found("deposit address", self.selected.as_str())
            })
    }

    /// Stores the optional requested amount input.
    pub fn set_amount(&mut self, input: impl Into<String>) {
        self.amount_input = input.into();
    }

    /// Stores the optional note.
    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }

    /// Returns the requested amount, when the input parses as positive.
    #[must_use]
    pub fn requested_amount(&self) -> Option<FiatAmount> {
        FiatAmount::parse(&self.amount_input)
            .ok()
            .filter(FiatAmount::is_positive)
    }

    /// Builds the QR payload for the current address and request fields.
    ///
    /// Format: `address[?amount=X][&message=encoded-note]`; the note is
    /// percent-encoded, and an unparseable amount is simply omitted.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NotFound` if the address book lost the
    /// selected entry.
    pub fn qr_payload(&self) -> ApplicationResult<String> {
        let mut payload = self.address()?.as_str().to_string();
        let mut separator = '?';
        if let Some(amount) = self.requested_amount() {
            payload.push(separator);
            payload.push_str(&format!("amount={}", amount.amount()));
            separator = '&';
        }
        let note = self.note.trim();
        if !note.is_empty() {
            let encoded = utf8_percent_encode(note, NON_ALPHANUMERIC).to_string();
            payload.push(separator);
            payload.push_str(&format!("message={encoded}"));
        }
        Ok(payload)
    }

    /// Copies the deposit address to the clipboard.
    ///
    /// Sets the transient "copied" flag; it auto-clears after two seconds
    /// (see [`copied_visible`](Self::copied_visible)).
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NotFound` if the address book lost the
    /// selected entry.
    pub fn copy_address(&mut self, now: Timestamp) -> ApplicationResult<()> {
        let address = self.address()?.as_str().to_string();
        self.clipboard.write_text(&address);
        self.copied_at = Some(now);
        tracing::debug!(asset = %self.selected, "address copied");
        Ok(())
    }

    /// Returns true while the "copied" confirmation should show.
    #[must_use]
    pub fn copied_visible(&self, now: Timestamp) -> bool {
        self.copied_at
            .is_some_and(|at| now.secs_since(&at) < COPIED_TTL_SECS && now >= at)
    }

    /// Offers the address to the native share sheet, best effort.
    ///
    /// Returns true if the platform presented a share surface; platforms
    /// without the capability are a silent no-op.
    pub fn share_address(&self) -> bool {
        let Ok(address) = self.address() else {
            return false;
        };
        let title = format!("Receive {}", self.selected);
        let text = format!("Send {} to this address: {}", self.selected, address);
        self.share.share(&title, &text)
    }

    /// Returns a quantity parsed from the amount field, for crypto-denominated
    /// requests.
    #[must_use]
    pub fn requested_quantity(&self) -> Option<Quantity> {
        Quantity::parse(&self.amount_input)
            .ok()
            .filter(Quantity::is_positive)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::infrastructure::demo;
    use crate::infrastructure::platform::{MemoryClipboard, NoopShareSheet};

    fn flow_with_clipboard() -> (ReceiveFlow, Arc<MemoryClipboard>) {
        let clipboard = Arc::new(MemoryClipboard::new());
        let flow = ReceiveFlow::new(
            demo::deposit_addresses(),
            clipboard.clone(),
            Arc::new(NoopShareSheet),
        )
        .unwrap();
        (flow, clipboard)
    }

    #[test]
    fn empty_address_book_is_rejected() {
        let result = ReceiveFlow::new(
            vec![],
            Arc::new(MemoryClipboard::new()),
            Arc::new(NoopShareSheet),
        );
        assert!(result.is_err());
    }

    #[test]
    fn first_asset_is_preselected() {
        let (flow, _) = flow_with_clipboard();
        assert_eq!(flow.selected().as_str(), "BTC");
        assert!(flow.address().unwrap().as_str().starts_with("bc1q"));
    }

    #[test]
    fn selecting_switches_address() {
        let (mut flow, _) = flow_with_clipboard();
        flow.select_asset(&AssetSymbol::new("ETH").unwrap()).unwrap();
        assert!(flow.address().unwrap().as_str().starts_with("0x"));
    }

    #[test]
    fn unknown_asset_is_rejected() {
        let (mut flow, _) = flow_with_clipboard();
        assert!(flow
            .select_asset(&AssetSymbol::new("SHIB").unwrap())
            .is_err());
    }

    #[test]
    fn bare_payload_is_just_the_address() {
        let (flow, _) = flow_with_clipboard();
        assert_eq!(
            flow.qr_payload().unwrap(),
            "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh"
        );
    }

    #[test]
    fn payload_includes_amount_and_encoded_note() {
        let (mut flow, _) = flow_with_clipboard();
        flow.set_amount("0.5");
        flow.set_note("rent for may");
        let payload = flow.qr_payload().unwrap();
        assert_eq!(
            payload,
            "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh?amount=0.5&message=rent%20for%20may"
        );
    }

    #[test]
    fn note_without_amount_uses_question_mark() {
        let (mut flow, _) = flow_with_clipboard();
        flow.set_note("hi");
        assert!(flow.qr_payload().unwrap().contains("?message=hi"));
    }

    #[test]
    fn invalid_amount_is_omitted_from_payload() {
        let (mut flow, _) = flow_with_clipboard();
        flow.set_amount("abc");
        assert!(!flow.qr_payload().unwrap().contains("amount"));
    }

    #[test]
    fn copy_writes_clipboard_and_flags() {
        let (mut flow, clipboard) = flow_with_clipboard();
        let now = Timestamp::from_secs(1_000_000).unwrap();
        flow.copy_address(now).unwrap();
        assert_eq!(
            clipboard.last().as_deref(),
            Some("bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh")
        );
        assert!(flow.copied_visible(now));
        assert!(flow.copied_visible(now.add_secs(1)));
    }

    #[test]
    fn copied_flag_auto_resets_after_two_seconds() {
        let (mut flow, _) = flow_with_clipboard();
        let now = Timestamp::from_secs(1_000_000).unwrap();
        flow.copy_address(now).unwrap();
        assert!(!flow.copied_visible(now.add_secs(2)));
        assert!(!flow.copied_visible(now.add_secs(10)));
    }

    #[test]
    fn share_without_capability_is_a_noop() {
        let (flow, _) = flow_with_clipboard();
        assert!(!flow.share_address());
    }
}
