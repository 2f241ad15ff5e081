//! # Transfer Request
//!
//! A validated send-crypto request plus its completion receipt.
//!
//! The balance invariant — `quantity + fee <= holdings` — is checked by
//! [`TransferRequest::validate_against`] before a flow may advance to
//! confirmation.
//!
//! # Examples
//!
//! ```
//! use uniwallet_core::domain::entities::TransferRequest;
//! use uniwallet_core::domain::value_objects::{
//!     AssetSymbol, FeeTier, Quantity, WalletAddress,
//! };
//!
//! let request = TransferRequest::new(
//!     AssetSymbol::new("ETH").unwrap(),
//!     WalletAddress::parse("0x742d35Cc6634C0532925a3b8D4C2C4e4C8C8C8C8").unwrap(),
//!     Quantity::parse("0.5").unwrap(),
//!     FeeTier::Standard,
//!     None,
//! )
//! .unwrap();
//!
//! let available = Quantity::parse("1.2567").unwrap();
//! let fee = Quantity::parse("0.005").unwrap();
//! assert!(request.validate_against(available, fee).is_ok());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{
    AssetSymbol, FeeTier, Quantity, Timestamp, TransactionId, WalletAddress,
};
use serde::{Deserialize, Serialize};

/// A send-crypto request assembled by the send wizard.
///
/// # Invariants
///
/// - Quantity is strictly positive
/// - Before confirmation: `quantity + fee(tier) <= holdings`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    asset: AssetSymbol,
    recipient: WalletAddress,
    quantity: Quantity,
    fee_tier: FeeTier,
    note: Option<String>,
}

impl TransferRequest {
    /// Creates a transfer request.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuantity` if the quantity is not
    /// strictly positive.
    pub fn new(
        asset: AssetSymbol,
        recipient: WalletAddress,
        quantity: Quantity,
        fee_tier: FeeTier,
        note: Option<String>,
    ) -> DomainResult<Self> {
        if !quantity.is_positive() {
            return Err(DomainError::InvalidQuantity(
                "transfer quantity must be positive".to_string(),
            ));
        }
        Ok(Self {
            asset,
            recipient,
            quantity,
            fee_tier,
            note: note.filter(|n| !n.trim().is_empty()),
        })
    }

    /// Returns the asset being sent.
    #[inline]
    #[must_use]
    pub fn asset(&self) -> &AssetSymbol {
        &self.asset
    }

    /// Returns the recipient address.
    #[inline]
    #[must_use]
    pub fn recipient(&self) -> &WalletAddress {
        &self.recipient
    }

    /// Returns the quantity to send, excluding fees.
    #[inline]
    #[must_use]
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Returns the selected fee tier.
    #[inline]
    #[must_use]
    pub fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }

    /// Returns the optional note.
    #[inline]
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Returns quantity plus the given network fee.
    ///
    /// # Errors
    ///
    /// Returns an arithmetic error on overflow.
    pub fn total_with_fee(&self, fee: Quantity) -> DomainResult<Quantity> {
        Ok(self.quantity.safe_add(fee)?)
    }

    /// Checks the balance invariant against the available holdings.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InsufficientFunds` if `quantity + fee` exceeds
    /// `available`.
    pub fn validate_against(&self, available: Quantity, fee: Quantity) -> DomainResult<()> {
        let required = self.total_with_fee(fee)?;
        if required > available {
            return Err(DomainError::insufficient_funds(required, available));
        }
        Ok(())
    }
}

/// Receipt synthesized once a transfer completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferReceipt {
    /// Unique identifier of the completed transfer.
    pub transaction_id: TransactionId,
    /// Asset that was sent.
    pub asset: AssetSymbol,
    /// Quantity sent, excluding the fee.
    pub quantity: Quantity,
    /// Network fee charged.
    pub fee: Quantity,
    /// Quantity plus fee.
    pub total: Quantity,
    /// Recipient address.
    pub recipient: WalletAddress,
    /// Optional user note.
    pub note: Option<String>,
    /// When the transfer completed.
    pub completed_at: Timestamp,
}

impl TransferReceipt {
    /// Returns the shortened recipient rendering used on the success screen.
    #[must_use]
    pub fn short_recipient(&self) -> String {
        self.recipient.truncated()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn request(quantity: &str) -> DomainResult<TransferRequest> {
        TransferRequest::new(
            AssetSymbol::new("BTC").unwrap(),
            WalletAddress::parse("bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh").unwrap(),
            Quantity::parse(quantity).unwrap(),
            FeeTier::Standard,
            None,
        )
    }

    #[test]
    fn zero_quantity_is_rejected() {
        assert!(matches!(
            request("0"),
            Err(DomainError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn within_balance_passes() {
        let req = request("0.02").unwrap();
        let available = Quantity::parse("0.0234").unwrap();
        let fee = Quantity::parse("0.0003").unwrap();
        assert!(req.validate_against(available, fee).is_ok());
    }

    #[test]
    fn quantity_plus_fee_over_balance_fails() {
        let req = request("0.0234").unwrap();
        let available = Quantity::parse("0.0234").unwrap();
        let fee = Quantity::parse("0.0003").unwrap();
        assert!(matches!(
            req.validate_against(available, fee),
            Err(DomainError::InsufficientFunds { .. })
        ));
    }

    #[test]
    fn exact_balance_including_fee_passes() {
        let req = request("0.0231").unwrap();
        let available = Quantity::parse("0.0234").unwrap();
        let fee = Quantity::parse("0.0003").unwrap();
        assert!(req.validate_against(available, fee).is_ok());
    }

    #[test]
    fn blank_note_is_dropped() {
        let req = TransferRequest::new(
            AssetSymbol::new("ETH").unwrap(),
            WalletAddress::parse("0x742d35Cc6634C0532925a3b8D4C2C4e4C8C8C8C8").unwrap(),
            Quantity::parse("0.1").unwrap(),
            FeeTier::Fast,
            Some("   ".to_string()),
        )
        .unwrap();
        assert_eq!(req.note(), None);
    }
}
