//! # QR Payments
//!
//! Merchants detected from QR codes and the payments made to them.
//!
//! DuitNow QR payments carry no fee: the total always equals the entered
//! amount. A payment may optionally be funded by converting crypto at the
//! quoted rate, in which case the funding details ride along on the receipt.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{
    AssetSymbol, FiatAmount, MerchantId, PaymentId, Quantity, Timestamp,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A merchant resolvable from a DuitNow QR code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Merchant {
    /// Directory identifier, e.g. `STARBUCKS_MY`.
    pub id: MerchantId,
    /// Display name.
    pub name: String,
    /// DuitNow proxy identifier.
    pub duitnow_id: String,
    /// Business category label.
    pub category: String,
    /// Store location label.
    pub location: String,
}

impl Merchant {
    /// Creates a merchant entry.
    #[must_use]
    pub fn new(
        id: MerchantId,
        name: impl Into<String>,
        duitnow_id: impl Into<String>,
        category: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            duitnow_id: duitnow_id.into(),
            category: category.into(),
            location: location.into(),
        }
    }
}

impl fmt::Display for Merchant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.duitnow_id)
    }
}

/// Crypto funding details attached to a converted payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoFunding {
    /// Asset converted to fiat.
    pub asset: AssetSymbol,
    /// Quantity converted.
    pub quantity: Quantity,
    /// Exchange rate used (fiat per coin).
    pub rate: FiatAmount,
}

/// A completed QR payment.
///
/// # Invariants
///
/// - Amount is strictly positive
/// - Fee is zero; total equals amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrPayment {
    id: PaymentId,
    merchant: Merchant,
    amount: FiatAmount,
    note: Option<String>,
    funding: Option<CryptoFunding>,
    paid_at: Timestamp,
}

impl QrPayment {
    /// Records a payment to a merchant.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` if the amount is not positive.
    pub fn new(
        merchant: Merchant,
        amount: FiatAmount,
        note: Option<String>,
        funding: Option<CryptoFunding>,
        paid_at: Timestamp,
    ) -> DomainResult<Self> {
        if !amount.is_positive() {
            return Err(DomainError::InvalidAmount(
                "payment amount must be positive".to_string(),
            ));
        }
        Ok(Self {
            id: PaymentId::generate(),
            merchant,
            amount,
            note: note.filter(|n| !n.trim().is_empty()),
            funding,
            paid_at,
        })
    }

    /// Returns the payment identifier.
    #[inline]
    #[must_use]
    pub fn id(&self) -> PaymentId {
        self.id
    }

    /// Returns the receipt reference string, e.g. `TXN-9f3a1c2b`.
    #[must_use]
    pub fn reference(&self) -> String {
        self.id.reference("TXN")
    }

    /// Returns the merchant that was paid.
    #[inline]
    #[must_use]
    pub fn merchant(&self) -> &Merchant {
        &self.merchant
    }

    /// Returns the paid amount.
    #[inline]
    #[must_use]
    pub fn amount(&self) -> FiatAmount {
        self.amount
    }

    /// Returns the DuitNow fee. Always zero.
    #[inline]
    #[must_use]
    pub fn fee(&self) -> FiatAmount {
        FiatAmount::ZERO
    }

    /// Returns the total charged: amount plus the (zero) fee.
    #[inline]
    #[must_use]
    pub fn total(&self) -> FiatAmount {
        self.amount
    }

    /// Returns the optional note.
    #[inline]
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Returns the crypto funding details, if the payment was converted.
    #[inline]
    #[must_use]
    pub fn funding(&self) -> Option<&CryptoFunding> {
        self.funding.as_ref()
    }

    /// Returns when the payment completed.
    #[inline]
    #[must_use]
    pub fn paid_at(&self) -> Timestamp {
        self.paid_at
    }
}
