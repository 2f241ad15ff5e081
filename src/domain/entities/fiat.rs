//! # Fiat Account
//!
//! The RM balance with its transaction history.
//!
//! Top-ups credit the balance; transfers debit it after a balance check.
//! Every movement appends an immutable [`FiatTransaction`] record.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{FiatAmount, Timestamp, TopUpMethod, TransactionId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction/kind of a fiat movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FiatTransactionKind {
    /// Balance credited from an external funding method.
    TopUp,
    /// Balance debited to another person.
    TransferOut,
    /// Balance credited by another person.
    TransferIn,
}

impl fmt::Display for FiatTransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::TopUp => "Top Up",
            Self::TransferOut => "Transfer Out",
            Self::TransferIn => "Transfer In",
        };
        write!(f, "{s}")
    }
}

/// One immutable fiat ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiatTransaction {
    /// Unique identifier.
    pub id: TransactionId,
    /// Movement kind.
    pub kind: FiatTransactionKind,
    /// Magnitude of the movement (always positive; direction is the kind).
    pub amount: FiatAmount,
    /// Other party or funding method label.
    pub counterparty: Option<String>,
    /// Optional user note.
    pub note: Option<String>,
    /// When the movement happened.
    pub at: Timestamp,
}

impl FiatTransaction {
    /// Returns the receipt reference, e.g. `TOP-1f2e3d4c` for a top-up.
    #[must_use]
    pub fn reference(&self) -> String {
        let prefix = match self.kind {
            FiatTransactionKind::TopUp => "TOP",
            FiatTransactionKind::TransferOut | FiatTransactionKind::TransferIn => "TXN",
        };
        self.id.reference(prefix)
    }
}

/// The user's fiat (RM) account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiatAccount {
    balance: FiatAmount,
    transactions: Vec<FiatTransaction>,
}

impl FiatAccount {
    /// Creates an account with an opening balance and empty history.
    #[must_use]
    pub fn with_balance(balance: FiatAmount) -> Self {
        Self {
            balance,
            transactions: Vec::new(),
        }
    }

    /// Returns the current balance.
    #[inline]
    #[must_use]
    pub fn balance(&self) -> FiatAmount {
        self.balance
    }

    /// Returns the transaction history, newest last.
    #[inline]
    #[must_use]
    pub fn transactions(&self) -> &[FiatTransaction] {
        &self.transactions
    }

    /// Credits the balance from a funding method.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` for a non-positive amount, or an
    /// arithmetic error on overflow.
    pub fn top_up(
        &mut self,
        amount: FiatAmount,
        method: TopUpMethod,
        now: Timestamp,
    ) -> DomainResult<&FiatTransaction> {
        if !amount.is_positive() {
            return Err(DomainError::InvalidAmount(
                "top-up amount must be positive".to_string(),
            ));
        }
        self.balance = self.balance.safe_add(amount)?;
        self.push(FiatTransaction {
            id: TransactionId::generate(),
            kind: FiatTransactionKind::TopUp,
            amount,
            counterparty: Some(method.to_string()),
            note: None,
            at: now,
        })
    }

    /// Debits the balance towards a recipient.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` for a non-positive amount or
    /// `DomainError::InsufficientFunds` if the balance cannot cover it.
    pub fn transfer_out(
        &mut self,
        amount: FiatAmount,
        recipient: impl Into<String>,
        note: Option<String>,
        now: Timestamp,
    ) -> DomainResult<&FiatTransaction> {
        if !amount.is_positive() {
            return Err(DomainError::InvalidAmount(
                "transfer amount must be positive".to_string(),
            ));
        }
        if amount > self.balance {
            return Err(DomainError::insufficient_funds(amount, self.balance));
        }
        self.balance = self.balance.safe_sub(amount)?;
        self.push(FiatTransaction {
            id: TransactionId::generate(),
            kind: FiatTransactionKind::TransferOut,
            amount,
            counterparty: Some(recipient.into()),
            note: note.filter(|n| !n.trim().is_empty()),
            at: now,
        })
    }

    fn push(&mut self, tx: FiatTransaction) -> DomainResult<&FiatTransaction> {
        self.transactions.push(tx);
        self.transactions
            .last()
            .ok_or_else(|| DomainError::ValidationError("transaction vanished".to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn account(balance: &str) -> FiatAccount {
        FiatAccount::with_balance(FiatAmount::parse(balance).unwrap())
    }

    #[test]
    fn top_up_credits_balance_and_records() {
        let mut acct = account("12847.50");
        let tx = acct
            .top_up(
                FiatAmount::parse("100").unwrap(),
                TopUpMethod::Card,
                Timestamp::now(),
            )
            .unwrap();
        assert!(tx.reference().starts_with("TOP-"));
        assert_eq!(acct.balance(), FiatAmount::parse("12947.50").unwrap());
        assert_eq!(acct.transactions().len(), 1);
    }

    #[test]
    fn transfer_out_debits_balance() {
        let mut acct = account("200");
        acct.transfer_out(
            FiatAmount::parse("150").unwrap(),
            "John Doe",
            None,
            Timestamp::now(),
        )
        .unwrap();
        assert_eq!(acct.balance(), FiatAmount::parse("50").unwrap());
    }

    #[test]
    fn transfer_over_balance_fails_and_leaves_state() {
        let mut acct = account("100");
        let result = acct.transfer_out(
            FiatAmount::parse("150").unwrap(),
            "John Doe",
            None,
            Timestamp::now(),
        );
        assert!(matches!(result, Err(DomainError::InsufficientFunds { .. })));
        assert_eq!(acct.balance(), FiatAmount::parse("100").unwrap());
        assert!(acct.transactions().is_empty());
    }

    #[test]
    fn zero_amounts_are_rejected() {
        let mut acct = account("100");
        assert!(acct
            .top_up(FiatAmount::ZERO, TopUpMethod::Card, Timestamp::now())
            .is_err());
        assert!(acct
            .transfer_out(FiatAmount::ZERO, "x", None, Timestamp::now())
            .is_err());
    }

    #[test]
    fn exact_balance_transfer_succeeds() {
        let mut acct = account("75.50");
        acct.transfer_out(
            FiatAmount::parse("75.50").unwrap(),
            "Sarah",
            Some("lunch".to_string()),
            Timestamp::now(),
        )
        .unwrap();
        assert!(acct.balance().is_zero());
    }
}
