//! # Domain Errors
//!
//! Error types for business rule violations.
//!
//! Validation failures in the wallet are *gate conditions*: a flow controller
//! uses them to disable progression rather than surfacing an exception to the
//! user. They are still modeled as typed errors so callers can match on the
//! reason.

use crate::domain::value_objects::arithmetic::ArithmeticError;
use thiserror::Error;

/// Domain layer error.
///
/// Represents violations of wallet business rules: malformed input,
/// insufficient funds, duplicate assets, and illegal wizard transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Asset symbol failed validation.
    #[error("invalid symbol: {0}")]
    InvalidSymbol(String),

    /// Wallet address failed the format check.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Amount input could not be parsed or is out of range.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Quantity is not positive or otherwise out of range.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// Spending more than the available balance (fee included).
    #[error("insufficient funds: need {required}, have {available}")]
    InsufficientFunds {
        /// Amount required including fees.
        required: String,
        /// Amount available.
        available: String,
    },

    /// An asset with this symbol already exists in the list.
    #[error("duplicate symbol: {0}")]
    DuplicateSymbol(String),

    /// A wizard step transition that the state machine forbids.
    #[error("invalid state transition: {from} -> {to}")]
    InvalidStateTransition {
        /// State the transition was attempted from.
        from: String,
        /// Requested target state.
        to: String,
    },

    /// Generic field validation failure.
    #[error("validation error: {0}")]
    ValidationError(String),

    /// Arithmetic failure during a derivation.
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

impl DomainError {
    /// Creates an insufficient funds error from displayable amounts.
    #[must_use]
    pub fn insufficient_funds(required: impl ToString, available: impl ToString) -> Self {
        Self::InsufficientFunds {
            required: required.to_string(),
            available: available.to_string(),
        }
    }

    /// Creates an invalid state transition error from displayable states.
    #[must_use]
    pub fn invalid_transition(from: impl ToString, to: impl ToString) -> Self {
        Self::InvalidStateTransition {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Returns true if this error represents a user-input validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidSymbol(_)
                | Self::InvalidAddress(_)
                | Self::InvalidAmount(_)
                | Self::InvalidQuantity(_)
                | Self::ValidationError(_)
        )
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
