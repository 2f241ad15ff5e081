//! # Checked Arithmetic
//!
//! Safe decimal arithmetic and display-boundary rounding.
//!
//! This module provides:
//! - [`ArithmeticError`] - Error type for arithmetic failures
//! - [`CheckedArithmetic`] - Trait for safe arithmetic operations
//! - [`round_fiat`] / [`round_crypto`] - Display rounding helpers
//!
//! Every monetary and quantity computation in the wallet runs at full
//! `Decimal` precision; rounding is applied exactly once, when a value
//! crosses the presentation boundary. Derived values that feed further
//! derivations must never be pre-rounded.
//!
//! # Examples
//!
//! ```
//! use uniwallet_core::domain::value_objects::arithmetic::{round_fiat, CheckedArithmetic};
//! use rust_decimal::Decimal;
//!
//! let a = Decimal::new(5, 1); // 0.5
//! let b = Decimal::new(10_323, 0);
//! let product = a.safe_mul(b).unwrap();
//! assert_eq!(round_fiat(product), Decimal::new(516_150, 2)); // 5161.50
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Decimal places used when displaying fiat amounts.
pub const FIAT_DISPLAY_DP: u32 = 2;

/// Decimal places used when displaying crypto quantities.
pub const CRYPTO_DISPLAY_DP: u32 = 6;

/// Error type for arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// Arithmetic operation resulted in overflow.
    #[error("arithmetic overflow")]
    Overflow,

    /// Arithmetic operation resulted in underflow.
    #[error("arithmetic underflow")]
    Underflow,

    /// Division by zero attempted.
    #[error("division by zero")]
    DivisionByZero,

    /// Invalid value provided (e.g., negative when non-negative required).
    #[error("invalid value: {0}")]
    InvalidValue(&'static str),
}

/// Result type for arithmetic operations.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Rounds a decimal to fiat display precision (2 dp, half away from zero).
///
/// This mirrors how the UI formats currency; it must only be applied at the
/// presentation boundary, never to an intermediate value.
#[inline]
#[must_use]
pub fn round_fiat(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(FIAT_DISPLAY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a decimal to crypto display precision (6 dp, half away from zero).
#[inline]
#[must_use]
pub fn round_crypto(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CRYPTO_DISPLAY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Trait for checked arithmetic operations.
///
/// Provides safe arithmetic methods that return `Result` instead of
/// panicking on overflow, underflow, or division by zero.
pub trait CheckedArithmetic: Sized {
    /// Safely add two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely subtract two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Underflow` if the result would underflow.
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely multiply two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely divide two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::DivisionByZero` if the divisor is zero.
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self>;
}

impl CheckedArithmetic for Decimal {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_add(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_sub(rhs).ok_or(ArithmeticError::Underflow)
    }

    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_mul(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        self.checked_div(rhs).ok_or(ArithmeticError::Overflow)
    }
}
