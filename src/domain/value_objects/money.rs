//! # Fiat Amount Value Object
//!
//! Non-negative fiat currency amount with checked arithmetic.
//!
//! The wallet denominates fiat in Malaysian Ringgit (RM). Amounts carry full
//! `Decimal` precision internally; [`FiatAmount::rounded`] and `Display`
//! apply the 2 dp presentation rounding.
//!
//! # Examples
//!
//! ```
//! use uniwallet_core::domain::value_objects::FiatAmount;
//! use rust_decimal::Decimal;
//!
//! let amount = FiatAmount::parse("12847.50").unwrap();
//! assert_eq!(amount.to_string(), "RM 12847.50");
//!
//! // Non-numeric input is rejected, never coerced to zero.
//! assert!(FiatAmount::parse("abc").is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::arithmetic::{round_fiat, ArithmeticResult, CheckedArithmetic};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A non-negative fiat (RM) amount.
///
/// # Invariants
///
/// - Never negative
/// - Full precision internally; 2 dp rounding only at display
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FiatAmount(Decimal);

impl FiatAmount {
    /// The zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a fiat amount from a decimal.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` if the value is negative.
    pub fn new(value: Decimal) -> DomainResult<Self> {
        if value.is_sign_negative() {
            return Err(DomainError::InvalidAmount(
                "amount must not be negative".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// Parses a fiat amount from user input.
    ///
    /// Input is trimmed first. An empty or non-numeric string is invalid;
    /// it is never treated as zero.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` if the input does not parse as
    /// a non-negative decimal.
    pub fn parse(input: &str) -> DomainResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidAmount("empty amount".to_string()));
        }
        let value = Decimal::from_str(trimmed)
            .map_err(|_| DomainError::InvalidAmount(format!("not a number: {trimmed:?}")))?;
        Self::new(value)
    }

    /// Returns the raw full-precision value.
    #[inline]
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns the value rounded to display precision (2 dp).
    #[inline]
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        round_fiat(self.0)
    }

    /// Returns true if the amount is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly positive.
    #[inline]
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Safely adds another amount.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` on overflow.
    pub fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        Ok(Self(self.0.safe_add(rhs.0)?))
    }

    /// Safely subtracts another amount.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Underflow` if the result would be negative.
    pub fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self> {
        let result = self.0.safe_sub(rhs.0)?;
        if result.is_sign_negative() {
            return Err(crate::domain::value_objects::ArithmeticError::Underflow);
        }
        Ok(Self(result))
    }
}

impl fmt::Display for FiatAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RM {:.2}", self.rounded())
    }
}
