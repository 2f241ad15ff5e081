//! # Quantity Value Object
//!
//! Non-negative crypto quantity with checked arithmetic.
//!
//! Quantities carry full `Decimal` precision internally and round to 6 dp
//! only at the presentation boundary.
//!
//! # Examples
//!
//! ```
//! use uniwallet_core::domain::value_objects::Quantity;
//! use rust_decimal::Decimal;
//!
//! let holdings = Quantity::parse("1.2567").unwrap();
//! assert!(holdings.is_positive());
//! assert_eq!(holdings.to_string(), "1.256700");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::arithmetic::{
    round_crypto, ArithmeticError, ArithmeticResult, CheckedArithmetic,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A non-negative crypto quantity.
///
/// # Invariants
///
/// - Never negative
/// - Full precision internally; 6 dp rounding only at display
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(Decimal);

impl Quantity {
    /// The zero quantity.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a quantity from a decimal.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuantity` if the value is negative.
    pub fn new(value: Decimal) -> DomainResult<Self> {
        if value.is_sign_negative() {
            return Err(DomainError::InvalidQuantity(
                "quantity must not be negative".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// Parses a quantity from user input.
    ///
    /// Input is trimmed first. Empty or non-numeric input is invalid and is
    /// never treated as zero.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuantity` if the input does not parse as
    /// a non-negative decimal.
    pub fn parse(input: &str) -> DomainResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidQuantity("empty quantity".to_string()));
        }
        let value = Decimal::from_str(trimmed)
            .map_err(|_| DomainError::InvalidQuantity(format!("not a number: {trimmed:?}")))?;
        Self::new(value)
    }

    /// Returns the raw full-precision value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Returns the value rounded to display precision (6 dp).
    #[inline]
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        round_crypto(self.0)
    }

    /// Returns true if the quantity is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the quantity is strictly positive.
    #[inline]
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Safely adds another quantity.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` on overflow.
    pub fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        Ok(Self(self.0.safe_add(rhs.0)?))
    }

    /// Safely subtracts another quantity.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Underflow` if the result would be negative.
    pub fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self> {
        let result = self.0.safe_sub(rhs.0)?;
        if result.is_sign_negative() {
            return Err(ArithmeticError::Underflow);
        }
        Ok(Self(result))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.rounded())
    }
}
