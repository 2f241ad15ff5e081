//! # Pricing Derivations
//!
//! Pure financial arithmetic: conversion, fees, totals, staking rewards.
//!
//! All functions are stateless and side-effect free; callers recompute them
//! on every relevant input change. Results carry full precision — rounding
//! belongs to the presentation boundary, so a derived value can safely feed
//! another derivation without compounding rounding error.
//!
//! # Examples
//!
//! ```
//! use uniwallet_core::domain::services::pricing;
//! use uniwallet_core::domain::value_objects::{FiatAmount, Quantity};
//! use rust_decimal::Decimal;
//!
//! // 0.5 ETH at RM 10,323 per coin
//! let quantity = Quantity::new(Decimal::new(5, 1)).unwrap();
//! let price = FiatAmount::new(Decimal::new(10_323, 0)).unwrap();
//! let fiat = pricing::convert(quantity, price).unwrap();
//! assert_eq!(fiat.rounded(), Decimal::new(516_150, 2)); // RM 5161.50
//! ```

use crate::domain::value_objects::arithmetic::{
    ArithmeticError, ArithmeticResult, CheckedArithmetic,
};
use crate::domain::value_objects::{FiatAmount, Quantity};
use rust_decimal::Decimal;

const DAYS_PER_YEAR: Decimal = Decimal::from_parts(365, 0, 0, false, 0);

/// Converts a crypto quantity to its fiat value at the given unit price.
///
/// `fiat = quantity × unit_price`, full precision.
///
/// # Errors
///
/// Returns `ArithmeticError::Overflow` if the product overflows.
pub fn convert(quantity: Quantity, unit_price: FiatAmount) -> ArithmeticResult<FiatAmount> {
    let raw = quantity.value().safe_mul(unit_price.amount())?;
    FiatAmount::new(raw).map_err(|_| ArithmeticError::InvalidValue("negative conversion"))
}

/// Converts a fiat amount back to a crypto quantity at the given unit price.
///
/// `quantity = fiat / unit_price`, full precision.
///
/// # Errors
///
/// Returns `ArithmeticError::DivisionByZero` if the unit price is zero.
pub fn quantity_for(fiat: FiatAmount, unit_price: FiatAmount) -> ArithmeticResult<Quantity> {
    let raw = fiat.amount().safe_div(unit_price.amount())?;
    Quantity::new(raw).map_err(|_| ArithmeticError::InvalidValue("negative quantity"))
}

/// Computes a percentage-rate fee on a subtotal.
///
/// `fee = subtotal × rate / 100`.
///
/// # Errors
///
/// Returns an arithmetic error on overflow or a negative rate.
pub fn fee_amount(subtotal: FiatAmount, fee_rate_percent: Decimal) -> ArithmeticResult<FiatAmount> {
    if fee_rate_percent.is_sign_negative() {
        return Err(ArithmeticError::InvalidValue("negative fee rate"));
    }
    let raw = subtotal
        .amount()
        .safe_mul(fee_rate_percent)?
        .safe_div(Decimal::ONE_HUNDRED)?;
    FiatAmount::new(raw).map_err(|_| ArithmeticError::InvalidValue("negative fee"))
}

/// Sums a subtotal and its fee.
///
/// Pure and idempotent: recomputing from the same inputs always yields the
/// same value.
///
/// # Errors
///
/// Returns `ArithmeticError::Overflow` on overflow.
pub fn total(subtotal: FiatAmount, fee: FiatAmount) -> ArithmeticResult<FiatAmount> {
    subtotal.safe_add(fee)
}

/// Projects a simple-interest staking reward.
///
/// `reward = principal × (apy / 100) × (days / 365)`. APY is flat, not
/// compounded.
///
/// # Errors
///
/// Returns an arithmetic error on overflow or a negative APY.
pub fn staking_reward(
    principal: Quantity,
    apy_percent: Decimal,
    period_days: u32,
) -> ArithmeticResult<Quantity> {
    if apy_percent.is_sign_negative() {
        return Err(ArithmeticError::InvalidValue("negative apy"));
    }
    let rate = apy_percent.safe_div(Decimal::ONE_HUNDRED)?;
    let period_fraction = Decimal::from(period_days).safe_div(DAYS_PER_YEAR)?;
    let raw = principal
        .value()
        .safe_mul(rate)?
        .safe_mul(period_fraction)?;
    Quantity::new(raw).map_err(|_| ArithmeticError::InvalidValue("negative reward"))
}
