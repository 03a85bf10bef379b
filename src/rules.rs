//! Stateless checks shared by every account variant.
//!
//! Thresholds are strict: an amount of exactly zero is rejected, and an amount
//! equal to the balance is covered.

use crate::errors::ValidationError;

/// Fails unless `amount > 0`. NaN is rejected as well.
pub fn ensure_positive(amount: f64) -> Result<(), ValidationError> {
    if amount.is_nan() || amount <= 0.0 {
        return Err(ValidationError::NonPositiveAmount);
    }
    Ok(())
}

/// Fails when `amount` exceeds `balance`.
pub fn ensure_sufficient(balance: f64, amount: f64) -> Result<(), ValidationError> {
    if amount > balance {
        return Err(ValidationError::InsufficientFunds);
    }
    Ok(())
}

/// Construction-time guard for opening balances, rates and fees.
pub fn ensure_non_negative(value: f64, error: ValidationError) -> Result<(), ValidationError> {
    if value.is_nan() || value < 0.0 {
        return Err(error);
    }
    Ok(())
}
