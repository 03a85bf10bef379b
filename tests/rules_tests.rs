use piggybank::{ValidationError, rules};

#[test]
fn positive_amounts_pass() {
    assert_eq!(rules::ensure_positive(0.01), Ok(()));
    assert_eq!(rules::ensure_positive(f64::MIN_POSITIVE), Ok(()));
}

#[test]
fn zero_negative_and_nan_fail() {
    for amount in [0.0, -0.01, f64::NAN, f64::NEG_INFINITY] {
        assert_eq!(
            rules::ensure_positive(amount),
            Err(ValidationError::NonPositiveAmount)
        );
    }
}

/// An amount equal to the balance is covered.
#[test]
fn sufficiency_threshold_is_strict() {
    assert_eq!(rules::ensure_sufficient(10.0, 10.0), Ok(()));
    assert_eq!(rules::ensure_sufficient(10.0, 9.99), Ok(()));
    assert_eq!(
        rules::ensure_sufficient(10.0, 10.01),
        Err(ValidationError::InsufficientFunds)
    );
}

#[test]
fn non_negative_returns_given_error() {
    assert_eq!(
        rules::ensure_non_negative(0.0, ValidationError::NegativeWithdrawFee),
        Ok(())
    );
    assert_eq!(
        rules::ensure_non_negative(-1.0, ValidationError::NegativeWithdrawFee),
        Err(ValidationError::NegativeWithdrawFee)
    );
}
