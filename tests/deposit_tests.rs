mod common;

use common::{checking, savings};
use piggybank::{Account, ValidationError};

#[test]
fn deposit_increases_balance_by_amount() {
    let mut account = savings(100.0, 0.01);
    account.deposit(50.0).unwrap();
    assert_eq!(account.balance(), 150.0);

    let mut account = checking(0.0, 0.25);
    account.deposit(0.75).unwrap();
    assert_eq!(account.balance(), 0.75);
}

#[test]
fn multiple_deposits_accumulate() {
    let mut account = checking(0.0, 0.25);
    for _ in 0..4 {
        account.deposit(10.0).unwrap();
    }
    assert_eq!(account.balance(), 40.0);
}

/// Zero and negative deposits fail and leave the balance alone.
#[test]
fn non_positive_deposit_is_rejected() {
    let mut account = savings(20.0, 0.01);
    for amount in [0.0, -0.0, -1.0, f64::NAN] {
        let err = account.deposit(amount).unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveAmount);
        assert_eq!(err.to_string(), "amount must be positive");
        assert_eq!(account.balance(), 20.0);
    }

    let mut account = checking(20.0, 0.25);
    assert!(account.deposit(-5.0).is_err());
    assert_eq!(account.balance(), 20.0);
}

#[test]
fn deposits_have_no_upper_bound() {
    let mut account = savings(0.0, 0.0);
    account.deposit(1.0e12).unwrap();
    assert_eq!(account.balance(), 1.0e12);
}
