/// Raised when a precondition on an amount, balance, rate or fee is violated.
/// The variant identifies the cause; `Display` is the message shown to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("amount must be positive")]
    NonPositiveAmount,
    #[error("insufficient funds")]
    InsufficientFunds,
    #[error("opening balance cannot be negative")]
    NegativeOpeningBalance,
    #[error("interest_rate cannot be negative")]
    NegativeInterestRate,
    #[error("withdraw_fee cannot be negative")]
    NegativeWithdrawFee,
}

/// Base error for everything the library reports.
#[derive(Debug, thiserror::Error)]
pub enum PiggyBankError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
