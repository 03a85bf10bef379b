//! The account contract and the state every variant composes.
//!
//! Each variant embeds an [`AccountBase`] holding the owner and the unrounded
//! balance. The base only exposes its balance through a rounded read, and its
//! mutators are crate-private, so the operations on [`Account`] are the only
//! way a balance changes.

use std::sync::Arc;

use derive_more::{From, TryInto};
use tracing::debug;

use crate::{
    domain::{AccountKind, AccountOwner, round_cents},
    errors::ValidationError,
    rules,
};
pub use checking::{CheckingAccount, DEFAULT_WITHDRAW_FEE};
pub use savings::{DEFAULT_INTEREST_RATE, SavingsAccount};
use sealed::HasBase;

mod checking;
mod savings;

/// Owner and balance shared by every account variant.
#[derive(Debug, PartialEq)]
pub struct AccountBase {
    owner: Arc<AccountOwner>,
    balance: f64,
}

impl AccountBase {
    /// Fails when the opening balance is negative.
    pub(crate) fn open(
        owner: Arc<AccountOwner>,
        opening_balance: f64,
    ) -> Result<Self, ValidationError> {
        rules::ensure_non_negative(opening_balance, ValidationError::NegativeOpeningBalance)?;
        Ok(Self {
            owner,
            balance: opening_balance,
        })
    }
    pub fn owner(&self) -> &AccountOwner {
        &self.owner
    }
    /// Balance rounded to cents. The stored value keeps full precision.
    pub fn balance(&self) -> f64 {
        round_cents(self.balance)
    }
    pub(crate) fn exact_balance(&self) -> f64 {
        self.balance
    }
    pub(crate) fn credit(&mut self, amount: f64) {
        self.balance += amount;
    }
    pub(crate) fn debit(&mut self, amount: f64) {
        self.balance -= amount;
    }
}

mod sealed {
    use super::AccountBase;

    pub trait HasBase {
        fn base(&self) -> &AccountBase;
        fn base_mut(&mut self) -> &mut AccountBase;
    }
}

/// Operations every account supports. Implemented only inside this crate so
/// that every variant goes through [`AccountBase::open`].
///
/// A failed operation leaves the account exactly as it was.
pub trait Account: HasBase {
    fn kind(&self) -> AccountKind;

    /// Variant-specific withdrawal policy. Positivity and sufficiency are
    /// checked before the balance is touched.
    fn withdraw(&mut self, amount: f64) -> Result<(), ValidationError>;

    /// Variant-specific month-end processing. May do nothing.
    fn apply_month_end(&mut self);

    fn owner(&self) -> &AccountOwner {
        self.base().owner()
    }

    fn balance(&self) -> f64 {
        self.base().balance()
    }

    fn deposit(&mut self, amount: f64) -> Result<(), ValidationError> {
        rules::ensure_positive(amount)?;
        self.base_mut().credit(amount);
        debug!(
            kind = %self.kind(),
            owner = %self.owner().id(),
            amount,
            balance = self.balance(),
            "deposit applied"
        );
        Ok(())
    }
}

/// Either account variant, for callers that hold a mixed collection.
#[derive(Debug, PartialEq, From, TryInto)]
pub enum BankAccount {
    Savings(SavingsAccount),
    Checking(CheckingAccount),
}

impl HasBase for BankAccount {
    fn base(&self) -> &AccountBase {
        match self {
            BankAccount::Savings(account) => account.base(),
            BankAccount::Checking(account) => account.base(),
        }
    }
    fn base_mut(&mut self) -> &mut AccountBase {
        match self {
            BankAccount::Savings(account) => account.base_mut(),
            BankAccount::Checking(account) => account.base_mut(),
        }
    }
}

impl Account for BankAccount {
    fn kind(&self) -> AccountKind {
        match self {
            BankAccount::Savings(account) => account.kind(),
            BankAccount::Checking(account) => account.kind(),
        }
    }
    fn withdraw(&mut self, amount: f64) -> Result<(), ValidationError> {
        match self {
            BankAccount::Savings(account) => account.withdraw(amount),
            BankAccount::Checking(account) => account.withdraw(amount),
        }
    }
    fn apply_month_end(&mut self) {
        match self {
            BankAccount::Savings(account) => account.apply_month_end(),
            BankAccount::Checking(account) => account.apply_month_end(),
        }
    }
}
