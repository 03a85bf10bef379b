use std::sync::Arc;

use tracing::{debug, warn};

use super::{Account, AccountBase, sealed::HasBase};
use crate::{
    domain::{AccountKind, AccountOwner},
    errors::ValidationError,
    rules,
};

pub const DEFAULT_INTEREST_RATE: f64 = 0.01;

/// Interest-bearing account that never overdraws.
#[derive(Debug, PartialEq)]
pub struct SavingsAccount {
    base: AccountBase,
    interest_rate: f64,
}

impl SavingsAccount {
    pub fn new(
        owner: Arc<AccountOwner>,
        opening_balance: f64,
        interest_rate: f64,
    ) -> Result<Self, ValidationError> {
        let base = AccountBase::open(owner, opening_balance)?;
        rules::ensure_non_negative(interest_rate, ValidationError::NegativeInterestRate)?;
        Ok(Self {
            base,
            interest_rate,
        })
    }
    pub fn with_default_rate(
        owner: Arc<AccountOwner>,
        opening_balance: f64,
    ) -> Result<Self, ValidationError> {
        Self::new(owner, opening_balance, DEFAULT_INTEREST_RATE)
    }
    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }
}

impl HasBase for SavingsAccount {
    fn base(&self) -> &AccountBase {
        &self.base
    }
    fn base_mut(&mut self) -> &mut AccountBase {
        &mut self.base
    }
}

impl Account for SavingsAccount {
    fn kind(&self) -> AccountKind {
        AccountKind::Savings
    }

    fn withdraw(&mut self, amount: f64) -> Result<(), ValidationError> {
        let checked = rules::ensure_positive(amount)
            .and_then(|()| rules::ensure_sufficient(self.base.exact_balance(), amount));
        if let Err(e) = checked {
            warn!(owner = %self.owner().id(), amount, "savings withdrawal rejected: {e}");
            return Err(e);
        }
        self.base.debit(amount);
        debug!(
            owner = %self.owner().id(),
            amount,
            balance = self.balance(),
            "savings withdrawal applied"
        );
        Ok(())
    }

    /// Credits one period of simple interest on the current unrounded balance.
    /// Calling it twice compounds twice.
    fn apply_month_end(&mut self) {
        let interest = self.base.exact_balance() * self.interest_rate;
        self.base.credit(interest);
        debug!(
            owner = %self.owner().id(),
            interest,
            balance = self.balance(),
            "interest credited"
        );
    }
}
