use std::sync::Arc;

use tracing::{debug, warn};

use super::{Account, AccountBase, sealed::HasBase};
use crate::{
    domain::{AccountKind, AccountOwner},
    errors::ValidationError,
    rules,
};

pub const DEFAULT_WITHDRAW_FEE: f64 = 0.25;

/// Account charging a fixed fee on every withdrawal. No month-end processing.
#[derive(Debug, PartialEq)]
pub struct CheckingAccount {
    base: AccountBase,
    withdraw_fee: f64,
}

impl CheckingAccount {
    pub fn new(
        owner: Arc<AccountOwner>,
        opening_balance: f64,
        withdraw_fee: f64,
    ) -> Result<Self, ValidationError> {
        let base = AccountBase::open(owner, opening_balance)?;
        rules::ensure_non_negative(withdraw_fee, ValidationError::NegativeWithdrawFee)?;
        Ok(Self { base, withdraw_fee })
    }
    pub fn with_default_fee(
        owner: Arc<AccountOwner>,
        opening_balance: f64,
    ) -> Result<Self, ValidationError> {
        Self::new(owner, opening_balance, DEFAULT_WITHDRAW_FEE)
    }
    pub fn withdraw_fee(&self) -> f64 {
        self.withdraw_fee
    }
}

impl HasBase for CheckingAccount {
    fn base(&self) -> &AccountBase {
        &self.base
    }
    fn base_mut(&mut self) -> &mut AccountBase {
        &mut self.base
    }
}

impl Account for CheckingAccount {
    fn kind(&self) -> AccountKind {
        AccountKind::Checking
    }

    fn withdraw(&mut self, amount: f64) -> Result<(), ValidationError> {
        // The fee must be covered too, checked before anything is deducted.
        let checked = rules::ensure_positive(amount).and_then(|()| {
            rules::ensure_sufficient(self.base.exact_balance(), amount + self.withdraw_fee)
        });
        if let Err(e) = checked {
            warn!(
                owner = %self.owner().id(),
                amount,
                fee = self.withdraw_fee,
                "checking withdrawal rejected: {e}"
            );
            return Err(e);
        }
        self.base.debit(self.withdraw_fee);
        self.base.debit(amount);
        debug!(
            owner = %self.owner().id(),
            amount,
            fee = self.withdraw_fee,
            balance = self.balance(),
            "checking withdrawal applied"
        );
        Ok(())
    }

    fn apply_month_end(&mut self) {}
}
