use std::sync::Arc;

use piggybank::{AccountOwner, CheckingAccount, SavingsAccount};

pub fn alice() -> Arc<AccountOwner> {
    Arc::new(AccountOwner::new("Alice", "A1"))
}

#[allow(dead_code)]
pub fn savings(opening_balance: f64, interest_rate: f64) -> SavingsAccount {
    SavingsAccount::new(alice(), opening_balance, interest_rate).unwrap()
}

#[allow(dead_code)]
pub fn checking(opening_balance: f64, withdraw_fee: f64) -> CheckingAccount {
    CheckingAccount::new(alice(), opening_balance, withdraw_fee).unwrap()
}
