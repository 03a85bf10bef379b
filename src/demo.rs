//! The fixed demonstration scenario driven by `piggybank --demo`.

use std::sync::Arc;

use tracing::info;

use crate::{
    account::{Account, CheckingAccount, SavingsAccount},
    domain::AccountOwner,
    errors::PiggyBankError,
};

/// Accounts as they stand once the scenario has run.
#[derive(Debug)]
pub struct DemoOutcome {
    pub savings: SavingsAccount,
    pub checking: CheckingAccount,
}

impl DemoOutcome {
    pub fn accounts(&self) -> [&dyn Account; 2] {
        [&self.savings, &self.checking]
    }
}

/// Alice's savings: open 100.00 at 2%, deposit 50, withdraw 25, month end.
/// Bob's checking: open 10.00 with a 0.50 fee, withdraw 4.
pub fn run() -> Result<DemoOutcome, PiggyBankError> {
    let alice = Arc::new(AccountOwner::new("Alice", "A1"));
    let mut savings = SavingsAccount::new(alice, 100.0, 0.02)?;
    savings.deposit(50.0)?;
    savings.withdraw(25.0)?;
    savings.apply_month_end();
    info!(balance = savings.balance(), "savings scenario finished");

    let bob = Arc::new(AccountOwner::new("Bob", "B1"));
    let mut checking = CheckingAccount::new(bob, 10.0, 0.5)?;
    checking.withdraw(4.0)?;
    info!(balance = checking.balance(), "checking scenario finished");

    Ok(DemoOutcome { savings, checking })
}
