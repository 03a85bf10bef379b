//! Savings and checking accounts with validated deposits, withdrawals and
//! month-end processing.

pub mod account;
pub mod demo;
pub mod domain;
pub mod errors;
pub mod output;
pub mod rules;

pub use account::{Account, BankAccount, CheckingAccount, SavingsAccount};
pub use domain::{AccountKind, AccountOwner, OwnerId};
pub use errors::{PiggyBankError, ValidationError};
