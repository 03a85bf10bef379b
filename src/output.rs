//! Writes account state for humans and as a CSV statement.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    account::Account,
    demo::DemoOutcome,
    domain::{AccountKind, OwnerId, cents},
};

/// One statement row: kind, owner, owner_id, balance.
#[derive(Debug, Serialize)]
struct StatementCsv<'a> {
    kind: AccountKind,
    owner: &'a str,
    owner_id: &'a OwnerId,
    balance: Option<Decimal>,
}

pub fn print_summary(
    outcome: &DemoOutcome,
    mut writer: impl std::io::Write,
) -> anyhow::Result<()> {
    writeln!(writer, "=== PiggyBank Demo ===")?;
    writeln!(
        writer,
        "Savings balance (after month end): {:.2}",
        outcome.savings.balance()
    )?;
    writeln!(
        writer,
        "Checking balance (after withdraw 4.0 + fee 0.5): {:.2}",
        outcome.checking.balance()
    )?;
    writer.flush()?;
    Ok(())
}

/// Balances that cannot be expressed as a `Decimal` are written as empty fields.
pub fn print_statement(
    accounts: &[&dyn Account],
    writer: impl std::io::Write,
) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for account in accounts {
        let owner = account.owner();
        let row = StatementCsv {
            kind: account.kind(),
            owner: owner.name(),
            owner_id: owner.id(),
            balance: cents(account.balance()),
        };
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
