use piggybank::{demo, output};

const SUMMARY: &str = "=== PiggyBank Demo ===
Savings balance (after month end): 127.50
Checking balance (after withdraw 4.0 + fee 0.5): 5.50
";

const STATEMENT: &str = "kind,owner,owner_id,balance
savings,Alice,A1,127.50
checking,Bob,B1,5.50
";

#[test]
fn demo_summary() -> anyhow::Result<()> {
    let outcome = demo::run()?;
    let mut output = Vec::new();

    output::print_summary(&outcome, &mut output)?;

    assert_eq!(String::from_utf8(output)?, SUMMARY);
    Ok(())
}

#[test]
fn demo_statement_csv() -> anyhow::Result<()> {
    let outcome = demo::run()?;
    let mut output = Vec::new();

    output::print_statement(&outcome.accounts(), &mut output)?;

    assert_eq!(String::from_utf8(output)?, STATEMENT);
    Ok(())
}
