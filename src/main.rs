use clap::{CommandFactory, Parser};

use piggybank::{demo, output};

fn main() -> anyhow::Result<()> {
    let args = Arguments::parse();
    if let Some(log_level) = args.log_level {
        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .init();
    }

    if !args.demo {
        Arguments::command().print_help()?;
        return Ok(());
    }

    let outcome = demo::run()?;
    if args.csv {
        output::print_statement(&outcome.accounts(), std::io::stdout())?;
    } else {
        output::print_summary(&outcome, std::io::stdout())?;
    }
    Ok(())
}

/// Tiny account demo with CLI
#[derive(Parser)]
#[command(name = "piggybank")]
struct Arguments {
    /// Run a short scenario for Savings & Checking
    #[arg(long)]
    demo: bool,
    /// Print the scenario's accounts as a CSV statement
    #[arg(long, requires = "demo")]
    csv: bool,
    #[arg(long)]
    log_level: Option<tracing::Level>,
}
