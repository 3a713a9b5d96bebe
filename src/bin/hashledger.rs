#![forbid(unsafe_code)]
//! Build a ledger of random trades, print it, then rebuild it from its head.

use clap::Parser;
use colored::*;
use hashledger::cli::{print_report, run, Cli, Settings};
use hashledger::logging::init_logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let settings = Settings::load(&cli)?;
    init_logging(&settings.log_level)?;

    let report = run(&settings).map_err(|e| {
        eprintln!("{}", format!("❌ {}", e).red().bold());
        e
    })?;

    print_report(&report, &settings)?;
    Ok(())
}
