//! Command-line front end: argument parsing, config merging and the
//! build / print / find demonstration the `hashledger` binary runs.

use crate::blockchain::{validate_linkage, Block, BlockHash, Chain};
use crate::config::{load_config, Config, DEFAULT_CONFIG_PATH};
use crate::error::Result;
use crate::render::{chain_table, path_table};
use crate::transaction::{RandomTransactionSource, TransactionSource};
use clap::Parser;
use colored::*;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(author, version, about = "Build a hash-linked ledger and walk it back from a head block", long_about = None)]
pub struct Cli {
    /// Number of blocks to append (at least 10)
    pub blocks: Option<usize>,

    /// Upper bound on transactions per block (at least 6)
    pub max_transactions: Option<usize>,

    /// Seed for the transaction generator; omit for OS entropy
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a TOML config file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Start the reconstruction from this block id instead of the tip
    #[arg(long, value_name = "0xHEX")]
    pub head: Option<BlockHash>,

    /// Print the chain, head and reconstructed path as JSON only
    #[arg(long)]
    pub json: bool,

    /// Plain tables without colors or borders
    #[arg(long)]
    pub plain: bool,

    /// trace|debug|info|warn|error
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Effective run parameters once CLI flags are laid over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub blocks: usize,
    pub max_transactions: usize,
    pub seed: Option<u64>,
    pub head: Option<BlockHash>,
    pub json: bool,
    pub plain: bool,
    pub log_level: String,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        let mut ledger = config.ledger.clone();
        if let Some(blocks) = cli.blocks {
            ledger.blocks = blocks;
        }
        if let Some(max_transactions) = cli.max_transactions {
            ledger.max_transactions = max_transactions;
        }

        Settings {
            blocks: ledger.effective_blocks(),
            max_transactions: ledger.effective_max_transactions(),
            seed: cli.seed.or(ledger.seed),
            head: cli.head,
            json: cli.json,
            plain: cli.plain,
            log_level: cli
                .log_level
                .clone()
                .unwrap_or_else(|| config.logging.level.clone()),
        }
    }

    pub fn load(cli: &Cli) -> Result<Self> {
        let config = load_config(&cli.config)?;
        Ok(Settings::resolve(cli, &config))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub chain: Chain,
    pub head: BlockHash,
    pub path: Vec<Block>,
}

/// Append `blocks` batches from `source` to a fresh chain.
pub fn build_chain<S: TransactionSource + ?Sized>(blocks: usize, source: &mut S) -> Chain {
    let mut chain = Chain::new();
    for _ in 0..blocks {
        chain.add_from(source);
    }
    chain
}

/// Build, validate and reconstruct, without printing anything.
pub fn run_with_source<S: TransactionSource + ?Sized>(
    settings: &Settings,
    source: &mut S,
) -> Result<Report> {
    let chain = build_chain(settings.blocks, source);
    validate_linkage(chain.get_blocks())?;
    info!(blocks = chain.len(), "chain built and validated");

    let head = match (settings.head, chain.tip()) {
        (Some(head), _) => head,
        (None, Some(tip)) => tip.current_hash(),
        (None, None) => BlockHash::GENESIS,
    };

    let path = chain.find_from(head)?;
    if path.is_empty() {
        warn!(%head, "head block not found in chain");
    } else {
        info!(%head, length = path.len(), "reconstructed path");
    }

    Ok(Report { chain, head, path })
}

pub fn run(settings: &Settings) -> Result<Report> {
    let mut source = match settings.seed {
        Some(seed) => RandomTransactionSource::with_seed(settings.max_transactions, seed),
        None => RandomTransactionSource::new(settings.max_transactions),
    };
    run_with_source(settings, &mut source)
}

/// Whole report (chain, head, path) as pretty JSON.
pub fn report_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// With `--json` stdout carries only the JSON document.
pub fn print_report(report: &Report, settings: &Settings) -> Result<()> {
    if settings.json {
        println!("{}", report_json(report)?);
        return Ok(());
    }

    if settings.plain {
        colored::control::set_override(false);
    }

    println!();
    println!("{}", "Blockchain".bright_cyan().bold());
    println!("{}", chain_table(report.chain.get_blocks(), settings.plain));
    println!();

    println!(
        "{}",
        format!("Block vector from {}", report.head).bright_cyan().bold()
    );
    if report.path.is_empty() {
        println!("{}", "No block with that id.".yellow());
    } else {
        println!("{}", path_table(&report.path, settings.plain));
    }
    println!();
    Ok(())
}
