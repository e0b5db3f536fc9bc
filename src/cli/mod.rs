//! `pocketbook_cli`: a thin terminal front end over the services.

pub mod commands;
pub mod output;

use std::{path::PathBuf, sync::Arc};

use clap::{Parser, Subcommand, ValueEnum};
use pocketbook_config::ConfigManager;
use pocketbook_core::{Clock, SystemClock};
use pocketbook_domain::{ExpenseTag, PeriodKey, TransactionKind};

use crate::{errors::PocketbookError, store::open_store};

/// Track monthly budgets, income and expenses.
#[derive(Parser, Debug)]
#[command(name = "pocketbook_cli", version, about, long_about = None)]
pub struct Cli {
    /// Data file to use instead of the configured one
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Configuration file to read
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the monthly overview
    Summary {
        /// Month as YYYY-MM; defaults to the current month
        #[arg(long, value_parser = parse_period)]
        month: Option<PeriodKey>,
        /// Print the overview as JSON
        #[arg(long)]
        json: bool,
    },
    /// Record a transaction
    Add {
        #[arg(value_enum)]
        kind: KindArg,
        amount: f64,
        #[arg(long, value_parser = parse_tag, default_value = "Others")]
        tag: ExpenseTag,
        /// Date of the transaction; defaults to today
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        note: Option<String>,
    },
    /// List transactions for a month, newest first
    List {
        #[arg(long, value_parser = parse_period)]
        month: Option<PeriodKey>,
        #[arg(long, value_parser = parse_tag)]
        tag: Option<ExpenseTag>,
        /// Case-insensitive text matched against notes and tags
        #[arg(long)]
        search: Option<String>,
    },
    /// Delete a transaction by id
    Delete { id: String },
    /// Set the budget for a month
    Budget {
        amount: f64,
        #[arg(long, default_value_t = 0.0)]
        income: f64,
        #[arg(long, value_parser = parse_period)]
        month: Option<PeriodKey>,
    },
    /// Show savings goals and the available balance
    Goals,
    /// Create a savings goal
    GoalAdd {
        name: String,
        target: f64,
        #[arg(long)]
        color: Option<String>,
    },
    /// Allocate funds to a savings goal
    GoalFund { id: String, amount: f64 },
    /// Remove a savings goal
    GoalDelete { id: String },
    /// Show or change settings
    Config {
        /// Locale such as en-US or en-IN; controls digit grouping
        #[arg(long)]
        locale: Option<String>,
        /// ISO currency code; also resets the symbol
        #[arg(long)]
        currency: Option<String>,
        /// Symbol printed before amounts
        #[arg(long)]
        symbol: Option<String>,
        /// Enable or disable coloured output
        #[arg(long)]
        color: Option<bool>,
    },
    /// Print build information
    Version,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for TransactionKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Income => TransactionKind::Income,
            KindArg::Expense => TransactionKind::Expense,
        }
    }
}

fn parse_period(raw: &str) -> Result<PeriodKey, String> {
    raw.parse::<PeriodKey>().map_err(|err| err.to_string())
}

fn parse_tag(raw: &str) -> Result<ExpenseTag, String> {
    raw.parse::<ExpenseTag>().map_err(|err| err.to_string())
}

/// Parses process arguments and runs the selected command.
pub fn run_cli() -> Result<(), PocketbookError> {
    run(Cli::parse(), Arc::new(SystemClock))
}

/// Runs an already-parsed command line against `clock`.
pub fn run(cli: Cli, clock: Arc<dyn Clock>) -> Result<(), PocketbookError> {
    let manager = match &cli.config {
        Some(path) => ConfigManager::new(path.clone()),
        None => ConfigManager::for_user()?,
    };
    let config = manager.load()?;

    if cli.no_color || !config.ui_color_enabled {
        colored::control::set_override(false);
    }

    let store = open_store(&config, cli.data.clone());
    let ctx = commands::CommandContext::new(store, clock, manager, config);
    commands::dispatch(&ctx, cli.command)
}
