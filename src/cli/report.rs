//! CLI commands for reports
//!
//! Every report is recomputed from the loaded transaction list.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_category_breakdown, format_ledger, format_monthly_stats};
use crate::models::{Month, Transaction, TransactionType};
use crate::reports::{monthly_stats, CategoryBreakdown, MonthLedger};

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Income, expense and balance for a month
    #[command(alias = "summary")]
    Stats {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<Month>,
    },

    /// Day-by-day ledger for a month
    Ledger {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<Month>,
    },

    /// Totals per category for a month
    Categories {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<Month>,

        /// income or expense
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: TransactionType,

        /// Show top N categories only
        #[arg(long)]
        top: Option<usize>,
    },
}

/// Handle a report command
pub fn handle_report_command(
    transactions: &[Transaction],
    settings: &Settings,
    cmd: ReportCommands,
) {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Stats { month } => {
            let month = month.unwrap_or_else(Month::current);
            let stats = monthly_stats(transactions, month.first_day());
            print!("{}", format_monthly_stats(month, &stats, symbol));
        }

        ReportCommands::Ledger { month } => {
            let month = month.unwrap_or_else(Month::current);
            let ledger = MonthLedger::generate(transactions, month);
            print!("{}", format_ledger(&ledger, symbol));
        }

        ReportCommands::Categories { month, kind, top } => {
            let month = month.unwrap_or_else(Month::current);
            let mut report = CategoryBreakdown::generate(transactions, month, kind);
            if let Some(n) = top {
                report = report.top(n);
            }
            print!("{}", format_category_breakdown(&report, symbol));
        }
    }
}
