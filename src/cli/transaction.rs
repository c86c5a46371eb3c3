//! Transaction CLI commands
//!
//! Adding, deleting and listing transactions.

use chrono::NaiveDate;
use clap::Subcommand;
use log::info;

use crate::config::Settings;
use crate::display::{format_day, format_transaction_details, format_transaction_register};
use crate::error::{KathaError, KathaResult};
use crate::models::{Month, NewTransaction, TransactionId, TransactionType};
use crate::reports::{daily_transactions, month_transactions};
use crate::storage::{Backend, TransactionStore};

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Amount, e.g. "42.50"
        amount: String,
        /// Category label
        category: String,
        /// Free-text description
        description: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// income or expense, defaults to the configured type
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
    },
    /// Delete a transaction by id or short id
    #[command(alias = "rm")]
    Delete {
        /// Transaction ID
        id: String,
    },
    /// List transactions
    #[command(alias = "ls")]
    List {
        /// Only show this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<Month>,
    },
    /// Show the transactions of one day
    Day {
        /// Date (YYYY-MM-DD), defaults to today
        date: Option<NaiveDate>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID or short id
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command<B: Backend>(
    store: &mut TransactionStore<B>,
    settings: &Settings,
    cmd: TransactionCommands,
) -> KathaResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            amount,
            category,
            description,
            date,
            kind,
        } => {
            let candidate = build_candidate(
                &amount,
                &category,
                &description,
                date.unwrap_or_else(today),
                kind.unwrap_or(settings.default_type),
            )?;

            let id = store.add(candidate)?;
            info!("Added transaction {}", id);

            if let Some(txn) = store.get(&id) {
                println!("Added transaction:");
                print!("{}", format_transaction_details(txn, symbol));
            }
        }

        TransactionCommands::Delete { id } => {
            let target = match store.find(&id) {
                Some(txn) => txn.id.clone(),
                None => TransactionId::from_raw(id.as_str()),
            };

            if store.delete(&target)? {
                println!("Deleted transaction: {}", target);
            } else {
                println!("{}", KathaError::transaction_not_found(id));
            }
        }

        TransactionCommands::List { month } => {
            let shown: Vec<_> = match month {
                Some(month) => month_transactions(store.transactions(), month.first_day()),
                None => store.transactions().iter().collect(),
            };

            print!("{}", format_transaction_register(&shown, symbol));
            println!("\nShowing {} of {} transactions", shown.len(), store.len());
        }

        TransactionCommands::Day { date } => {
            let day = date.unwrap_or_else(today);
            let shown = daily_transactions(store.transactions(), day);
            print!("{}", format_day(day, &shown, symbol));
        }

        TransactionCommands::Show { id } => {
            let txn = store
                .find(&id)
                .ok_or_else(|| KathaError::transaction_not_found(&id))?;
            print!("{}", format_transaction_details(txn, symbol));
        }
    }

    Ok(())
}

/// Validate form input and build the add candidate
///
/// Category and description must be non-blank. The amount is not validated:
/// text that does not parse becomes NaN.
pub fn build_candidate(
    amount: &str,
    category: &str,
    description: &str,
    date: NaiveDate,
    kind: TransactionType,
) -> KathaResult<NewTransaction> {
    let category = category.trim();
    if category.is_empty() {
        return Err(KathaError::Validation("Category is required".into()));
    }

    let description = description.trim();
    if description.is_empty() {
        return Err(KathaError::Validation("Description is required".into()));
    }

    Ok(NewTransaction::new(
        date,
        kind,
        NewTransaction::parse_amount(amount),
        category,
        description,
    ))
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
