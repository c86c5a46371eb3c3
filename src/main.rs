use anyhow::Result;
use clap::{Parser, Subcommand};
use log::debug;

use katha::audit::AuditLogger;
use katha::cli::{
    handle_audit_command, handle_config_command, handle_data_command, handle_report_command,
    handle_transaction_command, ConfigArgs, DataCommands, ReportCommands, TransactionCommands,
};
use katha::config::{KathaPaths, Settings};
use katha::storage::{open_file_store, open_file_store_for_import};

#[derive(Parser)]
#[command(
    name = "katha",
    version,
    about = "Personal income and expense tracker",
    long_about = "Katha records dated income and expense entries and shows \
                  monthly totals, a day's entries and a day-by-day ledger. \
                  Data lives in a single JSON file that can be exported and \
                  imported as a backup."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    #[command(flatten)]
    Report(ReportCommands),

    #[command(flatten)]
    Data(DataCommands),

    /// Show the most recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        recent: usize,
    },

    /// Show configuration and paths, or change settings
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let paths = KathaPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    debug!("Using data directory {}", paths.data_dir().display());

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            let mut store = open_file_store(&paths, &settings)?;
            handle_transaction_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            let store = open_file_store(&paths, &settings)?;
            handle_report_command(store.transactions(), &settings, cmd);
        }
        Some(Commands::Data(cmd)) => {
            // An unreadable store never blocks import
            let mut store = match cmd {
                DataCommands::Import { .. } => open_file_store_for_import(&paths, &settings)?,
                DataCommands::Export { .. } => open_file_store(&paths, &settings)?,
            };
            handle_data_command(&mut store, cmd)?;
        }
        Some(Commands::Audit { recent }) => {
            handle_audit_command(&AuditLogger::new(paths.audit_log()), recent)?;
        }
        Some(Commands::Config(args)) => {
            handle_config_command(&paths, &mut settings, args)?;
        }
        None => {
            println!("Katha - personal income and expense tracker");
            println!();
            println!("Run 'katha --help' for usage information.");
        }
    }

    Ok(())
}
