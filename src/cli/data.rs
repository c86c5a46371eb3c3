//! CLI commands for backup export and import

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};
use log::info;

use crate::error::{KathaError, KathaResult};
use crate::export::{self, backup_filename};
use crate::storage::{Backend, TransactionStore};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON backup, importable again
    Json,
    /// CSV, for spreadsheets
    Csv,
}

/// Backup subcommands
#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Write all transactions to katha-backup-<date>.<ext>
    Export {
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Directory to write the backup into
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Exact output path, overrides --dir
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace all transactions with the contents of a JSON backup
    Import {
        /// Path to the backup file
        file: PathBuf,
    },
}

/// Handle a backup command
///
/// For `Import` the store may be unloaded; see
/// [`open_file_store_for_import`](crate::storage::open_file_store_for_import).
pub fn handle_data_command<B: Backend>(
    store: &mut TransactionStore<B>,
    cmd: DataCommands,
) -> KathaResult<()> {
    match cmd {
        DataCommands::Export {
            format,
            dir,
            output,
        } => {
            let today = chrono::Local::now().date_naive();

            let path = match format {
                ExportFormat::Json => {
                    let json = store.export_json()?;
                    match output {
                        Some(path) => {
                            export::json::write_backup_to(&path, &json)?;
                            path
                        }
                        None => export::json::write_backup(&dir, today, &json)?,
                    }
                }
                ExportFormat::Csv => {
                    let path =
                        output.unwrap_or_else(|| dir.join(backup_filename(today, "csv")));
                    let file = File::create(&path).map_err(|e| {
                        KathaError::Export(format!(
                            "Failed to create file {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                    let mut writer = BufWriter::new(file);
                    export::export_transactions_csv(store.transactions(), &mut writer)?;
                    path
                }
            };

            info!("Exported {} transactions to {}", store.len(), path.display());
            println!(
                "Exported {} transactions to: {}",
                store.len(),
                path.display()
            );
        }

        DataCommands::Import { file } => {
            let text = fs::read_to_string(&file).map_err(|e| {
                KathaError::Io(format!("Failed to read {}: {}", file.display(), e))
            })?;

            let summary = store.import_json(&text)?;

            println!(
                "Imported {} transactions from {} (replaced {})",
                summary.imported,
                file.display(),
                summary.replaced
            );
            if summary.skipped > 0 {
                println!("Skipped {} malformed records", summary.skipped);
            }
        }
    }

    Ok(())
}
