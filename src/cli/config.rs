//! `config` command: show paths and settings, optionally change settings

use clap::Args;

use crate::audit::AuditLogger;
use crate::config::{KathaPaths, Settings};
use crate::error::{KathaError, KathaResult};
use crate::models::TransactionType;

/// Settings that `config` can change
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Symbol printed in front of amounts
    #[arg(long)]
    pub currency: Option<String>,

    /// Type used by `add` when --type is not given
    #[arg(long)]
    pub default_type: Option<TransactionType>,

    /// Record store mutations in the audit log
    #[arg(long)]
    pub audit: Option<bool>,
}

impl ConfigArgs {
    fn is_empty(&self) -> bool {
        self.currency.is_none() && self.default_type.is_none() && self.audit.is_none()
    }
}

/// Apply any requested changes, save them, then print the configuration
pub fn handle_config_command(
    paths: &KathaPaths,
    settings: &mut Settings,
    args: ConfigArgs,
) -> KathaResult<()> {
    if !args.is_empty() {
        if let Some(currency) = args.currency {
            let currency = currency.trim();
            if currency.is_empty() {
                return Err(KathaError::Validation("Currency symbol cannot be blank".into()));
            }
            settings.currency_symbol = currency.to_string();
        }
        if let Some(kind) = args.default_type {
            settings.default_type = kind;
        }
        if let Some(audit) = args.audit {
            settings.audit_enabled = audit;
        }

        settings.save(paths)?;
        println!("Settings saved to {}", paths.settings_file().display());
        println!();
    }

    let audit = AuditLogger::new(paths.audit_log());

    println!("Katha Configuration");
    println!("===================");
    println!("Base directory:    {}", paths.base_dir().display());
    println!("Transactions file: {}", paths.transactions_file().display());
    println!("Settings file:     {}", paths.settings_file().display());
    println!("Audit log:         {}", audit.path().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:  {}", settings.currency_symbol);
    println!("  Default type:     {}", settings.default_type);
    println!("  Audit enabled:    {}", settings.audit_enabled);
    println!("  Audit entries:    {}", audit.entry_count()?);

    Ok(())
}
