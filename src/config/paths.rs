//! Where Katha keeps its files
//!
//! Everything lives under one base directory: `KATHA_DATA_DIR` when set,
//! otherwise `katha/` under the XDG config home (`~/.config` as fallback),
//! or under `%APPDATA%` on Windows.
//!
//! ```text
//! <base>/config.json
//! <base>/audit.log
//! <base>/data/transactions.json
//! ```

use std::path::PathBuf;

use crate::error::KathaError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "KATHA_DATA_DIR";

/// Resolved file locations
#[derive(Debug, Clone)]
pub struct KathaPaths {
    base_dir: PathBuf,
}

impl KathaPaths {
    /// Resolve the base directory from the environment
    ///
    /// Fails with `Config` when neither the override nor a home directory is set.
    pub fn new() -> Result<Self, KathaError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self::with_base_dir(base_dir))
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Holds the transaction document
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// The persisted transaction list
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    pub fn ensure_directories(&self) -> Result<(), KathaError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| KathaError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| KathaError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, KathaError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                KathaError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("katha"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, KathaError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| KathaError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("katha"))
}
