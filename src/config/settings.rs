//! User settings for Katha
//!
//! Persisted as `config.json` in the base directory. Missing fields fall
//! back to defaults so older files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::KathaPaths;
use crate::error::KathaError;
use crate::models::TransactionType;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Symbol printed in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Whether store mutations are appended to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Type used by `add` when none is given
    #[serde(default)]
    pub default_type: TransactionType,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            audit_enabled: default_audit_enabled(),
            default_type: TransactionType::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &KathaPaths) -> Result<Self, KathaError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Defaults are not written until the caller saves them
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| KathaError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| KathaError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &KathaPaths) -> Result<(), KathaError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| KathaError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| KathaError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
