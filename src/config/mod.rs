//! Configuration module for Katha
//!
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::KathaPaths;
pub use settings::Settings;
