// PassForge platform paths for macOS
// Config: ~/Library/Application Support/PassForge
// Data:   ~/Library/Application Support/PassForge

use std::env;
use std::path::PathBuf;

/// Returns the home directory on macOS.
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the configuration directory for PassForge on macOS.
/// `~/Library/Application Support/PassForge`
pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("PassForge")
}

/// Returns the data directory for PassForge on macOS.
/// `~/Library/Application Support/PassForge`
pub fn get_data_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("PassForge")
}
