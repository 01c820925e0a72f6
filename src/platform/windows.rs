// PassForge platform paths for Windows
// Config: %APPDATA%/PassForge
// Data:   %APPDATA%/PassForge

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for PassForge on Windows.
/// `%APPDATA%/PassForge`
pub fn get_config_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("PassForge")
}

/// Returns the data directory for PassForge on Windows.
/// `%APPDATA%/PassForge`
pub fn get_data_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("PassForge")
}
