// PassForge platform paths for Linux
// Config: ~/.config/passforge
// Data:   ~/.local/share/passforge

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for PassForge on Linux.
/// Uses `$XDG_CONFIG_HOME/passforge` if set, otherwise `~/.config/passforge`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("passforge")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("passforge")
    }
}

/// Returns the data directory for PassForge on Linux.
/// Uses `$XDG_DATA_HOME/passforge` if set, otherwise `~/.local/share/passforge`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("passforge")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("passforge")
    }
}
