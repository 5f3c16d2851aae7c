//! Platform-specific paths for Tubelens
//!
//! - macOS: ~/Library/Application Support/Tubelens
//! - Windows: %APPDATA%\Tubelens
//! - Linux: ~/.config/tubelens

use std::path::PathBuf;
use tracing::debug;

const APP_DIR_NAME: &str = if cfg!(target_os = "linux") {
    "tubelens"
} else {
    "Tubelens"
};

/// Returns the configuration directory, falling back to the working
/// directory when the platform has no notion of one.
pub fn config_dir() -> PathBuf {
    let dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME);
    debug!("Config directory: {:?}", dir);
    dir
}

/// Location of the settings file
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}
