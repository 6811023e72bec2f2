//! Where the config file and logs live on disk.
//!
//! Everything is kept in one app directory under the platform config
//! directory: `<config dir>/display_name/config.toml` and
//! `<config dir>/display_name/logs/`.

use std::path::{Path, PathBuf};

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};

/// Name of the log directory inside the app directory
const LOG_DIR_NAME: &str = "logs";

/// Returns the app directory for a given base config directory.
///
/// # Arguments
/// * `base` - The platform config directory, or `None` when it can't be determined
///
/// # Returns
/// * `PathBuf` - `<base>/display_name`, or `./display_name` without a base
pub fn app_dir_in(base: Option<PathBuf>) -> PathBuf {
    base.unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(APP_DIR_NAME)
}

/// Returns the app directory under the platform config directory.
///
/// Follows `XDG_CONFIG_HOME` on Linux, `~/Library/Application Support`
/// on macOS and `%APPDATA%` on Windows.
pub fn app_dir() -> PathBuf {
    app_dir_in(dirs::config_dir())
}

/// Returns the platform-specific path for the config file.
///
/// # Returns
/// String containing the path to `config.toml` in the app directory
pub fn get_config_path() -> String {
    app_dir().join(CONFIG_FILE_NAME).to_string_lossy().to_string()
}

/// Returns the platform-specific path for the log directory.
///
/// # Returns
/// String containing the path to the `logs` directory in the app directory
pub fn get_log_dir_path() -> String {
    app_dir().join(LOG_DIR_NAME).to_string_lossy().to_string()
}
