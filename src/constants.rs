//! Application-wide constants
//!
//! Directory names, environment variable names and the literal pieces the
//! display name is assembled from.

/// Directory name used under the platform config directory
pub const APP_DIR_NAME: &str = "display_name";

/// Config file name inside the app directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default log file name
pub const LOG_FILE_NAME: &str = "display_name.log";

/// Default tracing directive when `RUST_LOG` does not say otherwise
pub const DEFAULT_LOG_DIRECTIVE: &str = "display_name=info";

/// Environment variable names that override config file values
pub mod env {
    /// Overrides `default_convention`
    pub const CONVENTION: &str = "DISPLAY_NAME_CONVENTION";

    /// Overrides `log_file_path`
    pub const LOG_FILE: &str = "DISPLAY_NAME_LOG_FILE";
}

/// Literal text inserted between name segments
pub mod separators {
    /// Space placed before every prefix or surname segment
    pub const SEGMENT: char = ' ';

    /// Placed between the two surname halves of a combined convention.
    /// The next segment supplies the space after the hyphen.
    pub const SURNAME_PAIR: &str = " -";
}

/// Argument value meaning "read from stdin"
pub const STDIN_PATH: &str = "-";
