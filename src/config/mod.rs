use crate::constants::{LOG_FILE_NAME, env};
use crate::error::AppError;
use crate::name::Convention;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Convention used when a name is given on the command line without `--convention`.
    #[serde(default)]
    pub default_convention: Convention,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing config file yields the defaults. Environment variables
    /// override config file values.
    ///
    /// # Environment Variables
    /// - `DISPLAY_NAME_CONVENTION` - Override the default convention code
    /// - `DISPLAY_NAME_LOG_FILE` - Override log file path
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Config file unreadable, malformed or invalid
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            tracing::debug!("No config file at {config_path}, using defaults");
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads the config file as stored, without environment overrides.
    /// A missing config file yields the defaults.
    ///
    /// Use this before changing and saving the configuration, so values
    /// that only come from the environment never get written to the file.
    pub async fn load_stored() -> Result<Self, AppError> {
        Self::load_stored_from_path(&get_config_path()).await
    }

    /// Like [`Config::load_stored`], for a custom file path.
    pub async fn load_stored_from_path(path: &str) -> Result<Self, AppError> {
        if Path::new(path).exists() {
            Self::load_from_path(path).await
        } else {
            Ok(Config::default())
        }
    }

    /// Loads the stored config for editing. An unreadable or malformed
    /// file is replaced by the defaults so a config change can repair it.
    pub async fn load_stored_or_default() -> Self {
        Self::load_stored_or_default_from_path(&get_config_path()).await
    }

    pub async fn load_stored_or_default_from_path(path: &str) -> Self {
        Self::load_stored_from_path(path).await.unwrap_or_else(|e| {
            tracing::warn!("Replacing unreadable config file {path}: {e}");
            Config::default()
        })
    }

    /// Sets the default convention from a code.
    ///
    /// Unlike formatting, which treats unknown codes as `B`, a stored
    /// default must name one of the conventions.
    ///
    /// # Errors
    /// * `AppError::Config` - The code is not `B`, `P`, `BP` or `PB`
    pub fn set_default_convention_code(&mut self, code: &str) -> Result<(), AppError> {
        if !Convention::is_recognized_code(code) {
            return Err(AppError::config_error(format!(
                "Unknown convention code '{code}', expected one of B, P, BP, PB"
            )));
        }
        self.default_convention = Convention::from_code(code);
        Ok(())
    }

    /// Replaces values with those set in the environment, if any.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(code) = std::env::var(env::CONVENTION) {
            if !Convention::is_recognized_code(&code) {
                tracing::warn!(
                    "{} is set to unrecognized code {code:?}, using {}",
                    env::CONVENTION,
                    Convention::Own
                );
            }
            self.default_convention = Convention::from_code(&code);
        }

        if let Ok(log_file_path) = std::env::var(env::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.log_file_path)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Shows the defaults when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        if !Path::new(&config_path).exists() {
            println!("(Not created yet, showing defaults)");
        }
        println!("────────────────────────────────────");
        println!("Default Convention:");
        println!(
            "{} ({})",
            config.default_convention,
            config.default_convention.description()
        );
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{LOG_FILE_NAME}");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        tracing::info!("Saved configuration to {path}");
        Ok(())
    }

    /// Loads configuration from a custom file path without applying
    /// environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
