use thiserror::Error;

/// Errors from the layers around the formatter. Formatting itself never fails.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse name input: {0}")]
    InputParse(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an input error with context
    pub fn input_error(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Whether the error was caused by what the user passed in rather than
    /// by the environment (file system, logging).
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AppError::InputParse(_) | AppError::Input(_) | AppError::Config(_)
        )
    }
}
