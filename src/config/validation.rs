use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Arguments
/// * `log_file_path` - Optional log file path to validate
///
/// # Validation Rules
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
///
/// The default convention needs no check: every code maps to a convention.
pub fn validate_config(log_file_path: &Option<String>) -> Result<(), AppError> {
    if let Some(log_path) = log_file_path {
        if log_path.trim().is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
