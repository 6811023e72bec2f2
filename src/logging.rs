use crate::cli::Args;
use crate::config::Config;
use crate::constants::{DEFAULT_LOG_DIRECTIVE, LOG_FILE_NAME};
use crate::error::AppError;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Splits the log file location into directory and file name.
///
/// `--log-file` wins over the configured path; without either the default
/// log directory and file name are used.
pub fn resolve_log_location(args: &Args, config: &Config) -> (String, String) {
    let custom_log_path = args.log_file.as_ref().or(config.log_file_path.as_ref());
    match custom_log_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(LOG_FILE_NAME);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), LOG_FILE_NAME.to_string()),
    }
}

fn env_filter() -> Result<EnvFilter, AppError> {
    let directive = DEFAULT_LOG_DIRECTIVE
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Sets up logging for the application.
///
/// - Always logs to a daily rolling file
/// - With `--debug`, also logs to stderr so stdout only carries display names
/// - Creates the log directory if it doesn't exist
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args, config: &Config) -> Result<(String, WorkerGuard), AppError> {
    let (log_dir, log_file_name) = resolve_log_location(args, config);

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must outlive every log call or buffered lines are lost
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(env_filter()?);

    let stderr_layer = if args.debug {
        Some(
            fmt::Layer::new()
                .with_writer(std::io::stderr)
                .with_ansi(true)
                .with_filter(env_filter()?),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| AppError::log_setup_error(format!("Failed to install subscriber: {e}")))?;

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_default_location() {
        let (dir, file) = resolve_log_location(&Args::default(), &Config::default());
        assert_eq!(dir, Config::get_log_dir_path());
        assert_eq!(file, LOG_FILE_NAME);
    }

    #[test]
    fn test_resolve_config_location() {
        let config = Config {
            log_file_path: Some("/var/log/names/app.log".to_string()),
            ..Config::default()
        };
        let (dir, file) = resolve_log_location(&Args::default(), &config);
        assert_eq!(dir, "/var/log/names");
        assert_eq!(file, "app.log");
    }

    #[test]
    fn test_resolve_argument_wins_over_config() {
        let args = Args {
            log_file: Some("/tmp/cli.log".to_string()),
            ..Args::default()
        };
        let config = Config {
            log_file_path: Some("/var/log/names/app.log".to_string()),
            ..Config::default()
        };
        let (dir, file) = resolve_log_location(&args, &config);
        assert_eq!(dir, "/tmp");
        assert_eq!(file, "cli.log");
    }

    #[test]
    fn test_resolve_bare_file_name() {
        let args = Args {
            log_file: Some("names.log".to_string()),
            ..Args::default()
        };
        let (dir, file) = resolve_log_location(&args, &Config::default());
        assert_eq!(dir, ".");
        assert_eq!(file, "names.log");
    }
}
