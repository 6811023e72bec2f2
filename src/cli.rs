use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

use crate::config::Config;
use crate::error::AppError;
use crate::name::{Convention, NameRecord};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the arguments only touch configuration
pub fn is_config_operation(args: &Args) -> bool {
    args.list_config
        || args.new_convention.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// Display name formatter
///
/// Formats a person's display name from a nick name, family name and an
/// optional partner family name, following a surname convention:
///
///   B   Alexandra van der Wal
///   P   Alexandra de Vries
///   BP  Alexandra van der Wal - de Vries
///   PB  Alexandra de Vries - van der Wal
///
/// Names are given either with the name flags or as a JSON person document
/// with `--input`. Unrecognized convention codes format as `B`.
#[derive(Parser, Debug, Default)]
#[command(about, version, long_about, verbatim_doc_comment)]
#[command(styles = get_styles())]
pub struct Args {
    /// Given or display first name
    #[arg(short = 'n', long = "nick-name", help_heading = "Name")]
    pub nick_name: Option<String>,

    /// Particle before the own family name, e.g. "van der"
    #[arg(long = "prefix", help_heading = "Name")]
    pub family_name_prefix: Option<String>,

    /// Own family name
    #[arg(short = 'f', long = "family-name", help_heading = "Name")]
    pub family_name: Option<String>,

    /// Particle before the partner's family name, e.g. "de"
    #[arg(long = "partner-prefix", help_heading = "Name")]
    pub family_name_partner_prefix: Option<String>,

    /// Partner's family name
    #[arg(long = "partner-name", help_heading = "Name")]
    pub family_name_partner: Option<String>,

    /// Convention code: B, P, BP or PB. Defaults to the configured convention.
    /// With --input, overrides the convention of every record read.
    #[arg(short = 'c', long = "convention", value_name = "CODE")]
    pub convention: Option<String>,

    /// Read name records from a JSON file, or from stdin with "-".
    /// Accepts a person document ({"Name": {...}}), a name record, or an array of either.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        conflicts_with_all = [
            "nick_name",
            "family_name_prefix",
            "family_name",
            "family_name_partner_prefix",
            "family_name_partner",
        ]
    )]
    pub input: Option<String>,

    /// List the convention codes with an example for each
    #[arg(long = "list-conventions", help_heading = "Info")]
    pub list_conventions: bool,

    /// Set the default convention in config
    #[arg(long = "set-convention", value_name = "CODE", help_heading = "Configuration")]
    pub new_convention: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stderr
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// The convention requested on the command line, if any.
    /// Logs a warning when the code falls back to `B`.
    pub fn requested_convention(&self) -> Option<Convention> {
        self.convention.as_deref().map(|code| {
            if !Convention::is_recognized_code(code) {
                tracing::warn!("Unrecognized convention code {code:?}, formatting as B");
            }
            Convention::from_code(code)
        })
    }

    /// Applies `--set-convention`, `--set-log-file` and `--clear-log-file`
    /// to a stored config. Returns true when the log file path was cleared.
    pub fn apply_config_changes(&self, config: &mut Config) -> Result<bool, AppError> {
        if let Some(code) = &self.new_convention {
            config.set_default_convention_code(code)?;
        }

        if let Some(new_log_path) = &self.new_log_file_path {
            config.log_file_path = Some(new_log_path.clone());
        } else if self.clear_log_file_path {
            config.log_file_path = None;
            return Ok(true);
        }

        Ok(false)
    }

    /// Builds a name record from the name flags.
    ///
    /// Missing family names become empty strings. Without `--convention`
    /// the configured default convention applies.
    pub fn name_record(&self, config: &Config) -> Result<NameRecord, AppError> {
        let nick_name = self
            .nick_name
            .clone()
            .ok_or_else(|| AppError::input_error("--nick-name or --input is required"))?;

        Ok(NameRecord {
            nick_name,
            family_name_prefix: self.family_name_prefix.clone(),
            family_name: self.family_name.clone().unwrap_or_default(),
            family_name_partner_prefix: self.family_name_partner_prefix.clone(),
            family_name_partner: self.family_name_partner.clone().unwrap_or_default(),
            convention: self
                .requested_convention()
                .unwrap_or(config.default_convention),
        })
    }
}
