// src/main.rs
use clap::Parser;
use display_name::cli::{Args, is_config_operation};
use display_name::config::Config;
use display_name::error::AppError;
use display_name::input::read_records;
use display_name::logging::setup_logging;
use display_name::name::{Convention, NameRecord};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // A broken config file must not block listing or repairing it
    let mut config_error = None;
    let config = match Config::load().await {
        Ok(config) => config,
        Err(e) if args.list_conventions || is_config_operation(&args) => {
            config_error = Some(e);
            Config::default()
        }
        Err(e) => return Err(e),
    };

    // Keep the guard alive until exit so the log file gets flushed
    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    tracing::debug!("Logs are being written to: {log_file_path}");
    if let Some(e) = config_error {
        tracing::warn!("Ignoring unreadable configuration, using defaults: {e}");
    }

    let result = run(&args, config).await;
    if let Err(e) = &result {
        if e.is_user_error() {
            tracing::warn!("{e}");
        } else {
            tracing::error!("{e}");
        }
    }
    result
}

async fn run(args: &Args, config: Config) -> Result<(), AppError> {
    if args.list_conventions {
        print_conventions();
        return Ok(());
    }

    if is_config_operation(args) {
        return update_config(args).await;
    }

    let records = match &args.input {
        Some(path) => {
            let mut records = read_records(path).await?;
            if let Some(convention) = args.requested_convention() {
                for record in &mut records {
                    record.convention = convention;
                }
            }
            records
        }
        None => vec![args.name_record(&config)?],
    };

    for record in &records {
        if record.convention.uses_partner_name() && record.family_name_partner.is_empty() {
            tracing::warn!(
                "Convention {} uses the partner's family name, but none is set for {}",
                record.convention,
                record.nick_name
            );
        }
        tracing::debug!("Formatting with convention {}", record.convention);
        println!("{}", record.display_name());
    }
    tracing::info!("Formatted {} display name(s)", records.len());

    Ok(())
}

fn print_conventions() {
    let sample = NameRecord::new("Alexandra", "Wal")
        .with_prefix("van der")
        .with_partner("Vries")
        .with_partner_prefix("de");

    for convention in Convention::ALL {
        let example = sample.clone().with_convention(convention).display_name();
        println!(
            "{:<3} {:<32} {example}",
            convention.code(),
            convention.description()
        );
    }
    println!("Any other code formats as B.");
}

async fn update_config(args: &Args) -> Result<(), AppError> {
    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    // Environment overrides stay out of the saved file
    let mut config = Config::load_stored_or_default().await;

    if args.apply_config_changes(&mut config)? {
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");
    Ok(())
}
