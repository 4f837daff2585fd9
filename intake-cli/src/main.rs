//! Intake CLI
//!
//! Runs the intake validation core against form documents on disk.

mod commands;
mod document;
mod output;
mod paths;

use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use intake_lib::{FieldId, ValidationConfig};
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use document::IntakeDocument;
use output::Format;

/// Validate patient intake forms.
#[derive(Parser, Debug)]
#[command(name = "intake-cli", version, about)]
struct Cli {
    /// Log level written to the log file.
    #[arg(long, global = true, default_value = "info")]
    log_level: LevelFilter,

    /// Date to treat as today (YYYY-MM-DD).
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every field verdict and whether the form can be submitted.
    Check {
        /// Form document (JSON).
        file: PathBuf,
    },
    /// Print the review summary, or the fields blocking it.
    Review {
        /// Form document (JSON).
        file: PathBuf,
    },
    /// Normalize and validate a single value.
    Field {
        /// Field name, e.g. `patientId` or `patient_id`.
        field: FieldId,
        /// Raw value as typed.
        value: String,
    },
}

fn init_logging(level: LevelFilter) {
    let rotation_problems = paths::rotate_logs();
    let Some(path) = paths::log_file() else { return };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    match File::create(&path) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(level, Config::default(), file) {
                eprintln!("Failed to initialize logger: {}", e);
            }
            for problem in rotation_problems {
                log::warn!("{}", problem);
            }
        }
        Err(e) => eprintln!("Failed to create log file {}: {}", path.display(), e),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let mut config = ValidationConfig::default();
    if let Some(today) = cli.today {
        config = config.with_today(today);
    }
    log::info!("Running {:?} (today = {})", cli.command, config.today());

    let outcome = match cli.command {
        Commands::Check { file } => {
            commands::check(IntakeDocument::load(&file)?, config, cli.format)?
        }
        Commands::Review { file } => {
            commands::review(IntakeDocument::load(&file)?, config, cli.format)?
        }
        Commands::Field { field, value } => commands::field(field, &value, &config, cli.format)?,
    };

    print!("{}", outcome.stdout);
    eprint!("{}", outcome.stderr);
    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
