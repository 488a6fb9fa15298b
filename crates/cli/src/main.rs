use clap::{Parser, Subcommand, ValueEnum};
use minik_core::{
    activity_field, baby_field, constants::MAX_NOTES_LENGTH_ENV,
    constants::MAX_STRING_LENGTH_ENV, sanitize_string, validate_date, ConfigError,
    ValidationError, Validator, ValidatorConfig,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "minik")]
#[command(about = "Minik input validation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Sanitize a baby profile (JSON object)
    Profile {
        /// JSON file to read; reads stdin when omitted
        file: Option<PathBuf>,
    },
    /// Sanitize an activity (JSON object)
    Activity {
        /// JSON file to read; reads stdin when omitted
        file: Option<PathBuf>,
    },
    /// Check a field name against a record whitelist
    Field {
        /// Field name to check
        name: String,
        /// Record the field belongs to
        #[arg(long, value_enum, default_value_t = RecordKind::Baby)]
        kind: RecordKind,
    },
    /// Run the free-text sanitizer
    Sanitize {
        /// Text to sanitize
        text: String,
        /// Character limit (defaults to the configured limit)
        #[arg(long)]
        max_length: Option<usize>,
    },
    /// Validate a date and print it as a UTC timestamp
    Date {
        /// Date text
        text: String,
        /// Accept dates in the future
        #[arg(long)]
        allow_future: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum RecordKind {
    Baby,
    Activity,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("error [{}]: {0}", .0.kind())]
    Validation(#[from] ValidationError),
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

impl CliError {
    fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Validation(_) => ExitCode::from(2),
            _ => ExitCode::FAILURE,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Use 'minik --help' for commands");
        return ExitCode::SUCCESS;
    };

    let result = load_config()
        .map(Validator::new)
        .and_then(|validator| run(command, &validator, read_input));

    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            e.exit_code()
        }
    }
}

fn load_config() -> Result<ValidatorConfig, CliError> {
    Ok(ValidatorConfig::from_env_values(
        std::env::var(MAX_STRING_LENGTH_ENV).ok(),
        std::env::var(MAX_NOTES_LENGTH_ENV).ok(),
    )?)
}

fn read_input(file: Option<&Path>) -> std::io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Executes one command and returns the text to print on success.
fn run(
    command: Commands,
    validator: &Validator,
    read: impl FnOnce(Option<&Path>) -> std::io::Result<String>,
) -> Result<String, CliError> {
    tracing::debug!(?command, "running command");

    match command {
        Commands::Profile { file } => {
            let json = read(file.as_deref())?;
            let profile = validator.sanitize_baby_profile_json(&json)?;
            Ok(serde_json::to_string_pretty(&profile)?)
        }
        Commands::Activity { file } => {
            let json = read(file.as_deref())?;
            let activity = validator.sanitize_activity_json(&json)?;
            Ok(serde_json::to_string_pretty(&activity)?)
        }
        Commands::Field { name, kind } => {
            let field = match kind {
                RecordKind::Baby => baby_field(&name)?.as_str(),
                RecordKind::Activity => activity_field(&name)?.as_str(),
            };
            Ok(field.to_string())
        }
        Commands::Sanitize { text, max_length } => Ok(match max_length {
            Some(max) => sanitize_string(&text, max),
            None => validator.sanitize_string(&text),
        }),
        Commands::Date { text, allow_future } => {
            Ok(validate_date(&text, allow_future)?.to_rfc3339())
        }
    }
}
