use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use rss_validate::config::{Config, OutputFormat};
use rss_validate::{parse_with_limit, render_with, Report, Rss, Validator, Violation};

#[derive(Parser, Debug)]
#[command(
    name = "rss-validate",
    version,
    about = "Validate and re-render RSS 2.0 documents"
)]
struct Args {
    /// Config file (defaults to ~/.config/rss-validate/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a document and list every violation
    Validate {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Report format (overrides the config file)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Require <day> values to be English weekday names
        #[arg(long)]
        strict_days: bool,
    },
    /// Parse a document and print it back as compact XML
    Fmt {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

/// Exit code for a document that parsed but broke at least one rule.
const EXIT_INVALID: u8 = 1;
/// Exit code for I/O, config and parse failures.
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::Validate {
            file,
            format,
            strict_days,
        } => {
            let rss = read_document(&file, &config)?;
            let mut options = config.validator_options();
            options.strict_days |= strict_days;

            let report = Validator::new(options).validate(&rss);
            tracing::info!(
                file = %file.display(),
                valid = report.is_valid(),
                violations = report.violations().len(),
                "Validated document"
            );

            print_report(&file, &report, format.unwrap_or(config.format))?;
            if report.is_valid() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(EXIT_INVALID))
            }
        }
        Command::Fmt { file } => {
            let rss = read_document(&file, &config)?;
            let bytes = render_with(&rss, config.render_options())
                .with_context(|| format!("Failed to render '{}'", file.display()))?;

            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes).context("Failed to write to stdout")?;
            stdout.write_all(b"\n").context("Failed to write to stdout")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config '{}'", path.display())),
        None => match Config::default_path() {
            Some(path) => Config::load(&path)
                .with_context(|| format!("Failed to load config '{}'", path.display())),
            None => Ok(Config::default()),
        },
    }
}

/// Reads and parses `path`, refusing non-files and oversized documents.
fn read_document(path: &Path, config: &Config) -> Result<Rss> {
    // SEC-008: Canonicalize to resolve symlinks before checking the file type
    let canonical = path
        .canonicalize()
        .with_context(|| format!("Failed to resolve '{}'", path.display()))?;

    let metadata = std::fs::metadata(&canonical)?;
    if !metadata.is_file() {
        anyhow::bail!("'{}' is not a regular file", path.display());
    }
    // Checked before reading to avoid loading huge files into memory
    if metadata.len() > config.max_document_bytes as u64 {
        anyhow::bail!(
            "'{}' is {} bytes, exceeding max_document_bytes ({})",
            path.display(),
            metadata.len(),
            config.max_document_bytes
        );
    }

    let bytes = std::fs::read(&canonical)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    parse_with_limit(&bytes, config.max_document_bytes)
        .with_context(|| format!("Failed to parse '{}'", path.display()))
}

#[derive(Serialize)]
struct JsonReport<'a> {
    file: String,
    valid: bool,
    violations: &'a [Violation],
}

fn print_report(file: &Path, report: &Report, format: OutputFormat) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    match format {
        OutputFormat::Text => {
            for violation in report.violations() {
                writeln!(stdout, "{}: {}", file.display(), violation)?;
            }
            if report.is_valid() {
                writeln!(stdout, "{}: valid RSS 2.0", file.display())?;
            } else {
                writeln!(
                    stdout,
                    "{}: {} violation(s)",
                    file.display(),
                    report.violations().len()
                )?;
            }
        }
        OutputFormat::Json => {
            let json = JsonReport {
                file: file.display().to_string(),
                valid: report.is_valid(),
                violations: report.violations(),
            };
            serde_json::to_writer_pretty(&mut stdout, &json)
                .context("Failed to serialize report")?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}
