use anyhow::{Context, Result};
use colored::Colorize;
use ecosystem_validate::validation::{ErrorKind, ValidationError, Validator};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `valid`, or one error per line
    #[default]
    Text,
    /// JSON array of `{kind, message}` objects
    Json,
    /// Diagnostics with codes and hints on stderr
    Pretty,
}

#[derive(Serialize)]
struct ErrorRecord {
    kind: ErrorKind,
    message: String,
}

/// Validate the document at `input`. Returns `Ok(false)` when it has errors.
pub fn validate_command(input: &Path, format: OutputFormat) -> Result<bool> {
    debug!("Validating project file: {input:?}");

    let content =
        std::fs::read(input).with_context(|| format!("Failed to read input file: {input:?}"))?;

    let validator = Validator::new()?;
    let errors = validator.validate(&content);

    match format {
        OutputFormat::Text => print_text(&errors),
        OutputFormat::Json => print_json(&errors)?,
        OutputFormat::Pretty => print_pretty(&errors),
    }

    if !errors.is_empty() && !matches!(format, OutputFormat::Json) {
        eprintln!(
            "{}",
            format!(
                "✗ {} validation error(s) in {}",
                errors.len(),
                input.display()
            )
            .red()
        );
    }

    Ok(errors.is_empty())
}

fn print_text(errors: &[ValidationError]) {
    if errors.is_empty() {
        println!("valid");
        return;
    }
    for error in errors {
        println!("{error}");
    }
}

fn print_json(errors: &[ValidationError]) -> Result<()> {
    let records: Vec<ErrorRecord> = errors
        .iter()
        .map(|error| ErrorRecord {
            kind: error.kind(),
            message: error.to_string(),
        })
        .collect();

    let json = serde_json::to_string_pretty(&records).context("Failed to serialize errors")?;
    println!("{json}");
    Ok(())
}

fn print_pretty(errors: &[ValidationError]) {
    if errors.is_empty() {
        println!("valid");
        return;
    }
    for error in errors {
        eprintln!("{:?}", miette::Report::new(error.clone()));
    }
}
