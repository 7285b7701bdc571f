//! Convert command implementation

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use thiserror::Error;

use super::{DIAGNOSTIC_PREFIX, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};
use crate::config::{load_config, merge_cli_overrides, CliOverrides, OutputFormat, PmConfig};
use crate::models::Warning;
use crate::orientation::DirectionsError;
use crate::output::{render_json, render_text};
use crate::parser::{parse_stream, ReadError};

/// Errors that stop a conversion before any output is produced
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConvertError {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error("invalid directions: {0}")]
    Directions(#[from] DirectionsError),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Strict mode and at least one line had no pixel data
    #[error("{} line(s) without pixel data (strict mode)", .0.len())]
    Strict(Vec<Warning>),
}

/// Outcome of a conversion that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// Rendered output, or `None` when the input held no usable rows
    pub output: Option<String>,
    /// Non-fatal problems, in input order
    pub warnings: Vec<Warning>,
}

/// Read sprite text from `reader` and render it according to `config`.
pub fn convert<R: Read>(reader: R, config: &PmConfig) -> Result<Conversion, ConvertError> {
    let orientations = config.orientation_set()?.orientations();
    let parsed = parse_stream(reader)?;

    if config.input.strict && !parsed.warnings.is_empty() {
        return Err(ConvertError::Strict(parsed.warnings));
    }

    if parsed.grid.is_empty() {
        return Ok(Conversion { output: None, warnings: parsed.warnings });
    }

    let options = config.render_options();
    let output = match config.output.format {
        OutputFormat::Text => render_text(&parsed.grid, &orientations, &options),
        OutputFormat::Json => render_json(&parsed.grid, &orientations, &options)?,
    };

    Ok(Conversion { output: Some(output), warnings: parsed.warnings })
}

/// Resolve configuration: explicit file, discovered file, then defaults.
fn resolve_config(config_path: Option<&Path>, overrides: &CliOverrides) -> Result<PmConfig, ExitCode> {
    let mut config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) if config_path.is_some() => {
            eprintln!("Error: {}", e);
            return Err(ExitCode::from(EXIT_ERROR));
        }
        Err(e) => {
            eprintln!("Warning: {}", e);
            PmConfig::default()
        }
    };
    merge_cli_overrides(&mut config, overrides);

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("Error: invalid value for '{}': {}", e.field, e.message);
        }
        return Err(ExitCode::from(EXIT_INVALID_ARGS));
    }

    Ok(config)
}

fn open_input(input: Option<&Path>) -> io::Result<Box<dyn Read>> {
    match input {
        None => Ok(Box::new(io::stdin().lock())),
        Some(path) if path == Path::new("-") => Ok(Box::new(io::stdin().lock())),
        Some(path) => Ok(Box::new(File::open(path)?)),
    }
}

/// Execute the conversion and write results to stdout.
pub fn run_convert(
    input: Option<&Path>,
    config_path: Option<&Path>,
    overrides: &CliOverrides,
) -> ExitCode {
    let config = match resolve_config(config_path, overrides) {
        Ok(config) => config,
        Err(code) => return code,
    };

    let reader = match open_input(input) {
        Ok(reader) => reader,
        Err(e) => {
            let name = input.map(|p| p.display().to_string()).unwrap_or_default();
            eprintln!("Error: Cannot open input file '{}': {}", name, e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let conversion = match convert(reader, &config) {
        Ok(conversion) => conversion,
        Err(ConvertError::Strict(warnings)) => {
            for warning in &warnings {
                eprintln!("Error: line {}: no usable pixel data", warning.line);
            }
            return ExitCode::from(EXIT_ERROR);
        }
        Err(e @ ConvertError::Directions(_)) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    for warning in &conversion.warnings {
        eprintln!("{}: {}", DIAGNOSTIC_PREFIX, warning);
    }

    let Some(output) = conversion.output else {
        eprintln!("{}: No Lines Read", DIAGNOSTIC_PREFIX);
        return ExitCode::from(EXIT_SUCCESS);
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(output.as_bytes()).and_then(|()| stdout.flush()) {
        if e.kind() != io::ErrorKind::BrokenPipe {
            eprintln!("Error: Failed to write output: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}
