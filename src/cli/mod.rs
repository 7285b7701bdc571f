//! Command-line interface implementation
//!
//! Parses arguments with clap and hands off to [`render`] for the conversion.

pub mod render;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::{CliOverrides, OutputFormat};
use crate::orientation::OrientationSet;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Prefix for diagnostics in the classic tool wording.
pub(crate) const DIAGNOSTIC_PREFIX: &str = "pmsprite";

/// pmsprite - Turn ASCII-art player sprites into assembler bitmap data
///
/// Reads sprite rows from INPUT (or standard input). Each row uses
/// `.`/`0` for empty, `1` for player 0, `2` for player 1 and `3` for both.
/// Lines starting with `#` are comments.
#[derive(Parser, Debug)]
#[command(name = "pmsprite")]
#[command(about = "Turn ASCII-art player sprites into assembler bitmap data")]
#[command(version)]
pub struct Cli {
    /// Input file; omit or use `-` for standard input
    pub input: Option<PathBuf>,

    /// Orientations to render: n = normal (default), h = horizontal flip,
    /// v = vertical flip. `hv` renders one block flipped both ways.
    #[arg(short = 'd', long, value_name = "nhv")]
    pub directions: Option<OrientationSet>,

    /// Strict mode: treat lines without pixel data as errors
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Section header for the player 0 bitmap (default: PM0_something)
    #[arg(long)]
    pub player_a_label: Option<String>,

    /// Section header for the player 1 bitmap (default: PM1_something)
    #[arg(long)]
    pub player_b_label: Option<String>,

    /// Byte data directive (default: .by)
    #[arg(long)]
    pub directive: Option<String>,

    /// Path to a pmsprite.toml (default: discovered from the working directory)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Options given on the command line, for merging over the config file.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            directions: self.directions,
            directive: self.directive.clone(),
            player_a_label: self.player_a_label.clone(),
            player_b_label: self.player_b_label.clone(),
            format: self.format,
            strict: self.strict.then_some(true),
        }
    }
}

/// Parse arguments and run the conversion.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    render::run_convert(cli.input.as_deref(), cli.config.as_deref(), &cli.overrides())
}
