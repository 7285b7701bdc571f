//! Configuration schema types for `pmsprite.toml`
//!
//! Every field is optional; an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::orientation::{DirectionsError, OrientationSet};
use crate::renderer::{
    RenderOptions, DEFAULT_DIRECTIVE, DEFAULT_PLAYER_A_LABEL, DEFAULT_PLAYER_B_LABEL,
};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Assembler source text
    #[default]
    Text,
    /// Structured JSON
    Json,
}

/// `[output]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Orientation letters rendered when `-d` is not given
    #[serde(default = "default_directions")]
    pub directions: String,
    /// Byte data directive
    #[serde(default = "default_directive")]
    pub directive: String,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directions: default_directions(),
            directive: default_directive(),
            format: OutputFormat::default(),
        }
    }
}

fn default_directions() -> String {
    "n".to_string()
}

fn default_directive() -> String {
    DEFAULT_DIRECTIVE.to_string()
}

/// `[labels]` section: bitmap section headers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelsConfig {
    #[serde(default = "default_player_a")]
    pub player_a: String,
    #[serde(default = "default_player_b")]
    pub player_b: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self { player_a: default_player_a(), player_b: default_player_b() }
    }
}

fn default_player_a() -> String {
    DEFAULT_PLAYER_A_LABEL.to_string()
}

fn default_player_b() -> String {
    DEFAULT_PLAYER_B_LABEL.to_string()
}

/// `[input]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    /// Treat unusable lines as errors
    #[serde(default)]
    pub strict: bool,
}

/// Complete `pmsprite.toml` configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PmConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub labels: LabelsConfig,
    #[serde(default)]
    pub input: InputConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "labels.player_a")
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pmsprite.toml: '{}' {}", self.field, self.message)
    }
}

impl PmConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if let Err(e) = self.output.directions.parse::<OrientationSet>() {
            errors.push(ConfigValidationError {
                field: "output.directions".to_string(),
                message: e.to_string(),
            });
        }

        let required = [
            ("output.directive", &self.output.directive),
            ("labels.player_a", &self.labels.player_a),
            ("labels.player_b", &self.labels.player_b),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                errors.push(ConfigValidationError {
                    field: field.to_string(),
                    message: "must be a non-empty string".to_string(),
                });
            }
        }

        errors
    }

    /// Orientations requested by `output.directions`.
    pub fn orientation_set(&self) -> Result<OrientationSet, DirectionsError> {
        self.output.directions.parse()
    }

    /// Literal tokens for the renderer.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            player_a_label: self.labels.player_a.clone(),
            player_b_label: self.labels.player_b.clone(),
            directive: self.output.directive.clone(),
        }
    }
}
