//! TOML run configuration: where the network comes from, how charts look
//! and where they are written.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::io::{BuildDefaults, ExportFormat};
use crate::network::DEFAULT_CONDUCTOR_K;
use crate::plot::PlotStyle;

/// Top-level configuration parsed from TOML.
///
/// Every section is optional and falls back to [`Default`]. Load with
/// [`AppConfig::from_toml_file`] or start from a preset with
/// [`AppConfig::from_preset`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Network source.
    #[serde(default)]
    pub input: InputConfig,
    /// Chart destination.
    #[serde(default)]
    pub output: OutputConfig,
    /// Chart shading.
    #[serde(default)]
    pub plot: PlotConfig,
    /// Values used for empty input cells.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Network source: a CSV sheet or a built-in network.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// CSV file with one row per bus or load.
    pub path: Option<PathBuf>,
    /// Built-in network used instead of `path`: `"reference"`.
    pub preset: Option<String>,
    /// Lines skipped before the header row.
    pub skip_rows: usize,
    /// Field delimiter; a single ASCII character.
    pub delimiter: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: None,
            preset: None,
            skip_rows: 0,
            delimiter: ",".to_string(),
        }
    }
}

impl InputConfig {
    /// Delimiter as a byte; falls back to `,` when not a single ASCII byte.
    pub fn delimiter_byte(&self) -> u8 {
        match self.delimiter.as_bytes() {
            [b] if b.is_ascii() => *b,
            _ => b',',
        }
    }
}

/// Chart destination.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory that receives the charts.
    pub dir: PathBuf,
    /// File name prefix, followed by `_<item>`.
    pub prefix: String,
    /// `csv` or `json`.
    pub format: ExportFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("curvas"),
            prefix: "current-time_characteristic".to_string(),
            format: ExportFormat::Csv,
        }
    }
}

/// Chart shading.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    /// Lightening of protection curves (0.0–1.0).
    pub protection_lighten: f64,
    /// Lightening of conductor withstand curves (0.0–1.0).
    pub conductor_lighten: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        let style = PlotStyle::default();
        Self {
            protection_lighten: style.protection_lighten,
            conductor_lighten: style.conductor_lighten,
        }
    }
}

impl PlotConfig {
    pub fn style(&self) -> PlotStyle {
        PlotStyle {
            protection_lighten: self.protection_lighten,
            conductor_lighten: self.conductor_lighten,
        }
    }
}

/// Values used where an input row leaves a cell empty.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Conductor material constant `K`.
    pub conductor_k: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            conductor_k: DEFAULT_CONDUCTOR_K,
        }
    }
}

impl DefaultsConfig {
    pub fn build_defaults(&self) -> BuildDefaults {
        BuildDefaults {
            conductor_k: self.conductor_k,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"plot.conductor_lighten"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl AppConfig {
    /// Available preset names.
    pub const PRESETS: &[&str] = &["default", "reference"];

    /// Built-in networks accepted by `input.preset`.
    pub const NETWORK_PRESETS: &[&str] = &["reference"];

    /// Defaults for every section; the network must still be supplied.
    pub fn standard() -> Self {
        Self::default()
    }

    /// Renders the built-in reference network into `curvas/reference_*`.
    pub fn reference() -> Self {
        Self {
            input: InputConfig {
                preset: Some("reference".to_string()),
                ..InputConfig::default()
            },
            output: OutputConfig {
                prefix: "reference".to_string(),
                ..OutputConfig::default()
            },
            ..Self::default()
        }
    }

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "default" => Ok(Self::standard()),
            "reference" => Ok(Self::reference()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!("unknown preset \"{name}\", available: {}", Self::PRESETS.join(", ")),
            }),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let mut push = |field: &str, message: String| {
            errors.push(ConfigError {
                field: field.to_string(),
                message,
            });
        };

        let i = &self.input;
        if !matches!(i.delimiter.as_bytes(), [b] if b.is_ascii()) {
            push(
                "input.delimiter",
                format!("must be a single ASCII character, got \"{}\"", i.delimiter),
            );
        }
        if let Some(preset) = &i.preset {
            if !Self::NETWORK_PRESETS.contains(&preset.as_str()) {
                push(
                    "input.preset",
                    format!("unknown network \"{preset}\", available: {}", Self::NETWORK_PRESETS.join(", ")),
                );
            }
        }

        if self.output.prefix.is_empty() {
            push("output.prefix", "must not be empty".into());
        }

        let p = &self.plot;
        for (field, value) in [
            ("plot.protection_lighten", p.protection_lighten),
            ("plot.conductor_lighten", p.conductor_lighten),
        ] {
            if !(0.0..=1.0).contains(&value) {
                push(field, format!("must be in [0, 1], got {value}"));
            }
        }

        if !(self.defaults.conductor_k > 0.0 && self.defaults.conductor_k.is_finite()) {
            push(
                "defaults.conductor_k",
                format!("must be > 0, got {}", self.defaults.conductor_k),
            );
        }

        errors
    }
}
