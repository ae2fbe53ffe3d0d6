//! Configuration handling for Inlay.
//! Loads the rule records and output settings from a TOML, JSON or YAML file
//! and validates them before any file is processed.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::constants::{JSON_EXTENSIONS, YAML_EXTENSIONS};
use crate::error::{InlayError, InlayResult};
use crate::processor::Placement;

/// A validated rule record: which files it applies to and its marker templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleConfig {
    pub pattern: String,
    pub start: String,
    pub end: String,
}

/// Validated configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rules: Vec<RuleConfig>,
    /// Rewrite files where they are, or mirror them into `output_dir`
    pub in_place: bool,
    /// Mirror directory, relative to the target directory unless absolute
    pub output_dir: Option<PathBuf>,
    /// Extra glob patterns excluded from the walk
    pub ignore: Vec<String>,
}

impl Config {
    /// Where updated files go for a run over `target_dir`.
    pub fn placement<P: AsRef<Path>>(&self, target_dir: P) -> Placement {
        match (self.in_place, &self.output_dir) {
            (false, Some(output_dir)) => Placement::Mirror(target_dir.as_ref().join(output_dir)),
            _ => Placement::InPlace,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawItem {
    pattern: Option<String>,
    start: Option<String>,
    end: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    item: Vec<RawItem>,
    #[serde(default = "default_in_place")]
    in_place: bool,
    #[serde(default)]
    output_dir: Option<PathBuf>,
    #[serde(default)]
    ignore: Vec<String>,
}

fn default_in_place() -> bool {
    true
}

/// Supported configuration syntaxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Picks the format from the file extension, defaulting to TOML.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        if JSON_EXTENSIONS.contains(&extension.as_str()) {
            ConfigFormat::Json
        } else if YAML_EXTENSIONS.contains(&extension.as_str()) {
            ConfigFormat::Yaml
        } else {
            ConfigFormat::Toml
        }
    }
}

/// Reads and validates the configuration file at `config_path`.
///
/// # Errors
/// * `InlayError::ConfigError` if the file is missing, malformed, or a rule record
///   lacks a required key
pub fn load_config<P: AsRef<Path>>(config_path: P) -> InlayResult<Config> {
    let config_path = config_path.as_ref();
    if !config_path.is_file() {
        return Err(InlayError::ConfigError(format!(
            "Invalid configuration path: {}",
            config_path.display()
        )));
    }

    debug!("Loading configuration from {}", config_path.display());
    let content = fs::read_to_string(config_path).map_err(InlayError::IoError)?;
    parse_config(&content, ConfigFormat::from_path(config_path))
}

/// Parses configuration `content` in the given `format`.
pub fn parse_config(content: &str, format: ConfigFormat) -> InlayResult<Config> {
    let raw: RawConfig = match format {
        ConfigFormat::Toml => toml::from_str::<RawConfig>(content).map_err(|e| e.to_string()),
        ConfigFormat::Json => serde_json::from_str::<RawConfig>(content).map_err(|e| e.to_string()),
        ConfigFormat::Yaml => serde_yaml::from_str::<RawConfig>(content).map_err(|e| e.to_string()),
    }
    .map_err(|e| InlayError::ConfigError(format!("Invalid configuration format: {}", e)))?;

    let rules = raw
        .item
        .into_iter()
        .enumerate()
        .map(|(i, item)| validate_item(i, item))
        .collect::<InlayResult<Vec<_>>>()?;

    if !raw.in_place && raw.output_dir.is_none() {
        return Err(InlayError::ConfigError(
            "output_dir is required when in_place is false".to_string(),
        ));
    }

    Ok(Config {
        rules,
        in_place: raw.in_place,
        output_dir: raw.output_dir,
        ignore: raw.ignore,
    })
}

fn validate_item(index: usize, item: RawItem) -> InlayResult<RuleConfig> {
    let missing = |key: &str| InlayError::ConfigError(format!("config entry {} missing key '{}'", index, key));

    Ok(RuleConfig {
        pattern: item.pattern.ok_or_else(|| missing("pattern"))?,
        start: item.start.ok_or_else(|| missing("start"))?,
        end: item.end.ok_or_else(|| missing("end"))?,
    })
}
