//! Common constants used throughout the Inlay application.

/// Placeholder that marks where the referenced path sits inside a marker template
pub const PATH_PLACEHOLDER: &str = "{path}";

/// Paths that are never walked, regardless of configuration
pub const DEFAULT_IGNORE_PATTERNS: [&str; 2] = ["**/.git/**", "**/.DS_Store"];

/// Config file extensions parsed as JSON
pub const JSON_EXTENSIONS: [&str; 1] = ["json"];

/// Config file extensions parsed as YAML; any other extension is read as TOML
pub const YAML_EXTENSIONS: [&str; 2] = ["yml", "yaml"];
