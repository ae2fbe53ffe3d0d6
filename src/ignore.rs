//! Ignore pattern handling for the directory walk.
//! Combines the built-in patterns with the `ignore` list from the config.

use crate::constants::DEFAULT_IGNORE_PATTERNS;
use crate::error::{InlayError, InlayResult};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;

/// Builds the set of globs excluded from processing.
///
/// # Arguments
/// * `patterns` - Extra patterns from the configuration
///
/// # Returns
/// * `InlayResult<GlobSet>` - Compiled patterns, matched against paths relative to the target directory
///
/// # Notes
/// - `DEFAULT_IGNORE_PATTERNS` are always included
/// - Invalid patterns result in a `ConfigError`
pub fn parse_ignore_patterns<S: AsRef<str>>(patterns: &[S]) -> InlayResult<GlobSet> {
    let mut all: Vec<&str> = DEFAULT_IGNORE_PATTERNS.to_vec();
    all.extend(patterns.iter().map(|p| p.as_ref()));

    let mut builder = GlobSetBuilder::new();
    for pattern in all {
        debug!("Ignoring pattern: {}", pattern);
        builder.add(Glob::new(pattern).map_err(|e| {
            InlayError::ConfigError(format!("invalid ignore pattern '{}': {}", pattern, e))
        })?);
    }

    builder
        .build()
        .map_err(|e| InlayError::ConfigError(format!("ignore patterns failed to load: {}", e)))
}
