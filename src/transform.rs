//! Per-file transformation: locate blocks for every applicable rule and
//! pack or unpack them.

use std::fmt;
use std::path::Path;

use log::debug;

use crate::cache::ContentCache;
use crate::diagnostic::Diagnostic;
use crate::error::InlayResult;
use crate::locator::locate_blocks;
use crate::rewriter::{injected_lines, rewrite, Edit};
use crate::rule::Ruleset;

/// What to do with located blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Inline referenced content between the markers
    #[default]
    Pack,
    /// Clear everything between the markers
    Unpack,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Pack => write!(f, "Packed"),
            Mode::Unpack => write!(f, "Unpacked"),
        }
    }
}

/// Result of transforming one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub text: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Splits `text` into lines, each keeping its terminator.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}

fn line_terminator(line: &str) -> &'static str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

/// Transforms the text of `file_path` with every rule that applies to it.
///
/// Rules run in order against the running line sequence, so a later rule sees
/// the edits of an earlier one. Referenced paths resolve against the directory
/// of `file_path`. Unpack never reads referenced files, it only checks that
/// they exist.
///
/// # Errors
/// * `InlayError::ReadError` if a referenced file exists but cannot be read
pub fn transform(
    file_path: &Path,
    text: &str,
    ruleset: &Ruleset,
    cache: &mut ContentCache,
    mode: Mode,
) -> InlayResult<Outcome> {
    let base_dir = file_path.parent().unwrap_or_else(|| Path::new("."));
    let mut lines = split_lines(text);
    let mut diagnostics = Vec::new();

    for rule in ruleset.rules().iter().filter(|rule| rule.applies_to(file_path)) {
        debug!("Applying rule '{}' to {}", rule.pattern(), file_path.display());
        let located = locate_blocks(&lines, rule);

        diagnostics.extend(located.unclosed.into_iter().map(|marker| {
            Diagnostic::UnclosedMarker {
                file: file_path.to_path_buf(),
                line: marker.index + 1,
                path: marker.path,
            }
        }));

        let mut edits = Vec::with_capacity(located.blocks.len());
        for block in located.blocks {
            let Some(target) = cache.resolve(base_dir, &block.path) else {
                diagnostics.push(Diagnostic::MissingReference {
                    file: file_path.to_path_buf(),
                    line: block.start + 1,
                    path: block.path,
                });
                continue;
            };

            let replacement = match mode {
                Mode::Pack => {
                    let terminator = line_terminator(&lines[block.start]);
                    injected_lines(cache.content(&target)?, terminator)
                }
                Mode::Unpack => Vec::new(),
            };
            edits.push(Edit {
                start: block.start,
                end: block.end,
                replacement,
            });
        }

        if !edits.is_empty() {
            lines = rewrite(&lines, &edits);
        }
    }

    Ok(Outcome {
        text: lines.concat(),
        diagnostics,
    })
}
