//! Marker rule compilation.
//! A rule pairs a file path pattern with a start/end marker template. Each
//! template is literal text around a single `{path}` placeholder and compiles
//! to an anchored regex that recognises a whole marker line.

use std::path::{Component, Path};

use globset::{GlobBuilder, GlobMatcher};
use regex::Regex;

use crate::config::RuleConfig;
use crate::constants::PATH_PLACEHOLDER;
use crate::error::{InlayError, InlayResult};

/// A compiled include rule.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: String,
    matcher: GlobMatcher,
    start: Regex,
    end: Regex,
}

impl Rule {
    /// Compiles a rule from its path pattern and marker templates.
    ///
    /// # Errors
    /// * `InlayError::ConfigError` if the pattern is not a valid glob, or if a
    ///   template does not contain exactly one `{path}` placeholder
    pub fn new(pattern: &str, start: &str, end: &str) -> InlayResult<Self> {
        let matcher = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|e| InlayError::ConfigError(format!("invalid pattern '{}': {}", pattern, e)))?
            .compile_matcher();

        Ok(Self {
            pattern: pattern.to_string(),
            matcher,
            start: compile_template(start)?,
            end: compile_template(end)?,
        })
    }

    /// The path pattern this rule was built from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the embedded path if `line` is a start marker.
    pub fn match_start<'l>(&self, line: &'l str) -> Option<&'l str> {
        capture_path(&self.start, line)
    }

    /// Returns the embedded path if `line` is an end marker.
    pub fn match_end<'l>(&self, line: &'l str) -> Option<&'l str> {
        capture_path(&self.end, line)
    }

    /// Checks whether the rule's path pattern selects `path`.
    ///
    /// Relative patterns are matched from the right: `*.html` selects any
    /// HTML file, `docs/*.md` any markdown file directly inside a `docs`
    /// directory. Patterns starting with `/` must match the whole path.
    pub fn applies_to<P: AsRef<Path>>(&self, path: P) -> bool {
        let parts: Vec<String> = path
            .as_ref()
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();

        if self.pattern.starts_with('/') {
            return self.matcher.is_match(format!("/{}", parts.join("/")));
        }

        (0..parts.len()).any(|i| self.matcher.is_match(parts[i..].join("/")))
    }
}

fn capture_path<'l>(re: &Regex, line: &'l str) -> Option<&'l str> {
    re.captures(line)
        .and_then(|caps| caps.name("path"))
        .map(|m| m.as_str())
}

/// Turns a marker template into a line matcher.
///
/// Everything except the placeholder is escaped, so characters such as `*`,
/// `(` or `.` in a comment syntax are matched literally. The placeholder
/// captures the shortest non-empty path that lets the rest of the line match.
fn compile_template(template: &str) -> InlayResult<Regex> {
    let pieces: Vec<&str> = template.split(PATH_PLACEHOLDER).collect();
    if pieces.len() != 2 {
        return Err(InlayError::ConfigError(format!(
            "marker template '{}' must contain exactly one {} placeholder",
            template, PATH_PLACEHOLDER
        )));
    }

    let expression = format!(
        r"^{}(?P<path>.+?){}\s*$",
        regex::escape(pieces[0]),
        regex::escape(pieces[1])
    );
    Regex::new(&expression)
        .map_err(|e| InlayError::ConfigError(format!("marker template '{}': {}", template, e)))
}

/// An ordered list of rules, applied one after another to the same file.
#[derive(Debug, Clone, Default)]
pub struct Ruleset {
    rules: Vec<Rule>,
}

impl Ruleset {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Compiles every rule record, failing on the first invalid one.
    pub fn from_config(records: &[RuleConfig]) -> InlayResult<Self> {
        let rules = records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                Rule::new(&record.pattern, &record.start, &record.end).map_err(|e| match e {
                    InlayError::ConfigError(msg) => {
                        InlayError::ConfigError(format!("config entry {}: {}", i, msg))
                    }
                    other => other,
                })
            })
            .collect::<InlayResult<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// True when at least one rule selects `path`.
    pub fn applies_to<P: AsRef<Path>>(&self, path: P) -> bool {
        let path = path.as_ref();
        self.rules.iter().any(|rule| rule.applies_to(path))
    }
}
