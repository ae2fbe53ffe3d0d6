//! Per-file orchestration for a run.
//! Decides whether a walked path is a candidate, transforms it, and works out
//! where the updated text belongs. Content is always read from the source tree.

use globset::GlobSet;
use log::debug;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::{
    cache::ContentCache,
    diagnostic::Diagnostic,
    error::{InlayError, InlayResult},
    rule::Ruleset,
    transform::{transform, Mode},
};

/// Where updated files are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// Overwrite the source file
    InPlace,
    /// Write to the same relative path under this directory
    Mirror(PathBuf),
}

impl Placement {
    /// Returns the placement with `.`, `..` and symlinks resolved in the
    /// mirror root, so walked paths can be compared against it.
    ///
    /// A mirror root that does not exist yet (dry run) is normalised lexically.
    pub fn normalized(&self) -> Placement {
        match self {
            Placement::InPlace => Placement::InPlace,
            Placement::Mirror(output_root) => Placement::Mirror(
                output_root
                    .canonicalize()
                    .unwrap_or_else(|_| normalize_path(output_root)),
            ),
        }
    }
}

/// Lexically removes `.` and `..` components from `path`.
pub fn normalize_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.as_ref().components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// New content for a file whose text changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpdate {
    pub target: PathBuf,
    pub content: String,
}

/// Outcome of processing one walked path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    pub source: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
    /// `None` when the path was skipped or its content did not change
    pub update: Option<FileUpdate>,
}

impl ProcessResult {
    fn unchanged(source: &Path) -> Self {
        Self {
            source: source.to_path_buf(),
            diagnostics: Vec::new(),
            update: None,
        }
    }
}

pub struct Processor<'a> {
    ruleset: &'a Ruleset,
    mode: Mode,
    source_root: &'a Path,
    placement: Placement,
    ignored: &'a GlobSet,
}

impl<'a> Processor<'a> {
    pub fn new(
        ruleset: &'a Ruleset,
        mode: Mode,
        source_root: &'a Path,
        placement: &'a Placement,
        ignored: &'a GlobSet,
    ) -> Self {
        Self {
            ruleset,
            mode,
            source_root,
            placement: placement.normalized(),
            ignored,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Checks whether `path` should be left alone without reading it.
    ///
    /// Directories, ignored paths, anything inside the mirror directory and
    /// files no rule applies to are skipped.
    pub fn should_skip(&self, path: &Path) -> bool {
        if !path.is_file() {
            return true;
        }

        if let Placement::Mirror(output_root) = &self.placement {
            if path.starts_with(output_root) {
                debug!("Skipping file {} inside the output directory", path.display());
                return true;
            }
        }

        if let Ok(relative) = path.strip_prefix(self.source_root) {
            if self.ignored.is_match(relative) {
                debug!("Skipping ignored file {}", relative.display());
                return true;
            }
        }

        !self.ruleset.applies_to(path)
    }

    /// Processes the file at `path`.
    ///
    /// # Errors
    /// * `InlayError::ProcessError` if the file or one of its referenced files
    ///   cannot be read
    pub fn process(&self, cache: &mut ContentCache, path: &Path) -> InlayResult<ProcessResult> {
        if self.should_skip(path) {
            return Ok(ProcessResult::unchanged(path));
        }

        let process_error = |error: String| InlayError::ProcessError {
            path: path.display().to_string(),
            error,
        };

        debug!("Processing file: {}", path.display());
        let original = fs::read_to_string(path).map_err(|e| process_error(e.to_string()))?;
        let outcome = transform(path, &original, self.ruleset, cache, self.mode)
            .map_err(|e| process_error(e.to_string()))?;

        let update = if outcome.text == original {
            debug!("Unchanged: {}", path.display());
            None
        } else {
            let relative = path
                .strip_prefix(self.source_root)
                .map_err(|e| process_error(e.to_string()))?;
            Some(FileUpdate {
                target: resolve_target_path(path, relative, &self.placement),
                content: outcome.text,
            })
        };

        Ok(ProcessResult {
            source: path.to_path_buf(),
            diagnostics: outcome.diagnostics,
            update,
        })
    }
}

/// Destination for a changed file.
pub fn resolve_target_path<P: AsRef<Path>, R: AsRef<Path>>(
    source: P,
    relative: R,
    placement: &Placement,
) -> PathBuf {
    match placement {
        Placement::InPlace => source.as_ref().to_path_buf(),
        Placement::Mirror(output_root) => output_root.join(relative),
    }
}

/// Creates the mirror directory if it does not exist yet.
pub fn ensure_output_dir<P: AsRef<Path>>(output_dir: P) -> InlayResult<()> {
    let output_dir = output_dir.as_ref();
    if !output_dir.exists() {
        debug!("Creating output directory: {}", output_dir.display());
    }
    fs::create_dir_all(output_dir).map_err(InlayError::IoError)
}

/// Writes `content` to `path`, creating parent directories as needed.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> InlayResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(InlayError::IoError)?;
    }
    fs::write(path, content).map_err(InlayError::IoError)
}
