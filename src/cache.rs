//! Referenced file resolution and the per-run content cache.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{InlayError, InlayResult};

/// Text of referenced files keyed by canonical absolute path.
///
/// Build one per run and pass it to every `transform` call; a referenced file
/// is read from disk at most once no matter how many blocks name it.
#[derive(Debug, Default)]
pub struct ContentCache {
    entries: HashMap<PathBuf, String>,
}

impl ContentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves `relative` against `base_dir`.
    ///
    /// Returns `None` when the result is not an existing regular file.
    pub fn resolve<P: AsRef<Path>>(&self, base_dir: P, relative: &str) -> Option<PathBuf> {
        let joined = base_dir.as_ref().join(relative);
        match joined.canonicalize() {
            Ok(path) if path.is_file() => Some(path),
            _ => None,
        }
    }

    /// Returns the text of the file at `path`, reading it on first access.
    ///
    /// # Errors
    /// * `InlayError::ReadError` if the file cannot be read as UTF-8 text
    pub fn content(&mut self, path: &Path) -> InlayResult<&str> {
        if !self.entries.contains_key(path) {
            debug!("Caching referenced file: {}", path.display());
            let text = fs::read_to_string(path).map_err(|source| InlayError::ReadError {
                path: path.to_path_buf(),
                source,
            })?;
            self.entries.insert(path.to_path_buf(), text);
        }
        Ok(self.entries[path].as_str())
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_skips_directories_and_missing_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("nested")).unwrap();
        fs::write(temp_dir.path().join("part.txt"), "part\n").unwrap();

        let cache = ContentCache::new();
        assert!(cache.resolve(temp_dir.path(), "nested").is_none());
        assert!(cache.resolve(temp_dir.path(), "absent.txt").is_none());

        let resolved = cache.resolve(temp_dir.path().join("nested"), "../part.txt").unwrap();
        assert!(resolved.is_absolute());
        assert_eq!(resolved, temp_dir.path().join("part.txt").canonicalize().unwrap());
    }

    #[test]
    fn test_content_is_read_once() {
        let temp_dir = TempDir::new().unwrap();
        let part = temp_dir.path().join("part.txt");
        fs::write(&part, "first\n").unwrap();

        let mut cache = ContentCache::new();
        let path = cache.resolve(temp_dir.path(), "part.txt").unwrap();
        assert_eq!(cache.content(&path).unwrap(), "first\n");
        assert!(cache.contains(&path));

        fs::write(&part, "second\n").unwrap();
        assert_eq!(cache.content(&path).unwrap(), "first\n");
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(!cache.contains(&path));
        assert_eq!(cache.content(&path).unwrap(), "second\n");
    }
}
