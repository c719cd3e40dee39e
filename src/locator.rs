//! Executable resolution against a search path
//!
//! Resolves the bare executable name from the child command line to a
//! launchable file. A direct probe (name used as-is) comes first; only when
//! it misses does the locator fall back to appending each configured
//! extension in list order, so earlier extensions take priority over later
//! ones regardless of which search-path directory holds the file.

use std::env;
use std::ffi::OsStr;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::pathext::ExtensionList;

/// Resolution failure, carrying the literal name that was searched for.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocateError {
    #[error("`{0}' not found.")]
    NotFound(String),
}

/// Search-path plus extension-list resolver.
///
/// Configuration is explicit so tests can point it at temporary
/// directories; `from_env` wires up the real `PATH` and `PATHEXT`.
#[derive(Debug, Clone)]
pub struct Locator {
    dirs: Vec<PathBuf>,
    extensions: ExtensionList,
}

impl Locator {
    pub fn new(search_path: Option<&OsStr>, extensions: ExtensionList) -> Self {
        let dirs = match search_path {
            Some(path) => env::split_paths(path).collect(),
            None => Vec::new(),
        };
        Self { dirs, extensions }
    }

    pub fn from_env() -> Self {
        Self::new(env::var_os("PATH").as_deref(), ExtensionList::from_env())
    }

    /// Resolve `name` to the path of the executable to launch.
    ///
    /// Tries the name as given first, then one pass per extension in list
    /// order. Every candidate is probed independently; the first hit wins
    /// and misses are not cached.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, LocateError> {
        if let Some(hit) = self.probe(name) {
            return Ok(hit);
        }
        for ext in self.extensions.iter() {
            let candidate = format!("{name}.{ext}");
            if let Some(hit) = self.probe(&candidate) {
                return Ok(hit);
            }
        }
        Err(LocateError::NotFound(name.to_string()))
    }

    /// Probe a single candidate name against the search path.
    ///
    /// A candidate containing a path separator is treated as a literal path
    /// and never searched against the directory list.
    fn probe(&self, candidate: &str) -> Option<PathBuf> {
        let path = Path::new(candidate);
        if candidate.contains(std::path::MAIN_SEPARATOR) {
            return is_executable(path).then(|| path.to_path_buf());
        }
        for dir in &self.dirs {
            let full = dir.join(path);
            if is_executable(&full) {
                debug!(candidate, hit = %full.display(), "search path probe");
                return Some(full);
            }
        }
        None
    }
}

/// A hit is a regular file with at least one execute bit set.
fn is_executable(path: &Path) -> bool {
    fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}
