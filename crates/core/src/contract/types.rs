use std::path::{Path, PathBuf};

use crate::error::{BenchError, Result};

/// A contract source file loaded for analysis.
/// The source is lower-cased once on load; all pattern matching runs on it.
#[derive(Debug, Clone)]
pub struct Contract {
    pub file_name: String,
    pub path: PathBuf,
    source: String,
}

impl Contract {
    /// Read a contract from disk. Files that are not valid UTF-8 are rejected.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| BenchError::ContractRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_source(file_name_of(path), path.to_path_buf(), &raw))
    }

    /// Build a contract from in-memory source (useful for testing).
    pub fn from_source(file_name: impl Into<String>, path: PathBuf, raw: &str) -> Self {
        Self {
            file_name: file_name.into(),
            path,
            source: raw.to_lowercase(),
        }
    }

    /// Lower-cased source text.
    pub fn source(&self) -> &str {
        &self.source
    }
}

pub(crate) fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
