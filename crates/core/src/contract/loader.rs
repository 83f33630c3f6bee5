use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{BenchError, Result};

/// List the contract files directly inside `dir` with the given extension,
/// sorted by file name. Paths matching any `exclude` glob are skipped.
pub fn discover_contracts(dir: &Path, extension: &str, exclude: &[String]) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(BenchError::CorpusMissing(dir.to_path_buf()));
    }

    let patterns: Vec<glob::Pattern> = exclude
        .iter()
        .filter_map(|p| glob::Pattern::new(p).ok())
        .collect();

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| BenchError::CorpusRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.extension().is_some_and(|ext| ext == extension) {
            continue;
        }
        if entry.file_type().is_symlink() && !path.exists() {
            continue;
        }
        let path_str = path.to_string_lossy();
        if patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }
        files.push(path.to_path_buf());
    }

    Ok(files)
}

/// Number of contract files in `dir`; zero if it does not exist.
pub fn count_contracts(dir: &Path, extension: &str) -> usize {
    discover_contracts(dir, extension, &[])
        .map(|files| files.len())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_discovers_by_extension_sorted() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("b.sol"), "contract B {}").unwrap();
        std::fs::write(dir.path().join("a.sol"), "contract A {}").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested").join("c.sol"), "contract C {}").unwrap();

        let files = discover_contracts(dir.path(), "sol", &[]).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.sol", "b.sol"]);
        assert_eq!(count_contracts(dir.path(), "sol"), 2);
    }

    #[test]
    fn test_exclude_patterns() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("keep.sol"), "").unwrap();
        std::fs::write(dir.path().join("skip_mock.sol"), "").unwrap();

        let files = discover_contracts(dir.path(), "sol", &["*_mock.sol".to_string()]).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("keep.sol"));
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            discover_contracts(&missing, "sol", &[]),
            Err(BenchError::CorpusMissing(_))
        ));
        assert_eq!(count_contracts(&missing, "sol"), 0);
    }
}
