use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde_json::Value;

use crate::error::{BenchError, Result};

/// Thin wrapper around an installed `solc` binary that produces the
/// compact JSON AST of a source unit.
///
/// Not used by the evaluation pipeline; kept as a structural data source
/// for heuristics that want more than substring counts.
#[derive(Debug, Clone)]
pub struct SolcCompiler {
    binary: PathBuf,
    version: String,
}

impl SolcCompiler {
    pub fn new(version: impl Into<String>) -> Self {
        Self::with_binary("solc", version)
    }

    pub fn with_binary(binary: impl Into<PathBuf>, version: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            version: version.into(),
        }
    }

    /// Version the caller expects the binary to be.
    pub fn expected_version(&self) -> &str {
        &self.version
    }

    pub fn is_available(&self) -> bool {
        Command::new(&self.binary)
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    /// Version reported by the binary (e.g. `0.8.0+commit.c7dfd78e...`).
    pub fn installed_version(&self) -> Option<String> {
        let output = Command::new(&self.binary).arg("--version").output().ok()?;
        if !output.status.success() {
            return None;
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        stdout
            .lines()
            .find_map(|l| l.strip_prefix("Version:"))
            .map(|v| v.trim().to_string())
    }

    pub fn parse_file(&self, path: &Path) -> Result<Value> {
        let source = std::fs::read_to_string(path).map_err(|source| BenchError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse_source(&source)
    }

    /// Compile `source` from stdin and return its AST.
    pub fn parse_source(&self, source: &str) -> Result<Value> {
        let mut child = Command::new(&self.binary)
            .args(["--combined-json", "ast", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                BenchError::Compiler(format!("failed to launch {}: {e}", self.binary.display()))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(source.as_bytes())
                .map_err(|e| BenchError::Compiler(format!("failed to write source: {e}")))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| BenchError::Compiler(e.to_string()))?;
        if !output.status.success() {
            return Err(BenchError::Compiler(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        let combined: Value = serde_json::from_slice(&output.stdout)?;
        extract_source_ast(&combined)
    }
}

/// Pull the first source unit's AST out of `solc --combined-json ast` output.
pub fn extract_source_ast(combined: &Value) -> Result<Value> {
    let sources = combined
        .get("sources")
        .and_then(Value::as_object)
        .ok_or_else(|| BenchError::Compiler("no `sources` in compiler output".to_string()))?;

    sources
        .values()
        .find_map(|unit| unit.get("AST").or_else(|| unit.get("ast")))
        .cloned()
        .ok_or_else(|| BenchError::Compiler("no AST in compiler output".to_string()))
}
