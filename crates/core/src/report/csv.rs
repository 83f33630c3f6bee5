use std::fs;
use std::path::Path;

use super::types::{ResultRow, ResultTable};
use crate::error::{BenchError, Result};
use crate::verdict::{Verdicts, VulnCategory};

const HEADER_CONTRACT: &str = "contract";

impl ResultTable {
    /// Header row: `contract,overflow_safe,reentrancy_safe,access_control_safe`
    pub fn csv_header() -> String {
        let mut columns = vec![HEADER_CONTRACT];
        columns.extend(VulnCategory::ALL.iter().map(|c| c.field_name()));
        columns.join(",")
    }

    pub fn to_csv(&self) -> String {
        let mut out = Self::csv_header();
        out.push('\n');
        for row in &self.rows {
            out.push_str(&escape(&row.contract));
            for category in VulnCategory::ALL {
                out.push(',');
                out.push_str(if row.verdicts.get(category) { "true" } else { "false" });
            }
            out.push('\n');
        }
        out
    }

    pub fn from_csv(data: &str) -> Result<Self> {
        let mut lines = data.lines().enumerate().filter(|(_, l)| !l.trim().is_empty());

        match lines.next() {
            Some((_, header)) if header.trim() == Self::csv_header() => {}
            Some((idx, header)) => {
                return Err(BenchError::ResultsFormat {
                    line: idx + 1,
                    reason: format!("unexpected header `{}`", header.trim()),
                })
            }
            None => return Ok(Self::default()),
        }

        let mut rows = Vec::new();
        for (idx, line) in lines {
            rows.push(parse_row(line).map_err(|reason| BenchError::ResultsFormat {
                line: idx + 1,
                reason,
            })?);
        }
        Ok(Self::new(rows))
    }

    pub fn write_csv(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| BenchError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, self.to_csv()).map_err(|source| BenchError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn read_csv(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|source| BenchError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_csv(&data)
    }
}

/// Splits off the last three comma-separated fields so contract names may
/// themselves contain commas (quoted on write).
fn parse_row(line: &str) -> std::result::Result<ResultRow, String> {
    let mut fields: Vec<&str> = line.rsplitn(4, ',').collect();
    if fields.len() != 4 {
        return Err(format!("expected 4 columns, found {}", fields.len()));
    }
    fields.reverse();

    let mut verdicts = Verdicts::default();
    for (category, raw) in VulnCategory::ALL.into_iter().zip(&fields[1..]) {
        verdicts.set(category, parse_bool(raw)?);
    }
    Ok(ResultRow::new(unescape(fields[0]), verdicts))
}

fn parse_bool(raw: &str) -> std::result::Result<bool, String> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(format!("invalid boolean `{other}`")),
    }
}

fn escape(field: &str) -> String {
    if field.contains([',', '"']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn unescape(field: &str) -> String {
    let trimmed = field.trim();
    match trimmed.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
        Some(inner) => inner.replace("\"\"", "\""),
        None => trimmed.to_string(),
    }
}
