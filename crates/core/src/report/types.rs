use serde::Serialize;

use crate::verdict::{Verdicts, VulnCategory};

/// One analyzed contract: its file name and the three detector verdicts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub contract: String,
    #[serde(flatten)]
    pub verdicts: Verdicts,
}

impl ResultRow {
    pub fn new(contract: impl Into<String>, verdicts: Verdicts) -> Self {
        Self {
            contract: contract.into(),
            verdicts,
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct FlagCounts {
    pub overflow: usize,
    pub reentrancy: usize,
    pub access_control: usize,
}

/// Ordered per-contract results of one run.
#[derive(Debug, Default, Serialize)]
pub struct ResultTable {
    pub rows: Vec<ResultRow>,
}

impl ResultTable {
    pub fn new(rows: Vec<ResultRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of contracts flagged vulnerable, per category.
    pub fn flag_counts(&self) -> FlagCounts {
        let flagged = |category: VulnCategory| {
            self.rows
                .iter()
                .filter(|r| !r.verdicts.get(category))
                .count()
        };
        FlagCounts {
            overflow: flagged(VulnCategory::Overflow),
            reentrancy: flagged(VulnCategory::Reentrancy),
            access_control: flagged(VulnCategory::AccessControl),
        }
    }
}

impl From<Vec<ResultRow>> for ResultTable {
    fn from(rows: Vec<ResultRow>) -> Self {
        Self::new(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_counts() {
        let table = ResultTable::new(vec![
            ResultRow::new("a.sol", Verdicts::new(true, true, true)),
            ResultRow::new("b.sol", Verdicts::new(false, true, false)),
            ResultRow::new("c.sol", Verdicts::new(false, false, true)),
        ]);
        let counts = table.flag_counts();
        assert_eq!(counts.overflow, 2);
        assert_eq!(counts.reentrancy, 1);
        assert_eq!(counts.access_control, 1);
    }

    #[test]
    fn test_row_json_is_flat() {
        let row = ResultRow::new("a.sol", Verdicts::new(true, false, true));
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["contract"], "a.sol");
        assert_eq!(json["reentrancy_safe"], false);
    }
}
