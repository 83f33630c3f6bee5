use serde::{Deserialize, Serialize};

use crate::verdict::{Verdicts, VulnCategory};

/// Provenance recorded alongside each synthetic label set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundTruthMetadata {
    pub filename: String,
    /// Calendar date of generation, `YYYY-MM-DD`
    pub date_analyzed: String,
    pub complexity_score: f64,
}

/// Reference labels for one contract. Serialized flat:
/// `{overflow_safe, reentrancy_safe, access_control_safe, metadata}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundTruthEntry {
    #[serde(flatten)]
    pub labels: Verdicts,
    pub metadata: GroundTruthMetadata,
}

/// Per-category vulnerability threshold: `base + complexity * slope`,
/// jittered by `THRESHOLD_JITTER`. A label is safe when a uniform draw
/// exceeds the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelThreshold {
    pub base: f64,
    pub slope: f64,
}

pub const THRESHOLD_JITTER: f64 = 0.05;

impl LabelThreshold {
    pub fn for_category(category: VulnCategory) -> Self {
        match category {
            VulnCategory::Overflow => Self {
                base: 0.2,
                slope: 0.3,
            },
            VulnCategory::Reentrancy => Self {
                base: 0.15,
                slope: 0.4,
            },
            VulnCategory::AccessControl => Self {
                base: 0.1,
                slope: 0.35,
            },
        }
    }

    /// Threshold before jitter
    pub fn at(&self, complexity: f64) -> f64 {
        self.base + complexity * self.slope
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        let overflow = LabelThreshold::for_category(VulnCategory::Overflow);
        assert!((overflow.at(0.0) - 0.2).abs() < 1e-12);
        assert!((overflow.at(1.0) - 0.5).abs() < 1e-12);

        let reentrancy = LabelThreshold::for_category(VulnCategory::Reentrancy);
        assert!((reentrancy.at(1.0) - 0.55).abs() < 1e-12);

        let access = LabelThreshold::for_category(VulnCategory::AccessControl);
        assert!((access.at(0.5) - 0.275).abs() < 1e-12);
    }

    #[test]
    fn test_entry_json_shape() {
        let entry = GroundTruthEntry {
            labels: Verdicts::new(true, false, true),
            metadata: GroundTruthMetadata {
                filename: "benchmark_1.sol".to_string(),
                date_analyzed: "2024-03-01".to_string(),
                complexity_score: 0.25,
            },
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["overflow_safe"], true);
        assert_eq!(json["reentrancy_safe"], false);
        assert_eq!(json["access_control_safe"], true);
        assert_eq!(json["metadata"]["filename"], "benchmark_1.sol");
        assert_eq!(json["metadata"]["date_analyzed"], "2024-03-01");

        let back: GroundTruthEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }
}
