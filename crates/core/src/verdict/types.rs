use serde::{Deserialize, Serialize};

/// Vulnerability categories checked for every contract.
/// Variant order is the order detectors run and comparisons are made in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VulnCategory {
    Overflow,
    Reentrancy,
    AccessControl,
}

impl VulnCategory {
    pub const ALL: [VulnCategory; 3] = [
        VulnCategory::Overflow,
        VulnCategory::Reentrancy,
        VulnCategory::AccessControl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VulnCategory::Overflow => "overflow",
            VulnCategory::Reentrancy => "reentrancy",
            VulnCategory::AccessControl => "access_control",
        }
    }

    /// Column / JSON key holding this category's safe verdict.
    pub fn field_name(&self) -> &'static str {
        match self {
            VulnCategory::Overflow => "overflow_safe",
            VulnCategory::Reentrancy => "reentrancy_safe",
            VulnCategory::AccessControl => "access_control_safe",
        }
    }
}

/// One "safe" verdict per category. `true` means no vulnerability of that
/// kind was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Verdicts {
    pub overflow_safe: bool,
    pub reentrancy_safe: bool,
    pub access_control_safe: bool,
}

impl Verdicts {
    pub fn new(overflow_safe: bool, reentrancy_safe: bool, access_control_safe: bool) -> Self {
        Self {
            overflow_safe,
            reentrancy_safe,
            access_control_safe,
        }
    }

    pub fn get(&self, category: VulnCategory) -> bool {
        match category {
            VulnCategory::Overflow => self.overflow_safe,
            VulnCategory::Reentrancy => self.reentrancy_safe,
            VulnCategory::AccessControl => self.access_control_safe,
        }
    }

    pub fn set(&mut self, category: VulnCategory, safe: bool) {
        match category {
            VulnCategory::Overflow => self.overflow_safe = safe,
            VulnCategory::Reentrancy => self.reentrancy_safe = safe,
            VulnCategory::AccessControl => self.access_control_safe = safe,
        }
    }

    /// Categories flagged as vulnerable.
    pub fn flagged(&self) -> Vec<VulnCategory> {
        VulnCategory::ALL
            .into_iter()
            .filter(|c| !self.get(*c))
            .collect()
    }
}

/// Detector output for one contract.
pub type DetectionResult = Verdicts;
