use super::context::AnalysisContext;
use crate::verdict::VulnCategory;

/// Core trait for all vulnerability detectors.
/// Implementors inspect one contract and return a "safe" verdict for their
/// category: `true` means no vulnerability of that kind was found.
pub trait Detector: Send + Sync {
    /// Unique identifier for this detector (e.g., "integer-overflow")
    fn name(&self) -> &str;

    /// Human-readable description of what this detector checks
    fn description(&self) -> &str;

    /// Category this detector rules on
    fn category(&self) -> VulnCategory;

    /// Run detection on the given analysis context
    fn detect(&self, context: &mut AnalysisContext<'_>) -> bool;
}
