use solbench::detector::{AnalysisContext, Detector, HeuristicProfile};
use solbench::verdict::VulnCategory;

/// Lexical integer overflow/underflow heuristic.
/// Compound arithmetic and `unchecked`/`assembly` blocks count as risk,
/// SafeMath and explicit bound checks as safety. The complexity discount
/// is the steepest of the three detectors.
pub struct IntegerOverflow;

pub const PROFILE: HeuristicProfile = HeuristicProfile {
    risk_patterns: &["uint+", "int+", "+=", "-=", "*=", "unchecked {", "assembly {"],
    safety_patterns: &["safemath", "require(", "assert(", ">.max", "<.min"],
    safe_base: 0.7,
    unsafe_base: 0.3,
    complexity_divisor: 1.0,
};

impl Detector for IntegerOverflow {
    fn name(&self) -> &str {
        "integer-overflow"
    }

    fn description(&self) -> &str {
        "Pattern-count heuristic for unchecked integer arithmetic"
    }

    fn category(&self) -> VulnCategory {
        VulnCategory::Overflow
    }

    fn detect(&self, ctx: &mut AnalysisContext<'_>) -> bool {
        PROFILE.evaluate(ctx)
    }
}
