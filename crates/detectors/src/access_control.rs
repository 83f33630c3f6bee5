use solbench::detector::{AnalysisContext, Detector, HeuristicProfile};
use solbench::verdict::VulnCategory;

/// Lexical access-control heuristic. Ownership modifiers and explicit
/// sender checks count as safety; public surface and destructive
/// primitives count as risk.
pub struct AccessControl;

pub const PROFILE: HeuristicProfile = HeuristicProfile {
    risk_patterns: &["public", "external", "selfdestruct", "delegatecall"],
    safety_patterns: &[
        "onlyowner",
        "require(msg.sender ==",
        "require(owner ==",
        "require(_owner ==",
        "access control",
        "ownable",
        "auth",
    ],
    safe_base: 0.75,
    unsafe_base: 0.25,
    complexity_divisor: 3.0,
};

impl Detector for AccessControl {
    fn name(&self) -> &str {
        "access-control"
    }

    fn description(&self) -> &str {
        "Pattern-count heuristic for privileged functions lacking ownership checks"
    }

    fn category(&self) -> VulnCategory {
        VulnCategory::AccessControl
    }

    fn detect(&self, ctx: &mut AnalysisContext<'_>) -> bool {
        PROFILE.evaluate(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solbench::contract::Contract;
    use solbench::rng::RandomSource;
    use std::path::PathBuf;

    fn safe_rate(source: &str, complexity: f64) -> f64 {
        let trials = 4000;
        let contract = Contract::from_source("test.sol", PathBuf::from("test.sol"), source);
        let mut rng = RandomSource::seeded(31);
        let safe = (0..trials)
            .filter(|_| {
                let mut ctx = AnalysisContext::new(&contract, complexity, &mut rng);
                AccessControl.detect(&mut ctx)
            })
            .count();
        safe as f64 / trials as f64
    }

    #[test]
    fn test_unprotected_setter_mostly_flagged() {
        let source = r#"
            contract Test {
                uint256 public value;
                function setValue(uint256 newValue) public {
                    value = newValue;
                }
            }
        "#;
        let rate = safe_rate(source, 0.0);
        assert!((0.20..=0.30).contains(&rate), "safe rate {rate}");
    }

    #[test]
    fn test_owner_checks_mostly_safe() {
        let source = r#"
            contract Test is Ownable {
                function kill() public onlyOwner {
                    require(msg.sender == owner);
                }
            }
        "#;
        let rate = safe_rate(source, 0.0);
        assert!((0.70..=0.80).contains(&rate), "safe rate {rate}");
    }

    #[test]
    fn test_complexity_discount_is_mild() {
        // base 0.75 discounted by a third at full complexity
        let rate = safe_rate("onlyowner onlyowner", 1.0);
        assert!((0.45..=0.55).contains(&rate), "safe rate {rate}");
    }
}
