use solbench::detector::{AnalysisContext, Detector, HeuristicProfile};
use solbench::verdict::VulnCategory;

/// Lexical reentrancy heuristic: value transfers and payable entry points
/// against reentrancy guards and lock checks.
pub struct Reentrancy;

pub const PROFILE: HeuristicProfile = HeuristicProfile {
    risk_patterns: &[".transfer(", ".send(", ".call{value:", "payable"],
    safety_patterns: &[
        "nonreentrant",
        "require(!locked)",
        "reentrancyguard",
        "checks-effects-interactions",
    ],
    safe_base: 0.8,
    unsafe_base: 0.2,
    complexity_divisor: 2.0,
};

impl Detector for Reentrancy {
    fn name(&self) -> &str {
        "reentrancy"
    }

    fn description(&self) -> &str {
        "Pattern-count heuristic for external calls without reentrancy guards"
    }

    fn category(&self) -> VulnCategory {
        VulnCategory::Reentrancy
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
        let mut rng = RandomSource::seeded(7);
        let safe = (0..trials)
            .filter(|_| {
                let mut ctx = AnalysisContext::new(&contract, complexity, &mut rng);
                Reentrancy.detect(&mut ctx)
            })
            .count();
        safe as f64 / trials as f64
    }

    #[test]
    fn test_raw_call_mostly_flagged() {
        let source = r#"
            contract Test {
                mapping(address => uint) public balances;
                function withdraw() public {
                    uint balance = balances[msg.sender];
                    (bool success, ) = msg.sender.call{value: balance}("");
                    balances[msg.sender] = 0;
                }
            }
        "#;
        let rate = safe_rate(source, 0.0);
        assert!((0.15..=0.25).contains(&rate), "safe rate {rate}");
    }

    #[test]
    fn test_guarded_withdraw_mostly_safe() {
        let source = r#"
            contract Vault is ReentrancyGuard {
                bool locked;
                function withdraw() external nonReentrant {
                    require(!locked);
                    payable(msg.sender).transfer(1);
                }
            }
        "#;
        let rate = safe_rate(source, 0.0);
        assert!((0.75..=0.85).contains(&rate), "safe rate {rate}");
    }

    #[test]
    fn test_complexity_halves_confidence() {
        let source = "nonreentrant nonreentrant";
        let rate = safe_rate(source, 1.0);
        assert!((0.35..=0.45).contains(&rate), "safe rate {rate}");
    }
}
