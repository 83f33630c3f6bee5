pub mod access_control;
pub mod integer_overflow;
pub mod reentrancy;

use solbench::detector::{Detector, DetectorRegistry};

/// Returns all built-in detectors, in category order
pub fn all_detectors() -> Vec<Box<dyn Detector>> {
    vec![
        Box::new(integer_overflow::IntegerOverflow),
        Box::new(reentrancy::Reentrancy),
        Box::new(access_control::AccessControl),
    ]
}

/// Registry wired with the built-in heuristics
pub fn default_registry() -> DetectorRegistry {
    DetectorRegistry::new(
        Box::new(integer_overflow::IntegerOverflow),
        Box::new(reentrancy::Reentrancy),
        Box::new(access_control::AccessControl),
    )
}
