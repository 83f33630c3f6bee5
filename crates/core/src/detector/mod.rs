pub mod context;
pub mod heuristic;
pub mod registry;
pub mod traits;

pub use context::AnalysisContext;
pub use heuristic::HeuristicProfile;
pub use registry::DetectorRegistry;
pub use traits::Detector;
