pub mod ast;
pub mod complexity;
pub mod config;
pub mod contract;
pub mod detector;
pub mod error;
pub mod ground_truth;
pub mod metrics;
pub mod pipeline;
pub mod report;
pub mod rng;
pub mod verdict;

pub use error::{BenchError, Result};
pub use pipeline::AnalysisPipeline;
