pub mod confusion;
pub mod report;

pub use confusion::ConfusionMatrix;
pub use report::{compute, MetricsFailure, MetricsRecord, MetricsReport};
