pub mod json;
pub mod text;

use serde::Serialize;
use solbench::metrics::MetricsRecord;
use solbench::report::FlagCounts;

/// What a finished run reports to the console.
#[derive(Serialize)]
pub struct RunSummary {
    pub contracts_analyzed: usize,
    pub flagged: FlagCounts,
    pub metrics: MetricsRecord,
}
