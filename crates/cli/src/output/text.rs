use anyhow::Result;
use colored::Colorize;
use solbench::metrics::MetricsRecord;

use super::RunSummary;

pub fn print(summary: &RunSummary, quiet: bool, no_color: bool) -> Result<()> {
    if no_color {
        colored::control::set_override(false);
    }

    if !quiet {
        println!();
        println!("{}", "  solbench - Detector Accuracy Benchmark".bold());
        println!();
    }

    println!("{}", "  Analysis Summary".bold().underline());
    println!("    Contracts analyzed: {}", summary.contracts_analyzed);

    let metrics = &summary.metrics;
    println!("    Precision:          {}", rate(metrics.precision()));
    println!("    Recall:             {}", rate(metrics.recall()));
    println!("    F-measure:          {}", rate(metrics.f_measure()));

    if let MetricsRecord::Failed(failure) = metrics {
        println!("    {} {}", "Error:".red().bold(), failure.error);
    }

    if !quiet {
        if let Some(report) = metrics.report() {
            println!("    Accuracy:           {}", rate(report.accuracy));
            println!();
            println!("{}", "  Comparisons".bold().underline());
            println!("    True positives:     {}", report.true_positives);
            println!("    False positives:    {}", report.false_positives);
            println!("    True negatives:     {}", report.true_negatives);
            println!("    False negatives:    {}", report.false_negatives);
            println!("    Total:              {}", report.total_checks);
        }
        println!();
        println!("{}", "  Flagged vulnerable".bold().underline());
        println!("    Overflow:           {}", summary.flagged.overflow);
        println!("    Reentrancy:         {}", summary.flagged.reentrancy);
        println!("    Access control:     {}", summary.flagged.access_control);
    }
    println!();

    Ok(())
}

fn rate(value: f64) -> String {
    let text = format!("{value:.2}");
    if value >= 0.8 {
        text.green().to_string()
    } else if value >= 0.5 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}
