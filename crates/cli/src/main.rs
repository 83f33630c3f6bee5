mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "solbench")]
#[command(about = "Accuracy benchmarking for heuristic Solidity vulnerability detectors")]
#[command(version)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the detectors against synthetic ground truth
    Run {
        /// Directory holding the benchmark contracts
        #[arg(long)]
        corpus: Option<PathBuf>,

        /// Load ground truth from this file instead of generating it
        #[arg(short, long)]
        ground_truth: Option<PathBuf>,

        /// Directory for analysis_results.csv and metrics.json
        #[arg(short, long)]
        results_dir: Option<PathBuf>,

        /// Path to config file (default: .solbench.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Fixed random seed
        #[arg(long, conflicts_with = "daily_seed")]
        seed: Option<u64>,

        /// Seed from today's date (stable within a day)
        #[arg(long)]
        daily_seed: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Suppress banner and raw counts
        #[arg(short, long)]
        quiet: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Write a synthetic benchmark corpus
    Generate {
        /// Target directory (default: corpus directory from config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of contracts to generate
        #[arg(short = 'n', long, default_value_t = 100)]
        count: usize,

        /// Compiler version written into each pragma
        #[arg(long)]
        solc_version: Option<String>,

        /// Path to config file (default: .solbench.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Recompute metrics from a saved results CSV
    Metrics {
        /// analysis_results.csv from a previous run
        #[arg(short, long)]
        results: PathBuf,

        /// Ground truth store (default: path from config)
        #[arg(short, long)]
        ground_truth: Option<PathBuf>,

        /// Path to config file (default: .solbench.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List all available detectors
    List,
    /// Generate a default .solbench.toml config file
    Init,
}

#[derive(ValueEnum, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Run {
            corpus,
            ground_truth,
            results_dir,
            config,
            seed,
            daily_seed,
            format,
            quiet,
            no_color,
        } => commands::run::run(commands::run::RunArgs {
            corpus,
            ground_truth,
            results_dir,
            config,
            seed,
            daily_seed,
            format,
            quiet,
            no_color,
        }),
        Commands::Generate {
            output,
            count,
            solc_version,
            config,
        } => commands::generate::run(output, count, solc_version, config),
        Commands::Metrics {
            results,
            ground_truth,
            config,
        } => commands::metrics::run(&results, ground_truth, config),
        Commands::List => commands::list::run(),
        Commands::Init => commands::init::run(),
    }
}
