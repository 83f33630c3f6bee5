use std::path::PathBuf;

use anyhow::{Context, Result};
use solbench::contract::CorpusGenerator;

pub fn run(
    output: Option<PathBuf>,
    count: usize,
    solc_version: Option<String>,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = super::load_config(config)?;
    let dir = output.unwrap_or(config.corpus.directory);
    let version = solc_version.unwrap_or(config.corpus.solc_version);

    let generator = CorpusGenerator::new(&dir, version);
    let written = generator
        .generate(count)
        .with_context(|| format!("failed to generate corpus in {}", dir.display()))?;

    println!("Generated {} contracts in {}", written, dir.display());
    Ok(())
}
