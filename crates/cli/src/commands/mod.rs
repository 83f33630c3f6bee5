pub mod generate;
pub mod init;
pub mod list;
pub mod metrics;
pub mod run;

use std::path::PathBuf;

use anyhow::{Context, Result};
use solbench::config::{Config, CONFIG_FILE};

/// Load the config at `path`, or `.solbench.toml` in the working directory.
pub(crate) fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    Config::load(&path).with_context(|| format!("failed to load config {}", path.display()))
}
