use anyhow::Result;
use gtrace::config::load_config;
use gtrace::core::convert::run_batch;
use std::path::PathBuf;

pub(crate) fn handle_batch(config_path: Option<&PathBuf>) -> Result<()> {
    let config = load_config(config_path)?;
    tracing::debug!("{:?}", config);

    run_batch(&config)
}
