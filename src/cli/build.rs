//! Index build command.

use crate::config::IndexConfig;
use crate::log;
use crate::pipeline::{Indexer, emit};
use crate::utils::plural_count;
use anyhow::Result;

/// Build both indexes and write them under `content/static/`.
pub fn build_index(config: &IndexConfig) -> Result<()> {
    let indexer = Indexer::new(config)?;
    let output = indexer.run()?;

    log!("index"; "indexed {} ({})",
        plural_count(output.registry.len(), "page"),
        plural_count(output.words.len(), "distinct token"));

    emit::write_artifacts(config, &output)
}
