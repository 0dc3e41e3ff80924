//! Content check command.
//!
//! Runs the same discovery/parse/tokenize pipeline as `build`, so every
//! front-matter diagnostic is reported, but writes nothing.

use crate::config::IndexConfig;
use crate::log;
use crate::pipeline::Indexer;
use crate::utils::plural_count;
use anyhow::Result;

/// Parse all content and report diagnostics without emitting artifacts.
pub fn check_content(config: &IndexConfig) -> Result<()> {
    let indexer = Indexer::new(config)?;
    let output = indexer.run()?;

    log!("check"; "parsed {}, {} indexable",
        plural_count(output.registry.len(), "page"),
        plural_count(output.words.len(), "distinct token"));
    Ok(())
}
