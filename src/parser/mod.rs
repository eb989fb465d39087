//! Parser module: markup to sorted definitions.
//!
//! `tags` reads events, `collect` flattens them into fragments, `segment`
//! groups fragments under headings and `normalize` types each group.

pub mod collect;
pub mod normalize;
pub mod segment;
pub mod tags;

use crate::config::GeneratorConfig;
use crate::model::{self, Definition};
use anyhow::{bail, Result};
use tracing::info;

/// Run the whole extraction pipeline over one document.
pub fn parse_document(markup: &str, config: &GeneratorConfig) -> Result<Vec<Definition>> {
    let fragments = collect::collect(tags::TagReader::new(markup));
    let mut records = segment::segment(fragments);

    if let Some(ref start) = config.start_at {
        let Some(first) = records.iter().position(|r| &r.title == start) else {
            bail!("heading not found: {}", start);
        };
        records.drain(..first);
    }

    let mut defs: Vec<Definition> = records
        .into_iter()
        .filter_map(normalize::normalize)
        .filter(|def| config.include_functions || !def.is_function())
        .collect();
    info!(definitions = defs.len(), "parsed document");

    model::sort_definitions(&mut defs);
    Ok(defs)
}
