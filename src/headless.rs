//! Headless mode — run one query against the catalog and print the results.
//!
//! This is the scripted face of the search layer: the same matcher the TUI
//! uses, printed to stdout. An empty query prints nothing and exits cleanly,
//! matching the interactive contract where an empty query shows no dropdown.

use anyhow::Result;
use clap::ValueEnum;
use fitpro_core::catalog;
use fitpro_core::search::search_limited;
use std::io::Write;

/// How headless results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated `kind  id  name  tag`, one hit per line.
    Raw,
    /// One JSON object per hit, one per line.
    Jsonl,
}

/// Run `query` and write every hit to `out`.
pub fn run(query: &str, limit: usize, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    let hits = search_limited(catalog(), query, limit);
    tracing::debug!(query, hits = hits.len(), ?format, "headless search");

    for hit in hits {
        match format {
            OutputFormat::Raw => {
                writeln!(out, "{}\t{}\t{}\t{}", hit.kind(), hit.id(), hit.name(), hit.tag())?;
            }
            OutputFormat::Jsonl => {
                let obj = serde_json::json!({
                    "kind": hit.kind(),
                    "id": hit.id(),
                    "name": hit.name(),
                    "tag": hit.tag(),
                });
                writeln!(out, "{obj}")?;
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
