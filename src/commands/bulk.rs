//! Classify a batch of texts from a file

use std::path::Path;

use serde::Deserialize;

use nonsense::config::Config;
use nonsense::core::models::BulkItem;
use nonsense::output::{BulkOutput, OutputMode};

use super::read_input;

/// Accepted JSON layouts for a batch file
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BatchFile {
    /// `{"texts": [...]}`, the same body `POST /api/test-bulk` takes
    Wrapped { texts: Vec<BulkItem> },
    /// A bare array of rows
    Items(Vec<BulkItem>),
}

/// Classify every row of `file`
pub fn bulk(config: &Config, file: &Path, lines: bool, mode: OutputMode) -> anyhow::Result<()> {
    let input = read_input(file)?;
    let items = if lines {
        parse_lines(&input)
    } else {
        parse_json(&input)?
    };

    log::info!("checking {} text(s)", items.len());
    let results = config.classifier().classify_bulk_with(&items, config.bulk.workers);
    BulkOutput { results }.render(mode);
    Ok(())
}

/// One row per non-blank line, numbered by line (1-based)
fn parse_lines(input: &str) -> Vec<BulkItem> {
    input
        .lines()
        .zip(1_i64..)
        .filter(|(line, _)| !line.trim().is_empty())
        .map(|(line, number)| BulkItem::new(line, number))
        .collect()
}

fn parse_json(input: &str) -> anyhow::Result<Vec<BulkItem>> {
    let batch: BatchFile = serde_json::from_str(input)
        .map_err(|e| anyhow::anyhow!("expected a JSON array of texts: {e}"))?;
    Ok(match batch {
        BatchFile::Wrapped { texts } => texts,
        BatchFile::Items(items) => items,
    })
}
