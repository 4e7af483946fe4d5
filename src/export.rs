//! CSV dataset output.
//!
//! One flat CSV per category, columns in the fixed record order, header row
//! always present.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::record::GenreRecord;

/// CSV column order. Must match the `GenreRecord` field order.
const HEADER: [&str; 5] = ["title", "genres", "description", "category", "genre_id"];

/// Write one category's accumulated records to a CSV file.
///
/// An empty dataset still produces a file with the header row.
pub fn write_dataset(path: &Path, records: &[GenreRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create output directory: {}", parent.display())
        })?;
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    if records.is_empty() {
        // serialize() derives the header from the record fields; with no
        // records it has to be written explicitly.
        writer
            .write_record(HEADER)
            .context("Failed to write CSV header")?;
    }

    for record in records {
        writer
            .serialize(record)
            .context("Failed to write CSV row")?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush output file: {}", path.display()))?;

    info!(path = %path.display(), rows = records.len(), "Dataset written");
    Ok(())
}
