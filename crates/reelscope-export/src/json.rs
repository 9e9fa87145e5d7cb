//! Structured export: one JSON document per run.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use reelscope_core::VideoRecord;

use crate::error::ExportError;

/// Envelope written around the record list.
#[derive(Serialize)]
struct ExportDocument<'a> {
    scraped_at: String,
    total_videos: usize,
    videos: &'a [VideoRecord],
}

/// Write the full record list as pretty-printed JSON.
///
/// Every `VideoRecord` field is present; collection order is preserved.
///
/// # Errors
///
/// Returns [`ExportError`] on file creation, serialization, or flush
/// failure. A failure mid-write can leave a truncated file behind; this
/// is not a durability-sensitive workload.
pub fn export_json(
    records: &[VideoRecord],
    scraped_at: DateTime<Utc>,
    path: &Path,
) -> Result<(), ExportError> {
    let document = ExportDocument {
        scraped_at: scraped_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        total_videos: records.len(),
        videos: records,
    };

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &document)?;
    writer.flush()?;

    tracing::debug!(path = %path.display(), records = records.len(), "wrote JSON export");
    Ok(())
}

#[cfg(test)]
#[path = "json_test.rs"]
mod tests;
