//! Tabular export: a fixed 13-column CSV.

use std::path::Path;

use chrono::SecondsFormat;

use reelscope_core::VideoRecord;

use crate::error::ExportError;

/// Column set and order. Fields outside this list (readable date,
/// typename, sponsorship flag, thumbnail) are deliberately dropped from
/// the tabular view.
const COLUMNS: [&str; 13] = [
    "shortcode",
    "url",
    "date",
    "caption",
    "likes",
    "comments",
    "video_view_count",
    "video_duration",
    "hashtags",
    "mentions",
    "tagged_users",
    "location",
    "video_url",
];

/// Write the record list as CSV with a header row.
///
/// List-valued fields are flattened to `", "`-joined strings; absent
/// optionals become empty cells. When `records` is empty this returns
/// without creating a file at all.
///
/// # Errors
///
/// Returns [`ExportError`] on file creation or write failure.
pub fn export_csv(records: &[VideoRecord], path: &Path) -> Result<(), ExportError> {
    if records.is_empty() {
        return Ok(());
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(COLUMNS)?;

    for record in records {
        writer.write_record(&[
            record.shortcode.clone(),
            record.url.clone(),
            record.date.to_rfc3339_opts(SecondsFormat::Secs, true),
            record.caption.clone(),
            record.likes.to_string(),
            record.comments.to_string(),
            record
                .video_view_count
                .map(|v| v.to_string())
                .unwrap_or_default(),
            record
                .video_duration
                .map(|d| d.to_string())
                .unwrap_or_default(),
            record.hashtags.join(", "),
            record.mentions.join(", "),
            record.tagged_users.join(", "),
            record.location.clone().unwrap_or_default(),
            record.video_url.clone().unwrap_or_default(),
        ])?;
    }
    writer.flush()?;

    tracing::debug!(path = %path.display(), records = records.len(), "wrote CSV export");
    Ok(())
}

#[cfg(test)]
#[path = "csv_test.rs"]
mod tests;
