pub mod csv;
pub mod error;
pub mod json;

pub use csv::export_csv;
pub use error::ExportError;
pub use json::export_json;

use chrono::{DateTime, Utc};

/// Base filename for one export run: `{username}_videos_{UTC timestamp}`.
///
/// The timestamp makes every run write fresh files; nothing is ever
/// overwritten.
#[must_use]
pub fn export_basename(username: &str, now: DateTime<Utc>) -> String {
    format!("{username}_videos_{}", now.format("%Y%m%d_%H%M%S"))
}
