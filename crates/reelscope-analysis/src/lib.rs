pub mod report;
pub mod summary;

pub use report::render_report;
pub use summary::{analyze, Aggregates, Analysis};
