//! Aggregation and ranking over a collected record list.
//!
//! Pure computation, no I/O; the report renderer consumes the result.

use std::collections::HashMap;

use reelscope_core::VideoRecord;

/// Rank depth of the three top-performer lists.
pub const TOP_RANKED: usize = 3;

/// How many hashtags the frequency table reports.
pub const TOP_HASHTAGS: usize = 10;

/// Sum and mean aggregates across all records. Absent view counts
/// contribute zero to the view figures.
#[derive(Debug, Clone, Copy)]
pub struct Aggregates {
    pub total_views: u64,
    pub total_likes: u64,
    pub total_comments: u64,
    pub avg_views: f64,
    pub avg_likes: f64,
    pub avg_comments: f64,
}

impl Aggregates {
    /// Mean engagement figure across the run:
    /// `(avg_likes + avg_comments) / max(avg_views, 1)`.
    #[must_use]
    pub fn avg_engagement_rate(&self) -> f64 {
        (self.avg_likes + self.avg_comments) / self.avg_views.max(1.0)
    }
}

/// Everything the report needs, computed from one record list.
///
/// Records are borrowed in collection order (most recent first); the
/// three ranked lists hold references back into that slice.
#[derive(Debug)]
pub struct Analysis<'a> {
    pub records: &'a [VideoRecord],
    pub aggregates: Aggregates,
    /// Top 3 by raw view count, descending; absent views rank as zero.
    pub by_views: Vec<&'a VideoRecord>,
    /// Top 3 by raw like count, descending.
    pub by_likes: Vec<&'a VideoRecord>,
    /// Top 3 by engagement rate, descending.
    pub by_engagement: Vec<&'a VideoRecord>,
    /// Top 10 hashtags by count (case-sensitive), ties broken by first
    /// appearance.
    pub top_hashtags: Vec<(String, usize)>,
}

/// Analyze a record list. Returns `None` when the list is empty.
///
/// All three rankings use a stable descending sort, so records with
/// equal keys keep their original collection order.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn analyze(records: &[VideoRecord]) -> Option<Analysis<'_>> {
    if records.is_empty() {
        return None;
    }

    let total_views: u64 = records
        .iter()
        .map(|r| r.video_view_count.unwrap_or(0))
        .sum();
    let total_likes: u64 = records.iter().map(|r| r.likes).sum();
    let total_comments: u64 = records.iter().map(|r| r.comments).sum();
    let count = records.len() as f64;

    let aggregates = Aggregates {
        total_views,
        total_likes,
        total_comments,
        avg_views: total_views as f64 / count,
        avg_likes: total_likes as f64 / count,
        avg_comments: total_comments as f64 / count,
    };

    let by_views = top_by_key(records, |r| r.video_view_count.unwrap_or(0));
    let by_likes = top_by_key(records, |r| r.likes);

    let mut by_engagement: Vec<&VideoRecord> = records.iter().collect();
    by_engagement.sort_by(|a, b| b.engagement_rate().total_cmp(&a.engagement_rate()));
    by_engagement.truncate(TOP_RANKED);

    Some(Analysis {
        records,
        aggregates,
        by_views,
        by_likes,
        by_engagement,
        top_hashtags: hashtag_table(records),
    })
}

fn top_by_key(records: &[VideoRecord], key: impl Fn(&VideoRecord) -> u64) -> Vec<&VideoRecord> {
    let mut refs: Vec<&VideoRecord> = records.iter().collect();
    refs.sort_by(|a, b| key(b).cmp(&key(a)));
    refs.truncate(TOP_RANKED);
    refs
}

/// Count hashtag usage across all records, case-sensitive as captured.
///
/// Each record contributes each of its (already deduplicated) hashtags
/// once. The stable sort keeps ties in first-appearance order.
fn hashtag_table(records: &[VideoRecord]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        for tag in &record.hashtags {
            if let Some(&i) = index.get(tag.as_str()) {
                counts[i].1 += 1;
            } else {
                index.insert(tag.as_str(), counts.len());
                counts.push((tag.clone(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(TOP_HASHTAGS);
    counts
}

#[cfg(test)]
#[path = "summary_test.rs"]
mod tests;
