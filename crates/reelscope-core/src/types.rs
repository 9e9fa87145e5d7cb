use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::caption;

/// Placeholder substituted for empty or missing captions.
pub const NO_CAPTION: &str = "(no caption)";

/// A resolved profile, as returned by the provider before any posts are
/// fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileHandle {
    /// Platform-internal numeric user id, used to drive timeline queries.
    pub user_id: String,
    pub username: String,
    pub full_name: String,
    pub followers: u64,
    pub followees: u64,
    pub media_count: u64,
    pub biography: String,
    pub external_url: Option<String>,
    pub is_private: bool,
}

/// One post as shaped by the provider, before normalization.
///
/// Carries the `is_video` flag so the collector can filter; everything else
/// is optional-by-default the way the platform returns it.
#[derive(Debug, Clone)]
pub struct RawPost {
    pub shortcode: String,
    pub taken_at: DateTime<Utc>,
    pub caption: Option<String>,
    pub likes: u64,
    pub comments: u64,
    pub is_video: bool,
    /// `None` means the platform did not report a view count, which is
    /// distinct from a reported count of zero.
    pub video_view_count: Option<u64>,
    pub video_url: Option<String>,
    pub video_duration: Option<f64>,
    pub typename: String,
    pub is_sponsored: bool,
    pub tagged_users: Vec<String>,
    pub location: Option<String>,
    pub thumbnail_url: Option<String>,
}

/// One page of a profile timeline plus the cursor for the next page.
#[derive(Debug, Clone)]
pub struct PostPage {
    pub posts: Vec<RawPost>,
    /// `None` when the timeline is exhausted.
    pub end_cursor: Option<String>,
}

/// Immutable snapshot of one video post at scrape time.
///
/// Field names are the export schema; both exporters and the JSON
/// round-trip tests depend on them staying stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub shortcode: String,
    pub url: String,
    pub date: DateTime<Utc>,
    pub date_readable: String,
    pub caption: String,
    pub likes: u64,
    pub comments: u64,
    pub video_view_count: Option<u64>,
    pub video_url: Option<String>,
    pub video_duration: Option<f64>,
    pub typename: String,
    pub is_sponsored: bool,
    pub hashtags: Vec<String>,
    pub mentions: Vec<String>,
    pub tagged_users: Vec<String>,
    pub location: Option<String>,
    pub thumbnail_url: Option<String>,
}

impl VideoRecord {
    /// Normalize a provider post into a record: derive the canonical URL,
    /// both date renderings, the caption placeholder, and the
    /// caption-derived hashtag/mention lists.
    #[must_use]
    pub fn from_raw(raw: RawPost) -> Self {
        let caption = match raw.caption {
            Some(text) if !text.trim().is_empty() => text,
            _ => NO_CAPTION.to_owned(),
        };
        // The placeholder contains no '#' or '@', so extraction on it
        // yields empty lists.
        let hashtags = caption::extract_hashtags(&caption);
        let mentions = caption::extract_mentions(&caption);

        Self {
            url: format!("https://www.instagram.com/p/{}/", raw.shortcode),
            date_readable: raw.taken_at.format("%B %d, %Y %I:%M %p UTC").to_string(),
            shortcode: raw.shortcode,
            date: raw.taken_at,
            caption,
            likes: raw.likes,
            comments: raw.comments,
            video_view_count: raw.video_view_count,
            video_url: raw.video_url,
            video_duration: raw.video_duration,
            typename: raw.typename,
            is_sponsored: raw.is_sponsored,
            hashtags,
            mentions,
            tagged_users: raw.tagged_users,
            location: raw.location,
            thumbnail_url: raw.thumbnail_url,
        }
    }

    /// Per-record engagement rate: `(likes + comments) / max(views, 1)`.
    ///
    /// The denominator is floored at 1 rather than skipping zero-view
    /// records; a record with no views and some interactions deliberately
    /// reports maximal apparent engagement.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn engagement_rate(&self) -> f64 {
        let interactions = self.likes + self.comments;
        let views = self.video_view_count.unwrap_or(0).max(1);
        interactions as f64 / views as f64
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
