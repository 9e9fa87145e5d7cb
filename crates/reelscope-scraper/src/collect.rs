//! Collector: page through a provider timeline until enough videos.

use reelscope_core::{ProfileHandle, VideoRecord};

use crate::error::ProviderError;
use crate::provider::PostProvider;

/// Maximum number of timeline pages fetched in one collection run.
/// Prevents infinite loops on cycling cursors.
const MAX_PAGES: usize = 200;

/// Result of a collection run.
#[derive(Debug)]
pub struct CollectOutcome {
    /// Collected video records, most recent first, at most the requested
    /// target count.
    pub records: Vec<VideoRecord>,
    /// Non-video posts scanned and discarded along the way.
    pub skipped_non_video: usize,
}

/// Collect up to `target` video posts from a profile's timeline.
///
/// Non-video posts are counted and discarded; they do not consume the
/// target. Collection stops as soon as `target` videos are found or the
/// timeline is exhausted, whichever comes first. `progress` is invoked
/// once per accepted record with its 1-based ordinal, before the record
/// is appended, so callers can print per-record progress.
///
/// # Errors
///
/// Propagates any [`ProviderError`] from the provider, and returns
/// [`ProviderError::PaginationLimit`] if more than [`MAX_PAGES`] pages are
/// fetched without reaching the target.
pub async fn collect_videos<P, F>(
    provider: &P,
    profile: &ProfileHandle,
    target: usize,
    mut progress: F,
) -> Result<CollectOutcome, ProviderError>
where
    P: PostProvider,
    F: FnMut(usize, &VideoRecord),
{
    let mut records: Vec<VideoRecord> = Vec::with_capacity(target);
    let mut skipped_non_video = 0usize;
    let mut cursor: Option<String> = None;
    let mut page_count = 0usize;

    while records.len() < target {
        page_count += 1;
        if page_count > MAX_PAGES {
            return Err(ProviderError::PaginationLimit {
                username: profile.username.clone(),
                max_pages: MAX_PAGES,
            });
        }

        let page = provider.fetch_posts(profile, cursor.as_deref()).await?;

        for post in page.posts {
            if records.len() >= target {
                break;
            }
            if !post.is_video {
                skipped_non_video += 1;
                continue;
            }
            let record = VideoRecord::from_raw(post);
            progress(records.len() + 1, &record);
            records.push(record);
        }

        if records.len() >= target {
            break;
        }
        match page.end_cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    tracing::debug!(
        username = %profile.username,
        collected = records.len(),
        skipped = skipped_non_video,
        pages = page_count,
        "collection finished"
    );

    Ok(CollectOutcome {
        records,
        skipped_non_video,
    })
}

#[cfg(test)]
#[path = "collect_test.rs"]
mod tests;
