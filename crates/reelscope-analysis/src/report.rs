//! Plain-text rendering of an [`Analysis`].

use reelscope_core::caption;
use reelscope_core::format::{group_thousands, group_thousands_rounded};

use crate::summary::Analysis;

const BANNER: &str = "======================================================================";
const RULE: &str = "──────────────────────────────────────────────────────────────────────";

/// Caption preview length inside the ranked sections.
const RANKED_PREVIEW_CHARS: usize = 100;

/// Render the full performance report as one printable string.
#[must_use]
pub fn render_report(analysis: &Analysis<'_>) -> String {
    let mut out = String::new();
    let records = analysis.records;
    let agg = &analysis.aggregates;

    out.push_str(&format!("\n{BANNER}\n"));
    out.push_str("VIDEO PERFORMANCE ANALYSIS\n");
    out.push_str(&format!("{BANNER}\n"));

    out.push_str(&format!("\nTotal Videos Analyzed: {}\n", records.len()));
    // Records arrive most recent first, so the range runs last → first.
    out.push_str(&format!(
        "Date Range: {} → {}\n",
        records[records.len() - 1].date_readable,
        records[0].date_readable
    ));

    out.push_str(&format!(
        "\nTotal Views:    {:>12}\n",
        group_thousands(agg.total_views)
    ));
    out.push_str(&format!(
        "Total Likes:    {:>12}\n",
        group_thousands(agg.total_likes)
    ));
    out.push_str(&format!(
        "Total Comments: {:>12}\n",
        group_thousands(agg.total_comments)
    ));

    out.push_str(&format!(
        "\nAvg Views/Video:    {:>10}\n",
        group_thousands_rounded(agg.avg_views)
    ));
    out.push_str(&format!(
        "Avg Likes/Video:    {:>10}\n",
        group_thousands_rounded(agg.avg_likes)
    ));
    out.push_str(&format!(
        "Avg Comments/Video: {:>10}\n",
        group_thousands_rounded(agg.avg_comments)
    ));
    out.push_str(&format!(
        "Avg Engagement Rate: {:.2}%\n",
        agg.avg_engagement_rate() * 100.0
    ));

    out.push_str(&format!("\n{RULE}\n"));
    out.push_str("TOP 3 BY VIEWS:\n");
    for (i, record) in analysis.by_views.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {} views | {}\n",
            i + 1,
            group_thousands(record.video_view_count.unwrap_or(0)),
            record.url
        ));
        out.push_str(&format!(
            "     {}\n",
            caption::preview(&record.caption, RANKED_PREVIEW_CHARS)
        ));
    }

    out.push_str(&format!("\n{RULE}\n"));
    out.push_str("TOP 3 BY LIKES:\n");
    for (i, record) in analysis.by_likes.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {} likes | {}\n",
            i + 1,
            group_thousands(record.likes),
            record.url
        ));
        out.push_str(&format!(
            "     {}\n",
            caption::preview(&record.caption, RANKED_PREVIEW_CHARS)
        ));
    }

    out.push_str(&format!("\n{RULE}\n"));
    out.push_str("TOP 3 BY ENGAGEMENT RATE:\n");
    for (i, record) in analysis.by_engagement.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {:.2}% engagement | {}\n",
            i + 1,
            record.engagement_rate() * 100.0,
            record.url
        ));
        out.push_str(&format!(
            "     {}\n",
            caption::preview(&record.caption, RANKED_PREVIEW_CHARS)
        ));
    }

    if !analysis.top_hashtags.is_empty() {
        out.push_str(&format!("\n{RULE}\n"));
        out.push_str("MOST USED HASHTAGS:\n");
        for (tag, count) in &analysis.top_hashtags {
            out.push_str(&format!("  #{tag}: {count}x\n"));
        }
    }

    out.push_str(&format!("\n{BANNER}\n"));
    out
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
