//! Caption-derived fields: hashtag/mention extraction and previews.

use std::collections::HashSet;

use regex::Regex;

/// Extract hashtags from a caption, without the `#` prefix.
///
/// Case-sensitive, deduplicated, ordered by first appearance.
#[must_use]
pub fn extract_hashtags(caption: &str) -> Vec<String> {
    let re = Regex::new(r"#([\p{L}\p{N}_]+)").expect("valid hashtag regex");
    dedup_captures(&re, caption)
}

/// Extract `@mentions` from a caption, without the `@` prefix.
///
/// A trailing dot is sentence punctuation, not part of the username.
#[must_use]
pub fn extract_mentions(caption: &str) -> Vec<String> {
    let re = Regex::new(r"@([A-Za-z0-9_](?:[A-Za-z0-9_.]*[A-Za-z0-9_])?)")
        .expect("valid mention regex");
    dedup_captures(&re, caption)
}

fn dedup_captures(re: &Regex, text: &str) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();
    for cap in re.captures_iter(text) {
        let value = cap[1].to_string();
        if seen.insert(value.clone()) {
            out.push(value);
        }
    }
    out
}

/// Truncate to at most `max` characters, appending `...` when cut.
///
/// Counts chars rather than bytes so multi-byte captions never split
/// mid-character.
#[must_use]
pub fn preview(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{cut}...")
}

#[cfg(test)]
#[path = "caption_test.rs"]
mod tests;
