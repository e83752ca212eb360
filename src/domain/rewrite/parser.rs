//! Defensive parsing of a rewrite reply.

use once_cell::sync::Lazy;
use regex::Regex;

/// Stands in for every rewrite the reply failed to provide.
pub const REWRITE_PLACEHOLDER: &str = "Unable to generate rewrite for this clause.";

static REWRITE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"REWRITE\s+\d+:").expect("rewrite marker pattern compiles"));

/// Splits a reply into exactly `expected` rewrites.
///
/// Text before the first marker is discarded and empty segments are skipped.
/// A non-blank reply with no markers at all becomes the rewrite for the
/// first clause. Missing entries are padded with [`REWRITE_PLACEHOLDER`] and
/// extra entries dropped.
pub fn parse_rewrites(reply: &str, expected: usize) -> Vec<String> {
    fit(segments(reply), expected)
}

/// Like [`parse_rewrites`] for a reply cut off by the output token limit.
///
/// The last recovered segment may end mid-sentence, so it is discarded and
/// its clause receives the placeholder.
pub fn parse_truncated_rewrites(reply: &str, expected: usize) -> Vec<String> {
    let mut rewrites = segments(reply);
    rewrites.pop();
    fit(rewrites, expected)
}

fn segments(reply: &str) -> Vec<String> {
    if REWRITE_MARKER.find(reply).is_none() {
        let whole = reply.trim();
        return if whole.is_empty() {
            Vec::new()
        } else {
            vec![whole.to_string()]
        };
    }

    REWRITE_MARKER
        .split(reply)
        .skip(1)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

fn fit(mut rewrites: Vec<String>, expected: usize) -> Vec<String> {
    rewrites.truncate(expected);
    rewrites.resize_with(expected, || REWRITE_PLACEHOLDER.to_string());
    rewrites
}
