//! Clause context extraction.
//!
//! A match is shown to the reader inside its surrounding clause. Sentence-like
//! units (split on `.`, `!` or `?` followed by whitespace) give the most
//! natural boundaries; when no unit holds the match, a fixed radius of
//! characters around it is used instead.

use once_cell::sync::Lazy;
use once_cell::unsync::OnceCell;
use regex::Regex;

static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("sentence boundary pattern compiles"));

/// Byte span of one sentence-like unit, delimiter excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SentenceSpan {
    start: usize,
    end: usize,
}

/// Sentence units of one document, built once per detection call.
#[derive(Debug)]
pub struct SentenceIndex<'t> {
    text: &'t str,
    spans: Vec<SentenceSpan>,
    lowered: OnceCell<Vec<String>>,
}

impl<'t> SentenceIndex<'t> {
    pub fn build(text: &'t str) -> Self {
        let mut spans = Vec::new();
        let mut cursor = 0;

        for boundary in SENTENCE_BOUNDARY.find_iter(text) {
            push_unit(text, &mut spans, cursor, boundary.start());
            cursor = boundary.end();
        }
        push_unit(text, &mut spans, cursor, text.len());

        Self {
            text,
            spans,
            lowered: OnceCell::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The trimmed sentence to present for a match at `start..end`.
    ///
    /// The unit enclosing the match wins. A match that straddles a boundary
    /// falls back to the first unit containing the matched words anywhere,
    /// compared case-insensitively.
    pub fn sentence_for(&self, start: usize, end: usize, matched: &str) -> Option<&'t str> {
        if let Some(span) = self
            .spans
            .iter()
            .find(|s| s.start <= start && end <= s.end)
        {
            return Some(self.text[span.start..span.end].trim());
        }

        let needle = matched.to_lowercase();
        if needle.trim().is_empty() {
            return None;
        }

        let lowered = self.lowered.get_or_init(|| {
            self.spans
                .iter()
                .map(|s| self.text[s.start..s.end].to_lowercase())
                .collect()
        });

        lowered
            .iter()
            .position(|sentence| sentence.contains(&needle))
            .map(|i| {
                let span = self.spans[i];
                self.text[span.start..span.end].trim()
            })
    }
}

fn push_unit(text: &str, spans: &mut Vec<SentenceSpan>, start: usize, end: usize) {
    if start < end && !text[start..end].trim().is_empty() {
        spans.push(SentenceSpan { start, end });
    }
}

/// Up to `radius` characters either side of `start..end`, trimmed.
///
/// Byte positions must lie on char boundaries, as regex match offsets do.
pub fn context_window(text: &str, start: usize, end: usize, radius: usize) -> &str {
    let from = text[..start]
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(start);

    let to = text[end..]
        .char_indices()
        .nth(radius)
        .map(|(i, _)| end + i)
        .unwrap_or(text.len());

    text[from..to].trim()
}

/// Converts byte offsets to character offsets.
///
/// ASCII text maps one to one; otherwise char starts are indexed once and
/// looked up by binary search.
#[derive(Debug)]
pub struct CharOffsets {
    char_starts: Option<Vec<usize>>,
}

impl CharOffsets {
    pub fn new(text: &str) -> Self {
        let char_starts = if text.is_ascii() {
            None
        } else {
            Some(text.char_indices().map(|(i, _)| i).collect())
        };
        Self { char_starts }
    }

    pub fn char_offset(&self, byte_offset: usize) -> usize {
        match &self.char_starts {
            None => byte_offset,
            Some(starts) => match starts.binary_search(&byte_offset) {
                Ok(i) => i,
                Err(i) => i,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_terminal_punctuation_followed_by_whitespace() {
        let index = SentenceIndex::build("First one. Second one! Third? Fourth");
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn decimal_points_do_not_split() {
        let index = SentenceIndex::build("Pay 2.5 percent interest. Then stop.");
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn whitespace_only_text_has_no_units() {
        assert!(SentenceIndex::build("   \n ").is_empty());
    }

    #[test]
    fn enclosing_sentence_is_preferred() {
        let text = "Intro text here. The parties agree to binding arbitration. Closing words.";
        let index = SentenceIndex::build(text);
        let start = text.find("binding").unwrap();
        let end = start + "binding arbitration".len();

        assert_eq!(
            index.sentence_for(start, end, &text[start..end]),
            Some("The parties agree to binding arbitration")
        );
    }

    #[test]
    fn straddling_match_falls_back_to_sentence_containing_phrase() {
        let text = "We may collect. Your data is stored. We collect data daily.";
        let index = SentenceIndex::build(text);
        let start = text.find("collect").unwrap();
        let end = text.find("data").unwrap() + "data".len();

        // No unit holds the straddling text itself.
        assert_eq!(index.sentence_for(start, end, &text[start..end]), None);

        // Offsets inside the boundary gap force the phrase lookup.
        let gap = text.find(". ").unwrap();
        assert_eq!(
            index.sentence_for(gap, gap + 2, "COLLECT DATA"),
            Some("We collect data daily.")
        );
    }

    #[test]
    fn phrase_lookup_is_case_insensitive() {
        let text = "Nothing here. FORCE MAJEURE applies. More.";
        let index = SentenceIndex::build(text);
        let gap = text.find(". ").unwrap();
        assert_eq!(
            index.sentence_for(gap, gap + 2, "force majeure"),
            Some("FORCE MAJEURE applies")
        );
    }

    #[test]
    fn context_window_respects_radius() {
        let text = "0123456789MATCH0123456789";
        let start = 10;
        let end = 15;
        assert_eq!(context_window(text, start, end, 3), "789MATCH012");
        assert_eq!(context_window(text, start, end, 100), text);
    }

    #[test]
    fn context_window_counts_characters_not_bytes() {
        let text = "ééééMATCHéééé";
        let start = text.find("MATCH").unwrap();
        let end = start + 5;
        assert_eq!(context_window(text, start, end, 2), "ééMATCHéé");
    }

    #[test]
    fn char_offsets_map_multibyte_text() {
        let text = "é clause";
        let offsets = CharOffsets::new(text);
        let byte = text.find("clause").unwrap();
        assert_eq!(byte, 3);
        assert_eq!(offsets.char_offset(byte), 2);
        assert_eq!(offsets.char_offset(text.len()), 8);
    }

    #[test]
    fn char_offsets_are_identity_for_ascii() {
        let offsets = CharOffsets::new("plain ascii");
        assert_eq!(offsets.char_offset(6), 6);
    }
}
