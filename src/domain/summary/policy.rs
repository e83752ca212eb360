//! Summary policy - Decides what, if anything, is sent for summarization.
//!
//! Short documents are answered locally without a backend call. Long
//! documents are summarized from their leading `char_budget` characters only.

/// Returned when no generation backend is configured.
pub const SUMMARY_UNCONFIGURED: &str =
    "Summary unavailable: no AI provider is configured. Set CONTRACT_LENS__AI__GEMINI_API_KEY to enable summaries.";

/// Returned for documents below the minimum length.
pub const SUMMARY_TOO_SHORT: &str = "Document is too short to summarize.";

pub const DEFAULT_MIN_SUMMARY_CHARS: usize = 50;
pub const DEFAULT_SUMMARY_CHAR_BUDGET: usize = 8000;

/// Role given to the generation backend for summary requests.
pub const SUMMARY_SYSTEM_PROMPT: &str = "You are a legal document analyst.";

/// Advisory text shown in place of a summary when generation fails.
pub fn summary_failure(reason: impl std::fmt::Display) -> String {
    format!("Unable to generate summary: {}", reason)
}

/// What the generator should do with a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryInput<'t> {
    /// Below the minimum length; answer with [`SUMMARY_TOO_SHORT`].
    TooShort,
    /// The excerpt to summarize.
    Ready(&'t str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryPolicy {
    pub min_chars: usize,
    pub char_budget: usize,
}

impl Default for SummaryPolicy {
    fn default() -> Self {
        Self {
            min_chars: DEFAULT_MIN_SUMMARY_CHARS,
            char_budget: DEFAULT_SUMMARY_CHAR_BUDGET,
        }
    }
}

impl SummaryPolicy {
    pub fn prepare<'t>(&self, text: &'t str) -> SummaryInput<'t> {
        if text.trim().chars().count() < self.min_chars {
            return SummaryInput::TooShort;
        }

        let end = text
            .char_indices()
            .nth(self.char_budget)
            .map(|(i, _)| i)
            .unwrap_or(text.len());

        SummaryInput::Ready(&text[..end])
    }

    /// Prompt asking for a short overview of the excerpt.
    pub fn prompt(&self, excerpt: &str) -> String {
        format!(
            "Provide a clear, concise summary of this legal document focusing on:\n\
             - Key terms and obligations\n\
             - Parties involved\n\
             - The document's purpose and main clauses\n\
             - Important dates or conditions\n\n\
             Keep the summary under 200 words and make it easy to understand.\n\n\
             Legal Document:\n{}\n\nSummary:",
            excerpt
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_not_sent() {
        let policy = SummaryPolicy::default();
        assert_eq!(policy.prepare("0123456789"), SummaryInput::TooShort);
    }

    #[test]
    fn surrounding_whitespace_does_not_count_toward_minimum() {
        let policy = SummaryPolicy::default();
        let padded = format!("{}{}{}", " ".repeat(40), "x".repeat(49), "\n".repeat(40));
        assert_eq!(policy.prepare(&padded), SummaryInput::TooShort);
    }

    #[test]
    fn text_at_minimum_is_ready() {
        let policy = SummaryPolicy::default();
        let text = "x".repeat(50);
        assert_eq!(policy.prepare(&text), SummaryInput::Ready(text.as_str()));
    }

    #[test]
    fn long_text_is_cut_to_budget() {
        let policy = SummaryPolicy {
            min_chars: 1,
            char_budget: 10,
        };
        let text = "abcdefghijklmnopqrstuvwxyz";
        assert_eq!(policy.prepare(text), SummaryInput::Ready("abcdefghij"));
    }

    #[test]
    fn budget_counts_characters() {
        let policy = SummaryPolicy {
            min_chars: 1,
            char_budget: 3,
        };
        assert_eq!(policy.prepare("ééééé"), SummaryInput::Ready("ééé"));
    }

    #[test]
    fn prompt_embeds_excerpt() {
        let prompt = SummaryPolicy::default().prompt("THE EXCERPT");
        assert!(prompt.contains("Legal Document:\nTHE EXCERPT"));
        assert!(prompt.contains("under 200 words"));
    }

    #[test]
    fn failure_message_embeds_reason() {
        assert_eq!(
            summary_failure("rate limited"),
            "Unable to generate summary: rate limited"
        );
    }
}
