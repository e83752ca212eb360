//! Prompt for batched clause rewriting.

/// Role given to the generation backend for rewrite requests.
pub const REWRITE_SYSTEM_PROMPT: &str = "You are a legal expert helping to rewrite contract \
clauses so they are balanced and fair to both parties. Provide clear, concise alternatives \
that protect both sides.";

/// A single prompt covering every clause of one analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewritePrompt {
    text: String,
    clause_count: usize,
}

impl RewritePrompt {
    pub fn build<S: AsRef<str>>(clauses: &[S]) -> Self {
        let mut text = String::from(
            "Rewrite the following contract clauses to be more balanced and fair. \
             For each clause, provide a safer alternative that protects both parties.\n\n",
        );

        for (i, clause) in clauses.iter().enumerate() {
            text.push_str(&format!("CLAUSE {}:\n{}\n\n", i + 1, clause.as_ref()));
        }

        text.push_str("Answer in clause order, using this format:\n");
        text.push_str("REWRITE 1: [your rewrite]\n");
        text.push_str("REWRITE 2: [your rewrite]\n");
        text.push_str("and so on.");

        Self {
            text,
            clause_count: clauses.len(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn clause_count(&self) -> usize {
        self.clause_count
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_each_clause_in_order() {
        let prompt = RewritePrompt::build(&["Alpha clause", "Beta clause"]);
        let text = prompt.text();

        let first = text.find("CLAUSE 1:\nAlpha clause").unwrap();
        let second = text.find("CLAUSE 2:\nBeta clause").unwrap();
        assert!(first < second);
        assert_eq!(prompt.clause_count(), 2);
    }

    #[test]
    fn asks_for_rewrite_markers() {
        let prompt = RewritePrompt::build(&[String::from("x")]);
        assert!(prompt.text().contains("REWRITE 1: [your rewrite]"));
    }
}
