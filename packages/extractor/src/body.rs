//! Operative-body extraction.
//!
//! The primary pass captures from an initiation phrase through closing
//! boilerplate (or through the next decision's prerequisite opener, which
//! implicitly terminates the current body). Missing indices fall back to the
//! positional "(k)…(k+1)" marker pattern.

use std::collections::BTreeMap;

use regex::Regex;

use crate::config::{regex_disjunction, ExtractorConfig};

/// Operative-body extractor for a configured vocabulary.
pub struct BodyExtractor {
    primary: Regex,
}

impl BodyExtractor {
    #[must_use]
    #[allow(clippy::expect_used)] // Patterns are built from escaped phrases
    pub fn new(config: &ExtractorConfig) -> Self {
        let init = regex_disjunction(&config.decision_init_phrases);
        let end_start = regex_disjunction(&config.decision_end_start_phrases);
        let end_finish = regex_disjunction(&config.decision_end_finish_phrases);
        let open = regex_disjunction(&config.prerequisite_open_phrases);

        // From an initiation phrase, through either the closing boilerplate
        // pair or the next decision's prerequisite opener, up to the next
        // sentence boundary.
        let primary = Regex::new(&format!(
            r"(?s)(?:{init}).+?(?:(?:(?:{end_start}).+?(?:{end_finish}))|(?:{open})).+?\.\s*\n"
        ))
        .expect("valid regex");

        Self { primary }
    }

    /// Extract decision bodies for the expected decision count.
    ///
    /// At least `expected` primary matches: bodies keyed 1..count in
    /// encounter order. Fewer: each missing index attempts the positional
    /// fallback, so the key set may have gaps where both passes failed.
    #[must_use]
    pub fn extract(&self, text: &str, expected: usize) -> BTreeMap<usize, String> {
        let primary: Vec<String> = self
            .primary
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();

        let mut bodies: BTreeMap<usize, String> = primary
            .iter()
            .enumerate()
            .map(|(i, body)| (i + 1, body.clone()))
            .collect();

        if primary.len() < expected {
            tracing::warn!(
                found = primary.len(),
                expected,
                "primary body pass fell short, trying positional fallback"
            );
            for index in (primary.len() + 1)..=expected {
                match positional_fallback(text, index) {
                    Some(body) => {
                        bodies.insert(index, body);
                    }
                    None => {
                        tracing::warn!(index, "positional body fallback found nothing");
                    }
                }
            }
        }

        tracing::debug!(bodies = bodies.len(), expected, "body extraction finished");
        bodies
    }
}

/// Capture text between the literal markers "(k)" and "(k+1)".
fn positional_fallback(text: &str, index: usize) -> Option<String> {
    #[allow(clippy::expect_used)] // Pattern is built from formatted integers
    let pattern = Regex::new(&format!(
        r"(?s)\n\({index}\)\n.+?\n\({}\)\n",
        index + 1
    ))
    .expect("valid regex");
    pattern.find(text).map(|m| m.as_str().to_string())
}
