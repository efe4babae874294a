//! Prerequisite ("having regard to") section extraction.
//!
//! Extraction runs as an ordered strategy chain: the primary phrase-pair
//! pass, then the single-decision sentence-boundary fallback. The first
//! strategy producing spans wins; total exhaustion yields an empty result,
//! not an error.

use std::collections::BTreeMap;

use regex::Regex;

use crate::config::{regex_disjunction, ExtractorConfig};
use crate::types::SpanSet;

/// A single prerequisite-extraction attempt.
///
/// Implementations return `None` when they find nothing, handing over to the
/// next strategy in the chain.
pub trait PrereqStrategy {
    /// Strategy identifier for logging.
    fn name(&self) -> &'static str;

    /// Attempt extraction over the full issue text.
    fn attempt(&self, text: &str, expected: usize) -> Option<SpanSet>;
}

/// Primary strategy: spans between a prerequisite-opening phrase and a
/// decision-initiation phrase.
pub struct PhrasePairStrategy {
    pattern: Regex,
}

impl PhrasePairStrategy {
    #[must_use]
    #[allow(clippy::expect_used)] // Pattern is built from escaped phrases
    pub fn new(config: &ExtractorConfig) -> Self {
        let open = regex_disjunction(&config.prerequisite_open_phrases);
        let init = regex_disjunction(&config.decision_init_phrases);
        let pattern =
            Regex::new(&format!(r"(?s)(?:{open})(.+?)(?:{init})")).expect("valid regex");
        Self { pattern }
    }
}

impl PrereqStrategy for PhrasePairStrategy {
    fn name(&self) -> &'static str {
        "phrase-pair"
    }

    fn attempt(&self, text: &str, expected: usize) -> Option<SpanSet> {
        let spans: Vec<String> = self
            .pattern
            .captures_iter(text)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .collect();
        if spans.is_empty() {
            return None;
        }
        Some(index_if_sufficient(spans, expected))
    }
}

/// Fallback for single-decision issues: text between a sentence boundary and
/// the first initiation phrase.
pub struct SentenceStartStrategy {
    pattern: Regex,
}

impl SentenceStartStrategy {
    #[must_use]
    #[allow(clippy::expect_used)] // Pattern is built from escaped phrases
    pub fn new(config: &ExtractorConfig) -> Self {
        let init = regex_disjunction(&config.decision_init_phrases);
        let pattern = Regex::new(&format!(r"(?s)\.\n[Α-ΩΆ-ΏA-Z](.+?)(?:{init})"))
            .expect("valid regex");
        Self { pattern }
    }
}

impl PrereqStrategy for SentenceStartStrategy {
    fn name(&self) -> &'static str {
        "sentence-start"
    }

    fn attempt(&self, text: &str, expected: usize) -> Option<SpanSet> {
        // Only applicable when exactly one decision is expected; multi-decision
        // issues without phrase-pair matches stay unresolved.
        if expected != 1 {
            return None;
        }
        let spans: Vec<String> = self
            .pattern
            .captures_iter(text)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .collect();
        if spans.is_empty() {
            return None;
        }
        Some(index_if_sufficient(spans, expected))
    }
}

/// Spans >= expected get index correspondence 1..n; fewer spans degrade to
/// an unindexed sequence.
fn index_if_sufficient(spans: Vec<String>, expected: usize) -> SpanSet {
    if spans.len() >= expected {
        SpanSet::Indexed(
            spans
                .into_iter()
                .enumerate()
                .map(|(i, span)| (i + 1, span))
                .collect::<BTreeMap<_, _>>(),
        )
    } else {
        SpanSet::Unindexed(spans)
    }
}

/// Prerequisite extractor: an ordered chain of strategies.
pub struct PrereqExtractor {
    strategies: Vec<Box<dyn PrereqStrategy + Send + Sync>>,
}

impl PrereqExtractor {
    /// Build the default chain: phrase-pair primary, sentence-start fallback.
    #[must_use]
    pub fn new(config: &ExtractorConfig) -> Self {
        Self {
            strategies: vec![
                Box::new(PhrasePairStrategy::new(config)),
                Box::new(SentenceStartStrategy::new(config)),
            ],
        }
    }

    /// The strategy chain in attempt order.
    #[must_use]
    pub fn strategies(&self) -> &[Box<dyn PrereqStrategy + Send + Sync>] {
        &self.strategies
    }

    /// Extract prerequisite spans for the expected decision count.
    ///
    /// Callers must check for `SpanSet::Unindexed` before assuming positional
    /// correspondence.
    #[must_use]
    pub fn extract(&self, text: &str, expected: usize) -> SpanSet {
        for (pos, strategy) in self.strategies.iter().enumerate() {
            if let Some(result) = strategy.attempt(text, expected) {
                if pos > 0 {
                    tracing::warn!(strategy = strategy.name(), "prerequisite fallback engaged");
                }
                tracing::debug!(
                    strategy = strategy.name(),
                    spans = result.len(),
                    expected,
                    "prerequisite extraction finished"
                );
                return result;
            }
        }
        SpanSet::default()
    }
}
