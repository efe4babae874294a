//! Issue segmentation: contents span, decision summaries, decision numbers.
//!
//! The contents span (between the contents header and the decisions header)
//! is a required-unique pattern: more than one occurrence is a structural
//! ambiguity and surfaces as an error, never silently resolved.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::ExtractorConfig;
use crate::error::{ExtractorError, Result};

/// Sentence boundary in contents listings: period, optional space, newline.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\s?\n").expect("valid regex"));

/// Ellipsis runs from tabular contents formatting ("Θέμα .... 3").
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ELLIPSIS_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.{3,}").expect("valid regex"));

/// Reference-number line: "Αριθμ. ..." or "Αριθ. ..." (Greek or Latin A).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NUMBER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n([AΑ]ριθμ?\.[^\n]+)\n").expect("valid regex"));

/// Segmentation passes over a normalized issue text.
pub struct Segmenter {
    contents: Regex,
    single_summary: Regex,
    correction_phrases: Vec<String>,
}

impl Segmenter {
    /// Build the segmenter for a configuration.
    #[must_use]
    #[allow(clippy::expect_used)] // Patterns are built from escaped phrases
    pub fn new(config: &ExtractorConfig) -> Self {
        let contents_header = regex::escape(&config.contents_header);
        let decisions_header = regex::escape(&config.decisions_header);
        let decree_header = regex::escape(&config.presidential_decree_header);

        let contents = Regex::new(&format!(
            r"(?s){contents_header}\s*\n{decisions_header}(.+?){decisions_header}"
        ))
        .expect("valid regex");

        // Contents-absent mode: the decisions header (or a presidential
        // decree header plus number) followed by summary text up to the
        // first sentence end.
        let single_summary = Regex::new(&format!(
            r"(?s)(?:{decisions_header}|{decree_header}\s*\d+)\s*\n\s*(.+?)\.\n\s*[α-ωά-ώΑ-ΩΆ-ΏA-Z()]"
        ))
        .expect("valid regex");

        Self {
            contents,
            single_summary,
            correction_phrases: config.correction_phrases.clone(),
        }
    }

    /// Isolate the table-of-contents span of an issue.
    ///
    /// Returns `Ok(None)` when the issue has no contents section and
    /// `SegmentationAmbiguity` when the marker pair occurs more than once.
    pub fn contents_span(&self, text: &str) -> Result<Option<String>> {
        let mut captures = self.contents.captures_iter(text);
        let first = captures.next();
        let extra = captures.count();
        if extra > 0 {
            return Err(ExtractorError::SegmentationAmbiguity {
                pattern: "contents header".to_string(),
                expected: 1,
                found: extra + 1,
            });
        }
        Ok(first.and_then(|c| c.get(1)).map(|m| m.as_str().to_string()))
    }

    /// Split an issue into per-decision summary strings.
    ///
    /// With a contents span the span is split at sentence boundaries,
    /// refusing to break right after single-consonant abbreviation tokens
    /// ("κ.λπ."). Without one, exactly one decision is expected and its
    /// summary is scanned from the full text.
    pub fn summaries(&self, text: &str, contents: Option<&str>) -> Result<Vec<String>> {
        match contents {
            Some(span) => Ok(self.split_contents_summaries(span)),
            None => {
                let matches: Vec<_> = self
                    .single_summary
                    .captures_iter(text)
                    .filter_map(|c| c.get(1))
                    .map(|m| m.as_str().to_string())
                    .collect();
                if matches.len() != 1 {
                    return Err(ExtractorError::SegmentationAmbiguity {
                        pattern: "decisions-absent summary".to_string(),
                        expected: 1,
                        found: matches.len(),
                    });
                }
                Ok(matches)
            }
        }
    }

    fn split_contents_summaries(&self, span: &str) -> Vec<String> {
        let mut summaries = Vec::new();
        let mut start = match find_summary_start(span, 0) {
            Some(pos) => pos,
            None => return summaries,
        };

        for boundary in SENTENCE_BOUNDARY.find_iter(span) {
            if boundary.start() < start {
                continue;
            }
            // Refuse to break right after a single-consonant abbreviation
            // token such as the "π." in "κ.λπ.".
            let before = span[..boundary.start()].chars().last();
            if before.is_some_and(is_abbreviation_consonant) {
                continue;
            }
            summaries.push(span[start..boundary.end()].to_string());
            match find_summary_start(span, boundary.end()) {
                Some(pos) => start = pos,
                None => break,
            }
        }

        summaries
            .into_iter()
            .map(|s| ELLIPSIS_RUN.replace_all(&s, "").into_owned())
            .filter(|s| !self.correction_phrases.iter().any(|p| s.contains(p)))
            .collect()
    }

    /// Extract reference numbers and associate them with decision indices.
    ///
    /// Single summary: the number is the "ριθμ." line inside it. Multiple
    /// summaries: indices are recovered from "(n)" markers per summary rank,
    /// then numbers are zipped against the indices with fill semantics:
    /// missing numbers become `None`, extra numbers get their rank as index,
    /// nothing is truncated.
    #[must_use]
    pub fn decision_numbers(
        &self,
        text: &str,
        summaries: &[String],
    ) -> BTreeMap<usize, Option<String>> {
        let mut numbers = BTreeMap::new();
        match summaries.len() {
            0 => {}
            1 => {
                let line = summaries[0]
                    .lines()
                    .find(|line| line.contains("ριθμ."))
                    .map(|line| line.trim().to_string());
                if line.is_none() {
                    tracing::warn!("single summary carries no reference-number line");
                }
                numbers.insert(1, line);
            }
            count => {
                let indices = recover_indices(text, count);
                let found: Vec<String> = NUMBER_LINE
                    .captures_iter(text)
                    .filter_map(|c| c.get(1))
                    .map(|m| m.as_str().trim().to_string())
                    .collect();
                tracing::debug!(
                    summaries = count,
                    numbers = found.len(),
                    "zipping reference numbers against recovered indices"
                );
                let longest = indices.len().max(found.len());
                for rank in 0..longest {
                    let index = indices.get(rank).copied().unwrap_or(rank + 1);
                    numbers.insert(index, found.get(rank).cloned());
                }
            }
        }
        numbers
    }
}

/// Recover decision indices from "(n)" markers correlated with summary rank.
///
/// A missing marker falls back to the rank itself with a warning instead of
/// failing the document.
fn recover_indices(text: &str, count: usize) -> Vec<usize> {
    (1..=count)
        .map(|rank| {
            if !text.contains(&format!("({rank})")) {
                tracing::warn!(rank, "index marker not found in text, using summary rank");
            }
            rank
        })
        .collect()
}

/// Next summary start: first capital letter, skipping page numbers and
/// whitespace left over from the contents listing.
fn find_summary_start(span: &str, from: usize) -> Option<usize> {
    span[from..]
        .char_indices()
        .find(|(_, c)| is_summary_capital(*c))
        .map(|(i, _)| from + i)
}

fn is_summary_capital(c: char) -> bool {
    matches!(c, 'Α'..='Ω' | 'Ά'..='Ώ' | 'A'..='Z')
}

/// Consonants whose "X." form marks an abbreviation, not a sentence end.
fn is_abbreviation_consonant(c: char) -> bool {
    matches!(c,
        'Β'..='Δ' | 'Ζ' | 'Θ' | 'Κ' | 'Μ' | 'Ν' | 'Ξ' | 'Π' | 'Ρ' | 'Τ' | 'Φ'..='Ψ'
        | 'β'..='δ' | 'ζ' | 'θ' | 'κ' | 'μ' | 'ν' | 'ξ' | 'π' | 'ρ' | 'τ' | 'φ'..='ψ')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn segmenter() -> Segmenter {
        Segmenter::new(&ExtractorConfig::default())
    }

    #[test]
    fn test_contents_span_absent() {
        let seg = segmenter();
        assert_eq!(seg.contents_span("ΑΠΟΦΑΣΕΙΣ\nκείμενο\n").unwrap(), None);
    }

    #[test]
    fn test_contents_span_present() {
        let seg = segmenter();
        let text = "ΠΕΡΙΕΧΟΜΕΝΑ\nΑΠΟΦΑΣΕΙΣ\nΠρώτη περίληψη.\nΑΠΟΦΑΣΕΙΣ\nκυρίως κείμενο\n";
        let span = seg.contents_span(text).unwrap().unwrap();
        assert!(span.contains("Πρώτη περίληψη."));
        assert!(!span.contains("κυρίως"));
    }

    #[test]
    fn test_contents_span_duplicated_is_ambiguous() {
        let seg = segmenter();
        let text = "ΠΕΡΙΕΧΟΜΕΝΑ\nΑΠΟΦΑΣΕΙΣ\nα.\nΑΠΟΦΑΣΕΙΣ\nΠΕΡΙΕΧΟΜΕΝΑ\nΑΠΟΦΑΣΕΙΣ\nβ.\nΑΠΟΦΑΣΕΙΣ\n";
        let err = seg.contents_span(text).unwrap_err();
        assert!(matches!(
            err,
            ExtractorError::SegmentationAmbiguity { found: 2, .. }
        ));
    }

    #[test]
    fn test_two_summaries_split() {
        let seg = segmenter();
        let span = "Τροποποίηση της υπουργικής απόφασης.\nΣύσταση θέσεων στο Υπουργείο.\n";
        let summaries = seg.summaries("", Some(span)).unwrap();
        assert_eq!(summaries.len(), 2);
        assert!(summaries[0].starts_with("Τροποποίηση"));
        assert!(summaries[1].starts_with("Σύσταση"));
    }

    #[test]
    fn test_abbreviation_does_not_break_summary() {
        let seg = segmenter();
        let span = "Ρύθμιση θεμάτων προσωπικού κ.λπ.\nκαι λοιπές διατάξεις της απόφασης.\n";
        let summaries = seg.summaries("", Some(span)).unwrap();
        assert_eq!(summaries.len(), 1);
        assert!(summaries[0].contains("κ.λπ."));
        assert!(summaries[0].contains("λοιπές διατάξεις"));
    }

    #[test]
    fn test_ellipsis_runs_stripped() {
        let seg = segmenter();
        let span = "Σύσταση επιτροπής ελέγχου ......... 3.\n";
        let summaries = seg.summaries("", Some(span)).unwrap();
        assert_eq!(summaries.len(), 1);
        assert!(!summaries[0].contains("..."));
    }

    #[test]
    fn test_correction_summaries_discarded() {
        let seg = segmenter();
        let span = "Σύσταση θέσεων στο Υπουργείο.\nΔιόρθωση σφάλματος στην απόφαση.\n";
        let summaries = seg.summaries("", Some(span)).unwrap();
        assert_eq!(summaries.len(), 1);
        assert!(summaries[0].starts_with("Σύσταση"));
    }

    #[test]
    fn test_contents_absent_single_summary() {
        let seg = segmenter();
        let text = "ΑΠΟΦΑΣΕΙΣ\nΑριθμ. 1234\nΤροποποίηση της απόφασης περί μεταβίβασης.\nΟ ΥΠΟΥΡΓΟΣ\n";
        let summaries = seg.summaries(text, None).unwrap();
        assert_eq!(summaries.len(), 1);
        assert!(summaries[0].contains("Αριθμ. 1234"));
    }

    #[test]
    fn test_contents_absent_no_match_is_ambiguous() {
        let seg = segmenter();
        let err = seg.summaries("σκέτο κείμενο χωρίς κεφαλίδα\n", None).unwrap_err();
        assert!(matches!(
            err,
            ExtractorError::SegmentationAmbiguity { found: 0, .. }
        ));
    }

    #[test]
    fn test_single_summary_number() {
        let seg = segmenter();
        let summaries = vec!["Αριθμ. 2/1234/0022\nΤροποποίηση της απόφασης.\n".to_string()];
        let numbers = seg.decision_numbers("", &summaries);
        assert_eq!(numbers.len(), 1);
        assert_eq!(numbers[&1].as_deref(), Some("Αριθμ. 2/1234/0022"));
    }

    #[test]
    fn test_multiple_numbers_zip_with_fill() {
        let seg = segmenter();
        let summaries = vec!["πρώτη.\n".to_string(), "δεύτερη.\n".to_string()];
        // Two index markers, but only one number line in the issue text.
        let text = "(1)\nΑριθμ. 100\nκείμενο\n(2)\nκείμενο χωρίς αριθμό\n";
        let numbers = seg.decision_numbers(text, &summaries);
        assert_eq!(numbers.len(), 2);
        assert_eq!(numbers[&1].as_deref(), Some("Αριθμ. 100"));
        assert!(numbers[&2].is_none());
    }

    #[test]
    fn test_two_numbers_two_indices() {
        let seg = segmenter();
        let summaries = vec!["πρώτη.\n".to_string(), "δεύτερη.\n".to_string()];
        let text = "(1)\nΑριθμ. 100\nκείμενο\n(2)\nΑριθ. 200/Β\nκείμενο\n";
        let numbers = seg.decision_numbers(text, &summaries);
        assert_eq!(numbers[&1].as_deref(), Some("Αριθμ. 100"));
        assert_eq!(numbers[&2].as_deref(), Some("Αριθ. 200/Β"));
    }
}
