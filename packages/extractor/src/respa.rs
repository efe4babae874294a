//! Responsibility-assignment clause detection.
//!
//! Clauses pair an assignment verb ("αναθέτουμε", "ανατίθενται", ...) with
//! an optional assignment-type noun ("καθήκοντα", "αρμοδιότητες", ...) up to
//! a sentence boundary. Three body modes run and their results are
//! concatenated; duplicates are by design, dedup is a downstream concern.

use regex::Regex;

use crate::config::{regex_disjunction, ExtractorConfig};
use crate::ner::{filter_persons, EntityRecognizer};
use crate::orgs::OrganizationMatcher;
use crate::types::ResponsibilityAssignment;

/// Detects responsibility-assignment clauses in decision text.
pub struct RespaExtractor {
    before_article: Regex,
    before_capital: Regex,
    capital_optional: Regex,
    referred: Regex,
}

impl RespaExtractor {
    #[must_use]
    #[allow(clippy::expect_used)] // Patterns are built from escaped phrases
    pub fn new(config: &ExtractorConfig) -> Self {
        let verbs = regex_disjunction(&config.assignment_verbs);
        let types = regex_disjunction(&config.assignment_type_nouns);
        let marker = regex::escape(&config.article_marker);

        let clause = format!(r"(.+?(?:{verbs}).+?(?:{types})?.+?)\.\s*\n\s*");

        let before_article =
            Regex::new(&format!(r"(?s)\n{clause}{marker}")).expect("valid regex");
        let before_capital =
            Regex::new(&format!(r"(?s)\n?{clause}[Α-ΩΆ-ΏA-Z]")).expect("valid regex");
        let capital_optional =
            Regex::new(&format!(r"(?s)\n?{clause}[Α-ΩΆ-ΏA-Z]?")).expect("valid regex");

        // Assignments quoted inside guillemets in prerequisite citations,
        // anchored on an enumeration marker ("α)", "1.", ...).
        let referred = Regex::new(&format!(
            r"(?s)((?:[α-ωά-ώΑ-ΩΆ-Ώa-zA-Z]+(?:\)|\.)|\d+\.)[^»]+?«[^»]+?(?:{verbs})[^»]+?(?:{types})[^»]+?».+?)(?:\.|,)\s*\n\s*"
        ))
        .expect("valid regex");

        Self {
            before_article,
            before_capital,
            capital_optional,
            referred,
        }
    }

    /// Assignment clauses in a decision body, all three modes concatenated.
    #[must_use]
    pub fn body_sections(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        let mut sections = captures(&self.before_article, text);
        sections.extend(captures(&self.before_capital, text));
        sections.extend(captures(&self.capital_optional, text));
        sections
    }

    /// Referenced assignments quoted inside prerequisite text.
    #[must_use]
    pub fn referred_sections(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        captures(&self.referred, text)
    }

    /// Best-effort association of one clause with recognized entities.
    ///
    /// Missing sub-extractor results leave fields empty, never fail.
    #[must_use]
    pub fn associate(
        &self,
        text: &str,
        recognizer: &dyn EntityRecognizer,
        matcher: &OrganizationMatcher,
        reference: &[String],
    ) -> ResponsibilityAssignment {
        let persons = filter_persons(&recognizer.recognize(text))
            .into_iter()
            .map(|e| e.text)
            .collect();
        let organization = matcher
            .matches(text, reference)
            .into_iter()
            .next()
            .and_then(|m| m.matches.into_iter().next())
            .map(|scored| scored.name);

        ResponsibilityAssignment {
            persons,
            organization,
            text: text.to_string(),
        }
    }
}

fn captures(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ner::PatternRecognizer;
    use pretty_assertions::assert_eq;

    fn extractor() -> RespaExtractor {
        RespaExtractor::new(&ExtractorConfig::default())
    }

    const BODY: &str = "αποφασίζουμε:\nΑναθέτουμε στον Προϊστάμενο τα καθήκοντα γραμματέα.\nΆρθρο 2\nΛοιπό κείμενο.\n";

    #[test]
    fn test_clause_before_article_marker() {
        let sections = extractor().body_sections(BODY);
        assert!(!sections.is_empty());
        assert!(sections[0].contains("καθήκοντα"));
    }

    #[test]
    fn test_modes_are_concatenated() {
        // The same clause may be reported by several modes; duplication is
        // by design.
        let sections = extractor().body_sections(BODY);
        assert!(sections.len() >= 2);
    }

    #[test]
    fn test_no_clause_without_assignment_verb() {
        let sections = extractor().body_sections("Συστήνεται επιτροπή ελέγχου.\nΚείμενο.\n");
        assert!(sections.is_empty());
    }

    #[test]
    fn test_empty_body() {
        assert!(extractor().body_sections("").is_empty());
    }

    #[test]
    fn test_referred_assignment_in_guillemets() {
        let prereq = "α) την απόφαση 123 «με την οποία ανατίθενται αρμοδιότητες στον Γενικό Γραμματέα» του Υπουργού,\nβ) τις διατάξεις.\n";
        let sections = extractor().referred_sections(prereq);
        assert_eq!(sections.len(), 1);
        assert!(sections[0].contains("ανατίθενται"));
        assert!(sections[0].contains('«'));
    }

    #[test]
    fn test_referred_requires_type_noun() {
        let prereq = "α) την απόφαση «με την οποία ανατίθενται πράγματα στον Γραμματέα» του Υπουργού,\n";
        assert!(extractor().referred_sections(prereq).is_empty());
    }

    #[test]
    fn test_association_links_persons() {
        let clause = "Αναθέτουμε στον κ. Νικόλαο Παπαδόπουλο τα καθήκοντα γραμματέα";
        let assoc = extractor().associate(
            clause,
            &PatternRecognizer::new(),
            &OrganizationMatcher::new(&ExtractorConfig::default()),
            &[],
        );
        assert_eq!(assoc.persons, vec!["Νικόλαο Παπαδόπουλο".to_string()]);
        assert!(assoc.organization.is_none());
        assert_eq!(assoc.text, clause);
    }
}
