//! Extraction configuration: phrase vocabularies, similarity cutoffs and
//! converter settings.
//!
//! Vocabulary is data, not code: every phrase-keyed pass reads its markers
//! from an [`ExtractorConfig`] fixed at construction, so vocabulary growth
//! never touches extraction logic.

use serde::{Deserialize, Serialize};

/// Default similarity cutoff for full-name organization candidates.
pub const STANDARD_ORG_MATCH_CUTOFF: f64 = 0.65;

/// Default similarity cutoff for acronym organization candidates.
///
/// Acronyms are short, so near-misses are much more likely to be spurious;
/// the bar is higher than for full names.
pub const ACRONYM_ORG_MATCH_CUTOFF: f64 = 0.85;

/// Default external converter command (expects `<cmd> <input> <output>`).
pub const DEFAULT_CONVERTER_COMMAND: &str = "pdftotext";

/// Default converter deadline in seconds. Converters can hang on malformed
/// input, so every invocation runs under a timeout.
pub const DEFAULT_CONVERTER_TIMEOUT_SECS: u64 = 60;

/// Immutable configuration for the extraction pipeline.
///
/// Constructed once per pipeline; all extraction passes take `&ExtractorConfig`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Header opening the table-of-contents span.
    pub contents_header: String,

    /// Header opening the decisions section (also closes the contents span).
    pub decisions_header: String,

    /// Header of a presidential decree, followed by a number.
    pub presidential_decree_header: String,

    /// Phrase variants opening a "having regard to" (legal-basis) section.
    pub prerequisite_open_phrases: Vec<String>,

    /// Phrase variants opening an operative section ("we decide: ...").
    pub decision_init_phrases: Vec<String>,

    /// Closing-boilerplate phrases: the "start" group ("This decision ...").
    pub decision_end_start_phrases: Vec<String>,

    /// Closing-boilerplate phrases: the "finish" group ("... to be published").
    pub decision_end_finish_phrases: Vec<String>,

    /// Verb stems signalling a responsibility assignment.
    pub assignment_verbs: Vec<String>,

    /// Noun stems naming what is assigned (duties, authority, ...).
    pub assignment_type_nouns: Vec<String>,

    /// Phrases marking an errata/correction section, excluded from summaries.
    pub correction_phrases: Vec<String>,

    /// Article marker word ("Άρθρο").
    pub article_marker: String,

    /// Similarity cutoff for full-name organization matching.
    pub standard_org_match_cutoff: f64,

    /// Similarity cutoff for acronym organization matching.
    pub acronym_org_match_cutoff: f64,

    /// External converter command.
    pub converter_command: String,

    /// Converter deadline in seconds.
    pub converter_timeout_secs: u64,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            contents_header: "ΠΕΡΙΕΧΟΜΕΝΑ".to_string(),
            decisions_header: "ΑΠΟΦΑΣΕΙΣ".to_string(),
            presidential_decree_header: "ΠΡΟΕΔΡΙΚΟ ΔΙΑΤΑΓΜΑ ΥΠ’ ΑΡΙΘΜ.".to_string(),
            prerequisite_open_phrases: to_strings(&[
                "χοντας υπόψη:",
                "χοντας υπόψη",
                "χοντες υπόψη:",
                "χουσα υπόψη:",
                "χοντας υπόψη του:",
                "χοντας υπ' όψη:",
                "χοντας υπ’ όψη:",
                "Αφού έλαβε υπόψη:",
                "Λαμβάνοντας υπόψη:",
            ]),
            decision_init_phrases: to_strings(&[
                "αποφασίζουμε:",
                "αποφασίζουμε τα ακόλουθα:",
                "αποφασίζουμε τα εξής:",
                "διαπιστώνεται:",
                "αποφασίζει:",
                "αποφασίζει τα ακόλουθα:",
                "αποφασίζει τα εξής:",
                "αποφασίζει ομόφωνα:",
                "αποφασίζει ομόφωνα και εγκρίνει:",
                "αποφασίζει τα κάτωθι",
                "αποφασίζεται:",
                "με τα παρακάτω στοιχεία:",
            ]),
            decision_end_start_phrases: to_strings(&[
                "Η απόφαση αυτή",
                "Ηαπόφαση αυτή",
                "Η απόφαση",
                "Η περίληψη αυτή",
                "η παρούσα ισχύει",
                "Η παρούσα απόφαση",
                "Η ισχύς του παρόντος",
            ]),
            // The original corpus vocabulary also carried a literal "F\n"
            // here; that is a form-feed artifact and is handled by the
            // normalizer instead.
            decision_end_finish_phrases: to_strings(&[
                "την δημοσίευση",
                "τη δημοσίευση",
                "τη δημοσίευσή",
                "να δημοσιευθεί",
                "να δημοσιευτεί",
                "να δημοσιευθούν",
            ]),
            assignment_verbs: to_strings(&[
                "ναθέτουμε",
                "νατίθεται",
                "νατίθενται",
                "νάθεση",
                "ρίζουμε",
                "παλλάσσουμε",
                "εταβιβάζουμε",
            ]),
            assignment_type_nouns: to_strings(&["αθήκοντ", "ρμοδιότητ", "αθηκόντ", "ρμοδιοτήτ"]),
            correction_phrases: to_strings(&["Διόρθωση", "ΔΙΌΡΘΩΣΗ"]),
            article_marker: "Άρθρο".to_string(),
            standard_org_match_cutoff: STANDARD_ORG_MATCH_CUTOFF,
            acronym_org_match_cutoff: ACRONYM_ORG_MATCH_CUTOFF,
            converter_command: DEFAULT_CONVERTER_COMMAND.to_string(),
            converter_timeout_secs: DEFAULT_CONVERTER_TIMEOUT_SECS,
        }
    }
}

fn to_strings(phrases: &[&str]) -> Vec<String> {
    phrases.iter().map(|p| (*p).to_string()).collect()
}

/// Join phrase variants into a regex alternation, escaping each phrase.
///
/// Phrases are matched literally; the disjunction is the only regex
/// construct introduced.
///
/// # Examples
/// ```
/// use fek_extractor::config::regex_disjunction;
///
/// assert_eq!(regex_disjunction(&["a.".to_string(), "b".to_string()]), r"a\.|b");
/// ```
#[must_use]
pub fn regex_disjunction(phrases: &[String]) -> String {
    phrases
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|")
}
