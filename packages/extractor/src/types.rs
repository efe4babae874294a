//! Core data types for extracted gazette content.
//!
//! A [`Decision`] is a read-mostly accumulator: indices and summaries are
//! created first, later passes attach numbers, prerequisites, bodies,
//! articles and signees keyed on the same 1-based index. No pass removes
//! fields set by an earlier pass.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One legally operative unit within a gazette issue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Decision {
    /// 1-based ordinal index within the issue.
    pub index: usize,

    /// Summary text from the contents section (or the single-decision scan).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Official reference number line ("Αριθμ. ...").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    /// "Having regard to" (legal-basis) section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisites: Option<String>,

    /// Operative (binding) text of the decision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Articles keyed "Άρθρο 1", "Άρθρο 2", ... in encounter order.
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub articles: BTreeMap<String, String>,

    /// Responsibility-assignment clauses found in the body.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub respa_sections: Vec<String>,

    /// Referenced (quoted) assignment clauses found in the prerequisites.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub referred_respa_sections: Vec<String>,

    /// Assignment clauses linked to recognized persons and organizations.
    ///
    /// Populated only when an entity recognizer is supplied to the pipeline.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub assignments: Vec<ResponsibilityAssignment>,
}

impl Decision {
    /// Create an empty decision with the given index.
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }
}

/// One signing official block: occupation/title plus ordered name lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigneeBlock {
    pub occupation: String,
    pub names: Vec<String>,
}

/// A fully extracted gazette issue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GazetteIssue {
    /// Decisions keyed by 1-based index.
    pub decisions: BTreeMap<usize, Decision>,

    /// Signees over the whole issue, in encounter order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub signees: Vec<SigneeBlock>,

    /// Location/date stamps in encounter order.
    ///
    /// Not correlated to decision indices; advisory only.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub location_dates: Vec<String>,

    /// Organization matches over the whole issue, when a reference list was
    /// supplied.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub organizations: Vec<OrganizationMatch>,

    /// Prerequisite spans that lost index correspondence.
    ///
    /// Populated when the prerequisite pass found fewer spans than expected
    /// decisions: the spans are kept here in encounter order instead of
    /// being attached to (possibly wrong) decisions.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub unindexed_prerequisites: Vec<String>,

    /// Non-fatal problems encountered during extraction.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub warnings: Vec<String>,
}

/// Result of a repeatable extraction pass that may lose index correspondence.
///
/// `Indexed` guarantees positional correspondence with decision indices.
/// `Unindexed` is the degraded form: spans were found but there are fewer
/// than expected, so callers must not assume any index mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "spans", rename_all = "snake_case")]
pub enum SpanSet {
    /// Spans keyed by 1-based decision index.
    Indexed(BTreeMap<usize, String>),
    /// Spans in encounter order, without index correspondence.
    Unindexed(Vec<String>),
}

impl SpanSet {
    /// Number of extracted spans.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Indexed(map) => map.len(),
            Self::Unindexed(spans) => spans.len(),
        }
    }

    /// True when no spans were extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Span for a decision index, if index correspondence holds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        match self {
            Self::Indexed(map) => map.get(&index).map(String::as_str),
            Self::Unindexed(_) => None,
        }
    }
}

impl Default for SpanSet {
    fn default() -> Self {
        Self::Unindexed(Vec::new())
    }
}

/// How an organization candidate was detected in text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    /// Dotted capital-letter groups, e.g. "Υ.ΠΕ.ΧΩ.Δ.Ε.".
    Acronym,
    /// Run of 2+ consecutive capitalized words.
    FullName,
}

/// A candidate organization mention with its canonical matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationMatch {
    /// Surface text as found in the issue.
    pub candidate: String,

    /// Canonical names above the cutoff, best first, with similarity scores.
    pub matches: Vec<ScoredName>,

    /// Detection method; also determines the cutoff tier that applied.
    pub method: DetectionMethod,

    /// The similarity cutoff that was applied to this candidate.
    pub cutoff: f64,
}

/// A canonical organization name with its similarity to the candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredName {
    pub name: String,
    pub score: f64,
}

/// A best-effort composite linking a responsibility clause to entities.
///
/// Absence of any sub-extractor's result leaves the field empty rather than
/// failing the record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponsibilityAssignment {
    /// Person names recognized inside the clause.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub persons: Vec<String>,

    /// Matched organization, when the clause mentions one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    /// The clause text itself.
    pub text: String,
}
