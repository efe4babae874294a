//! Organization recognition: capitalized-phrase and acronym candidates,
//! fuzzy-matched against a canonical reference list.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::ExtractorConfig;
use crate::types::{DetectionMethod, OrganizationMatch, ScoredName};

/// Dotted capital-letter groups, e.g. "Α.Β.Γ." or "Υ.ΠΕ.ΧΩ.Δ.Ε.".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ACRONYM_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[Α-ΩΆ-ΏA-Z]{1,3}(?:\.[Α-ΩΆ-ΏA-Z]{1,3})+\.?").expect("valid regex")
});

/// Runs of 2+ consecutive capitalized multi-letter words.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static FULL_NAME_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[Α-ΩΆ-ΏA-Z][α-ωά-ώΐΰa-zΑ-ΩΆ-ΏA-Z]+(?: [Α-ΩΆ-ΏA-Z][α-ωά-ώΐΰa-zΑ-ΩΆ-ΏA-Z]+)+")
        .expect("valid regex")
});

/// Matches organization mentions against a canonical name list.
pub struct OrganizationMatcher {
    standard_cutoff: f64,
    acronym_cutoff: f64,
}

impl OrganizationMatcher {
    #[must_use]
    pub fn new(config: &ExtractorConfig) -> Self {
        Self {
            standard_cutoff: config.standard_org_match_cutoff,
            acronym_cutoff: config.acronym_org_match_cutoff,
        }
    }

    /// Detect candidates in a text span and fuzzy-match them against the
    /// reference list (canonical names, uppercase).
    ///
    /// Acronym candidates are matched both as-is and with internal periods
    /// stripped, at the stricter cutoff. Candidates with no match above
    /// their cutoff are dropped silently.
    #[must_use]
    pub fn matches(&self, text: &str, reference: &[String]) -> Vec<OrganizationMatch> {
        let mut results = Vec::new();

        for candidate in distinct_matches(&ACRONYM_CANDIDATE, text) {
            let upper = candidate.to_uppercase();
            let undotted = upper.replace('.', "");
            let mut scored = close_matches(&upper, reference, self.acronym_cutoff);
            scored.extend(close_matches(&undotted, reference, self.acronym_cutoff));
            scored.sort_by(|a, b| b.score.total_cmp(&a.score));
            // Keep the best score per canonical name when both forms matched.
            let mut deduped: Vec<ScoredName> = Vec::new();
            for entry in scored {
                if !deduped.iter().any(|d| d.name == entry.name) {
                    deduped.push(entry);
                }
            }
            let scored = deduped;
            if !scored.is_empty() {
                results.push(OrganizationMatch {
                    candidate,
                    matches: scored,
                    method: DetectionMethod::Acronym,
                    cutoff: self.acronym_cutoff,
                });
            }
        }

        let acronym_spans: Vec<String> = results.iter().map(|m| m.candidate.clone()).collect();
        for candidate in distinct_matches(&FULL_NAME_CANDIDATE, text) {
            if acronym_spans.contains(&candidate) {
                continue;
            }
            let scored = close_matches(&candidate.to_uppercase(), reference, self.standard_cutoff);
            if !scored.is_empty() {
                results.push(OrganizationMatch {
                    candidate,
                    matches: scored,
                    method: DetectionMethod::FullName,
                    cutoff: self.standard_cutoff,
                });
            }
        }

        results
    }
}

/// All distinct matches of a candidate pattern, in encounter order.
fn distinct_matches(pattern: &Regex, text: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for m in pattern.find_iter(text) {
        let s = m.as_str().to_string();
        if !seen.contains(&s) {
            seen.push(s);
        }
    }
    seen
}

/// Reference names scoring at or above the cutoff, best first.
fn close_matches(query: &str, reference: &[String], cutoff: f64) -> Vec<ScoredName> {
    let mut scored: Vec<ScoredName> = reference
        .iter()
        .filter_map(|name| {
            let score = strsim::normalized_levenshtein(query, name);
            (score >= cutoff).then(|| ScoredName {
                name: name.clone(),
                score,
            })
        })
        .collect();
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}
