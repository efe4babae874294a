//! The per-issue extraction pipeline.
//!
//! Stages run in a fixed order over the normalized text: segmentation,
//! numbers, prerequisites, bodies, articles, assignment clauses, signees,
//! dates, organizations. Decisions are accumulators: each stage attaches its
//! result keyed on the same 1-based index and never removes what an earlier
//! stage set. Only segmentation failures abort a document; the signee stage
//! degrades to a warning.

use tracing::{debug, warn};

use crate::articles::ArticleSplitter;
use crate::body::BodyExtractor;
use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::ner::EntityRecognizer;
use crate::normalize::normalize;
use crate::orgs::OrganizationMatcher;
use crate::prereq::PrereqExtractor;
use crate::respa::RespaExtractor;
use crate::segment::Segmenter;
use crate::signees;
use crate::types::{Decision, GazetteIssue, SpanSet};

/// Extracts a full [`GazetteIssue`] from plain issue text.
pub struct IssueExtractor {
    segmenter: Segmenter,
    prereqs: PrereqExtractor,
    bodies: BodyExtractor,
    articles: ArticleSplitter,
    respa: RespaExtractor,
    orgs: OrganizationMatcher,
}

impl IssueExtractor {
    #[must_use]
    pub fn new(config: &ExtractorConfig) -> Self {
        Self {
            segmenter: Segmenter::new(config),
            prereqs: PrereqExtractor::new(config),
            bodies: BodyExtractor::new(config),
            articles: ArticleSplitter::new(config),
            respa: RespaExtractor::new(config),
            orgs: OrganizationMatcher::new(config),
        }
    }

    /// Run the pipeline over raw issue text.
    ///
    /// `org_reference` enables the organization-matching pass; `recognizer`
    /// enables person association on assignment clauses. Segmentation
    /// ambiguity is fatal for the document; every later stage degrades into
    /// `warnings` instead of failing.
    pub fn extract(
        &self,
        raw: &str,
        org_reference: Option<&[String]>,
        recognizer: Option<&dyn EntityRecognizer>,
    ) -> Result<GazetteIssue> {
        let text = normalize(raw);
        let mut issue = GazetteIssue::default();

        let contents = self.segmenter.contents_span(&text)?;
        let summaries = self.segmenter.summaries(&text, contents.as_deref())?;
        let count = summaries.len();
        debug!(decisions = count, contents = contents.is_some(), "issue segmented");

        let numbers = self.segmenter.decision_numbers(&text, &summaries);
        let prereqs = self.prereqs.extract(&text, count);
        if let SpanSet::Unindexed(spans) = &prereqs {
            if !spans.is_empty() {
                issue.warnings.push(format!(
                    "prerequisite spans lost index correspondence ({} of {count} found)",
                    spans.len()
                ));
                // Keep the degraded spans in the record; they are real
                // extracted text, just without a trustworthy index.
                issue.unindexed_prerequisites = spans.clone();
            }
        }
        let bodies = self.bodies.extract(&text, count);

        for (rank, summary) in summaries.into_iter().enumerate() {
            let index = rank + 1;
            let mut decision = Decision::new(index);
            decision.summary = Some(summary);
            decision.number = numbers.get(&index).cloned().flatten();
            decision.prerequisites = prereqs.get(index).map(String::from);
            decision.body = bodies.get(&index).cloned();

            if let Some(body) = &decision.body {
                decision.articles = self.articles.split(body);
                decision.respa_sections = self.respa.body_sections(body);
            }
            if let Some(prereq) = &decision.prerequisites {
                decision.referred_respa_sections = self.respa.referred_sections(prereq);
            }
            if let Some(recognizer) = recognizer {
                decision.assignments = decision
                    .respa_sections
                    .iter()
                    .map(|clause| {
                        self.respa.associate(
                            clause,
                            recognizer,
                            &self.orgs,
                            org_reference.unwrap_or(&[]),
                        )
                    })
                    .collect();
            }

            issue.decisions.insert(index, decision);
        }

        // Extra reference numbers beyond the summary count keep their
        // synthesized index instead of being truncated.
        for (index, number) in numbers {
            if let Some(number) = number {
                issue
                    .decisions
                    .entry(index)
                    .or_insert_with(|| Decision::new(index))
                    .number
                    .get_or_insert(number);
            }
        }

        match signees::signees(&text) {
            Ok(found) => issue.signees = found,
            Err(e) => {
                warn!(error = %e, "signee extraction failed, other fields kept");
                issue.warnings.push(e.to_string());
            }
        }
        issue.location_dates = signees::location_dates(&text);

        if let Some(reference) = org_reference {
            issue.organizations = self.orgs.matches(&text, reference);
        }

        debug!(
            decisions = issue.decisions.len(),
            signees = issue.signees.len(),
            warnings = issue.warnings.len(),
            "issue extraction finished"
        );
        Ok(issue)
    }
}
