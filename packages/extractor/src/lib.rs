//! FEK Extractor - Extract structured decisions from Greek Government
//! Gazette (ΦΕΚ) issues.
//!
//! This crate turns the plain text of a gazette issue into structured
//! records: decisions with their summaries, reference numbers, legal-basis
//! sections, operative bodies, articles, responsibility assignments,
//! signees, dates and organization mentions.
//!
//! # Example
//!
//! ```
//! use fek_extractor::config::ExtractorConfig;
//! use fek_extractor::extractor::IssueExtractor;
//!
//! let extractor = IssueExtractor::new(&ExtractorConfig::default());
//! let issue = extractor.extract("ΑΠΟΦΑΣΕΙΣ\nΑριθμ. 1\nΣύσταση επιτροπής στο υπουργείο.\nΈχοντας υπόψη:\nτις διατάξεις, αποφασίζουμε:\nΣυστήνεται επιτροπή.\nΗ απόφαση αυτή να δημοσιευθεί στην Εφημερίδα της Κυβερνήσεως.\n", None, None).unwrap();
//! assert_eq!(issue.decisions.len(), 1);
//! ```
//!
//! # Architecture
//!
//! The extractor is organized into several modules:
//!
//! - [`config`]: Phrase vocabularies, cutoffs and converter settings
//! - [`types`]: Core data types (Decision, GazetteIssue, SpanSet, etc.)
//! - [`error`]: Error types and Result alias
//! - [`normalize`]: Text normalization for converted documents
//! - [`convert`]: External document-to-text conversion
//! - [`segment`]: Contents span, summaries and reference numbers
//! - [`prereq`]: Prerequisite ("having regard to") extraction
//! - [`body`]: Operative-body extraction
//! - [`articles`]: Article splitting
//! - [`signees`]: Signee and location/date extraction
//! - [`orgs`]: Organization matching
//! - [`ner`]: Named-entity recognition boundary
//! - [`respa`]: Responsibility-assignment clauses
//! - [`cli`]: Command-line interface
//! - [`extractor`]: The per-issue pipeline

pub mod articles;
pub mod body;
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod extractor;
pub mod ner;
pub mod normalize;
pub mod orgs;
pub mod prereq;
pub mod respa;
pub mod segment;
pub mod signees;
pub mod types;

// Re-export the main pipeline
pub use extractor::IssueExtractor;

// Re-export commonly used items
pub use config::ExtractorConfig;
pub use error::{ExtractorError, Result};
pub use types::{Decision, GazetteIssue, OrganizationMatch, SigneeBlock, SpanSet};
