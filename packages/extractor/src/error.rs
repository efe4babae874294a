//! Error types for the extractor.
//!
//! Structural ambiguity in a required-unique pattern is never resolved by
//! silently picking one match; it surfaces as `SegmentationAmbiguity`.
//! Count shortfalls in repeatable patterns are not errors; they are carried
//! as degraded values (see `types::SpanSet`).

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the extractor library.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// The source file to convert does not exist.
    #[error("Source file does not exist: {}", path.display())]
    MissingSource { path: PathBuf },

    /// A pass that requires exactly one match found zero or several.
    #[error("Ambiguous segmentation for '{pattern}': expected exactly {expected} match(es), found {found}")]
    SegmentationAmbiguity {
        pattern: String,
        expected: usize,
        found: usize,
    },

    /// Occupation and name-group counts disagree in the signee pass.
    #[error("Signee association mismatch: {occupations} occupation(s) but {name_groups} name group(s)")]
    SigneeAssociation {
        occupations: usize,
        name_groups: usize,
    },

    /// The external text converter failed.
    #[error("Conversion with '{command}' failed: {detail}")]
    Conversion { command: String, detail: String },

    /// The external text converter exceeded its deadline.
    #[error("Conversion with '{command}' timed out after {seconds}s")]
    ConversionTimeout { command: String, seconds: u64 },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, ExtractorError>;
