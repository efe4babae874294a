//! Text normalization applied before every pattern-matching pass.
//!
//! Normalization is idempotent: `normalize(normalize(t)) == normalize(t)`.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Converter artifacts like "(cid:123)" left by PDF text extraction.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CID_ARTIFACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(cid:\d+\)").expect("valid regex"));

/// Runs of spaces and tabs.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]{2,}").expect("valid regex"));

/// Clean raw converted text for the extraction passes.
///
/// - NFC-normalizes the text (converted Greek text often arrives decomposed).
/// - Strips `(cid:n)` converter artifacts and form feeds.
/// - Folds CRLF to LF, trims trailing spaces, collapses space runs.
/// - Drops empty lines.
#[must_use]
pub fn normalize(text: &str) -> String {
    let text: String = text.nfc().collect();
    let text = text.replace("\r\n", "\n").replace('\u{c}', "");
    let text = CID_ARTIFACT.replace_all(&text, "");

    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        let line = SPACE_RUN.replace_all(line, " ");
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}
