//! Splitting a decision body into numbered articles.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::ExtractorConfig;

/// Sentence boundary terminating an article's text.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ARTICLE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.\s*\n").expect("valid regex"));

/// Splits decision bodies on "Άρθρο n" markers.
pub struct ArticleSplitter {
    marker: Regex,
    label: String,
}

impl ArticleSplitter {
    #[must_use]
    #[allow(clippy::expect_used)] // Pattern is built from an escaped marker
    pub fn new(config: &ExtractorConfig) -> Self {
        let marker_word = regex::escape(&config.article_marker);
        let marker = Regex::new(&format!(r"{marker_word}\s*\d+\s*\n")).expect("valid regex");
        Self {
            marker,
            label: config.article_marker.clone(),
        }
    }

    /// Split a body into articles keyed "Άρθρο 1", "Άρθρο 2", ... in
    /// encounter order.
    ///
    /// Each article's text runs from its marker to the next marker or the
    /// next sentence boundary, whichever comes first. Empty input yields an
    /// empty map.
    #[must_use]
    pub fn split(&self, body: &str) -> BTreeMap<String, String> {
        let mut articles = BTreeMap::new();
        if body.is_empty() {
            return articles;
        }

        let markers: Vec<_> = self.marker.find_iter(body).collect();
        let mut ordinal = 0;
        for (pos, marker) in markers.iter().enumerate() {
            let start = marker.end();
            let next_marker = markers.get(pos + 1).map(regex::Match::start);
            let region_end = next_marker.unwrap_or(body.len());
            let region = &body[start..region_end];

            // Text stops before the first sentence boundary inside the
            // region; without one, the next marker bounds it. A trailing
            // article with neither is dropped.
            let end = match ARTICLE_END.find(region) {
                Some(boundary) => boundary.start(),
                None if next_marker.is_some() => region.len(),
                None => continue,
            };

            ordinal += 1;
            articles.insert(format!("{} {ordinal}", self.label), region[..end].to_string());
        }
        articles
    }
}
