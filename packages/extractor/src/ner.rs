//! Named-entity recognition boundary.
//!
//! The recognizer is an external collaborator behind a narrow capability
//! trait: given text, return entities with a tag from a fixed enumeration.
//! The extractor only consumes recognizer output; the person filter below
//! is the sole in-crate use.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A single recognized entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub tag: EntityTag,
}

/// Fixed tag set for recognized entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityTag {
    Person,
    Organization,
    Location,
    Other,
}

/// Capability interface for pluggable recognizers.
pub trait EntityRecognizer {
    /// Recognize entities in a text span.
    fn recognize(&self, text: &str) -> Vec<Entity>;
}

/// Keep only person-tagged entities from recognizer output.
#[must_use]
pub fn filter_persons(entities: &[Entity]) -> Vec<Entity> {
    entities
        .iter()
        .filter(|e| e.tag == EntityTag::Person)
        .cloned()
        .collect()
}

/// Uppercase Greek name pair, e.g. "ΧΑΡΑΛΑΜΠΟΣ ΧΡΥΣΑΝΘΑΚΗΣ".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static UPPER_NAME_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[Α-ΩΆ-Ώ][Α-ΩΆ-Ώ]+(?: [Α-ΩΆ-Ώ][Α-ΩΆ-Ώ]+){1,2}").expect("valid regex")
});

/// Title-case name pair preceded by an honorific ("κ.", "κα").
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static HONORIFIC_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"κ(?:\.|α\.?) ?([Α-ΩΆ-Ώ][α-ωά-ώΐΰ]+(?: [Α-ΩΆ-Ώ][α-ωά-ώΐΰ]+)+)")
        .expect("valid regex")
});

/// Built-in pattern-based recognizer.
///
/// Precision-oriented defaults for gazette text: all-caps signee-style name
/// pairs and honorific-prefixed title-case names. External model-backed
/// recognizers can replace it through [`EntityRecognizer`].
#[derive(Debug, Default)]
pub struct PatternRecognizer;

impl PatternRecognizer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EntityRecognizer for PatternRecognizer {
    fn recognize(&self, text: &str) -> Vec<Entity> {
        let mut entities = Vec::new();

        for m in UPPER_NAME_PAIR.find_iter(text) {
            entities.push(Entity {
                text: m.as_str().to_string(),
                tag: EntityTag::Person,
            });
        }

        for c in HONORIFIC_NAME.captures_iter(text) {
            if let Some(name) = c.get(1) {
                entities.push(Entity {
                    text: name.as_str().to_string(),
                    tag: EntityTag::Person,
                });
            }
        }

        entities.dedup_by(|a, b| a.text == b.text);
        entities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_filter_persons() {
        let entities = vec![
            Entity {
                text: "ΜΑΡΙΑ ΓΕΩΡΓΙΟΥ".to_string(),
                tag: EntityTag::Person,
            },
            Entity {
                text: "ΥΠΟΥΡΓΕΙΟ ΟΙΚΟΝΟΜΙΚΩΝ".to_string(),
                tag: EntityTag::Organization,
            },
        ];
        let persons = filter_persons(&entities);
        assert_eq!(persons.len(), 1);
        assert_eq!(persons[0].text, "ΜΑΡΙΑ ΓΕΩΡΓΙΟΥ");
    }

    #[test]
    fn test_pattern_recognizer_upper_pair() {
        let entities = PatternRecognizer::new().recognize("υπογράφει ο ΙΩΑΝΝΗΣ ΔΗΜΗΤΡΙΟΥ σήμερα");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].text, "ΙΩΑΝΝΗΣ ΔΗΜΗΤΡΙΟΥ");
        assert_eq!(entities[0].tag, EntityTag::Person);
    }

    #[test]
    fn test_pattern_recognizer_honorific() {
        let entities =
            PatternRecognizer::new().recognize("ανατίθενται στον κ. Νικόλαο Παπαδόπουλο καθήκοντα");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].text, "Νικόλαο Παπαδόπουλο");
    }

    #[test]
    fn test_pattern_recognizer_empty() {
        assert!(PatternRecognizer::new().recognize("κείμενο χωρίς ονόματα").is_empty());
    }
}
