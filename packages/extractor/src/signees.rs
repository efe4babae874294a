//! Signee (title + name) and location/date stamp extraction.
//!
//! Two correlated passes: occupation lines following a 4-digit year token
//! (optionally behind a "Με εντολή ..." delegation line), then the
//! capitalized name lines following each occupation. Location/date stamps
//! are a separate uncorrelated pass, advisory only.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ExtractorError, Result};
use crate::types::SigneeBlock;

/// Occupation/title line after a year token, e.g. "Ο ΠΡΟΕΔΡΕΥΩΝ",
/// "Οι Υπουργοί". A "Με εντολή Υπουργού" delegation line may sit between.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static OCCUPATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\s\d{4}\s*\n\s*(?:Με εντολή(?: [Α-ΩΆ-ΏA-Z][α-ωά-ώΐΰa-zΑ-ΩΆ-ΏA-Z]+)+\n)?((?:[Α-ΩΆ-ΏA-Z][α-ωά-ώΐΰa-zΑ-ΩΆ-ΏA-Z]?(?: [Α-ΩΆ-ΏA-Z][α-ωά-ώΐΰa-zΑ-ΩΆ-ΏA-Z]+)+))\s*\n",
    )
    .expect("valid regex")
});

/// Location/date stamp preceding the signees, e.g. "Αθήνα, 12 Μαΐου 2018".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LOCATION_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n([Α-ΩΆ-Ώ]\p{Greek}+,\s?\d{1,2}\s\p{Greek}+\s\d{4})\s*\n").expect("valid regex")
});

/// Extract signing official blocks, in encounter order.
///
/// Every located occupation must yield at least one following name group;
/// a shortfall is a [`ExtractorError::SigneeAssociation`] (the signee stage
/// fails, other decision fields stay usable).
pub fn signees(text: &str) -> Result<Vec<SigneeBlock>> {
    let occupations: Vec<String> = OCCUPATION
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .collect();

    let mut distinct: Vec<String> = Vec::new();
    for occupation in occupations {
        if !distinct.contains(&occupation) {
            distinct.push(occupation);
        }
    }

    let mut blocks = Vec::new();
    for occupation in &distinct {
        let names = names_after_occupation(text, occupation);
        if !names.is_empty() {
            blocks.push(SigneeBlock {
                occupation: occupation.clone(),
                names,
            });
        }
    }

    if blocks.len() != distinct.len() {
        return Err(ExtractorError::SigneeAssociation {
            occupations: distinct.len(),
            name_groups: blocks.len(),
        });
    }

    Ok(blocks)
}

/// Capitalized name lines directly following an occupation line.
fn names_after_occupation(text: &str, occupation: &str) -> Vec<String> {
    #[allow(clippy::expect_used)] // Pattern embeds the occupation escaped
    let pattern = Regex::new(&format!(
        r"\n\s*{}\s*\n\s*((?:[Α-ΩΆ-ΏA-Zκ−-][α-ωά-ώΐΰa-zΑ-ΩΆ-ΏA-Z\.,−/\-]*\s*)+)\n",
        regex::escape(occupation)
    ))
    .expect("valid regex");

    pattern
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .flat_map(|m| {
            m.as_str()
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Location/date stamps in encounter order, uncorrelated to decisions.
#[must_use]
pub fn location_dates(text: &str) -> Vec<String> {
    LOCATION_DATE
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SIGNED: &str = "Η απόφαση αυτή να δημοσιευθεί.\nΑθήνα, 12 Μαΐου 2018\nΟ ΥΠΟΥΡΓΟΣ\nΧΑΡΑΛΑΜΠΟΣ ΧΡΥΣΑΝΘΑΚΗΣ\nτέλος εγγράφου\n";

    #[test]
    fn test_single_signee() {
        let result = signees(SIGNED).unwrap();
        assert_eq!(
            result,
            vec![SigneeBlock {
                occupation: "Ο ΥΠΟΥΡΓΟΣ".to_string(),
                names: vec!["ΧΑΡΑΛΑΜΠΟΣ ΧΡΥΣΑΝΘΑΚΗΣ".to_string()],
            }]
        );
    }

    #[test]
    fn test_delegated_signee() {
        let text = "κείμενο 2018\nΜε εντολή Υπουργού\nΟ Γενικός Γραμματέας\nΝΙΚΟΛΑΟΣ ΠΑΠΑΔΟΠΟΥΛΟΣ\nτέλος\n";
        let result = signees(text).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].occupation, "Ο Γενικός Γραμματέας");
        assert_eq!(result[0].names, vec!["ΝΙΚΟΛΑΟΣ ΠΑΠΑΔΟΠΟΥΛΟΣ".to_string()]);
    }

    #[test]
    fn test_two_signees_two_occupations() {
        let text = "Αθήνα, 12 Μαΐου 2018\nΟι Υπουργοί\nΜΑΡΙΑ ΓΕΩΡΓΙΟΥ\nΙΩΑΝΝΗΣ ΔΗΜΗΤΡΙΟΥ\nάλλο κείμενο 2017\nΟ ΠΡΟΕΔΡΕΥΩΝ\nΚΩΝΣΤΑΝΤΙΝΟΣ ΝΙΚΟΛΑΟΥ\nτέλος\n";
        let result = signees(text).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].names.len(), 2);
        assert_eq!(result[1].occupation, "Ο ΠΡΟΕΔΡΕΥΩΝ");
        assert_eq!(result[1].names, vec!["ΚΩΝΣΤΑΝΤΙΝΟΣ ΝΙΚΟΛΑΟΥ".to_string()]);
    }

    #[test]
    fn test_blocks_keep_encounter_order() {
        // "Οι Υπουργοί" sorts after "Ο ΠΡΟΕΔΡΕΥΩΝ" but appears first in the
        // text; signing order must survive.
        let text = "Αθήνα, 12 Μαΐου 2018\nΟι Υπουργοί\nΜΑΡΙΑ ΓΕΩΡΓΙΟΥ\nάλλο κείμενο 2017\nΟ ΠΡΟΕΔΡΕΥΩΝ\nΚΩΝΣΤΑΝΤΙΝΟΣ ΝΙΚΟΛΑΟΥ\nτέλος\n";
        let occupations: Vec<_> = signees(text)
            .unwrap()
            .into_iter()
            .map(|b| b.occupation)
            .collect();
        assert_eq!(
            occupations,
            vec!["Οι Υπουργοί".to_string(), "Ο ΠΡΟΕΔΡΕΥΩΝ".to_string()]
        );
    }

    #[test]
    fn test_no_signees() {
        let result = signees("κείμενο χωρίς υπογραφές.\n").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_location_dates() {
        let stamps = location_dates(SIGNED);
        assert_eq!(stamps, vec!["Αθήνα, 12 Μαΐου 2018".to_string()]);
    }

    #[test]
    fn test_location_dates_ordered() {
        let text = "α\nΑθήνα, 1 Ιανουαρίου 2018\nβ\nΠειραιάς, 3 Μαρτίου 2019\nγ\n";
        let stamps = location_dates(text);
        assert_eq!(stamps.len(), 2);
        assert!(stamps[0].starts_with("Αθήνα"));
        assert!(stamps[1].starts_with("Πειραιάς"));
    }
}
