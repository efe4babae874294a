//! End-to-end integration tests for the extraction pipeline.
//!
//! Tests the complete pipeline from raw issue text to a structured
//! [`GazetteIssue`] using a two-decision gazette fixture.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;

use fek_extractor::ner::PatternRecognizer;
use fek_extractor::types::{DetectionMethod, GazetteIssue};
use fek_extractor::{ExtractorConfig, IssueExtractor};

/// Load fixture file content.
fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

/// Run the extractor over the two-decision fixture.
fn run_pipeline() -> GazetteIssue {
    let text = load_fixture("two_decisions.txt");
    let reference = vec![
        "ΥΠΟΥΡΓΕΙΟ ΟΙΚΟΝΟΜΙΚΩΝ".to_string(),
        "ΥΠΟΥΡΓΕΙΟ ΕΣΩΤΕΡΙΚΩΝ".to_string(),
    ];
    let extractor = IssueExtractor::new(&ExtractorConfig::default());
    let recognizer = PatternRecognizer::new();
    extractor
        .extract(&text, Some(&reference), Some(&recognizer))
        .expect("extraction failed")
}

#[test]
fn test_two_decisions_with_summaries_and_numbers() {
    let issue = run_pipeline();
    assert_eq!(issue.decisions.len(), 2);

    let first = &issue.decisions[&1];
    assert!(first.summary.as_deref().unwrap().starts_with("Τροποποίηση"));
    assert_eq!(first.number.as_deref(), Some("Αριθμ. 2/45678/0022"));

    let second = &issue.decisions[&2];
    assert!(second.summary.as_deref().unwrap().starts_with("Σύσταση"));
    assert_eq!(second.number.as_deref(), Some("Αριθμ. 10345"));
}

#[test]
fn test_summaries_carry_no_ellipsis_runs() {
    let issue = run_pipeline();
    for decision in issue.decisions.values() {
        assert!(!decision.summary.as_deref().unwrap().contains("..."));
    }
}

#[test]
fn test_prerequisites_keep_index_correspondence() {
    let issue = run_pipeline();
    let first = issue.decisions[&1].prerequisites.as_deref().unwrap();
    let second = issue.decisions[&2].prerequisites.as_deref().unwrap();
    assert!(first.contains("ν. 1558/1985"));
    assert!(second.contains("π.δ. 63/2005"));
    assert!(!first.contains("63/2005"));
}

#[test]
fn test_bodies_and_articles() {
    let issue = run_pipeline();

    let first_body = issue.decisions[&1].body.as_deref().unwrap();
    assert!(first_body.contains("Αναθέτουμε"));
    assert!(first_body.contains("να δημοσιευθεί"));

    let first_articles = &issue.decisions[&1].articles;
    assert_eq!(first_articles.len(), 1);
    assert!(first_articles["Άρθρο 1"].contains("καθήκοντα γραμματέα"));

    let articles = &issue.decisions[&2].articles;
    assert_eq!(articles.len(), 2);
    assert_eq!(articles["Άρθρο 1"], "Συστήνονται δύο θέσεις ειδικού συνεργάτη");
    assert_eq!(articles["Άρθρο 2"], "Η ισχύς αρχίζει από τη δημοσίευση");
}

#[test]
fn test_assignment_clauses_and_association() {
    let issue = run_pipeline();

    let first = &issue.decisions[&1];
    assert!(first
        .respa_sections
        .iter()
        .any(|s| s.contains("καθήκοντα γραμματέα")));
    assert!(first
        .assignments
        .iter()
        .any(|a| a.persons.contains(&"Νικόλαο Παπαδόπουλο".to_string())));

    // The quoted assignment in the first decision's legal basis.
    assert_eq!(first.referred_respa_sections.len(), 1);
    assert!(first.referred_respa_sections[0].contains("ανατίθενται αρμοδιότητες"));
}

#[test]
fn test_signees_and_location_dates() {
    let issue = run_pipeline();
    assert_eq!(issue.signees.len(), 1);
    assert_eq!(issue.signees[0].occupation, "Ο ΥΠΟΥΡΓΟΣ");
    assert_eq!(
        issue.signees[0].names,
        vec!["ΧΑΡΑΛΑΜΠΟΣ ΧΡΥΣΑΝΘΑΚΗΣ".to_string()]
    );
    assert_eq!(issue.location_dates, vec!["Αθήνα, 12 Μαΐου 2018".to_string()]);
}

#[test]
fn test_organizations_matched_against_reference() {
    let issue = run_pipeline();
    let ministry = issue
        .organizations
        .iter()
        .find(|m| m.candidate == "Υπουργείο Οικονομικών")
        .expect("ministry mention not matched");
    assert_eq!(ministry.method, DetectionMethod::FullName);
    assert_eq!(ministry.matches[0].name, "ΥΠΟΥΡΓΕΙΟ ΟΙΚΟΝΟΜΙΚΩΝ");
    assert!(ministry.matches[0].score >= 0.65);
}

#[test]
fn test_clean_extraction_produces_no_warnings() {
    let issue = run_pipeline();
    assert_eq!(issue.warnings, Vec::<String>::new());
}

#[test]
fn test_issue_serializes_with_skipped_empty_fields() {
    let issue = run_pipeline();
    let json = serde_json::to_string_pretty(&issue).unwrap();
    assert!(json.contains("\"decisions\""));
    assert!(json.contains("\"signees\""));
    // Decision 2 has no assignment clauses; empty fields are skipped
    // entirely rather than serialized as empty containers.
    assert!(!json.contains("\"respa_sections\": []"));
    assert!(!json.contains("\"assignments\": []"));
}
