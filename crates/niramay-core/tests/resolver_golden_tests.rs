//! Golden tests for the medication name resolver.
//!
//! These tests pin resolution of prescription-style names against the
//! knowledge base.

use niramay_core::knowledge;
use niramay_core::models::{MedicationRecord, PrescriptionAnalysis};
use niramay_core::resolver::{enrich, resolve, MatchMethod};
use proptest::prelude::*;

/// One pinned resolution: input name and the expected match.
struct GoldenCase {
    id: &'static str,
    input_name: &'static str,
    expected_key: &'static str,
    expected_method: MatchMethod,
}

fn get_golden_cases() -> Vec<GoldenCase> {
    vec![
        GoldenCase {
            id: "exact-lowercase",
            input_name: "cetirizine",
            expected_key: "cetirizine",
            expected_method: MatchMethod::Exact,
        },
        GoldenCase {
            id: "exact-shouting-padded",
            input_name: "  LORATADINE \t",
            expected_key: "loratadine",
            expected_method: MatchMethod::Exact,
        },
        GoldenCase {
            id: "strength-suffix",
            input_name: "Amoxicillin 500mg",
            expected_key: "amoxicillin",
            expected_method: MatchMethod::Substring,
        },
        GoldenCase {
            id: "salt-name",
            input_name: "Amlodipine Besylate 5 mg",
            expected_key: "amlodipine",
            expected_method: MatchMethod::Substring,
        },
        GoldenCase {
            id: "combination-brand",
            input_name: "Augmentin (Amoxicillin + Clavulanate)",
            expected_key: "amoxicillin",
            expected_method: MatchMethod::Substring,
        },
        GoldenCase {
            id: "hyphenated",
            input_name: "tab-ibuprofen-400",
            expected_key: "ibuprofen",
            expected_method: MatchMethod::Substring,
        },
        GoldenCase {
            id: "abbreviation-inside-key",
            input_name: "Cipro",
            expected_key: "ciprofloxacin",
            expected_method: MatchMethod::Substring,
        },
        GoldenCase {
            id: "fragment-first-declared-wins",
            input_name: "in",
            expected_key: "amoxicillin",
            expected_method: MatchMethod::Substring,
        },
        GoldenCase {
            id: "brand-not-in-table",
            input_name: "Tylenol",
            expected_key: "default",
            expected_method: MatchMethod::Default,
        },
        GoldenCase {
            id: "synonym-not-in-table",
            input_name: "Paracetamol 650",
            expected_key: "default",
            expected_method: MatchMethod::Default,
        },
        GoldenCase {
            id: "blank-matches-first-declared",
            input_name: "   ",
            expected_key: "amoxicillin",
            expected_method: MatchMethod::Substring,
        },
    ]
}

#[test]
fn test_golden_cases() {
    for case in get_golden_cases() {
        let resolution = resolve(case.input_name);

        assert_eq!(
            resolution.key, case.expected_key,
            "Case {}: key mismatch", case.id
        );
        assert_eq!(
            resolution.method, case.expected_method,
            "Case {}: method mismatch", case.id
        );
    }
}

#[test]
fn test_every_key_resolves_to_itself() {
    for entry in knowledge::entries() {
        let resolution = resolve(entry.key);
        assert_eq!(resolution.key, entry.key);
        assert_eq!(resolution.method, MatchMethod::Exact);
        assert_eq!(resolution.info, &entry.info);
    }
}

#[test]
fn test_default_entry_contents() {
    let info = resolve("zzzz").info;
    assert_eq!(info, knowledge::default_info());
    assert_eq!(
        info.primary_use(),
        "Treatment of medical conditions as prescribed by your doctor"
    );
}

fn key_strategy() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(knowledge::entries().iter().map(|e| e.key).collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn prop_exact_match_ignores_case_and_padding(
        key in key_strategy(),
        upper in proptest::collection::vec(any::<bool>(), 16),
        left in "[ \t]{0,3}",
        right in "[ \t]{0,3}",
    ) {
        let mixed: String = key
            .chars()
            .zip(upper.iter().cycle())
            .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c })
            .collect();
        let input = format!("{}{}{}", left, mixed, right);

        let resolution = resolve(&input);
        prop_assert_eq!(resolution.key, key);
        prop_assert_eq!(resolution.method, MatchMethod::Exact);
    }

    #[test]
    fn prop_resolve_never_panics_and_reports_known_key(name in ".{0,40}") {
        let resolution = resolve(&name);
        prop_assert!(
            resolution.key == knowledge::DEFAULT_KEY
                || knowledge::get(resolution.key).is_some()
        );
    }

    #[test]
    fn prop_enrich_is_idempotent(
        names in proptest::collection::vec("[A-Za-z0-9 ]{0,20}", 0..5),
        purpose in prop_oneof![Just(String::new()), Just("Unspecified".to_string()), "[a-z ]{1,20}"],
    ) {
        let medications = names
            .into_iter()
            .map(|name| {
                let mut med = MedicationRecord::new(name);
                med.purpose = purpose.clone();
                med
            })
            .collect();
        let analysis = PrescriptionAnalysis { medications, ..Default::default() };

        let once = enrich(analysis);
        let twice = enrich(once.clone());
        prop_assert_eq!(once, twice);
    }
}
