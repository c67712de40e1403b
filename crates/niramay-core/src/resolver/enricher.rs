//! Fill gaps in AI-read prescriptions from the knowledge base.

use crate::models::{MedicationRecord, PrescriptionAnalysis};

use super::lookup::resolve;

/// Lists with fewer entries than this are replaced from the knowledge base.
const MIN_LIST_ENTRIES: usize = 2;

/// How many knowledge-base entries replace a short list.
const REPLACEMENT_ENTRIES: usize = 3;

/// Enrich every medication; prescriber and patient are left alone.
pub fn enrich(mut analysis: PrescriptionAnalysis) -> PrescriptionAnalysis {
    for medication in &mut analysis.medications {
        enrich_medication(medication);
    }
    analysis
}

/// Enrich one medication in place.
///
/// - `simplified_explanation` is always set from the resolved entry.
/// - `purpose` is replaced by the primary use when blank or vague.
/// - `side_effects` / `warnings` with fewer than two entries are replaced by
///   the first three from the resolved entry.
pub fn enrich_medication(medication: &mut MedicationRecord) {
    let resolution = resolve(&medication.name);
    let info = resolution.info;

    tracing::debug!(
        medication = %medication.name,
        key = resolution.key,
        method = ?resolution.method,
        "Resolved medication"
    );

    medication.simplified_explanation = Some(info.simplified_explanation.to_string());

    if purpose_is_vague(&medication.purpose) {
        medication.purpose = info.primary_use().to_string();
    }

    if medication.side_effects.len() < MIN_LIST_ENTRIES {
        medication.side_effects = take_owned(info.common_side_effects);
    }

    if medication.warnings.len() < MIN_LIST_ENTRIES {
        medication.warnings = take_owned(info.common_warnings);
    }
}

fn purpose_is_vague(purpose: &str) -> bool {
    let lower = purpose.to_lowercase();
    purpose.is_empty() || lower.contains("unspecified") || lower.contains("not specified")
}

fn take_owned(items: &[&str]) -> Vec<String> {
    items
        .iter()
        .take(REPLACEMENT_ENTRIES)
        .map(|s| s.to_string())
        .collect()
}
