//! Static medication knowledge base.
//!
//! A fixed, read-only table from canonical (lower-case) medication names to
//! plain-language information, plus a default entry for everything else.

mod table;

use serde::Serialize;

/// Key under which the fallback entry is reported.
pub const DEFAULT_KEY: &str = "default";

/// Plain-language information about one medication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MedicationInfo {
    /// Never empty; the first entry is the primary use
    pub common_uses: &'static [&'static str],
    pub simplified_explanation: &'static str,
    pub common_side_effects: &'static [&'static str],
    pub common_warnings: &'static [&'static str],
}

impl MedicationInfo {
    /// The primary use.
    pub fn primary_use(&self) -> &'static str {
        self.common_uses.first().copied().unwrap_or_default()
    }
}

/// A named row of the knowledge table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KnowledgeEntry {
    pub key: &'static str,
    pub info: MedicationInfo,
}

/// Named entries in declaration order (the default entry is not included).
pub fn entries() -> &'static [KnowledgeEntry] {
    table::MEDICATIONS
}

/// The entry used when no name matches.
pub fn default_info() -> &'static MedicationInfo {
    &table::DEFAULT_MEDICATION
}

/// Exact lookup by canonical key.
pub fn get(key: &str) -> Option<&'static MedicationInfo> {
    if key == DEFAULT_KEY {
        return Some(default_info());
    }
    entries().iter().find(|e| e.key == key).map(|e| &e.info)
}
