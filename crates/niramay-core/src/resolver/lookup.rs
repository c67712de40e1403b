//! Medication name resolution against the knowledge base.
//!
//! Two passes over the table in declaration order: exact match on the
//! normalized name, then bidirectional substring match. First hit wins;
//! no hit means the default entry.

use serde::Serialize;

use crate::knowledge::{self, MedicationInfo, DEFAULT_KEY};

/// How a name was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchMethod {
    /// Normalized name equals a key
    Exact,
    /// Name contains a key, or a key contains the name
    Substring,
    /// Nothing matched
    Default,
}

/// Result of resolving a medication name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Matched key, or "default"
    pub key: &'static str,
    pub method: MatchMethod,
    pub info: &'static MedicationInfo,
}

/// Lower-case and trim a free-text medication name.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Resolve a free-text medication name to its knowledge entry.
pub fn resolve(name: &str) -> Resolution {
    let normalized = normalize_name(name);
    let entries = knowledge::entries();

    if let Some(entry) = entries.iter().find(|e| e.key == normalized) {
        return Resolution {
            key: entry.key,
            method: MatchMethod::Exact,
            info: &entry.info,
        };
    }

    if let Some(entry) = entries
        .iter()
        .find(|e| normalized.contains(e.key) || e.key.contains(normalized.as_str()))
    {
        return Resolution {
            key: entry.key,
            method: MatchMethod::Substring,
            info: &entry.info,
        };
    }

    default_resolution()
}

fn default_resolution() -> Resolution {
    Resolution {
        key: DEFAULT_KEY,
        method: MatchMethod::Default,
        info: knowledge::default_info(),
    }
}
