//! Medication name resolution and prescription enrichment.
//!
//! Pipeline: AI-read medication name → Normalization → Knowledge-base lookup → Enrichment

mod enricher;
mod lookup;

pub use enricher::*;
pub use lookup::*;
