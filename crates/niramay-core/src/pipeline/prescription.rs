//! Prescription image analysis.

use niramay_llm::{
    extract_json, GenerationRequest, InlineImage, TextGenerator, PRESCRIPTION_MAX_OUTPUT_TOKENS,
    PRESCRIPTION_PROMPT, PRESCRIPTION_TEMPERATURE,
};

use super::{non_blank_reply, require_user};
use crate::db::Database;
use crate::models::{PrescriptionAnalysis, StoredPrescription};
use crate::resolver::enrich;
use crate::{NiramayError, NiramayResult};

/// Reads prescription images through the AI service and keeps the readings.
pub struct PrescriptionAnalyzer<'a, G: TextGenerator + ?Sized> {
    db: &'a Database,
    generator: &'a G,
}

impl<'a, G: TextGenerator + ?Sized> PrescriptionAnalyzer<'a, G> {
    pub fn new(db: &'a Database, generator: &'a G) -> Self {
        Self { db, generator }
    }

    /// Read one prescription image for `user_id`.
    ///
    /// The reply's JSON is validated before it is stored; the stored text is
    /// the trimmed JSON exactly as the service produced it. The returned
    /// analysis is not enriched (enrichment happens when history is read).
    pub fn analyze(&self, user_id: &str, image: InlineImage) -> NiramayResult<PrescriptionAnalysis> {
        let user_id = require_user(user_id)?;
        if image.data.trim().is_empty() {
            return Err(NiramayError::InvalidInput("No image provided".into()));
        }

        tracing::info!(
            mime_type = %image.mime_type,
            image_bytes = image.data.len(),
            "Analyzing prescription"
        );

        let request = GenerationRequest::with_image(PRESCRIPTION_PROMPT, image)
            .temperature(PRESCRIPTION_TEMPERATURE)
            .max_output_tokens(PRESCRIPTION_MAX_OUTPUT_TOKENS);
        let reply = non_blank_reply(self.generator.generate(&request)?)?;

        let json = extract_json(&reply).trim();
        let analysis = PrescriptionAnalysis::from_json(json).map_err(|e| {
            tracing::warn!(error = %e, "Prescription reply is not valid analysis JSON");
            NiramayError::MalformedResponse(format!("Could not parse prescription analysis: {}", e))
        })?;

        let stored = StoredPrescription::new(user_id.to_string(), json.to_string());
        self.db.insert_prescription(&stored)?;

        tracing::info!(
            prescription_id = %stored.id,
            medications = analysis.medications.len(),
            "Prescription stored"
        );
        Ok(analysis)
    }

    /// Stored readings for `user_id`, enriched.
    pub fn history(
        &self,
        user_id: &str,
    ) -> NiramayResult<Vec<(StoredPrescription, PrescriptionAnalysis)>> {
        prescription_history(self.db, user_id)
    }
}

/// Stored readings for `user_id`, oldest first, each enriched from the
/// knowledge base. Records that no longer parse are skipped.
pub fn prescription_history(
    db: &Database,
    user_id: &str,
) -> NiramayResult<Vec<(StoredPrescription, PrescriptionAnalysis)>> {
    let user_id = require_user(user_id)?;

    let mut history = Vec::new();
    for stored in db.list_prescriptions(user_id)? {
        match stored.analysis() {
            Ok(analysis) => history.push((stored, enrich(analysis))),
            Err(e) => {
                tracing::warn!(prescription_id = %stored.id, error = %e, "Skipping unreadable prescription");
            }
        }
    }
    Ok(history)
}
