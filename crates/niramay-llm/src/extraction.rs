//! Turning free-form AI replies into typed values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prompts::{REASONING_MARKER, RECOMMENDED_DOCTOR_MARKER};

/// Extraction errors.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Marker {0:?} not found in response")]
    MissingMarker(&'static str),

    #[error("Marker {0:?} appears more than once in response")]
    DuplicateMarker(&'static str),

    #[error("Invalid response format: {0}")]
    InvalidFormat(String),
}

pub type ExtractionResult<T> = Result<T, ExtractionError>;

// =========================================================================
// Doctor recommendation
// =========================================================================

/// The two labelled fields of a doctor-matching reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorRecommendation {
    pub doctor_name: String,
    pub reasoning: String,
}

/// Split a reply of the form `... Recommended Doctor: <name> Reasoning: <text>`.
///
/// The doctor name is everything between the first `Recommended Doctor:` and
/// the following `Reasoning:`; the reasoning is everything after that. Both are
/// trimmed. A missing, repeated or out-of-order marker is an error rather than
/// a guess. An empty name is returned as is; the directory lookup rejects it.
pub fn extract_recommendation(text: &str) -> ExtractionResult<DoctorRecommendation> {
    let doctor_start = text
        .find(RECOMMENDED_DOCTOR_MARKER)
        .ok_or(ExtractionError::MissingMarker(RECOMMENDED_DOCTOR_MARKER))?;
    let after_doctor = &text[doctor_start + RECOMMENDED_DOCTOR_MARKER.len()..];

    if after_doctor.contains(RECOMMENDED_DOCTOR_MARKER) {
        return Err(ExtractionError::DuplicateMarker(RECOMMENDED_DOCTOR_MARKER));
    }
    if text.matches(REASONING_MARKER).count() > 1 {
        return Err(ExtractionError::DuplicateMarker(REASONING_MARKER));
    }

    // A reasoning marker that only occurs before the doctor marker counts as missing.
    let reasoning_start = after_doctor
        .find(REASONING_MARKER)
        .ok_or(ExtractionError::MissingMarker(REASONING_MARKER))?;

    let doctor_name = after_doctor[..reasoning_start].trim();
    let reasoning = after_doctor[reasoning_start + REASONING_MARKER.len()..].trim();

    Ok(DoctorRecommendation {
        doctor_name: doctor_name.to_string(),
        reasoning: reasoning.to_string(),
    })
}

// =========================================================================
// Prescription JSON
// =========================================================================

/// Pull the JSON payload out of a prescription reply.
///
/// Prefers the first block fenced as "```json ... ```", then the first plain
/// "```...```" block, then the whole reply. The captured text is returned
/// as-is; trimming and parsing are the caller's job. An empty capture falls
/// back to the whole reply.
pub fn extract_json(text: &str) -> &str {
    let captured = fenced_block(text, "```json").or_else(|| fenced_block(text, "```"));
    match captured {
        Some(inner) if !inner.is_empty() => inner,
        _ => text,
    }
}

/// Text between the first `open` and the next "```" after it.
fn fenced_block<'a>(text: &'a str, open: &str) -> Option<&'a str> {
    let start = text.find(open)? + open.len();
    let end = text[start..].find("```")?;
    Some(&text[start..start + end])
}

// =========================================================================
// Diet plan
// =========================================================================

/// Daily macronutrient split, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snacks: String,
}

/// A generated diet plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    pub calorie_needs: f64,
    pub macros: Macros,
    pub meal_plan: MealPlan,
    /// Nominally three entries
    pub recommendations: Vec<String>,
}

impl DietPlan {
    /// The plan served when the AI reply cannot be used.
    pub fn fallback() -> Self {
        Self {
            calorie_needs: 2000.0,
            macros: Macros {
                protein: 30.0,
                carbs: 40.0,
                fats: 30.0,
            },
            meal_plan: MealPlan {
                breakfast: "Oatmeal with berries and nuts, Greek yogurt".into(),
                lunch: "Grilled chicken salad with mixed vegetables".into(),
                dinner: "Baked salmon with quinoa and steamed broccoli".into(),
                snacks: "Apple with almond butter, protein shake".into(),
            },
            recommendations: vec![
                "Stay hydrated by drinking at least 8 glasses of water daily".into(),
                "Focus on whole, unprocessed foods".into(),
                "Include a variety of colorful vegetables in your meals".into(),
            ],
        }
    }
}

/// Parse the greedy `{ ... }` span of a diet reply.
pub fn parse_diet_plan(text: &str) -> ExtractionResult<DietPlan> {
    let json_start = text.find('{').ok_or_else(|| {
        ExtractionError::InvalidFormat("No JSON object found in response".into())
    })?;
    let json_end = text.rfind('}').ok_or_else(|| {
        ExtractionError::InvalidFormat("No closing brace found in response".into())
    })?;
    if json_end < json_start {
        return Err(ExtractionError::InvalidFormat(
            "No JSON object found in response".into(),
        ));
    }

    let plan: DietPlan = serde_json::from_str(&text[json_start..=json_end])?;
    Ok(plan)
}

/// Like [`parse_diet_plan`], but substitutes [`DietPlan::fallback`] on any failure.
pub fn extract_diet(text: &str) -> DietPlan {
    parse_diet_plan(text).unwrap_or_else(|_| DietPlan::fallback())
}
