//! Prescription analysis models.

use serde::{Deserialize, Deserializer, Serialize};

/// One medication as read off a prescription by the AI service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicationRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Chemical composition in plain words
    #[serde(default, deserialize_with = "null_as_default")]
    pub composition: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dosage: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub frequency: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub purpose: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub side_effects: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub warnings: Vec<String>,
    /// Filled in by enrichment, never by the AI service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simplified_explanation: Option<String>,
}

impl MedicationRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Prescriber details printed on the prescription.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PrescribingDoctor {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub specialty: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub license: String,
}

/// Patient details printed on the prescription.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PatientInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
}

/// Structured reading of one prescription image.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PrescriptionAnalysis {
    #[serde(default, deserialize_with = "null_as_default")]
    pub medications: Vec<MedicationRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub doctor: PrescribingDoctor,
    #[serde(default, deserialize_with = "null_as_default")]
    pub patient: PatientInfo,
}

impl PrescriptionAnalysis {
    /// Parse the JSON text returned by the AI service.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// A prescription reading as persisted: the raw JSON text, keyed by user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredPrescription {
    pub id: String,
    pub prescription_description: String,
    pub generated_by: String,
    pub created_at: String,
}

impl StoredPrescription {
    pub fn new(generated_by: String, prescription_description: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            prescription_description,
            generated_by,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Parse the stored JSON back into an analysis.
    pub fn analysis(&self) -> serde_json::Result<PrescriptionAnalysis> {
        PrescriptionAnalysis::from_json(&self.prescription_description)
    }
}

/// AI replies use `null` for fields they could not read; treat that as empty.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_analysis() {
        let json = r#"{
            "medications": [{
                "name": "Amoxicillin 500mg",
                "composition": "Amoxicillin trihydrate",
                "dosage": "500mg",
                "frequency": "TDS (three times a day)",
                "duration": "5 days",
                "purpose": "Chest infection",
                "sideEffects": ["Nausea", "Diarrhea"],
                "warnings": ["Finish the course", "Tell your doctor about allergies"]
            }],
            "doctor": {"name": "Dr. Rao", "specialty": "General Physician", "license": "KMC-1234"},
            "patient": {"name": "Asha", "id": "P-9", "date": "2024-03-02"}
        }"#;

        let analysis = PrescriptionAnalysis::from_json(json).unwrap();
        assert_eq!(analysis.medications.len(), 1);
        assert_eq!(analysis.medications[0].side_effects, vec!["Nausea", "Diarrhea"]);
        assert_eq!(analysis.medications[0].simplified_explanation, None);
        assert_eq!(analysis.doctor.license, "KMC-1234");
        assert_eq!(analysis.patient.date, "2024-03-02");
    }

    #[test]
    fn test_missing_and_null_fields_read_as_empty() {
        let json = r#"{
            "medications": [{"name": "Cetirizine", "purpose": null, "sideEffects": null}],
            "doctor": {"name": "Dr. Rao"}
        }"#;

        let analysis = PrescriptionAnalysis::from_json(json).unwrap();
        let med = &analysis.medications[0];
        assert_eq!(med.purpose, "");
        assert!(med.side_effects.is_empty());
        assert!(med.warnings.is_empty());
        assert_eq!(analysis.doctor.specialty, "");
        assert_eq!(analysis.patient, PatientInfo::default());
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(PrescriptionAnalysis::from_json("I could not read the image").is_err());
        assert!(PrescriptionAnalysis::from_json("[1, 2, 3]").is_err());
    }

    #[test]
    fn test_serializes_camel_case() {
        let mut med = MedicationRecord::new("Ibuprofen");
        med.simplified_explanation = Some("A pain reliever".into());
        let json = serde_json::to_value(&med).unwrap();

        assert!(json.get("sideEffects").is_some());
        assert_eq!(json["simplifiedExplanation"], "A pain reliever");

        let plain = serde_json::to_value(MedicationRecord::new("Ibuprofen")).unwrap();
        assert!(plain.get("simplifiedExplanation").is_none());
    }
}
