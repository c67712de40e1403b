//! Doctor matching and the doctor directory.

use niramay_llm::{
    extract_recommendation, make_doctor_match_prompt, DoctorSummary, GenerationRequest,
    TextGenerator,
};

use super::non_blank_reply;
use crate::config::DEFAULT_MIN_DESCRIPTION_CHARS;
use crate::db::Database;
use crate::models::{Doctor, DoctorDetails, DoctorListing, DoctorMatch};
use crate::{NiramayError, NiramayResult};

/// Recommends one doctor from the directory for a health description.
pub struct DoctorMatcher<'a, G: TextGenerator + ?Sized> {
    db: &'a Database,
    generator: &'a G,
    min_description_chars: usize,
}

impl<'a, G: TextGenerator + ?Sized> DoctorMatcher<'a, G> {
    pub fn new(db: &'a Database, generator: &'a G) -> Self {
        Self {
            db,
            generator,
            min_description_chars: DEFAULT_MIN_DESCRIPTION_CHARS,
        }
    }

    /// Override the shortest accepted description (in characters, after trimming).
    pub fn min_description_chars(mut self, chars: usize) -> Self {
        self.min_description_chars = chars;
        self
    }

    /// Ask the AI service which stored doctor suits `description` best.
    pub fn match_doctor(&self, description: &str) -> NiramayResult<DoctorMatch> {
        let description = description.trim();
        if description.chars().count() < self.min_description_chars {
            return Err(NiramayError::InvalidInput(format!(
                "Please provide a detailed health description (at least {} characters)",
                self.min_description_chars
            )));
        }

        let doctors = self.db.list_doctors()?;
        if doctors.is_empty() {
            return Err(NiramayError::NotFound(
                "No doctors available in the directory".into(),
            ));
        }

        let summaries: Vec<DoctorSummary> = doctors.iter().map(DoctorSummary::from).collect();
        let prompt = make_doctor_match_prompt(description, &summaries);
        tracing::info!(
            doctors = doctors.len(),
            prompt_chars = prompt.len(),
            "Requesting doctor recommendation"
        );

        let reply = non_blank_reply(self.generator.generate(&GenerationRequest::text(prompt))?)?;
        let recommendation = extract_recommendation(&reply)?;

        let doctor = self
            .db
            .find_doctor_by_name(&recommendation.doctor_name)?
            .ok_or_else(|| {
                tracing::warn!(
                    recommended = %recommendation.doctor_name,
                    "Recommended doctor is not in the directory"
                );
                not_found_with_hint(&recommendation.doctor_name, &doctors)
            })?;

        tracing::info!(doctor_id = %doctor.id, "Doctor recommended");
        Ok(DoctorMatch::new(doctor, recommendation.reasoning))
    }
}

/// The closest stored name by Jaro-Winkler similarity, if any doctors exist.
pub fn closest_doctor_name<'d>(name: &str, doctors: &'d [Doctor]) -> Option<&'d str> {
    doctors
        .iter()
        .map(|d| (d, strsim::jaro_winkler(name, &d.name)))
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(d, _)| d.name.as_str())
}

fn not_found_with_hint(name: &str, doctors: &[Doctor]) -> NiramayError {
    match closest_doctor_name(name, doctors) {
        Some(closest) => NiramayError::NotFound(format!(
            "Recommended doctor {:?} not found (closest match: {:?})",
            name, closest
        )),
        None => NiramayError::NotFound(format!("Recommended doctor {:?} not found", name)),
    }
}

/// Directory listing with ratings coerced to numbers. An empty directory is `NotFound`.
pub fn list_doctor_directory(db: &Database) -> NiramayResult<Vec<DoctorListing>> {
    let doctors = db.list_doctors()?;
    if doctors.is_empty() {
        return Err(NiramayError::NotFound(
            "No doctors found in the database".into(),
        ));
    }
    Ok(doctors.into_iter().map(DoctorListing::from).collect())
}

/// Profile of one doctor, rating coerced to a number.
pub fn doctor_details(db: &Database, id: &str) -> NiramayResult<DoctorDetails> {
    let id = id.trim();
    if id.is_empty() {
        return Err(NiramayError::InvalidInput("Doctor id is required".into()));
    }
    db.get_doctor(id)?
        .map(DoctorDetails::from)
        .ok_or_else(|| NiramayError::NotFound(format!("Doctor {} not found", id)))
}
