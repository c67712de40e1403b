//! Niramay Core Library
//!
//! Normalization and matching of generative-AI replies for the Niramay
//! healthcare service: doctor recommendation, prescription reading and diet
//! planning.
//!
//! # Architecture
//!
//! ```text
//! Health description ──► prompt ──► AI ──► "Recommended Doctor:" extractor ──► doctor lookup
//!
//! Prescription image ──► prompt ──► AI ──► fenced JSON extractor ──► validate ──► store
//!                                                                                │
//!                                                    history ◄── Enricher ◄──────┘
//!                                                                   │
//!                                                     Name Resolver + Knowledge Base
//!
//! Diet request ───────► prompt ──► AI ──► {…} extractor ──► store (fallback is not stored)
//! ```
//!
//! # Modules
//!
//! - [`db`]: SQLite document store for doctors, prescriptions and diet plans
//! - [`models`]: Domain types (Doctor, MedicationRecord, PrescriptionAnalysis, etc.)
//! - [`knowledge`]: Static medication knowledge base
//! - [`resolver`]: Name resolver and result enricher
//! - [`pipeline`]: Doctor matching, prescription analysis and diet planning
//! - [`config`]: Runtime configuration

pub mod config;
pub mod db;
pub mod knowledge;
pub mod models;
pub mod pipeline;
pub mod resolver;

// Re-export commonly used types
pub use config::Config;
pub use db::Database;
pub use knowledge::MedicationInfo;
pub use models::{
    DietPlan, Doctor, DoctorDetails, DoctorListing, DoctorMatch, MedicationRecord,
    PrescriptionAnalysis, Rating, StoredDietPlan, StoredPrescription,
};
pub use pipeline::{DietCoach, DoctorMatcher, PrescriptionAnalyzer};
pub use resolver::{enrich, resolve, MatchMethod, Resolution};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

use niramay_llm::{ExtractionError, GenerationError};

// =========================================================================
// Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum NiramayError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("AI service unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Malformed AI response: {0}")]
    MalformedResponse(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type NiramayResult<T> = Result<T, NiramayError>;

impl NiramayError {
    /// HTTP status a front end should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            NiramayError::InvalidInput(_) => 400,
            NiramayError::Unauthorized(_) => 401,
            NiramayError::NotFound(_) => 404,
            NiramayError::UpstreamUnavailable(_)
            | NiramayError::MalformedResponse(_)
            | NiramayError::DatabaseError(_)
            | NiramayError::SerializationError(_) => 500,
        }
    }
}

impl From<db::DbError> for NiramayError {
    fn from(e: db::DbError) -> Self {
        match e {
            db::DbError::Json(e) => NiramayError::SerializationError(e.to_string()),
            other => NiramayError::DatabaseError(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for NiramayError {
    fn from(e: serde_json::Error) -> Self {
        NiramayError::SerializationError(e.to_string())
    }
}

impl From<GenerationError> for NiramayError {
    fn from(e: GenerationError) -> Self {
        NiramayError::UpstreamUnavailable(e.to_string())
    }
}

impl From<ExtractionError> for NiramayError {
    fn from(e: ExtractionError) -> Self {
        NiramayError::MalformedResponse(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for NiramayError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        NiramayError::DatabaseError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open or create a database at the given path.
#[uniffi::export]
pub fn open_database(path: String) -> Result<Arc<NiramayCore>, NiramayError> {
    let db = Database::open(&path)?;
    Ok(Arc::new(NiramayCore {
        db: Arc::new(Mutex::new(db)),
    }))
}

/// Create an in-memory database (for testing).
#[uniffi::export]
pub fn open_database_in_memory() -> Result<Arc<NiramayCore>, NiramayError> {
    let db = Database::open_in_memory()?;
    Ok(Arc::new(NiramayCore {
        db: Arc::new(Mutex::new(db)),
    }))
}

/// Resolve a medication name against the knowledge base.
#[uniffi::export]
pub fn resolve_medication(name: String) -> FfiMedicationInfo {
    resolve(&name).into()
}

/// Enrich a prescription analysis given as JSON; returns the enriched JSON.
#[uniffi::export]
pub fn enrich_prescription_json(json: String) -> Result<String, NiramayError> {
    let analysis = PrescriptionAnalysis::from_json(json.trim())
        .map_err(|e| NiramayError::MalformedResponse(e.to_string()))?;
    Ok(serde_json::to_string(&enrich(analysis))?)
}

/// Pull a diet plan out of an AI reply; falls back to the default plan.
#[uniffi::export]
pub fn extract_diet_plan(text: String) -> Result<String, NiramayError> {
    Ok(serde_json::to_string(&niramay_llm::extract_diet(&text))?)
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe database wrapper for FFI.
#[derive(uniffi::Object)]
pub struct NiramayCore {
    db: Arc<Mutex<Database>>,
}

#[uniffi::export]
impl NiramayCore {
    // =========================================================================
    // Doctor Operations
    // =========================================================================

    /// Import doctors from a JSON array. Returns how many were inserted.
    pub fn import_doctors_json(&self, json: String) -> Result<u32, NiramayError> {
        let db = self.db.lock()?;
        let count = db.import_doctors_json(&json)?;
        Ok(count as u32)
    }

    /// List the doctor directory; `NotFound` when it is empty.
    pub fn list_doctors(&self) -> Result<Vec<FfiDoctorListing>, NiramayError> {
        let db = self.db.lock()?;
        let listing = pipeline::list_doctor_directory(&db)?;
        Ok(listing.into_iter().map(|d| d.into()).collect())
    }

    /// Get one doctor's profile as JSON.
    pub fn get_doctor_json(&self, id: String) -> Result<String, NiramayError> {
        let db = self.db.lock()?;
        let doctor = pipeline::doctor_details(&db, &id)?;
        Ok(serde_json::to_string(&doctor)?)
    }

    // =========================================================================
    // History Operations
    // =========================================================================

    /// Stored prescription readings for a user, enriched.
    pub fn prescription_history(
        &self,
        user_id: String,
    ) -> Result<Vec<FfiStoredPrescription>, NiramayError> {
        let db = self.db.lock()?;
        let history = pipeline::prescription_history(&db, &user_id)?;
        history
            .into_iter()
            .map(|(stored, analysis)| {
                Ok(FfiStoredPrescription {
                    id: stored.id,
                    analysis_json: serde_json::to_string(&analysis)?,
                    created_at: stored.created_at,
                })
            })
            .collect()
    }

    /// Stored diet plans for a user.
    pub fn diet_history(&self, user_id: String) -> Result<Vec<FfiStoredDietPlan>, NiramayError> {
        let db = self.db.lock()?;
        let plans = pipeline::diet_history(&db, &user_id)?;
        Ok(plans.into_iter().map(|p| p.into()).collect())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe directory entry.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDoctorListing {
    pub id: String,
    pub name: String,
    pub degree: String,
    pub specialist: String,
    pub rating: f64,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub languages: Vec<String>,
    pub specializations: Vec<String>,
    pub available_days: Vec<String>,
}

impl From<DoctorListing> for FfiDoctorListing {
    fn from(listing: DoctorListing) -> Self {
        Self {
            id: listing.id,
            name: listing.name,
            degree: listing.degree,
            specialist: listing.specialist,
            rating: listing.user_rating,
            email: listing.email,
            phone: listing.phone,
            location: listing.location,
            languages: listing.languages,
            specializations: listing.specializations,
            available_days: listing.available_days,
        }
    }
}

/// FFI-safe resolver output.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMedicationInfo {
    pub key: String,
    /// "exact", "substring" or "default"
    pub method: String,
    pub common_uses: Vec<String>,
    pub simplified_explanation: String,
    pub common_side_effects: Vec<String>,
    pub common_warnings: Vec<String>,
}

impl From<Resolution> for FfiMedicationInfo {
    fn from(resolution: Resolution) -> Self {
        let method = match resolution.method {
            MatchMethod::Exact => "exact",
            MatchMethod::Substring => "substring",
            MatchMethod::Default => "default",
        };
        Self {
            key: resolution.key.to_string(),
            method: method.to_string(),
            common_uses: owned(resolution.info.common_uses),
            simplified_explanation: resolution.info.simplified_explanation.to_string(),
            common_side_effects: owned(resolution.info.common_side_effects),
            common_warnings: owned(resolution.info.common_warnings),
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// FFI-safe stored prescription, analysis already enriched.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiStoredPrescription {
    pub id: String,
    pub analysis_json: String,
    pub created_at: String,
}

/// FFI-safe stored diet plan.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiStoredDietPlan {
    pub id: String,
    pub diet_json: String,
    pub created_at: String,
}

impl From<StoredDietPlan> for FfiStoredDietPlan {
    fn from(plan: StoredDietPlan) -> Self {
        Self {
            id: plan.id,
            diet_json: plan.diet_description,
            created_at: plan.created_at,
        }
    }
}
