//! End-to-end pipeline tests against an on-disk store and a scripted AI service.

use niramay_core::pipeline::{list_doctor_directory, prescription_history};
use niramay_core::{Database, DietCoach, DietPlan, DoctorMatcher, NiramayError, PrescriptionAnalyzer};
use niramay_llm::{InlineImage, MockGenerator};

const SEED: &str = r#"[
  {
    "_id": "65f1c0a1",
    "name": "Dr. Priya Sharma",
    "user_rating": "4.7",
    "experience": "12 years",
    "description": "Treats skin, hair and nail conditions",
    "degree": "MBBS, MD (Dermatology)",
    "specialist": "Dermatologist",
    "email": "priya@example.com",
    "phone": "+91 98765 43210",
    "location": "Pune",
    "languages": ["English", "Hindi", "Marathi"],
    "specializations": ["Eczema", "Psoriasis"],
    "availableDays": ["Monday", "Wednesday"],
    "availableTimeSlots": ["10:00 AM - 1:00 PM"]
  },
  {
    "_id": "65f1c0a2",
    "name": "Dr. Vikram Rao",
    "user_rating": 4.2,
    "specialist": "Cardiologist",
    "languages": ["English"]
  },
  {
    "name": "Dr. Unrated",
    "user_rating": "n/a",
    "specialist": "General Physician"
  }
]"#;

fn open_seeded(dir: &tempfile::TempDir) -> Database {
    let db = Database::open(dir.path().join("niramay.db")).unwrap();
    assert_eq!(db.import_doctors_json(SEED).unwrap(), 3);
    db
}

#[test]
fn test_directory_coerces_ratings() {
    let dir = tempfile::tempdir().unwrap();
    let db = open_seeded(&dir);

    let listing = list_doctor_directory(&db).unwrap();
    let ratings: Vec<f64> = listing.iter().map(|d| d.user_rating).collect();
    assert_eq!(ratings, vec![4.7, 4.2, 0.0]);
}

#[test]
fn test_doctor_match_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let db = open_seeded(&dir);
    let generator = MockGenerator::new().reply(
        "Based on the symptoms described:\n\n\
         Recommended Doctor: Dr. Priya Sharma\n\
         Reasoning: Persistent itchy patches suggest eczema, which she specializes in.",
    );

    let matched = DoctorMatcher::new(&db, &generator)
        .match_doctor("Itchy red patches on both elbows for a month")
        .unwrap();

    assert_eq!(matched.id, "65f1c0a1");
    assert_eq!(matched.rating, 4.7);
    assert_eq!(matched.available_days, vec!["Monday", "Wednesday"]);
    assert!(matched.reasoning.starts_with("Persistent itchy patches"));

    let json = serde_json::to_value(&matched).unwrap();
    assert_eq!(json["availableTimeSlots"][0], "10:00 AM - 1:00 PM");
    assert_eq!(json["rating"], 4.7);
}

#[test]
fn test_doctor_match_status_codes() {
    let dir = tempfile::tempdir().unwrap();
    let db = open_seeded(&dir);
    let generator = MockGenerator::new().reply("Recommended Doctor: Dr. Nobody\nReasoning: n/a");
    let matcher = DoctorMatcher::new(&db, &generator);

    assert_eq!(matcher.match_doctor("too short").unwrap_err().status_code(), 400);
    assert_eq!(
        matcher
            .match_doctor("Chest pain when climbing stairs")
            .unwrap_err()
            .status_code(),
        404
    );
}

#[test]
fn test_prescription_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let db = open_seeded(&dir);
        let generator = MockGenerator::new().reply(
            "```\n{\"medications\": [{\"name\": \"Metformin 500\", \"purpose\": \"Not specified\", \
             \"sideEffects\": [\"Nausea\"]}], \"doctor\": {\"name\": \"Dr. Vikram Rao\"}}\n```",
        );
        PrescriptionAnalyzer::new(&db, &generator)
            .analyze("user-42", InlineImage::new("image/png", "iVBORw0KGgo="))
            .unwrap();
    }

    let db = Database::open(dir.path().join("niramay.db")).unwrap();
    let history = prescription_history(&db, "user-42").unwrap();
    assert_eq!(history.len(), 1);

    let med = &history[0].1.medications[0];
    assert_eq!(med.purpose, "Type 2 diabetes");
    assert_eq!(med.side_effects.len(), 3);
    assert!(med.warnings.len() >= 2);
}

#[test]
fn test_diet_fallback_is_served_but_not_stored() {
    let dir = tempfile::tempdir().unwrap();
    let db = open_seeded(&dir);
    let generator = MockGenerator::new().reply("}{ not a plan");
    let coach = DietCoach::new(&db, &generator);

    assert_eq!(coach.generate_plan("user-42", "high protein").unwrap(), DietPlan::fallback());
    assert!(coach.history("user-42").unwrap().is_empty());
}

#[test]
fn test_anonymous_user_is_unauthorized() {
    let dir = tempfile::tempdir().unwrap();
    let db = open_seeded(&dir);
    let generator = MockGenerator::new();

    let err = DietCoach::new(&db, &generator)
        .generate_plan(" ", "high protein")
        .unwrap_err();
    assert!(matches!(err, NiramayError::Unauthorized(_)));
}
