//! Doctor directory models.

use std::fmt;

use serde::{Deserialize, Serialize};

use niramay_llm::DoctorSummary;

/// A stored rating. Seed data carries both numbers and numeric strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Rating {
    Number(f64),
    Text(String),
}

impl Default for Rating {
    fn default() -> Self {
        Rating::Number(0.0)
    }
}

impl Rating {
    /// Numeric value of the rating; anything unparseable counts as 0.0.
    pub fn value(&self) -> f64 {
        let value = match self {
            Rating::Number(n) => *n,
            Rating::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        };
        if value.is_finite() {
            value
        } else {
            0.0
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Number(n) => write!(f, "{}", n),
            Rating::Text(s) => f.write_str(s),
        }
    }
}

/// A doctor in the directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    /// Unique identifier (assigned on insert when blank)
    #[serde(default, alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, rename = "user_rating")]
    pub user_rating: Rating,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub specialist: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub specializations: Vec<String>,
    #[serde(default)]
    pub awards: Vec<String>,
    #[serde(default)]
    pub available_days: Vec<String>,
    #[serde(default)]
    pub available_time_slots: Vec<String>,
}

impl Doctor {
    /// Create a new doctor with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            ..Self::default()
        }
    }
}

impl From<&Doctor> for DoctorSummary {
    fn from(doctor: &Doctor) -> Self {
        DoctorSummary {
            name: doctor.name.clone(),
            experience: doctor.experience.clone(),
            specialist: doctor.specialist.clone(),
            description: doctor.description.clone(),
            degree: doctor.degree.clone(),
            languages: doctor.languages.clone(),
            specializations: doctor.specializations.clone(),
            rating: doctor.user_rating.to_string(),
        }
    }
}

/// Directory listing entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DoctorListing {
    pub id: String,
    pub name: String,
    pub degree: String,
    pub specialist: String,
    #[serde(rename = "user_rating")]
    pub user_rating: f64,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub languages: Vec<String>,
    pub specializations: Vec<String>,
    pub available_days: Vec<String>,
}

impl From<Doctor> for DoctorListing {
    fn from(doctor: Doctor) -> Self {
        Self {
            user_rating: doctor.user_rating.value(),
            id: doctor.id,
            name: doctor.name,
            degree: doctor.degree,
            specialist: doctor.specialist,
            email: doctor.email,
            phone: doctor.phone,
            location: doctor.location,
            languages: doctor.languages,
            specializations: doctor.specializations,
            available_days: doctor.available_days,
        }
    }
}

/// One doctor's profile as shown on the detail page, rating coerced to a number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DoctorDetails {
    pub id: String,
    pub name: String,
    pub experience: String,
    pub description: String,
    pub specialist: String,
    pub degree: String,
    #[serde(rename = "user_rating")]
    pub user_rating: f64,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub languages: Vec<String>,
    pub specializations: Vec<String>,
    pub available_days: Vec<String>,
    pub available_time_slots: Vec<String>,
}

impl From<Doctor> for DoctorDetails {
    fn from(doctor: Doctor) -> Self {
        Self {
            user_rating: doctor.user_rating.value(),
            id: doctor.id,
            name: doctor.name,
            experience: doctor.experience,
            description: doctor.description,
            specialist: doctor.specialist,
            degree: doctor.degree,
            email: doctor.email,
            phone: doctor.phone,
            location: doctor.location,
            languages: doctor.languages,
            specializations: doctor.specializations,
            available_days: doctor.available_days,
            available_time_slots: doctor.available_time_slots,
        }
    }
}

/// The doctor recommended for a health description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DoctorMatch {
    pub id: String,
    pub name: String,
    pub experience: String,
    pub description: String,
    pub specialist: String,
    pub degree: String,
    pub rating: f64,
    /// Why the AI service picked this doctor
    pub reasoning: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub languages: Vec<String>,
    pub available_days: Vec<String>,
    pub available_time_slots: Vec<String>,
}

impl DoctorMatch {
    pub fn new(doctor: Doctor, reasoning: String) -> Self {
        Self {
            rating: doctor.user_rating.value(),
            id: doctor.id,
            name: doctor.name,
            experience: doctor.experience,
            description: doctor.description,
            specialist: doctor.specialist,
            degree: doctor.degree,
            reasoning,
            email: doctor.email,
            phone: doctor.phone,
            location: doctor.location,
            languages: doctor.languages,
            available_days: doctor.available_days,
            available_time_slots: doctor.available_time_slots,
        }
    }
}
