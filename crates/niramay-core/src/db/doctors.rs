//! Doctor database operations.

use rusqlite::types::Value;
use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbError, DbResult};
use crate::models::{Doctor, Rating};

const DOCTOR_COLUMNS: &str = r#"
    id, name, user_rating, experience, description, degree, specialist,
    email, phone, location, about, languages, education, specializations,
    awards, available_days, available_time_slots
"#;

impl Database {
    /// Insert a doctor. The id must be set.
    pub fn insert_doctor(&self, doctor: &Doctor) -> DbResult<()> {
        if doctor.id.trim().is_empty() {
            return Err(DbError::Constraint("doctor id must not be empty".into()));
        }

        self.conn.execute(
            r#"
            INSERT INTO doctors (
                id, name, user_rating, experience, description, degree, specialist,
                email, phone, location, about, languages, education, specializations,
                awards, available_days, available_time_slots
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)
            "#,
            params![
                doctor.id,
                doctor.name,
                rating_to_sql(&doctor.user_rating),
                doctor.experience,
                doctor.description,
                doctor.degree,
                doctor.specialist,
                doctor.email,
                doctor.phone,
                doctor.location,
                doctor.about,
                serde_json::to_string(&doctor.languages)?,
                serde_json::to_string(&doctor.education)?,
                serde_json::to_string(&doctor.specializations)?,
                serde_json::to_string(&doctor.awards)?,
                serde_json::to_string(&doctor.available_days)?,
                serde_json::to_string(&doctor.available_time_slots)?,
            ],
        )?;
        Ok(())
    }

    /// Insert many doctors in one transaction, assigning ids where blank.
    ///
    /// Returns the number of doctors inserted.
    pub fn import_doctors(&self, doctors: &[Doctor]) -> DbResult<usize> {
        let tx = self.conn.unchecked_transaction()?;
        for doctor in doctors {
            if doctor.id.trim().is_empty() {
                let mut with_id = doctor.clone();
                with_id.id = uuid::Uuid::new_v4().to_string();
                self.insert_doctor(&with_id)?;
            } else {
                self.insert_doctor(doctor)?;
            }
        }
        tx.commit()?;
        Ok(doctors.len())
    }

    /// Import doctors from a JSON array (seed data).
    pub fn import_doctors_json(&self, json: &str) -> DbResult<usize> {
        let doctors: Vec<Doctor> = serde_json::from_str(json)?;
        self.import_doctors(&doctors)
    }

    /// Get all doctors, in insertion order.
    pub fn list_doctors(&self) -> DbResult<Vec<Doctor>> {
        let sql = format!("SELECT {} FROM doctors ORDER BY rowid", DOCTOR_COLUMNS);
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], DoctorRow::from_row)?;

        let mut doctors = Vec::new();
        for row in rows {
            doctors.push(row?.try_into()?);
        }
        Ok(doctors)
    }

    /// Get a doctor by id.
    pub fn get_doctor(&self, id: &str) -> DbResult<Option<Doctor>> {
        let sql = format!("SELECT {} FROM doctors WHERE id = ?", DOCTOR_COLUMNS);
        let row = self
            .conn
            .query_row(&sql, [id], DoctorRow::from_row)
            .optional()?;

        row.map(|r| r.try_into()).transpose()
    }

    /// Find the first doctor whose name is exactly `name` (case-sensitive).
    pub fn find_doctor_by_name(&self, name: &str) -> DbResult<Option<Doctor>> {
        let sql = format!(
            "SELECT {} FROM doctors WHERE name = ? ORDER BY rowid LIMIT 1",
            DOCTOR_COLUMNS
        );
        let row = self
            .conn
            .query_row(&sql, [name], DoctorRow::from_row)
            .optional()?;

        row.map(|r| r.try_into()).transpose()
    }

    /// Number of doctors.
    pub fn count_doctors(&self) -> DbResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM doctors", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn rating_to_sql(rating: &Rating) -> Value {
    match rating {
        Rating::Number(n) => Value::Real(*n),
        Rating::Text(s) => Value::Text(s.clone()),
    }
}

fn rating_from_sql(value: Value) -> Rating {
    match value {
        Value::Real(n) => Rating::Number(n),
        Value::Integer(n) => Rating::Number(n as f64),
        Value::Text(s) => Rating::Text(s),
        Value::Blob(b) => Rating::Text(String::from_utf8_lossy(&b).into_owned()),
        Value::Null => Rating::default(),
    }
}

/// Intermediate row struct for database mapping.
struct DoctorRow {
    id: String,
    name: String,
    user_rating: Value,
    experience: String,
    description: String,
    degree: String,
    specialist: String,
    email: String,
    phone: String,
    location: String,
    about: String,
    languages: String,
    education: String,
    specializations: String,
    awards: String,
    available_days: String,
    available_time_slots: String,
}

impl DoctorRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            user_rating: row.get(2)?,
            experience: row.get(3)?,
            description: row.get(4)?,
            degree: row.get(5)?,
            specialist: row.get(6)?,
            email: row.get(7)?,
            phone: row.get(8)?,
            location: row.get(9)?,
            about: row.get(10)?,
            languages: row.get(11)?,
            education: row.get(12)?,
            specializations: row.get(13)?,
            awards: row.get(14)?,
            available_days: row.get(15)?,
            available_time_slots: row.get(16)?,
        })
    }
}

impl TryFrom<DoctorRow> for Doctor {
    type Error = DbError;

    fn try_from(row: DoctorRow) -> Result<Self, Self::Error> {
        Ok(Doctor {
            id: row.id,
            name: row.name,
            user_rating: rating_from_sql(row.user_rating),
            experience: row.experience,
            description: row.description,
            degree: row.degree,
            specialist: row.specialist,
            email: row.email,
            phone: row.phone,
            location: row.location,
            about: row.about,
            languages: serde_json::from_str(&row.languages)?,
            education: serde_json::from_str(&row.education)?,
            specializations: serde_json::from_str(&row.specializations)?,
            awards: serde_json::from_str(&row.awards)?,
            available_days: serde_json::from_str(&row.available_days)?,
            available_time_slots: serde_json::from_str(&row.available_time_slots)?,
        })
    }
}
