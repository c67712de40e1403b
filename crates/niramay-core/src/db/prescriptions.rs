//! Prescription reading persistence.

use rusqlite::{params, Row};

use super::{Database, DbResult};
use crate::models::StoredPrescription;

impl Database {
    /// Persist a prescription reading.
    pub fn insert_prescription(&self, prescription: &StoredPrescription) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO prescriptions (id, prescription_description, generated_by, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                prescription.id,
                prescription.prescription_description,
                prescription.generated_by,
                prescription.created_at,
            ],
        )?;
        Ok(())
    }

    /// All readings generated by `user_id`, oldest first.
    pub fn list_prescriptions(&self, user_id: &str) -> DbResult<Vec<StoredPrescription>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, prescription_description, generated_by, created_at
            FROM prescriptions
            WHERE generated_by = ?
            ORDER BY rowid
            "#,
        )?;

        let prescriptions = stmt
            .query_map([user_id], prescription_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(prescriptions)
    }
}

fn prescription_from_row(row: &Row<'_>) -> rusqlite::Result<StoredPrescription> {
    Ok(StoredPrescription {
        id: row.get(0)?,
        prescription_description: row.get(1)?,
        generated_by: row.get(2)?,
        created_at: row.get(3)?,
    })
}
