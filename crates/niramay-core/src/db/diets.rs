//! Diet plan persistence.

use rusqlite::{params, Row};

use super::{Database, DbResult};
use crate::models::StoredDietPlan;

impl Database {
    /// Persist a generated diet plan.
    pub fn insert_diet_plan(&self, plan: &StoredDietPlan) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO diet_plans (id, diet_description, generated_by, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![plan.id, plan.diet_description, plan.generated_by, plan.created_at],
        )?;
        Ok(())
    }

    /// All diet plans generated by `user_id`, oldest first.
    pub fn list_diet_plans(&self, user_id: &str) -> DbResult<Vec<StoredDietPlan>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, diet_description, generated_by, created_at
            FROM diet_plans
            WHERE generated_by = ?
            ORDER BY rowid
            "#,
        )?;

        let plans = stmt
            .query_map([user_id], diet_plan_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(plans)
    }
}

fn diet_plan_from_row(row: &Row<'_>) -> rusqlite::Result<StoredDietPlan> {
    Ok(StoredDietPlan {
        id: row.get(0)?,
        diet_description: row.get(1)?,
        generated_by: row.get(2)?,
        created_at: row.get(3)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DietPlan;

    #[test]
    fn test_insert_and_list() {
        let db = Database::open_in_memory().unwrap();
        let stored = StoredDietPlan::new("user-a".into(), &DietPlan::fallback()).unwrap();
        db.insert_diet_plan(&stored).unwrap();

        let plans = db.list_diet_plans("user-a").unwrap();
        assert_eq!(plans, vec![stored]);
        assert_eq!(plans[0].plan().unwrap(), DietPlan::fallback());
        assert!(db.list_diet_plans("user-b").unwrap().is_empty());
    }
}
