//! Diet plan persistence model.

use serde::{Deserialize, Serialize};

pub use niramay_llm::{DietPlan, Macros, MealPlan};

/// A generated diet plan as persisted: serialized JSON keyed by user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredDietPlan {
    pub id: String,
    pub diet_description: String,
    pub generated_by: String,
    pub created_at: String,
}

impl StoredDietPlan {
    pub fn new(generated_by: String, plan: &DietPlan) -> serde_json::Result<Self> {
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            diet_description: serde_json::to_string(plan)?,
            generated_by,
            created_at: chrono::Utc::now().to_rfc3339(),
        })
    }

    pub fn plan(&self) -> serde_json::Result<DietPlan> {
        serde_json::from_str(&self.diet_description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_plan_round_trip() {
        let stored = StoredDietPlan::new("user-1".into(), &DietPlan::fallback()).unwrap();
        assert!(stored.diet_description.contains("\"calorieNeeds\""));
        assert_eq!(stored.plan().unwrap(), DietPlan::fallback());
    }
}
