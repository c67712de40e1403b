//! Diet plan generation.

use niramay_llm::{make_diet_prompt, parse_diet_plan, DietPlan, GenerationRequest, TextGenerator};

use super::{non_blank_reply, require_user};
use crate::db::Database;
use crate::models::StoredDietPlan;
use crate::{NiramayError, NiramayResult};

/// Turns a free-text request into a structured diet plan.
pub struct DietCoach<'a, G: TextGenerator + ?Sized> {
    db: &'a Database,
    generator: &'a G,
}

impl<'a, G: TextGenerator + ?Sized> DietCoach<'a, G> {
    pub fn new(db: &'a Database, generator: &'a G) -> Self {
        Self { db, generator }
    }

    /// Generate a plan for `user_id`.
    ///
    /// A reply without a usable plan yields [`DietPlan::fallback`], which is
    /// returned but not stored.
    pub fn generate_plan(&self, user_id: &str, prompt: &str) -> NiramayResult<DietPlan> {
        let user_id = require_user(user_id)?;
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(NiramayError::InvalidInput("Prompt is required".into()));
        }

        let request = GenerationRequest::text(make_diet_prompt(prompt));
        tracing::info!(prompt_chars = request.prompt.len(), "Requesting diet plan");
        let reply = non_blank_reply(self.generator.generate(&request)?)?;

        match parse_diet_plan(&reply) {
            Ok(plan) => {
                let stored = StoredDietPlan::new(user_id.to_string(), &plan)?;
                self.db.insert_diet_plan(&stored)?;
                tracing::info!(diet_plan_id = %stored.id, "Diet plan stored");
                Ok(plan)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Diet reply unusable, returning default plan");
                Ok(DietPlan::fallback())
            }
        }
    }

    /// Stored plans for `user_id`.
    pub fn history(&self, user_id: &str) -> NiramayResult<Vec<StoredDietPlan>> {
        diet_history(self.db, user_id)
    }
}

/// Stored plans for `user_id`, oldest first.
pub fn diet_history(db: &Database, user_id: &str) -> NiramayResult<Vec<StoredDietPlan>> {
    let user_id = require_user(user_id)?;
    Ok(db.list_diet_plans(user_id)?)
}
