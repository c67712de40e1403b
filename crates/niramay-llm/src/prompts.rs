//! Prompts for the three AI calls: doctor matching, prescription reading and
//! diet planning.

/// Marker that opens the doctor recommendation in the AI reply.
pub const RECOMMENDED_DOCTOR_MARKER: &str = "Recommended Doctor:";

/// Marker that opens the reasoning in the AI reply.
pub const REASONING_MARKER: &str = "Reasoning:";

/// Sampling temperature for prescription reading.
pub const PRESCRIPTION_TEMPERATURE: f32 = 0.4;

/// Output token cap for prescription reading.
pub const PRESCRIPTION_MAX_OUTPUT_TOKENS: u32 = 2048;

/// The parts of a doctor record the matching prompt shows to the model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoctorSummary {
    pub name: String,
    pub experience: String,
    pub specialist: String,
    pub description: String,
    pub degree: String,
    pub languages: Vec<String>,
    pub specializations: Vec<String>,
    /// Rating exactly as stored, numeric or not
    pub rating: String,
}

/// Render the candidate list, one numbered block per doctor.
pub fn format_doctor_list(doctors: &[DoctorSummary]) -> String {
    doctors
        .iter()
        .enumerate()
        .map(|(i, doctor)| {
            format!(
                "Doctor {}:\nName: {}\nExperience: {}\nSpecialist: {}\nDescription: {}\nDegree: {}\nLanguages: {}\nSpecializations: {}\nRating: {}\n",
                i + 1,
                doctor.name,
                doctor.experience,
                doctor.specialist,
                doctor.description,
                doctor.degree,
                doctor.languages.join(", "),
                doctor.specializations.join(", "),
                doctor.rating,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the doctor-matching prompt for a health description.
pub fn make_doctor_match_prompt(health_description: &str, doctors: &[DoctorSummary]) -> String {
    format!(
        r#"
    Task: As a medical consultant, analyze the health condition description and recommend the most suitable doctor from the available options.

    Health Condition Description:
    {description}

    Available Doctors:
    {doctors}

    Please provide:
    1. The name of the most suitable doctor
    2. A brief but specific explanation (2-3 sentences) of why this doctor is the best match for this health condition
    3. Start your response with "{doctor_marker}" followed by the name, then "{reasoning_marker}" followed by your explanation
    Base your recommendation on:
    - Relevant specialization for the specific health condition
    - Years of experience
    - Educational background and degrees
    - Track record and rating
    - Match between doctor's specialization and patient's needs
    - Availability and location
    - Language proficiency
    - Any additional relevant factors
  "#,
        description = health_description,
        doctors = format_doctor_list(doctors),
        doctor_marker = RECOMMENDED_DOCTOR_MARKER,
        reasoning_marker = REASONING_MARKER,
    )
}

/// Instructions sent alongside a prescription image.
pub const PRESCRIPTION_PROMPT: &str = r#"
    Analyze this prescription image and extract the following information in JSON format:

    1. Medications (for each medication):
       - Name
       - Medicine Chemical Composition
       - Dosage
       - Frequency
       - Duration
       - Purpose
       - Common side effects (list at least 2-3)
       - Important warnings (list at least 2)

    2. Doctor information:
       - Name
       - Specialty
       - License number

    3. Patient information:
       - Name
       - ID
       - Date

    Return ONLY valid JSON with this structure:
    {
      "medications": [
        {
          "name": "string",
          "dosage": "string",
          "frequency": "string",
          "duration": "string",
          "purpose": "string",
          "sideEffects": ["string", "string"],
          "composition": "string",
          "warnings": ["string", "string"]
        }
      ],
      "doctor": {
        "name": "string",
        "specialty": "string",
        "license": "string"
      },
      "patient": {
        "name": "string",
        "id": "string",
        "date": "string"
      }
    }

    Important: Avoid using complex medical terminology. Use plain language that a patient would understand.
    If you can't read certain information clearly, make a reasonable assumption and indicate it's an estimate.
    If the purpose of a medication is unspecified, provide the most common use for that medication.
    Always provide at least 2-3 warnings for each medication, even if they're not explicitly stated in the prescription.
    Make sure to explain dosage terms like sos, bd, tds, Q6H etc.
    In case of composition, analyze the medicine and tell the composition. Do not leave it empty. Use your knowledge base to tell the chemical composition, and explain in simple words what this composition is used for.
  "#;

/// Suffix that pins the diet reply to the `DietPlan` JSON shape.
pub const DIET_FORMAT_SUFFIX: &str = concat!(
    " Format your response as valid JSON with the following structure: ",
    r#"{ "calorieNeeds": number, "macros": { "protein": number, "carbs": number, "fats": number }, "#,
    r#""mealPlan": { "breakfast": string, "lunch": string, "dinner": string, "snacks": string }, "#,
    r#""recommendations": [string, string, string] }"#,
);

/// Build the diet-planning prompt from the user's own request text.
pub fn make_diet_prompt(user_prompt: &str) -> String {
    format!("{}{}", user_prompt, DIET_FORMAT_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_doctors() -> Vec<DoctorSummary> {
        vec![
            DoctorSummary {
                name: "Dr. Jane Doe".into(),
                experience: "12 years".into(),
                specialist: "Dermatologist".into(),
                description: "Skin and hair".into(),
                degree: "MBBS, MD".into(),
                languages: vec!["English".into(), "Hindi".into()],
                specializations: vec!["Acne".into(), "Eczema".into()],
                rating: "4.8".into(),
            },
            DoctorSummary {
                name: "Dr. Arun Sen".into(),
                experience: "20 years".into(),
                specialist: "Cardiologist".into(),
                description: "Heart care".into(),
                degree: "MBBS, DM".into(),
                languages: vec!["Bengali".into()],
                specializations: vec![],
                rating: "4.2".into(),
            },
        ]
    }

    #[test]
    fn test_format_doctor_list() {
        let text = format_doctor_list(&sample_doctors());

        assert!(text.starts_with("Doctor 1:\nName: Dr. Jane Doe\n"));
        assert!(text.contains("Languages: English, Hindi\n"));
        assert!(text.contains("Specializations: Acne, Eczema\n"));
        assert!(text.contains("\n\nDoctor 2:\nName: Dr. Arun Sen\n"));
        assert!(text.contains("Specializations: \nRating: 4.2\n"));
    }

    #[test]
    fn test_doctor_match_prompt() {
        let prompt = make_doctor_match_prompt("Itchy red rash on both arms for a week", &sample_doctors());

        assert!(prompt.contains("Itchy red rash on both arms for a week"));
        assert!(prompt.contains("Doctor 2:"));
        assert!(prompt.contains("\"Recommended Doctor:\" followed by the name"));
        assert!(prompt.contains("\"Reasoning:\" followed by your explanation"));
    }

    #[test]
    fn test_diet_prompt() {
        let prompt = make_diet_prompt("Vegetarian, 30 years old, wants to lose weight.");
        assert!(prompt.starts_with("Vegetarian, 30 years old, wants to lose weight. Format your response"));
        assert!(prompt.contains("\"calorieNeeds\": number"));
        assert!(prompt.ends_with("\"recommendations\": [string, string, string] }"));
    }

    #[test]
    fn test_prescription_prompt_shape() {
        assert!(PRESCRIPTION_PROMPT.contains("\"sideEffects\""));
        assert!(PRESCRIPTION_PROMPT.contains("\"license\""));
        assert!(PRESCRIPTION_PROMPT.contains("Return ONLY valid JSON"));
    }
}
