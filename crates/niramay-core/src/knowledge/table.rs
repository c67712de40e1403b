//! Medication knowledge table.
//!
//! Order matters: substring resolution takes the first matching entry.

use super::{KnowledgeEntry, MedicationInfo};

pub(super) static MEDICATIONS: &[KnowledgeEntry] = &[
    // Antibiotics
    KnowledgeEntry {
        key: "amoxicillin",
        info: MedicationInfo {
            common_uses: &[
                "Bacterial infections",
                "Respiratory infections",
                "Ear infections",
                "Urinary tract infections",
            ],
            simplified_explanation: "An antibiotic that fights bacteria in your body by preventing them from building cell walls, which they need to survive.",
            common_side_effects: &["Nausea", "Vomiting", "Diarrhea", "Rash", "Stomach pain"],
            common_warnings: &[
                "Take the full course even if you feel better",
                "May cause allergic reactions",
                "Take with food to reduce stomach upset",
                "Tell your doctor if you have any allergies to penicillin",
            ],
        },
    },
    KnowledgeEntry {
        key: "ciprofloxacin",
        info: MedicationInfo {
            common_uses: &[
                "Urinary tract infections",
                "Skin infections",
                "Respiratory infections",
                "Bone and joint infections",
            ],
            simplified_explanation: "An antibiotic that stops bacteria from multiplying by preventing them from copying their DNA.",
            common_side_effects: &["Nausea", "Diarrhea", "Headache", "Dizziness", "Tendon pain"],
            common_warnings: &[
                "Avoid sunlight exposure",
                "Take with plenty of water",
                "Don't take with dairy products",
                "May cause tendon damage",
                "Not recommended for children",
            ],
        },
    },
    KnowledgeEntry {
        key: "azithromycin",
        info: MedicationInfo {
            common_uses: &[
                "Respiratory infections",
                "Skin infections",
                "Ear infections",
                "Sexually transmitted infections",
            ],
            simplified_explanation: "An antibiotic that stops bacteria from growing by interfering with their protein production.",
            common_side_effects: &["Diarrhea", "Stomach pain", "Nausea", "Headache"],
            common_warnings: &[
                "May cause heart rhythm problems",
                "Take on an empty stomach",
                "Don't take with antacids",
                "Finish the full course even if you feel better",
            ],
        },
    },
    // Pain relievers
    KnowledgeEntry {
        key: "ibuprofen",
        info: MedicationInfo {
            common_uses: &[
                "Pain relief",
                "Inflammation",
                "Fever reduction",
                "Menstrual cramps",
            ],
            simplified_explanation: "A pain reliever that works by reducing hormones that cause inflammation and pain in your body.",
            common_side_effects: &["Stomach upset", "Heartburn", "Dizziness", "Mild headache"],
            common_warnings: &[
                "Don't take on an empty stomach",
                "Avoid alcohol",
                "May increase risk of heart attack or stroke",
                "Not recommended for long-term use without doctor supervision",
            ],
        },
    },
    KnowledgeEntry {
        key: "acetaminophen",
        info: MedicationInfo {
            common_uses: &["Pain relief", "Fever reduction", "Headaches", "Muscle aches"],
            simplified_explanation: "A pain reliever that works by blocking pain signals in your brain.",
            common_side_effects: &["Rare when taken as directed", "Nausea", "Rash"],
            common_warnings: &[
                "Don't exceed recommended dose",
                "Liver damage can occur with excessive use",
                "Avoid alcohol",
                "May be in other medications, so check combinations carefully",
            ],
        },
    },
    KnowledgeEntry {
        key: "naproxen",
        info: MedicationInfo {
            common_uses: &["Pain relief", "Inflammation", "Arthritis", "Menstrual cramps"],
            simplified_explanation: "A pain reliever that reduces substances in the body that cause inflammation and pain.",
            common_side_effects: &["Stomach upset", "Heartburn", "Drowsiness", "Dizziness"],
            common_warnings: &[
                "Take with food",
                "Avoid alcohol",
                "May increase risk of heart attack or stroke",
                "May cause stomach bleeding",
            ],
        },
    },
    // Blood pressure
    KnowledgeEntry {
        key: "lisinopril",
        info: MedicationInfo {
            common_uses: &[
                "High blood pressure",
                "Heart failure",
                "Kidney protection",
                "After heart attack",
            ],
            simplified_explanation: "A medication that relaxes blood vessels, making it easier for your heart to pump blood through your body.",
            common_side_effects: &["Dry cough", "Dizziness", "Headache", "Fatigue"],
            common_warnings: &[
                "May cause dizziness when standing up",
                "Can harm an unborn baby",
                "Don't use salt substitutes",
                "Monitor your blood pressure regularly",
            ],
        },
    },
    KnowledgeEntry {
        key: "amlodipine",
        info: MedicationInfo {
            common_uses: &[
                "High blood pressure",
                "Chest pain (angina)",
                "Coronary artery disease",
            ],
            simplified_explanation: "A medication that relaxes blood vessels so blood can flow more easily, reducing the work your heart has to do.",
            common_side_effects: &["Swelling in ankles or feet", "Flushing", "Headache", "Dizziness"],
            common_warnings: &[
                "May cause dizziness",
                "Don't stop taking suddenly",
                "Avoid grapefruit juice",
                "Tell doctor if swelling becomes severe",
            ],
        },
    },
    // Diabetes
    KnowledgeEntry {
        key: "metformin",
        info: MedicationInfo {
            common_uses: &[
                "Type 2 diabetes",
                "Prediabetes",
                "Polycystic ovary syndrome (PCOS)",
            ],
            simplified_explanation: "A medication that helps control blood sugar by improving how your body responds to insulin and reducing sugar produced by your liver.",
            common_side_effects: &["Stomach upset", "Diarrhea", "Nausea", "Metallic taste"],
            common_warnings: &[
                "Take with meals",
                "Start with low dose to minimize side effects",
                "Don't drink excessive alcohol",
                "May need to be temporarily stopped before certain medical procedures",
            ],
        },
    },
    // Allergy
    KnowledgeEntry {
        key: "loratadine",
        info: MedicationInfo {
            common_uses: &["Allergies", "Hay fever", "Hives", "Runny nose"],
            simplified_explanation: "An antihistamine that reduces the effects of histamine, a natural substance that causes allergy symptoms.",
            common_side_effects: &["Headache", "Drowsiness (rare)", "Dry mouth", "Fatigue"],
            common_warnings: &[
                "Less drowsiness than other antihistamines",
                "May still affect alertness",
                "Avoid alcohol",
                "Tell doctor about any other medications you're taking",
            ],
        },
    },
    KnowledgeEntry {
        key: "cetirizine",
        info: MedicationInfo {
            common_uses: &["Allergies", "Hay fever", "Hives", "Itchy skin"],
            simplified_explanation: "An antihistamine that blocks the effects of histamine, which causes allergy symptoms.",
            common_side_effects: &["Drowsiness", "Dry mouth", "Fatigue", "Headache"],
            common_warnings: &[
                "May cause drowsiness",
                "Avoid alcohol",
                "Don't drive until you know how it affects you",
                "Tell doctor about other medications",
            ],
        },
    },
];

pub(super) static DEFAULT_MEDICATION: MedicationInfo = MedicationInfo {
    common_uses: &["Treatment of medical conditions as prescribed by your doctor"],
    simplified_explanation: "This medication is prescribed for specific health conditions. Always follow your doctor's instructions.",
    common_side_effects: &[
        "Side effects vary - consult medication information leaflet",
        "Report any unusual symptoms to your doctor",
    ],
    common_warnings: &[
        "Take as directed by your doctor",
        "Don't stop taking without consulting your doctor",
        "Keep out of reach of children",
        "Check for interactions with other medications you take",
    ],
};
