//! SQLite schema definition.

/// Complete database schema for Niramay.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Doctors
-- ============================================================================

CREATE TABLE IF NOT EXISTS doctors (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    user_rating,                                   -- no affinity: REAL or TEXT as imported
    experience TEXT NOT NULL DEFAULT '',
    description TEXT NOT NULL DEFAULT '',
    degree TEXT NOT NULL DEFAULT '',
    specialist TEXT NOT NULL DEFAULT '',
    email TEXT NOT NULL DEFAULT '',
    phone TEXT NOT NULL DEFAULT '',
    location TEXT NOT NULL DEFAULT '',
    about TEXT NOT NULL DEFAULT '',
    languages TEXT NOT NULL DEFAULT '[]',            -- JSON array of strings
    education TEXT NOT NULL DEFAULT '[]',            -- JSON array of strings
    specializations TEXT NOT NULL DEFAULT '[]',      -- JSON array of strings
    awards TEXT NOT NULL DEFAULT '[]',               -- JSON array of strings
    available_days TEXT NOT NULL DEFAULT '[]',       -- JSON array of strings
    available_time_slots TEXT NOT NULL DEFAULT '[]', -- JSON array of strings
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Recommendation lookup is an exact match on name
CREATE INDEX IF NOT EXISTS idx_doctors_name ON doctors(name);

-- ============================================================================
-- Prescriptions (raw AI JSON, validated before insert)
-- ============================================================================

CREATE TABLE IF NOT EXISTS prescriptions (
    id TEXT PRIMARY KEY,
    prescription_description TEXT NOT NULL,
    generated_by TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_prescriptions_generated_by ON prescriptions(generated_by, created_at);

-- ============================================================================
-- Diet plans (serialized DietPlan)
-- ============================================================================

CREATE TABLE IF NOT EXISTS diet_plans (
    id TEXT PRIMARY KEY,
    diet_description TEXT NOT NULL,
    generated_by TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_diet_plans_generated_by ON diet_plans(generated_by, created_at);
"#;
