//! Profile model — a user's current/target role and background.
//!
//! Constructed once from the onboarding payload, validated, then consumed by
//! the prompt builder and persisted. Immutable after that.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub current_role_title: String,
    pub years_experience: u32,
    pub target_role_title: String,
    pub location: String,
    pub background: Background,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Background {
    /// Skill list. Form clients may submit either a JSON array or the raw
    /// comma-separated field value; both normalize to trimmed, non-empty
    /// entries in input order.
    #[serde(deserialize_with = "deserialize_skills")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub additional_info: Option<String>,
}

impl Profile {
    /// Checks the required non-empty fields. Field-shape validation (types,
    /// presence) already happened at deserialization.
    pub fn validate(&self) -> Result<(), String> {
        for (field, value) in [
            ("current_role_title", &self.current_role_title),
            ("target_role_title", &self.target_role_title),
            ("location", &self.location),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{field} is required"));
            }
        }
        if i32::try_from(self.years_experience).is_err() {
            return Err("years_experience is out of range".to_string());
        }
        Ok(())
    }
}

/// Splits a comma-separated skill string, trimming entries and dropping
/// empties.
pub fn parse_skill_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

fn deserialize_skills<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum SkillsInput {
        List(Vec<String>),
        Csv(String),
    }

    Ok(match SkillsInput::deserialize(deserializer)? {
        SkillsInput::List(list) => list
            .into_iter()
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect(),
        SkillsInput::Csv(raw) => parse_skill_list(&raw),
    })
}
