use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use crate::matching::types::{Candidate, Education};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Candidate,
    Employer,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Candidate => "candidate",
            UserRole::Employer => "employer",
        }
    }

    /// Unknown stored values fall back to `Candidate`.
    pub fn from_db(value: &str) -> Self {
        match value {
            "employer" => UserRole::Employer,
            _ => UserRole::Candidate,
        }
    }
}

/// A row of the `users` table. Candidates and employers share it; profile columns
/// stay at their empty defaults for employers.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub experience_years: f64,
    pub expected_salary: f64,
    pub preferred_locations: Vec<String>,
    pub preferred_roles: Vec<String>,
    pub education: Value,
    pub contact_email: String,
    pub contact_phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRow {
    pub fn role(&self) -> UserRole {
        UserRole::from_db(&self.role)
    }

    /// Scoring snapshot of this profile. Malformed education JSON degrades to empty.
    pub fn to_candidate(&self) -> Candidate {
        Candidate {
            id: self.id.clone(),
            name: self.name.clone(),
            skills: self.skills.clone(),
            experience_years: self.experience_years,
            expected_salary: self.expected_salary,
            preferred_locations: self.preferred_locations.clone(),
            preferred_roles: self.preferred_roles.clone(),
            education: serde_json::from_value::<Education>(self.education.clone())
                .unwrap_or_default(),
        }
    }
}
