use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::matching::types::{Job, SalaryRange};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub employer_id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub required_skills: Vec<String>,
    pub experience_required: String,
    pub salary_min: f64,
    pub salary_max: f64,
    /// Candidate ids that applied, kept alongside `applications` for cheap lookups.
    pub applicants: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl JobRow {
    pub fn to_job(&self) -> Job {
        Job {
            job_id: self.id.to_string(),
            title: self.title.clone(),
            company: self.company.clone(),
            location: self.location.clone(),
            required_skills: self.required_skills.clone(),
            experience_required: self.experience_required.clone(),
            salary_range: SalaryRange(self.salary_min, self.salary_max),
        }
    }
}
