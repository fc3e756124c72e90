//! Axum route handlers for job postings.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::{AuthUser, Identity};
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::jobs::store::{self, NewJob};
use crate::matching::types::SalaryRange;
use crate::models::job::JobRow;
use crate::models::user::UserRole;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PostJobRequest {
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub experience_required: String,
    #[serde(default)]
    pub salary_range: SalaryRange,
}

impl PostJobRequest {
    /// Requires a title and non-negative salary bounds. `min <= max` is not enforced.
    pub fn validate(self) -> Result<NewJob, AppError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::Validation("title cannot be empty".to_string()));
        }

        let SalaryRange(salary_min, salary_max) = self.salary_range;
        let bounds = [("salary_range[0]", salary_min), ("salary_range[1]", salary_max)];
        for (field, value) in bounds {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::Validation(format!(
                    "{field} must be a non-negative number"
                )));
            }
        }

        Ok(NewJob {
            title,
            company: self.company.trim().to_string(),
            location: self.location.trim().to_string(),
            required_skills: self
                .required_skills
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            experience_required: self.experience_required.trim().to_string(),
            salary_min,
            salary_max,
        })
    }
}

/// POST /api/v1/jobs
pub async fn handle_post_job(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(request): AppJson<PostJobRequest>,
) -> Result<(StatusCode, Json<JobRow>), AppError> {
    user.require(UserRole::Employer)?;
    let job = request.validate()?;
    let row = store::insert_job(&state.db, &user.user_id, &job).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    _identity: Identity,
) -> Result<Json<Vec<JobRow>>, AppError> {
    Ok(Json(store::list_jobs(&state.db).await?))
}

/// GET /api/v1/jobs/mine
pub async fn handle_list_my_jobs(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<JobRow>>, AppError> {
    user.require(UserRole::Employer)?;
    Ok(Json(
        store::list_jobs_for_employer(&state.db, &user.user_id).await?,
    ))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    _identity: Identity,
    Path(job_id): Path<Uuid>,
) -> Result<Json<JobRow>, AppError> {
    let job = store::get_job(&state.db, job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;
    Ok(Json(job))
}
