//! Axum route handlers for applications.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::applications::store::{self, NewApplication};
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::jobs::store::get_job;
use crate::models::application::ApplicationRow;
use crate::models::user::UserRole;
use crate::profiles::store::get_user;
use crate::state::AppState;

#[derive(Debug, Serialize, PartialEq)]
pub struct ApplyResponse {
    pub success: bool,
    pub already_applied: bool,
    pub application_id: Option<Uuid>,
}

impl ApplyResponse {
    fn from_insert(inserted: Option<Uuid>) -> Self {
        match inserted {
            Some(id) => ApplyResponse {
                success: true,
                already_applied: false,
                application_id: Some(id),
            },
            None => ApplyResponse {
                success: false,
                already_applied: true,
                application_id: None,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AppliedResponse {
    pub applied: bool,
}

/// POST /api/v1/jobs/:id/apply
///
/// Stores a snapshot of the caller's profile. Applying twice is not an error.
pub async fn handle_apply(
    State(state): State<AppState>,
    user: AuthUser,
    Path(job_id): Path<Uuid>,
) -> Result<Json<ApplyResponse>, AppError> {
    user.require(UserRole::Candidate)?;

    get_job(&state.db, job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    let profile = get_user(&state.db, &user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile for {} not found", user.user_id)))?;

    let snapshot = serde_json::to_value(&profile).map_err(|e| AppError::Internal(e.into()))?;
    let email = if profile.contact_email.is_empty() {
        profile.email.as_str()
    } else {
        profile.contact_email.as_str()
    };

    let inserted = store::create_application(
        &state.db,
        NewApplication {
            job_id,
            candidate_id: &profile.id,
            candidate_name: &profile.name,
            candidate_email: email,
            candidate_profile: &snapshot,
        },
    )
    .await?;

    Ok(Json(ApplyResponse::from_insert(inserted)))
}

/// GET /api/v1/jobs/:id/applied
pub async fn handle_has_applied(
    State(state): State<AppState>,
    user: AuthUser,
    Path(job_id): Path<Uuid>,
) -> Result<Json<AppliedResponse>, AppError> {
    user.require(UserRole::Candidate)?;
    let applied = store::has_applied(&state.db, job_id, &user.user_id).await?;
    Ok(Json(AppliedResponse { applied }))
}

/// GET /api/v1/applications
pub async fn handle_list_applications(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<ApplicationRow>>, AppError> {
    user.require(UserRole::Employer)?;
    Ok(Json(
        store::list_for_employer(&state.db, &user.user_id).await?,
    ))
}
