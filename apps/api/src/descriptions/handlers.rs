//! Axum route handlers for the job-description generator.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::auth::AuthUser;
use crate::descriptions::generator::{generate_job_description, GeneratedDescription, TemplateInput};
use crate::descriptions::store;
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::description::GeneratedDescriptionRow;
use crate::models::user::UserRole;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SaveDescriptionRequest {
    pub description: GeneratedDescription,
}

/// POST /api/v1/descriptions/generate
///
/// Pure templating, no storage and no identity required.
pub async fn handle_generate(
    AppJson(input): AppJson<TemplateInput>,
) -> Result<Json<GeneratedDescription>, AppError> {
    if input.job_title.trim().is_empty() {
        return Err(AppError::Validation("job_title cannot be empty".to_string()));
    }
    Ok(Json(generate_job_description(&input)))
}

/// POST /api/v1/descriptions
pub async fn handle_save(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(request): AppJson<SaveDescriptionRequest>,
) -> Result<(StatusCode, Json<GeneratedDescriptionRow>), AppError> {
    user.require(UserRole::Employer)?;

    let description = request.description;
    let value = serde_json::to_value(&description).map_err(|e| AppError::Internal(e.into()))?;
    let row =
        store::save_description(&state.db, &user.user_id, &description.title, &value).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/descriptions
pub async fn handle_list(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<GeneratedDescriptionRow>>, AppError> {
    user.require(UserRole::Employer)?;
    Ok(Json(store::list_descriptions(&state.db, &user.user_id).await?))
}
