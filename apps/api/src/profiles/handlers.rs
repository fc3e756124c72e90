//! Axum route handlers for user records and candidate profiles.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::auth::{AuthUser, Identity};
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::matching::types::Education;
use crate::models::user::{UserRole, UserRow};
use crate::profiles::store::{self, ProfileUpdate};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: UserRole,
}

/// Every field is optional; absent fields reset to empty/zero.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateProfileRequest {
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub experience_years: Option<f64>,
    pub expected_salary: Option<f64>,
    pub preferred_locations: Option<Vec<String>>,
    pub preferred_roles: Option<Vec<String>>,
    pub education: Option<Education>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

impl UpdateProfileRequest {
    /// Fills defaults, trims list entries, and rejects impossible numbers.
    pub fn clean(self) -> Result<ProfileUpdate, AppError> {
        let experience_years = non_negative("experience_years", self.experience_years)?;
        let expected_salary = non_negative("expected_salary", self.expected_salary)?;
        let education = serde_json::to_value(self.education.unwrap_or_default())
            .map_err(|e| AppError::Internal(e.into()))?;

        Ok(ProfileUpdate {
            bio: self.bio.unwrap_or_default(),
            skills: clean_list(self.skills),
            experience_years,
            expected_salary,
            preferred_locations: clean_list(self.preferred_locations),
            preferred_roles: clean_list(self.preferred_roles),
            education,
            contact_email: self.contact_email.unwrap_or_default(),
            contact_phone: self.contact_phone.unwrap_or_default(),
        })
    }
}

fn non_negative(field: &str, value: Option<f64>) -> Result<f64, AppError> {
    let value = value.unwrap_or(0.0);
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::Validation(format!(
            "{field} must be a non-negative number"
        )));
    }
    Ok(value)
}

fn clean_list(items: Option<Vec<String>>) -> Vec<String> {
    items
        .unwrap_or_default()
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/users
///
/// Called after the first external sign-in. Idempotent: an existing record keeps its role.
pub async fn handle_register(
    State(state): State<AppState>,
    identity: Identity,
    AppJson(request): AppJson<RegisterRequest>,
) -> Result<Json<UserRow>, AppError> {
    let user = store::register_user(
        &state.db,
        &identity.user_id,
        request.name.trim(),
        request.email.trim(),
        request.role,
    )
    .await?;
    Ok(Json(user))
}

/// GET /api/v1/me
pub async fn handle_get_me(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<UserRow>, AppError> {
    let user = store::get_user(&state.db, &identity.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", identity.user_id)))?;
    Ok(Json(user))
}

/// PUT /api/v1/me/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(request): AppJson<UpdateProfileRequest>,
) -> Result<Json<UserRow>, AppError> {
    user.require(UserRole::Candidate)?;
    let update = request.clean()?;

    let row = store::update_profile(&state.db, &user.user_id, &update)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user.user_id)))?;

    info!(
        "Profile updated for {} ({} skills)",
        user.user_id,
        row.skills.len()
    );
    Ok(Json(row))
}

/// GET /api/v1/candidates
pub async fn handle_list_candidates(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<UserRow>>, AppError> {
    user.require(UserRole::Employer)?;
    Ok(Json(store::list_candidates(&state.db).await?))
}
