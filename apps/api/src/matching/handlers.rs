//! Axum route handlers for match scoring and ranking.
//!
//! The caller's stored role picks the view: candidates rank jobs, employers rank
//! candidates for one of their own postings.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::jobs::store::{get_job, list_jobs};
use crate::matching::ranking::{
    rank_candidates_for_job, rank_jobs_for_candidate, RankedCandidate, RankedJob,
};
use crate::matching::scorer::{MatchScorer, WeightedMatchScorer};
use crate::matching::types::{Candidate, Job, MatchResult, WeightConfig};
use crate::models::user::UserRole;
use crate::profiles::store::{get_user, list_candidates};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    #[serde(default)]
    pub candidate: Candidate,
    #[serde(default)]
    pub job: Job,
    /// Overrides the server's default weight profile for this call only.
    pub weights: Option<WeightConfig>,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub match_result: MatchResult,
    pub weights: Option<WeightConfig>,
    pub scorer_backend: String,
}

#[derive(Debug, Serialize)]
pub struct MatchListResponse<T> {
    pub matches: Vec<T>,
    pub scorer_backend: String,
}

fn validate_weights(weights: &WeightConfig) -> Result<(), AppError> {
    let all = [
        ("skill", weights.skill),
        ("location", weights.location),
        ("salary", weights.salary),
        ("experience", weights.experience),
        ("role", weights.role),
    ];
    for (name, value) in all {
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::Validation(format!(
                "weight '{name}' must be a non-negative number"
            )));
        }
    }
    Ok(())
}

/// Runs a ranking closure off the async executor; ranking fans out on rayon.
async fn run_ranking<T, F>(f: F) -> Result<Vec<T>, AppError>
where
    T: Send + 'static,
    F: FnOnce() -> Vec<T> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("ranking task failed: {e}")))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match/preview
///
/// Scores an inline candidate/job pair. Nothing is read from or written to storage.
pub async fn handle_preview(
    State(state): State<AppState>,
    AppJson(request): AppJson<PreviewRequest>,
) -> Result<Json<PreviewResponse>, AppError> {
    let (match_result, backend) = match request.weights {
        Some(weights) => {
            validate_weights(&weights)?;
            let scorer = WeightedMatchScorer::new(weights);
            (scorer.score(&request.candidate, &request.job), scorer.backend())
        }
        None => (
            state.scorer.score(&request.candidate, &request.job),
            state.scorer.backend(),
        ),
    };

    Ok(Json(PreviewResponse {
        match_result,
        weights: request.weights,
        scorer_backend: backend.to_string(),
    }))
}

/// GET /api/v1/matches
///
/// Candidate view: every posted job ranked against the caller's profile.
pub async fn handle_candidate_matches(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<MatchListResponse<RankedJob>>, AppError> {
    user.require(UserRole::Candidate)?;

    let candidate = get_user(&state.db, &user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile for {} not found", user.user_id)))?
        .to_candidate();
    let jobs: Vec<Job> = list_jobs(&state.db).await?.iter().map(|row| row.to_job()).collect();

    debug!("Ranking {} jobs for candidate {}", jobs.len(), user.user_id);

    let scorer = Arc::clone(&state.scorer);
    let backend = scorer.backend().to_string();
    let matches =
        run_ranking(move || rank_jobs_for_candidate(scorer.as_ref(), &candidate, &jobs)).await?;

    Ok(Json(MatchListResponse {
        matches,
        scorer_backend: backend,
    }))
}

/// GET /api/v1/jobs/:id/matches
///
/// Employer view: every candidate ranked against one of the caller's jobs.
pub async fn handle_job_matches(
    State(state): State<AppState>,
    user: AuthUser,
    Path(job_id): Path<Uuid>,
) -> Result<Json<MatchListResponse<RankedCandidate>>, AppError> {
    user.require(UserRole::Employer)?;

    let row = get_job(&state.db, job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;
    if row.employer_id != user.user_id {
        return Err(AppError::Forbidden(format!(
            "Job {job_id} belongs to another employer"
        )));
    }

    let job = row.to_job();
    let candidates: Vec<Candidate> = list_candidates(&state.db)
        .await?
        .iter()
        .map(|row| row.to_candidate())
        .collect();

    debug!("Ranking {} candidates for job {job_id}", candidates.len());

    let scorer = Arc::clone(&state.scorer);
    let backend = scorer.backend().to_string();
    let matches =
        run_ranking(move || rank_candidates_for_job(scorer.as_ref(), &job, &candidates)).await?;

    Ok(Json(MatchListResponse {
        matches,
        scorer_backend: backend,
    }))
}
