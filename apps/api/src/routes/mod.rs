pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::applications::handlers as applications;
use crate::descriptions::handlers as descriptions;
use crate::jobs::handlers as jobs;
use crate::matching::handlers as matching;
use crate::profiles::handlers as profiles;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Stateless tools
        .route("/api/v1/match/preview", post(matching::handle_preview))
        .route(
            "/api/v1/descriptions/generate",
            post(descriptions::handle_generate),
        )
        // Users & profiles
        .route("/api/v1/users", post(profiles::handle_register))
        .route("/api/v1/me", get(profiles::handle_get_me))
        .route("/api/v1/me/profile", put(profiles::handle_update_profile))
        .route("/api/v1/candidates", get(profiles::handle_list_candidates))
        // Jobs
        .route(
            "/api/v1/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_post_job),
        )
        .route("/api/v1/jobs/mine", get(jobs::handle_list_my_jobs))
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        .route("/api/v1/jobs/:id/apply", post(applications::handle_apply))
        .route(
            "/api/v1/jobs/:id/applied",
            get(applications::handle_has_applied),
        )
        .route("/api/v1/jobs/:id/matches", get(matching::handle_job_matches))
        // Matching & applications
        .route("/api/v1/matches", get(matching::handle_candidate_matches))
        .route(
            "/api/v1/applications",
            get(applications::handle_list_applications),
        )
        // Saved descriptions
        .route(
            "/api/v1/descriptions",
            get(descriptions::handle_list).post(descriptions::handle_save),
        )
        .with_state(state)
}
