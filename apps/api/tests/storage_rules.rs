//! Access and storage rules that need a live PostgreSQL.
//!
//! Run with `DATABASE_URL=postgres://... cargo test -- --ignored`.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use jobmatch_api::build_router;
use jobmatch_api::config::Config;
use jobmatch_api::db::create_pool;
use jobmatch_api::matching::scorer::WeightedMatchScorer;
use jobmatch_api::matching::types::WeightConfig;
use jobmatch_api::state::AppState;

async fn live_app() -> Router {
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for ignored tests");
    let db = create_pool(&database_url, 2).await.unwrap();
    let config = Config {
        database_url,
        db_max_connections: 2,
        port: 0,
        rust_log: "info".to_string(),
        match_weights: WeightConfig::default(),
    };

    build_router(AppState {
        db,
        scorer: Arc::new(WeightedMatchScorer::new(config.match_weights)),
        config,
    })
}

/// Fresh external id so reruns never collide with earlier rows.
fn new_user_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}

async fn call(
    app: &Router,
    method: Method,
    uri: &str,
    user_id: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("x-user-id", user_id);
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn register(app: &Router, user_id: &str, role: &str) {
    let body = json!({"name": user_id, "email": format!("{user_id}@example.com"), "role": role});
    let (status, _) = call(app, Method::POST, "/api/v1/users", user_id, Some(body)).await;
    assert_eq!(status, StatusCode::OK);
}

async fn post_job(app: &Router, employer_id: &str, title: &str) -> String {
    let body = json!({
        "title": title,
        "company": "TechCorp",
        "location": "Remote",
        "required_skills": ["Rust"],
        "experience_required": "2-4 years",
        "salary_range": [1000000, 1500000]
    });
    let (status, job) = call(app, Method::POST, "/api/v1/jobs", employer_id, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    job["id"].as_str().unwrap().to_string()
}

#[tokio::test]
#[ignore]
async fn employer_cannot_rank_another_employers_job() {
    let app = live_app().await;
    let owner = new_user_id("owner");
    let rival = new_user_id("rival");
    register(&app, &owner, "employer").await;
    register(&app, &rival, "employer").await;
    let job_id = post_job(&app, &owner, "Backend Developer").await;
    let uri = format!("/api/v1/jobs/{job_id}/matches");

    let (status, body) = call(&app, Method::GET, &uri, &rival, None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["code"], "FORBIDDEN");

    let (status, body) = call(&app, Method::GET, &uri, &owner, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["matches"].is_array());
}

#[tokio::test]
#[ignore]
async fn candidate_cannot_post_jobs() {
    let app = live_app().await;
    let candidate = new_user_id("cand");
    register(&app, &candidate, "candidate").await;

    let body = json!({"title": "Backend Developer"});
    let (status, body) = call(&app, Method::POST, "/api/v1/jobs", &candidate, Some(body)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
#[ignore]
async fn second_application_is_reported_and_not_duplicated() {
    let app = live_app().await;
    let employer = new_user_id("emp");
    let candidate = new_user_id("cand");
    register(&app, &employer, "employer").await;
    register(&app, &candidate, "candidate").await;
    let job_id = post_job(&app, &employer, "Data Engineer").await;
    let apply = format!("/api/v1/jobs/{job_id}/apply");

    let (status, first) = call(&app, Method::POST, &apply, &candidate, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["success"], true);
    assert_eq!(first["already_applied"], false);

    let (status, second) = call(&app, Method::POST, &apply, &candidate, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["success"], false);
    assert_eq!(second["already_applied"], true);

    let uri = format!("/api/v1/jobs/{job_id}");
    let (status, job) = call(&app, Method::GET, &uri, &candidate, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(job["applicants"], json!([candidate]));

    let uri = format!("/api/v1/jobs/{job_id}/applied");
    let (_, applied) = call(&app, Method::GET, &uri, &candidate, None).await;
    assert_eq!(applied["applied"], true);

    let (status, rows) = call(&app, Method::GET, "/api/v1/applications", &employer, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows.as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore]
async fn own_jobs_are_listed_newest_first() {
    let app = live_app().await;
    let employer = new_user_id("emp");
    register(&app, &employer, "employer").await;

    let older = post_job(&app, &employer, "First Posting").await;
    tokio::time::sleep(Duration::from_millis(20)).await;
    let newer = post_job(&app, &employer, "Second Posting").await;

    let (status, jobs) = call(&app, Method::GET, "/api/v1/jobs/mine", &employer, None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = jobs
        .as_array()
        .unwrap()
        .iter()
        .map(|job| job["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![newer.as_str(), older.as_str()]);
}
