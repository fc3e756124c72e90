use serde_json::Value;
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::application::{ApplicationRow, STATUS_PENDING};

/// Snapshot of the applicant stored with the application.
pub struct NewApplication<'a> {
    pub job_id: Uuid,
    pub candidate_id: &'a str,
    pub candidate_name: &'a str,
    pub candidate_email: &'a str,
    pub candidate_profile: &'a Value,
}

/// Records an application and adds the candidate to the job's applicant list.
///
/// Returns `None` when the candidate had already applied; nothing is written then.
pub async fn create_application(
    pool: &PgPool,
    application: NewApplication<'_>,
) -> Result<Option<Uuid>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let inserted: Option<Uuid> = sqlx::query_scalar(
        r#"
        INSERT INTO applications
            (id, job_id, candidate_id, candidate_name, candidate_email, candidate_profile, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ON CONFLICT (job_id, candidate_id) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(application.job_id)
    .bind(application.candidate_id)
    .bind(application.candidate_name)
    .bind(application.candidate_email)
    .bind(application.candidate_profile)
    .bind(STATUS_PENDING)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(application_id) = inserted else {
        debug!(
            "Candidate {} already applied to job {}",
            application.candidate_id, application.job_id
        );
        return Ok(None);
    };

    sqlx::query(
        r#"
        UPDATE jobs
        SET applicants = array_append(applicants, $2)
        WHERE id = $1 AND NOT ($2 = ANY(applicants))
        "#,
    )
    .bind(application.job_id)
    .bind(application.candidate_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    info!(
        "Candidate {} applied to job {} (application {application_id})",
        application.candidate_id, application.job_id
    );
    Ok(Some(application_id))
}

pub async fn has_applied(
    pool: &PgPool,
    job_id: Uuid,
    candidate_id: &str,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT EXISTS (SELECT 1 FROM applications WHERE job_id = $1 AND candidate_id = $2)",
    )
    .bind(job_id)
    .bind(candidate_id)
    .fetch_one(pool)
    .await
}

/// All applications to jobs owned by `employer_id`, newest first.
pub async fn list_for_employer(
    pool: &PgPool,
    employer_id: &str,
) -> Result<Vec<ApplicationRow>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>(
        r#"
        SELECT a.*
        FROM applications a
        JOIN jobs j ON j.id = a.job_id
        WHERE j.employer_id = $1
        ORDER BY a.applied_at DESC, a.id
        "#,
    )
    .bind(employer_id)
    .fetch_all(pool)
    .await
}
