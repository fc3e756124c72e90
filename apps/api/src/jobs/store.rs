use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::job::JobRow;

/// Validated fields of a new posting.
#[derive(Debug, Clone)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub required_skills: Vec<String>,
    pub experience_required: String,
    pub salary_min: f64,
    pub salary_max: f64,
}

pub async fn insert_job(
    pool: &PgPool,
    employer_id: &str,
    job: &NewJob,
) -> Result<JobRow, sqlx::Error> {
    let row = sqlx::query_as::<_, JobRow>(
        r#"
        INSERT INTO jobs
            (id, employer_id, title, company, location, required_skills,
             experience_required, salary_min, salary_max)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(employer_id)
    .bind(&job.title)
    .bind(&job.company)
    .bind(&job.location)
    .bind(&job.required_skills)
    .bind(&job.experience_required)
    .bind(job.salary_min)
    .bind(job.salary_max)
    .fetch_one(pool)
    .await?;

    info!("Employer {employer_id} posted job {} ({})", row.id, row.title);
    Ok(row)
}

pub async fn list_jobs(pool: &PgPool) -> Result<Vec<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>("SELECT * FROM jobs ORDER BY created_at DESC, id")
        .fetch_all(pool)
        .await
}

pub async fn list_jobs_for_employer(
    pool: &PgPool,
    employer_id: &str,
) -> Result<Vec<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>(
        "SELECT * FROM jobs WHERE employer_id = $1 ORDER BY created_at DESC, id",
    )
    .bind(employer_id)
    .fetch_all(pool)
    .await
}

pub async fn get_job(pool: &PgPool, job_id: Uuid) -> Result<Option<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
        .bind(job_id)
        .fetch_optional(pool)
        .await
}
