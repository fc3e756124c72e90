use serde_json::Value;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::description::GeneratedDescriptionRow;

pub async fn save_description(
    pool: &PgPool,
    employer_id: &str,
    job_title: &str,
    description: &Value,
) -> Result<GeneratedDescriptionRow, sqlx::Error> {
    let row = sqlx::query_as::<_, GeneratedDescriptionRow>(
        r#"
        INSERT INTO generated_descriptions (id, employer_id, job_title, description)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(employer_id)
    .bind(job_title)
    .bind(description)
    .fetch_one(pool)
    .await?;

    info!("Saved generated description {} for {employer_id}", row.id);
    Ok(row)
}

pub async fn list_descriptions(
    pool: &PgPool,
    employer_id: &str,
) -> Result<Vec<GeneratedDescriptionRow>, sqlx::Error> {
    sqlx::query_as::<_, GeneratedDescriptionRow>(
        "SELECT * FROM generated_descriptions WHERE employer_id = $1 ORDER BY created_at DESC, id",
    )
    .bind(employer_id)
    .fetch_all(pool)
    .await
}
