use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GeneratedDescriptionRow {
    pub id: Uuid,
    pub employer_id: String,
    pub job_title: String,
    pub description: Value,
    pub created_at: DateTime<Utc>,
}
