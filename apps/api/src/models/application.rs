use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

pub const STATUS_PENDING: &str = "pending";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationRow {
    pub id: Uuid,
    pub job_id: Uuid,
    pub candidate_id: String,
    pub candidate_name: String,
    pub candidate_email: String,
    /// Profile snapshot taken at application time.
    pub candidate_profile: Value,
    pub status: String,
    pub applied_at: DateTime<Utc>,
}
