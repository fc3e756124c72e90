use serde_json::Value;
use sqlx::PgPool;
use tracing::info;

use crate::models::user::{UserRole, UserRow};

/// Cleaned candidate profile fields, ready to write.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileUpdate {
    pub bio: String,
    pub skills: Vec<String>,
    pub experience_years: f64,
    pub expected_salary: f64,
    pub preferred_locations: Vec<String>,
    pub preferred_roles: Vec<String>,
    pub education: Value,
    pub contact_email: String,
    pub contact_phone: String,
}

/// Creates the user record on first sign-in.
/// An existing record is returned untouched, so a stored role always wins.
pub async fn register_user(
    pool: &PgPool,
    user_id: &str,
    name: &str,
    email: &str,
    role: UserRole,
) -> Result<UserRow, sqlx::Error> {
    let inserted = sqlx::query(
        r#"
        INSERT INTO users (id, name, email, role)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (id) DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(name)
    .bind(email)
    .bind(role.as_str())
    .execute(pool)
    .await?
    .rows_affected();

    if inserted > 0 {
        info!("Registered user {user_id} as {}", role.as_str());
    }

    sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
}

pub async fn get_user(pool: &PgPool, user_id: &str) -> Result<Option<UserRow>, sqlx::Error> {
    sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Overwrites every profile column. Returns `None` when the user does not exist.
pub async fn update_profile(
    pool: &PgPool,
    user_id: &str,
    update: &ProfileUpdate,
) -> Result<Option<UserRow>, sqlx::Error> {
    sqlx::query_as::<_, UserRow>(
        r#"
        UPDATE users SET
            bio = $2,
            skills = $3,
            experience_years = $4,
            expected_salary = $5,
            preferred_locations = $6,
            preferred_roles = $7,
            education = $8,
            contact_email = $9,
            contact_phone = $10,
            updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&update.bio)
    .bind(&update.skills)
    .bind(update.experience_years)
    .bind(update.expected_salary)
    .bind(&update.preferred_locations)
    .bind(&update.preferred_roles)
    .bind(&update.education)
    .bind(&update.contact_email)
    .bind(&update.contact_phone)
    .fetch_optional(pool)
    .await
}

pub async fn list_candidates(pool: &PgPool) -> Result<Vec<UserRow>, sqlx::Error> {
    sqlx::query_as::<_, UserRow>(
        "SELECT * FROM users WHERE role = 'candidate' ORDER BY created_at, id",
    )
    .fetch_all(pool)
    .await
}
