use anyhow::{bail, Context, Result};

use crate::matching::types::WeightConfig;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub port: u16,
    pub rust_log: String,
    /// Default weight profile for the match scorer.
    pub match_weights: WeightConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = WeightConfig::default();
        let match_weights = WeightConfig {
            skill: parse_weight(
                "MATCH_WEIGHT_SKILL",
                optional_env("MATCH_WEIGHT_SKILL"),
                defaults.skill,
            )?,
            location: parse_weight(
                "MATCH_WEIGHT_LOCATION",
                optional_env("MATCH_WEIGHT_LOCATION"),
                defaults.location,
            )?,
            salary: parse_weight(
                "MATCH_WEIGHT_SALARY",
                optional_env("MATCH_WEIGHT_SALARY"),
                defaults.salary,
            )?,
            experience: parse_weight(
                "MATCH_WEIGHT_EXPERIENCE",
                optional_env("MATCH_WEIGHT_EXPERIENCE"),
                defaults.experience,
            )?,
            role: parse_weight(
                "MATCH_WEIGHT_ROLE",
                optional_env("MATCH_WEIGHT_ROLE"),
                defaults.role,
            )?,
        };

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            db_max_connections: optional_env("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|| "10".to_string())
                .parse::<u32>()
                .context("DB_MAX_CONNECTIONS must be a positive integer")?,
            port: optional_env("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            match_weights,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Parses one weight override, falling back to `default` when unset.
fn parse_weight(key: &str, raw: Option<String>, default: f64) -> Result<f64> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    let value = raw
        .trim()
        .parse::<f64>()
        .with_context(|| format!("{key} must be a number, got '{raw}'"))?;
    if !value.is_finite() || value < 0.0 {
        bail!("{key} must be a finite non-negative number, got {value}");
    }
    Ok(value)
}
