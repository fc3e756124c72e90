//! Input and output records of the match scorer.
//!
//! Every input field is optional on the wire and degrades to an empty/zero value,
//! so any JSON object deserializes into a scoreable record.

use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    #[serde(deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(deserialize_with = "null_as_default")]
    pub field: String,
    #[serde(alias = "cgpa")]
    pub gpa: Option<f64>,
}

/// Immutable snapshot of a candidate profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Candidate {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub experience_years: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub expected_salary: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub preferred_locations: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub preferred_roles: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Education,
}

/// `[min, max]` on the wire.
///
/// Accepts shorter arrays on input: a missing bound reads as 0, and so does `null`.
/// Entries past the second are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SalaryRange(pub f64, pub f64);

impl<'de> Deserialize<'de> for SalaryRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bounds = Vec::<Option<f64>>::deserialize(deserializer)?;
        let bound = |i: usize| bounds.get(i).copied().flatten().unwrap_or(0.0);
        Ok(SalaryRange(bound(0), bound(1)))
    }
}

impl SalaryRange {
    pub fn min(&self) -> f64 {
        self.0
    }

    pub fn max(&self) -> f64 {
        self.1
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Job {
    #[serde(deserialize_with = "null_as_default")]
    pub job_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub required_skills: Vec<String>,
    /// Free text such as "2-4 years" or "5+ years".
    #[serde(deserialize_with = "null_as_default")]
    pub experience_required: String,
    #[serde(deserialize_with = "null_as_default")]
    pub salary_range: SalaryRange,
}

/// Multipliers applied to the five sub-scores.
///
/// Weights are expected to be non-negative and to sum to 1.0, but neither is enforced:
/// callers may supply custom profiles and the combined score is never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightConfig {
    pub skill: f64,
    pub location: f64,
    pub salary: f64,
    pub experience: f64,
    pub role: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            skill: 0.40,
            location: 0.20,
            salary: 0.15,
            experience: 0.15,
            role: 0.10,
        }
    }
}

impl WeightConfig {
    pub fn sum(&self) -> f64 {
        self.skill + self.location + self.salary + self.experience + self.role
    }

    pub fn is_normalized(&self) -> bool {
        (self.sum() - 1.0).abs() < 1e-6
    }
}

/// Raw sub-scores, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill_match: f64,
    pub location_match: f64,
    pub salary_match: f64,
    pub experience_match: f64,
    pub role_match: f64,
}

/// Derived on every call. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub job_id: String,
    pub candidate_id: String,
    pub match_score: f64,
    pub breakdown: ScoreBreakdown,
    pub missing_skills: Vec<String>,
    pub recommendation_reason: String,
}
