//! Match Scorer: five weighted sub-scores combined into a single percentage.
//!
//! Pure and deterministic. The scorer never fails: malformed or empty inputs fall back
//! to the vacuous-match values documented on each sub-score.
//!
//! `AppState` holds an `Arc<dyn MatchScorer>` configured with the startup weight profile.

use std::collections::HashSet;

use crate::matching::experience::{parse_experience_requirement, ExperienceBracket};
use crate::matching::types::{
    Candidate, Job, MatchResult, SalaryRange, ScoreBreakdown, WeightConfig,
};

/// Sub-score awarded when no preferred role equals the job title.
pub const ROLE_PARTIAL_CREDIT: f64 = 50.0;
/// Sub-score awarded when the candidate exceeds the experience bracket.
pub const OVERQUALIFIED_SCORE: f64 = 90.0;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores one (candidate, job) pair. Implementations must be pure so callers can
/// fan out over many pairs without coordination.
pub trait MatchScorer: Send + Sync {
    fn score(&self, candidate: &Candidate, job: &Job) -> MatchResult;

    /// Short label reported alongside ranked results.
    fn backend(&self) -> &'static str;
}

/// Default scorer: `calculate_match` with a fixed weight profile.
#[derive(Debug, Clone, Default)]
pub struct WeightedMatchScorer {
    pub weights: WeightConfig,
}

impl WeightedMatchScorer {
    pub fn new(weights: WeightConfig) -> Self {
        Self { weights }
    }
}

impl MatchScorer for WeightedMatchScorer {
    fn score(&self, candidate: &Candidate, job: &Job) -> MatchResult {
        calculate_match(candidate, job, &self.weights)
    }

    fn backend(&self) -> &'static str {
        "weighted"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Combiner
// ────────────────────────────────────────────────────────────────────────────

/// Computes the weighted match of `candidate` against `job`.
///
/// `match_score = Σ(sub_score × weight)`, rounded to two decimals and never clamped.
pub fn calculate_match(candidate: &Candidate, job: &Job, weights: &WeightConfig) -> MatchResult {
    let (skill_match, missing_skills) = skill_score(&candidate.skills, &job.required_skills);

    let breakdown = ScoreBreakdown {
        skill_match,
        location_match: location_score(&candidate.preferred_locations, &job.location),
        salary_match: salary_score(candidate.expected_salary, &job.salary_range),
        experience_match: experience_score(candidate.experience_years, &job.experience_required),
        role_match: role_score(&candidate.preferred_roles, &job.title),
    };

    let total = breakdown.skill_match * weights.skill
        + breakdown.location_match * weights.location
        + breakdown.salary_match * weights.salary
        + breakdown.experience_match * weights.experience
        + breakdown.role_match * weights.role;
    let match_score = round_to_hundredths(total);

    MatchResult {
        job_id: job.job_id.clone(),
        candidate_id: candidate.id.clone(),
        match_score,
        breakdown,
        missing_skills,
        recommendation_reason: build_reason(match_score),
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn build_reason(score: f64) -> String {
    format!("Calculated match score of {score}% based on weighted compatibility factors.")
}

// ────────────────────────────────────────────────────────────────────────────
// Sub-scores
// ────────────────────────────────────────────────────────────────────────────

/// Share of required skills the candidate has, plus the missing ones in original casing.
/// No required skills is a vacuous 100.
fn skill_score(candidate_skills: &[String], required: &[String]) -> (f64, Vec<String>) {
    if required.is_empty() {
        return (100.0, Vec::new());
    }

    let have: HashSet<String> = candidate_skills.iter().map(|s| s.to_lowercase()).collect();
    let missing: Vec<String> = required
        .iter()
        .filter(|s| !have.contains(&s.to_lowercase()))
        .cloned()
        .collect();

    let matched = required.len() - missing.len();
    (matched as f64 / required.len() as f64 * 100.0, missing)
}

/// Binary: 100 on a case-insensitive exact match of any preferred location.
fn location_score(preferred: &[String], job_location: &str) -> f64 {
    let job_location = job_location.to_lowercase();
    if preferred.iter().any(|p| p.to_lowercase() == job_location) {
        100.0
    } else {
        0.0
    }
}

/// 100 up to the job maximum, then linear decay reaching 0 at twice the maximum.
fn salary_score(expected: f64, range: &SalaryRange) -> f64 {
    let max = range.max();
    if expected <= max {
        return 100.0;
    }
    if max <= 0.0 {
        return 0.0;
    }
    (100.0 - (expected - max) / max * 100.0).max(0.0)
}

/// 100 inside the bracket, 90 above it, `years / min` below it.
/// Unparseable requirements score 0.
fn experience_score(years: f64, requirement: &str) -> f64 {
    let Some(ExperienceBracket { min, max }) = parse_experience_requirement(requirement) else {
        return 0.0;
    };

    if years >= min && years <= max {
        100.0
    } else if years > max {
        OVERQUALIFIED_SCORE
    } else if min <= 0.0 {
        100.0
    } else {
        (years / min * 100.0).max(0.0)
    }
}

/// 100 on a case-insensitive exact title match, partial credit otherwise.
fn role_score(preferred: &[String], title: &str) -> f64 {
    let title = title.to_lowercase();
    if preferred.iter().any(|r| r.to_lowercase() == title) {
        100.0
    } else {
        ROLE_PARTIAL_CREDIT
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn make_candidate() -> Candidate {
        Candidate {
            id: "C001".to_string(),
            name: "Alex Johnson".to_string(),
            skills: strings(&["Python", "FastAPI", "Docker", "React"]),
            experience_years: 2.0,
            expected_salary: 1_200_000.0,
            preferred_locations: strings(&["Bangalore", "Remote"]),
            preferred_roles: strings(&["Backend Developer"]),
            ..Default::default()
        }
    }

    fn make_job() -> Job {
        Job {
            job_id: "J001".to_string(),
            title: "Backend Developer".to_string(),
            company: "TechCorp".to_string(),
            location: "Bangalore".to_string(),
            required_skills: strings(&["Python", "FastAPI", "PostgreSQL"]),
            experience_required: "2-4 years".to_string(),
            salary_range: SalaryRange(1_000_000.0, 1_500_000.0),
        }
    }

    #[test]
    fn test_end_to_end_example() {
        let result = calculate_match(&make_candidate(), &make_job(), &WeightConfig::default());

        assert!((result.breakdown.skill_match - 66.67).abs() < 0.01);
        assert_eq!(result.breakdown.location_match, 100.0);
        assert_eq!(result.breakdown.salary_match, 100.0);
        assert_eq!(result.breakdown.experience_match, 100.0);
        assert_eq!(result.breakdown.role_match, 100.0);
        assert_eq!(result.missing_skills, vec!["PostgreSQL".to_string()]);
        assert_eq!(result.match_score, 86.67);
        assert_eq!(result.job_id, "J001");
        assert_eq!(result.candidate_id, "C001");
    }

    #[test]
    fn test_reason_mentions_score() {
        let result = calculate_match(&make_candidate(), &make_job(), &WeightConfig::default());
        assert_eq!(
            result.recommendation_reason,
            "Calculated match score of 86.67% based on weighted compatibility factors."
        );
    }

    #[test]
    fn test_skills_case_insensitive_and_order_independent() {
        let (score, missing) =
            skill_score(&strings(&["SQL", "Python"]), &strings(&["python", "sql"]));
        assert_eq!(score, 100.0);
        assert!(missing.is_empty());
    }

    #[test]
    fn test_no_required_skills_is_vacuous_match() {
        let (score, missing) = skill_score(&[], &[]);
        assert_eq!(score, 100.0);
        assert!(missing.is_empty());
    }

    #[test]
    fn test_missing_skills_keep_original_casing_and_order() {
        let (score, missing) = skill_score(
            &strings(&["go"]),
            &strings(&["AWS", "Kubernetes", "Go", "Docker"]),
        );
        assert_eq!(score, 25.0);
        assert_eq!(missing, strings(&["AWS", "Kubernetes", "Docker"]));
    }

    #[test]
    fn test_location_is_binary() {
        assert_eq!(location_score(&strings(&["remote"]), "Remote"), 100.0);
        assert_eq!(location_score(&strings(&["Hyderabad"]), "Bangalore"), 0.0);
        assert_eq!(location_score(&[], "Bangalore"), 0.0);
        // exact equality only, no substring credit
        assert_eq!(location_score(&strings(&["Bangalore"]), "Bangalore Urban"), 0.0);
    }

    #[test]
    fn test_salary_within_budget() {
        let range = SalaryRange(1_000_000.0, 1_500_000.0);
        assert_eq!(salary_score(1_500_000.0, &range), 100.0);
        assert_eq!(salary_score(500_000.0, &range), 100.0);
    }

    #[test]
    fn test_salary_decays_linearly_to_zero_at_double_max() {
        let range = SalaryRange(0.0, 1_000_000.0);
        assert_eq!(salary_score(1_500_000.0, &range), 50.0);
        assert_eq!(salary_score(2_000_000.0, &range), 0.0);
        assert_eq!(salary_score(3_000_000.0, &range), 0.0);

        let a = salary_score(1_100_000.0, &range);
        let b = salary_score(1_200_000.0, &range);
        assert!(a > b);
    }

    #[test]
    fn test_salary_zero_max() {
        assert_eq!(salary_score(10.0, &SalaryRange(0.0, 0.0)), 0.0);
        assert_eq!(salary_score(0.0, &SalaryRange(0.0, 0.0)), 100.0);
    }

    #[test]
    fn test_experience_inside_bracket() {
        assert_eq!(experience_score(2.0, "2-4 years"), 100.0);
        assert_eq!(experience_score(4.0, "2-4 years"), 100.0);
        assert_eq!(experience_score(12.0, "5+ years"), 100.0);
    }

    #[test]
    fn test_experience_overqualified() {
        assert_eq!(experience_score(6.0, "2-4 years"), OVERQUALIFIED_SCORE);
    }

    #[test]
    fn test_experience_underqualified_is_proportional() {
        assert_eq!(experience_score(2.0, "5+ years"), 40.0);
        assert_eq!(experience_score(0.0, "1-3 years"), 0.0);
    }

    #[test]
    fn test_experience_zero_minimum() {
        assert_eq!(experience_score(0.0, "0-2 years"), 100.0);
        assert_eq!(experience_score(3.0, "0-2 years"), OVERQUALIFIED_SCORE);
    }

    #[test]
    fn test_experience_unparseable_scores_zero() {
        assert_eq!(experience_score(5.0, "senior"), 0.0);
        assert_eq!(experience_score(5.0, ""), 0.0);
    }

    #[test]
    fn test_role_exact_match_or_partial_credit() {
        assert_eq!(role_score(&strings(&["backend developer"]), "Backend Developer"), 100.0);
        assert_eq!(role_score(&strings(&["Backend"]), "Backend Developer"), ROLE_PARTIAL_CREDIT);
        assert_eq!(role_score(&[], "Cloud Architect"), ROLE_PARTIAL_CREDIT);
    }

    #[test]
    fn test_empty_records_never_fail() {
        let result =
            calculate_match(&Candidate::default(), &Job::default(), &WeightConfig::default());
        assert_eq!(result.breakdown.skill_match, 100.0);
        assert_eq!(result.breakdown.location_match, 0.0);
        assert_eq!(result.breakdown.salary_match, 100.0);
        assert_eq!(result.breakdown.experience_match, 0.0);
        assert_eq!(result.breakdown.role_match, ROLE_PARTIAL_CREDIT);
        assert_eq!(result.match_score, 60.0);
    }

    #[test]
    fn test_normalized_weights_stay_in_range() {
        let job = Job {
            required_skills: strings(&["Rust"]),
            experience_required: "10+ years".to_string(),
            location: "Berlin".to_string(),
            salary_range: SalaryRange(10.0, 20.0),
            ..Default::default()
        };
        let candidate = Candidate {
            expected_salary: 1_000.0,
            ..Default::default()
        };
        let result = calculate_match(&candidate, &job, &WeightConfig::default());
        assert!(result.match_score >= 0.0 && result.match_score <= 100.0);
    }

    #[test]
    fn test_custom_weights_are_not_clamped() {
        let weights = WeightConfig {
            skill: 1.0,
            location: 1.0,
            salary: 1.0,
            experience: 1.0,
            role: 1.0,
        };
        let result = calculate_match(&make_candidate(), &make_job(), &weights);
        assert_eq!(result.match_score, 466.67);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let candidate = make_candidate();
        let job = make_job();
        let weights = WeightConfig::default();
        let first = calculate_match(&candidate, &job, &weights);
        let second = calculate_match(&candidate, &job, &weights);
        assert_eq!(first, second);
        assert_eq!(first.match_score.to_bits(), second.match_score.to_bits());
    }

    #[test]
    fn test_weighted_scorer_uses_its_profile() {
        let scorer = WeightedMatchScorer::new(WeightConfig {
            skill: 1.0,
            location: 0.0,
            salary: 0.0,
            experience: 0.0,
            role: 0.0,
        });
        let result = scorer.score(&make_candidate(), &make_job());
        assert_eq!(result.match_score, 66.67);
        assert_eq!(scorer.backend(), "weighted");
    }
}
