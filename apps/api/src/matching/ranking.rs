//! Ranking of many pairs: all jobs for one candidate, or all candidates for one job.
//!
//! Each pair is scored independently on the rayon pool. Results are collected in input
//! order and then stable-sorted, so ties keep the order the caller supplied.

use rayon::prelude::*;
use serde::Serialize;

use crate::matching::scorer::MatchScorer;
use crate::matching::types::{Candidate, Job, MatchResult};

/// Candidate view: a job and how well the candidate fits it.
#[derive(Debug, Clone, Serialize)]
pub struct RankedJob {
    #[serde(flatten)]
    pub result: MatchResult,
    pub job_details: Job,
}

/// Employer view: a candidate and how well they fit the job.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
    #[serde(flatten)]
    pub result: MatchResult,
    pub candidate_details: Candidate,
}

pub fn rank_jobs_for_candidate(
    scorer: &dyn MatchScorer,
    candidate: &Candidate,
    jobs: &[Job],
) -> Vec<RankedJob> {
    let mut ranked: Vec<RankedJob> = jobs
        .par_iter()
        .map(|job| RankedJob {
            result: scorer.score(candidate, job),
            job_details: job.clone(),
        })
        .collect();

    ranked.sort_by(|a, b| b.result.match_score.total_cmp(&a.result.match_score));
    ranked
}

pub fn rank_candidates_for_job(
    scorer: &dyn MatchScorer,
    job: &Job,
    candidates: &[Candidate],
) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = candidates
        .par_iter()
        .map(|candidate| RankedCandidate {
            result: scorer.score(candidate, job),
            candidate_details: candidate.clone(),
        })
        .collect();

    ranked.sort_by(|a, b| b.result.match_score.total_cmp(&a.result.match_score));
    ranked
}
