// Match scoring: five weighted sub-scores per candidate/job pair, plus ranking of
// many pairs for the candidate and employer views.
// Scoring is pure; only the handlers touch storage.

pub mod experience;
pub mod handlers;
pub mod ranking;
pub mod scorer;
pub mod types;
