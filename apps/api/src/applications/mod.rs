// Candidate applications to job postings.

pub mod handlers;
pub mod store;
