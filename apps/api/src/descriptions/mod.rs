// Template-based job-description generator. Independent of the match scorer.

pub mod generator;
pub mod handlers;
pub mod store;
pub mod templates;
