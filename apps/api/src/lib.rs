//! Job Match API: candidates and employers, job postings, applications, and a
//! weighted match scorer that ranks candidate/job pairs.

pub mod applications;
pub mod auth;
pub mod config;
pub mod db;
pub mod descriptions;
pub mod errors;
pub mod extract;
pub mod jobs;
pub mod matching;
pub mod models;
pub mod profiles;
pub mod routes;
pub mod state;

pub use routes::build_router;
