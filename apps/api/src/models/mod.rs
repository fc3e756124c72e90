pub mod application;
pub mod description;
pub mod job;
pub mod user;
