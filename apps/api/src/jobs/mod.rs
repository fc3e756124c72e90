// Job postings owned by employers.

pub mod handlers;
pub mod store;
