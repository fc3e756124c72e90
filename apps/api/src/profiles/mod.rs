// User records: registration after external sign-in, candidate profile edits,
// and the candidate pool employers browse.

pub mod handlers;
pub mod store;
