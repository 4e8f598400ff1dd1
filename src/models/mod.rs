pub mod candidate;
pub mod user;

pub use candidate::{Candidate, NewCandidate, Outcome};
pub use user::{Role, User, UserSummary, Viewer};
