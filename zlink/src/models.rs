// src/models.rs
pub mod candidate;
pub mod progress;
pub mod state;

pub use candidate::Candidate;
pub use progress::{DocumentOutcome, Progress, RewriteReport};
pub use state::{DEFAULT_PAGE_SIZE, LinkerState, STATE_FILE_NAME};
