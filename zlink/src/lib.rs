// src/lib.rs
pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod store;
pub mod utils;
pub mod workspace;

pub use cli::{Args, Command, run};
pub use crate::core::classifier::{Classification, classify, page};
pub use crate::core::exclusion::ExclusionFilter;
pub use crate::core::link_index::LinkIndex;
pub use crate::core::rewrite::{RewritePass, Rewriter};
pub use error::{LinkerError, Result};
pub use models::{Candidate, DocumentOutcome, LinkerState, Progress, RewriteReport};
pub use store::{DocumentHandle, DocumentStore, MemoryStore, VaultStore};
pub use workspace::Workspace;
