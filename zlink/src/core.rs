// src/core.rs
pub mod classifier;
pub mod exclusion;
pub mod link_index;
pub mod registry;
pub mod rewrite;
pub mod tokenizer;
