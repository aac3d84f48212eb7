// src/error.rs
use std::io;
use thiserror::Error;

/// Errors surfaced by the linker library.
///
/// Per-document read and write failures during a pass are recorded in the pass
/// report instead of being returned; these variants cover the failures that
/// stop an operation before it touches any document.
#[derive(Error, Debug)]
pub enum LinkerError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to list documents under {root}: {source}")]
    List {
        root: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to save state to {path}: {source}")]
    State {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid ignore pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("invalid keyword matcher: {0}")]
    Matcher(#[from] regex::Error),

    #[error("unknown keyword `{0}`")]
    UnknownKeyword(String),
}

pub type Result<T> = std::result::Result<T, LinkerError>;
