// src/models/state.rs
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use crate::core::exclusion::ExclusionFilter;
use crate::error::{LinkerError, Result};
use crate::models::Candidate;
use crate::utils::write_atomic;

pub const STATE_FILE_NAME: &str = ".zlink.toml";
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Everything the linker keeps between runs.
///
/// Candidates are regenerated by every classification pass; ignored entries
/// and the exclusion path survive passes and are re-applied on each one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkerState {
    pub exclusion_path: String,
    pub page_size: usize,
    pub candidates: Vec<Candidate>,
    pub ignored: Vec<Candidate>,
}

impl Default for LinkerState {
    fn default() -> Self {
        Self {
            exclusion_path: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            candidates: Vec::new(),
            ignored: Vec::new(),
        }
    }
}

impl LinkerState {
    #[inline]
    #[must_use]
    pub fn exclusion(&self) -> ExclusionFilter {
        ExclusionFilter::new(self.exclusion_path.clone())
    }

    #[inline]
    #[must_use]
    pub fn is_ignored(&self, keyword: &str) -> bool {
        self.ignored.iter().any(|entry| entry.keyword == keyword)
    }

    /// Loads the state stored at `path`.
    ///
    /// A missing, unreadable or malformed file yields the default state; the
    /// latter two are logged.
    #[inline]
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no saved state, using defaults");
                return Self::default();
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "unreadable state, using defaults");
                return Self::default();
            }
        };

        toml::from_str(&content).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), error = %err, "malformed state, using defaults");
            Self::default()
        })
    }

    /// Writes the state to `path`, replacing any previous file atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be serialized or written.
    #[inline]
    pub fn save(&self, path: &Path) -> Result<()> {
        let to_state_error = |source: io::Error| LinkerError::State {
            path: path.display().to_string(),
            source,
        };
        let content = toml::to_string_pretty(self)
            .map_err(|err| to_state_error(io::Error::new(io::ErrorKind::InvalidData, err)))?;
        write_atomic(path, &content).map_err(to_state_error)
    }
}
