// src/models/candidate.rs
use serde::{Deserialize, Serialize};

/// A keyword with its corpus-wide bare occurrence count.
///
/// Used for both suggested candidates and ignored entries. `selected` is
/// transient selection state and is cleared by every action that consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub keyword: String,
    pub count: usize,
    #[serde(default)]
    pub selected: bool,
}

impl Candidate {
    #[inline]
    #[must_use]
    pub fn new(keyword: impl Into<String>, count: usize) -> Self {
        Self {
            keyword: keyword.into(),
            count,
            selected: false,
        }
    }
}

/// Sets the selection flag of the entry named `keyword`.
///
/// Returns `false` if no entry has that keyword.
#[inline]
pub fn select(entries: &mut [Candidate], keyword: &str, selected: bool) -> bool {
    entries
        .iter_mut()
        .find(|entry| entry.keyword == keyword)
        .map(|entry| entry.selected = selected)
        .is_some()
}

#[inline]
#[must_use]
pub fn selected_keywords(entries: &[Candidate]) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| entry.selected)
        .map(|entry| entry.keyword.clone())
        .collect()
}

#[inline]
pub fn clear_selection(entries: &mut [Candidate]) {
    for entry in entries {
        entry.selected = false;
    }
}
