// src/core/registry.rs
//! Moving keywords between the candidate list and the ignore list.
//!
//! Both moves act on the entries flagged `selected` in the source list and
//! leave every moved entry unselected. Callers re-classify afterwards, since
//! ignore membership changes what the next pass counts.

use crate::models::Candidate;

/// Moves selected candidates to the ignore list.
///
/// An entry already ignored under the same keyword is kept as it is. Returns
/// the keywords taken off the candidate list.
#[inline]
pub fn ignore(candidates: &mut Vec<Candidate>, ignored: &mut Vec<Candidate>) -> Vec<String> {
    let (selected, remaining): (Vec<Candidate>, Vec<Candidate>) =
        candidates.drain(..).partition(|entry| entry.selected);
    *candidates = remaining;

    let mut moved = Vec::with_capacity(selected.len());
    for mut entry in selected {
        entry.selected = false;
        moved.push(entry.keyword.clone());
        if !ignored.iter().any(|existing| existing.keyword == entry.keyword) {
            ignored.push(entry);
        }
    }
    moved
}

/// Moves selected ignored entries back to the candidate list.
///
/// A candidate already listed under the same keyword wins over the returning
/// entry. Returns the keywords taken off the ignore list.
#[inline]
pub fn unignore(candidates: &mut Vec<Candidate>, ignored: &mut Vec<Candidate>) -> Vec<String> {
    let (selected, remaining): (Vec<Candidate>, Vec<Candidate>) =
        ignored.drain(..).partition(|entry| entry.selected);
    *ignored = remaining;

    let mut moved = Vec::with_capacity(selected.len());
    for mut entry in selected {
        entry.selected = false;
        moved.push(entry.keyword.clone());
        if !candidates.iter().any(|existing| existing.keyword == entry.keyword) {
            candidates.push(entry);
        }
    }
    moved
}
