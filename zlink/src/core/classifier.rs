// src/core/classifier.rs
use std::collections::{HashMap, HashSet};

use crate::core::exclusion::ExclusionFilter;
use crate::core::link_index::LinkIndex;
use crate::core::tokenizer::tokenize;
use crate::models::Candidate;
use crate::store::{DocumentHandle, DocumentStore};

/// Running corpus-wide count of bare tokens, in first-seen order.
///
/// The first sighting of a keyword inserts it with a count of one; later
/// sightings increment it.
#[derive(Debug, Default)]
pub struct Tally {
    entries: Vec<Candidate>,
    positions: HashMap<String, usize>,
}

impl Tally {
    #[inline]
    pub fn observe(&mut self, keyword: &str) {
        if let Some(entry) = self
            .positions
            .get(keyword)
            .and_then(|&position| self.entries.get_mut(position))
        {
            entry.count = entry.count.saturating_add(1);
            return;
        }
        self.positions.insert(keyword.to_owned(), self.entries.len());
        self.entries.push(Candidate::new(keyword, 1));
    }

    /// Ranked candidates: linked keywords dropped, highest count first, ties in
    /// first-seen order.
    #[inline]
    #[must_use]
    pub fn into_ranked(self, link_index: &LinkIndex) -> Vec<Candidate> {
        let mut candidates: Vec<Candidate> = self
            .entries
            .into_iter()
            .filter(|candidate| !link_index.contains(&candidate.keyword))
            .collect();
        candidates.sort_by(|a, b| b.count.cmp(&a.count));
        candidates
    }
}

/// Result of one classification pass over the corpus.
#[derive(Debug, Default)]
pub struct Classification {
    pub candidates: Vec<Candidate>,
    pub link_index: LinkIndex,
    /// Ignored entries that are not linked anywhere.
    pub ignored: Vec<Candidate>,
    /// Ignored keywords dropped from the ignore list because they are now linked.
    pub released: Vec<String>,
    pub scanned: usize,
    pub skipped: Vec<String>,
}

/// Builds the ranked candidate list from every eligible document.
///
/// Each document is read once: its links feed the link index and its bare
/// tokens feed the tally. Tokens that are ignored are never counted; tokens
/// linked anywhere in the corpus are dropped once all documents are read.
/// A linked keyword also leaves the ignore list, so linked, candidate and
/// ignored keywords never overlap. Unreadable documents are logged and skipped.
pub fn classify<S: DocumentStore + ?Sized>(
    store: &S,
    documents: &[DocumentHandle],
    filter: &ExclusionFilter,
    ignored: &[Candidate],
) -> Classification {
    let ignored_keywords: HashSet<&str> = ignored.iter().map(|entry| entry.keyword.as_str()).collect();
    let mut tally = Tally::default();
    let mut classification = Classification::default();

    for document in filter.eligible(documents) {
        let text = match store.read(document) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(path = document.path(), error = %err, "skipping unreadable document");
                classification.skipped.push(document.path().to_owned());
                continue;
            }
        };

        let tokens = tokenize(&text);
        for link in &tokens.links {
            classification.link_index.record(link, document.path());
        }
        for token in tokens.bare.iter().filter(|token| !ignored_keywords.contains(**token)) {
            tally.observe(token);
        }
        classification.scanned = classification.scanned.saturating_add(1);
    }

    classification.candidates = tally.into_ranked(&classification.link_index);
    for entry in ignored {
        if classification.link_index.contains(&entry.keyword) {
            classification.released.push(entry.keyword.clone());
        } else {
            classification.ignored.push(entry.clone());
        }
    }
    tracing::info!(
        scanned = classification.scanned,
        skipped = classification.skipped.len(),
        candidates = classification.candidates.len(),
        linked = classification.link_index.len(),
        released = classification.released.len(),
        "classification finished"
    );
    classification
}

/// The first `page_size` candidates that are still neither linked nor ignored.
///
/// The check runs at display time, so entries that went stale since the last
/// classification are hidden without shortening the page.
#[inline]
#[must_use]
pub fn page<'c>(
    candidates: &'c [Candidate],
    page_size: usize,
    link_index: &LinkIndex,
    ignored: &[Candidate],
) -> Vec<&'c Candidate> {
    candidates
        .iter()
        .filter(|candidate| {
            !link_index.contains(&candidate.keyword)
                && !ignored.iter().any(|entry| entry.keyword == candidate.keyword)
        })
        .take(page_size)
        .collect()
}
