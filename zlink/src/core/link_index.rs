// src/core/link_index.rs
use std::collections::HashMap;

use crate::core::exclusion::ExclusionFilter;
use crate::core::tokenizer::link_targets;
use crate::store::{DocumentHandle, DocumentStore};

/// Keywords already written as link syntax somewhere in the corpus.
///
/// Each keyword keeps the documents it is linked from, in first-seen order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LinkIndex {
    entries: Vec<LinkedKeyword>,
    positions: HashMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedKeyword {
    pub keyword: String,
    pub origins: Vec<String>,
}

impl LinkIndex {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records every link target found in `text` as originating from `path`.
    #[inline]
    pub fn record_document(&mut self, path: &str, text: &str) {
        for target in link_targets(text) {
            self.record(target, path);
        }
    }

    #[inline]
    pub fn record(&mut self, keyword: &str, path: &str) {
        if let Some(&position) = self.positions.get(keyword) {
            if let Some(entry) = self.entries.get_mut(position) {
                if !entry.origins.iter().any(|origin| origin == path) {
                    entry.origins.push(path.to_owned());
                }
            }
            return;
        }
        self.positions.insert(keyword.to_owned(), self.entries.len());
        self.entries.push(LinkedKeyword {
            keyword: keyword.to_owned(),
            origins: vec![path.to_owned()],
        });
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, keyword: &str) -> bool {
        self.positions.contains_key(keyword)
    }

    #[inline]
    #[must_use]
    pub fn origins(&self, keyword: &str) -> Option<&[String]> {
        self.positions
            .get(keyword)
            .and_then(|&position| self.entries.get(position))
            .map(|entry| entry.origins.as_slice())
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &LinkedKeyword> {
        self.entries.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds the link index alone, without counting tokens.
///
/// Unreadable documents are logged and skipped.
pub fn scan<S: DocumentStore + ?Sized>(
    store: &S,
    documents: &[DocumentHandle],
    filter: &ExclusionFilter,
) -> LinkIndex {
    let mut index = LinkIndex::new();
    for document in filter.eligible(documents) {
        match store.read(document) {
            Ok(text) => index.record_document(document.path(), &text),
            Err(err) => {
                tracing::warn!(path = document.path(), error = %err, "skipping unreadable document");
            }
        }
    }
    index
}
