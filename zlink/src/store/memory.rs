// src/store/memory.rs
use std::collections::{BTreeMap, HashSet};
use std::io;

use crate::error::Result;
use crate::store::{DocumentHandle, DocumentStore};

/// Document store held entirely in memory, ordered by path.
///
/// Reads and writes can be made to fail per path, and every successful write
/// is logged, which lets callers observe exactly which documents a pass touched.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    documents: BTreeMap<String, String>,
    failing_reads: HashSet<String>,
    failing_writes: HashSet<String>,
    writes: Vec<String>,
}

impl MemoryStore {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn with_document(mut self, path: &str, text: &str) -> Self {
        self.insert(path, text);
        self
    }

    #[inline]
    pub fn insert(&mut self, path: &str, text: &str) {
        self.documents.insert(path.to_owned(), text.to_owned());
    }

    #[inline]
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.documents.get(path).map(String::as_str)
    }

    #[inline]
    pub fn fail_reads_for(&mut self, path: &str) {
        self.failing_reads.insert(path.to_owned());
    }

    #[inline]
    pub fn fail_writes_for(&mut self, path: &str) {
        self.failing_writes.insert(path.to_owned());
    }

    /// Paths of successful writes, in the order they happened.
    #[inline]
    #[must_use]
    pub fn writes(&self) -> &[String] {
        &self.writes
    }
}

impl<P: Into<String>, T: Into<String>> FromIterator<(P, T)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        Self {
            documents: iter
                .into_iter()
                .map(|(path, text)| (path.into(), text.into()))
                .collect(),
            ..Self::default()
        }
    }
}

impl DocumentStore for MemoryStore {
    fn list_documents(&self) -> Result<Vec<DocumentHandle>> {
        Ok(self.documents.keys().map(DocumentHandle::new).collect())
    }

    fn read(&self, document: &DocumentHandle) -> io::Result<String> {
        if self.failing_reads.contains(document.path()) {
            return Err(io::Error::other(format!(
                "read refused for {}",
                document.path()
            )));
        }
        self.documents.get(document.path()).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no document at {}", document.path()),
            )
        })
    }

    fn write(&mut self, document: &DocumentHandle, text: &str) -> io::Result<()> {
        if self.failing_writes.contains(document.path()) {
            return Err(io::Error::other(format!(
                "write refused for {}",
                document.path()
            )));
        }
        self.documents
            .insert(document.path().to_owned(), text.to_owned());
        self.writes.push(document.path().to_owned());
        Ok(())
    }
}
