// src/store.rs
use std::io;

use crate::error::Result;

pub mod ignore;
pub mod memory;
pub mod vault;

pub use ignore::{IgnorePatterns, load_ignore_patterns};
pub use memory::MemoryStore;
pub use vault::VaultStore;

/// Identifies one document by its `/`-separated path relative to the store root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentHandle {
    path: String,
}

impl DocumentHandle {
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Source of documents for classification and rewriting.
///
/// Only whole documents are read and written. Listing already filters to the
/// document type the store serves.
pub trait DocumentStore {
    /// Lists every document in the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be enumerated at all.
    fn list_documents(&self) -> Result<Vec<DocumentHandle>>;

    /// Reads the full text of a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read as UTF-8 text.
    fn read(&self, document: &DocumentHandle) -> io::Result<String>;

    /// Replaces the full text of a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    fn write(&mut self, document: &DocumentHandle, text: &str) -> io::Result<()>;
}
