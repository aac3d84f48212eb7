// src/store/vault.rs
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{LinkerError, Result};
use crate::store::ignore::{IgnorePatterns, load_ignore_patterns};
use crate::store::{DocumentHandle, DocumentStore};
use crate::utils::{is_hidden, to_slash_path, write_atomic};

const DOCUMENT_EXTENSION: &str = "md";

/// Markdown notes under a directory on disk.
///
/// Hidden entries are skipped, as are paths matched by the nearest
/// `.zlinkignore`. Writes go through a temporary file and a rename.
#[derive(Debug)]
pub struct VaultStore {
    root: PathBuf,
    ignore_patterns: IgnorePatterns,
}

impl VaultStore {
    /// Opens the vault rooted at `dir`, resolving relative paths against the
    /// current directory.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The current directory cannot be determined
    /// * The ignore patterns file cannot be read or parsed
    #[inline]
    pub fn open(dir: &Path) -> Result<Self> {
        let root = if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            env::current_dir()
                .map_err(|source| LinkerError::List {
                    root: dir.display().to_string(),
                    source,
                })?
                .join(dir)
        };
        let ignore_patterns = load_ignore_patterns(&root)?;
        Ok(Self {
            root,
            ignore_patterns,
        })
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn absolute(&self, document: &DocumentHandle) -> PathBuf {
        document
            .path()
            .split('/')
            .fold(self.root.clone(), |path, part| path.join(part))
    }
}

impl DocumentStore for VaultStore {
    fn list_documents(&self) -> Result<Vec<DocumentHandle>> {
        let mut documents = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        {
            let entry = entry.map_err(|err| LinkerError::List {
                root: self.root.display().to_string(),
                source: io::Error::from(err),
            })?;
            if !entry.file_type().is_file()
                || entry.path().extension().and_then(|ext| ext.to_str()) != Some(DOCUMENT_EXTENSION)
            {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .map_or_else(|_| to_slash_path(entry.path()), to_slash_path);
            if self.ignore_patterns.is_ignored(&relative) {
                tracing::debug!(path = %relative, "ignored by {}", crate::store::ignore::IGNORE_FILE_NAME);
                continue;
            }
            documents.push(DocumentHandle::new(relative));
        }

        documents.sort();
        Ok(documents)
    }

    fn read(&self, document: &DocumentHandle) -> io::Result<String> {
        fs::read_to_string(self.absolute(document))
    }

    fn write(&mut self, document: &DocumentHandle, text: &str) -> io::Result<()> {
        write_atomic(&self.absolute(document), text)
    }
}
