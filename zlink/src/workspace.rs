// src/workspace.rs
use std::path::PathBuf;

use crate::core::classifier::{self, Classification};
use crate::core::link_index::{self, LinkIndex};
use crate::core::registry;
use crate::core::rewrite::{RewritePass, Rewriter};
use crate::error::{LinkerError, Result};
use crate::models::candidate::{self, clear_selection, selected_keywords};
use crate::models::{Candidate, LinkerState, Progress, RewriteReport};
use crate::store::DocumentStore;

/// A document store together with the linker state that describes it.
///
/// Every operation takes `&mut self`, so a rewrite pass, the candidate-list
/// update that follows it and the state save all finish before the next
/// operation can begin.
#[derive(Debug)]
pub struct Workspace<S: DocumentStore> {
    store: S,
    state: LinkerState,
    link_index: LinkIndex,
    state_path: Option<PathBuf>,
}

impl<S: DocumentStore> Workspace<S> {
    #[inline]
    #[must_use]
    pub fn new(store: S, state: LinkerState) -> Self {
        Self {
            store,
            state,
            link_index: LinkIndex::new(),
            state_path: None,
        }
    }

    /// Saves the state to `path` after every operation that changes it.
    #[inline]
    #[must_use]
    pub fn with_state_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.state_path = Some(path.into());
        self
    }

    #[inline]
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &LinkerState {
        &self.state
    }

    /// Link index from the most recent classification.
    #[inline]
    #[must_use]
    pub const fn link_index(&self) -> &LinkIndex {
        &self.link_index
    }

    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (S, LinkerState) {
        (self.store, self.state)
    }

    /// Changes the exclusion path and page size, then re-classifies.
    ///
    /// # Errors
    ///
    /// Returns an error if the documents cannot be listed or the state cannot be saved.
    #[inline]
    pub fn configure(&mut self, exclusion_path: Option<String>, page_size: Option<usize>) -> Result<()> {
        if let Some(exclusion_path) = exclusion_path {
            self.state.exclusion_path = exclusion_path;
        }
        if let Some(page_size) = page_size {
            self.state.page_size = page_size;
        }
        self.classify()?;
        Ok(())
    }

    /// Regenerates the ranked candidate list from the whole corpus.
    ///
    /// Ignored keywords that are now linked somewhere are dropped from the
    /// ignore list.
    ///
    /// # Errors
    ///
    /// Returns an error if the documents cannot be listed or the state cannot be saved.
    #[inline]
    pub fn classify(&mut self) -> Result<&[Candidate]> {
        let documents = self.store.list_documents()?;
        let Classification {
            candidates,
            link_index,
            ignored,
            released,
            ..
        } = classifier::classify(
            &self.store,
            &documents,
            &self.state.exclusion(),
            &self.state.ignored,
        );
        if !released.is_empty() {
            tracing::info!(keywords = ?released, "linked keywords removed from ignore list");
        }
        self.state.candidates = candidates;
        self.state.ignored = ignored;
        self.link_index = link_index;
        self.persist()?;
        Ok(&self.state.candidates)
    }

    /// Re-reads the corpus for links only, leaving the candidate list as it is.
    ///
    /// # Errors
    ///
    /// Returns an error if the documents cannot be listed.
    #[inline]
    pub fn refresh_link_index(&mut self) -> Result<&LinkIndex> {
        let documents = self.store.list_documents()?;
        self.link_index = link_index::scan(&self.store, &documents, &self.state.exclusion());
        Ok(&self.link_index)
    }

    /// The current page of candidates, re-checked against links and ignores.
    #[inline]
    #[must_use]
    pub fn page(&self) -> Vec<&Candidate> {
        classifier::page(
            &self.state.candidates,
            self.state.page_size,
            &self.link_index,
            &self.state.ignored,
        )
    }

    /// Marks a candidate as selected or not.
    ///
    /// # Errors
    ///
    /// Returns an error if no candidate has that keyword.
    #[inline]
    pub fn select(&mut self, keyword: &str, selected: bool) -> Result<&[Candidate]> {
        if !candidate::select(&mut self.state.candidates, keyword, selected) {
            return Err(LinkerError::UnknownKeyword(keyword.to_owned()));
        }
        Ok(&self.state.candidates)
    }

    /// Marks an ignored entry as selected or not.
    ///
    /// # Errors
    ///
    /// Returns an error if no ignored entry has that keyword.
    #[inline]
    pub fn select_ignored(&mut self, keyword: &str, selected: bool) -> Result<&[Candidate]> {
        if !candidate::select(&mut self.state.ignored, keyword, selected) {
            return Err(LinkerError::UnknownKeyword(keyword.to_owned()));
        }
        Ok(&self.state.ignored)
    }

    /// Links every bare occurrence of the selected candidates across the corpus.
    ///
    /// `on_progress` sees one event per eligible document. Afterwards the
    /// selection is cleared and the corpus is re-classified.
    ///
    /// # Errors
    ///
    /// Returns an error if the keyword matcher cannot be built, the documents
    /// cannot be listed, or the state cannot be saved. Per-document failures
    /// are reported in the returned [`RewriteReport`] instead.
    #[inline]
    pub fn link_selected(&mut self, on_progress: impl FnMut(&Progress)) -> Result<RewriteReport> {
        let keywords = selected_keywords(&self.state.candidates);
        let report = self.run_pass(Rewriter::link(&keywords)?, on_progress)?;
        clear_selection(&mut self.state.candidates);
        tracing::info!(keywords = ?keywords, changed = report.changed.len(), failed = report.failed.len(), "link pass finished");
        self.classify()?;
        Ok(report)
    }

    /// Turns `[[keyword]]` back into plain text across the corpus.
    ///
    /// The keywords are dropped from the candidate list and the corpus is
    /// re-classified.
    ///
    /// # Errors
    ///
    /// Returns an error if the keyword matcher cannot be built, the documents
    /// cannot be listed, or the state cannot be saved.
    #[inline]
    pub fn unlink(&mut self, keywords: &[String], on_progress: impl FnMut(&Progress)) -> Result<RewriteReport> {
        let report = self.run_pass(Rewriter::unlink(keywords)?, on_progress)?;
        self.state
            .candidates
            .retain(|entry| !keywords.contains(&entry.keyword));
        tracing::info!(keywords = ?keywords, changed = report.changed.len(), failed = report.failed.len(), "unlink pass finished");
        self.classify()?;
        Ok(report)
    }

    /// Moves the selected candidates to the ignore list and re-classifies.
    ///
    /// # Errors
    ///
    /// Returns an error if the documents cannot be listed or the state cannot be saved.
    #[inline]
    pub fn ignore_selected(&mut self) -> Result<Vec<String>> {
        let moved = registry::ignore(&mut self.state.candidates, &mut self.state.ignored);
        tracing::info!(keywords = ?moved, "ignored");
        self.classify()?;
        Ok(moved)
    }

    /// Moves the selected ignored entries back to the candidates and re-classifies.
    ///
    /// # Errors
    ///
    /// Returns an error if the documents cannot be listed or the state cannot be saved.
    #[inline]
    pub fn unignore_selected(&mut self) -> Result<Vec<String>> {
        let moved = registry::unignore(&mut self.state.candidates, &mut self.state.ignored);
        tracing::info!(keywords = ?moved, "unignored");
        self.classify()?;
        Ok(moved)
    }

    fn run_pass(&mut self, rewriter: Rewriter, mut on_progress: impl FnMut(&Progress)) -> Result<RewriteReport> {
        let documents = self.store.list_documents()?;
        let filter = self.state.exclusion();
        let mut pass = RewritePass::new(&mut self.store, &documents, &filter, rewriter);
        for progress in pass.by_ref() {
            on_progress(&progress);
        }
        Ok(pass.finish())
    }

    fn persist(&self) -> Result<()> {
        match &self.state_path {
            Some(path) => self.state.save(path),
            None => Ok(()),
        }
    }
}
