// src/core/rewrite.rs
use regex::{Captures, Regex};
use std::borrow::Cow;

pub mod pattern;

use crate::core::exclusion::ExclusionFilter;
use crate::core::tokenizer::CharClass;
use crate::error::Result;
use crate::models::{DocumentOutcome, Progress, RewriteReport};
use crate::store::{DocumentHandle, DocumentStore};
use pattern::{KEYWORD_GROUP, link_matcher, unlink_matcher};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteMode {
    /// Wrap bare occurrences in `[[...]]`.
    Link,
    /// Turn `[[keyword]]` back into `keyword`.
    Unlink,
}

/// Text transformation for one set of keywords, compiled once per pass.
#[derive(Debug, Clone)]
pub struct Rewriter {
    mode: RewriteMode,
    matcher: Option<Regex>,
}

impl Rewriter {
    /// # Errors
    ///
    /// Returns an error if the keyword matcher cannot be compiled.
    #[inline]
    pub fn link(keywords: &[String]) -> Result<Self> {
        Ok(Self {
            mode: RewriteMode::Link,
            matcher: link_matcher(keywords)?,
        })
    }

    /// # Errors
    ///
    /// Returns an error if the keyword matcher cannot be compiled.
    #[inline]
    pub fn unlink(keywords: &[String]) -> Result<Self> {
        Ok(Self {
            mode: RewriteMode::Unlink,
            matcher: unlink_matcher(keywords)?,
        })
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> RewriteMode {
        self.mode
    }

    /// Rewrites every occurrence of the keywords in `text` in a single scan.
    ///
    /// When linking, an occurrence only counts if it is a whole token: the
    /// characters around it must not continue the same run of word or CJK
    /// characters. Existing links are skipped whole, so linking twice changes
    /// nothing.
    #[inline]
    #[must_use]
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let Some(matcher) = &self.matcher else {
            return Cow::Borrowed(text);
        };
        match self.mode {
            RewriteMode::Link => matcher.replace_all(text, |caps: &Captures<'_>| {
                match caps.name(KEYWORD_GROUP) {
                    Some(found) if is_whole_token(text, found.start(), found.end()) => {
                        format!("[[{}]]", found.as_str())
                    }
                    _ => caps[0].to_owned(),
                }
            }),
            RewriteMode::Unlink => matcher.replace_all(text, format!("${{{KEYWORD_GROUP}}}")),
        }
    }
}

fn is_whole_token(text: &str, start: usize, end: usize) -> bool {
    let Some(found) = text.get(start..end) else {
        return false;
    };
    let before = text.get(..start).and_then(|head| head.chars().next_back());
    let after = text.get(end..).and_then(|tail| tail.chars().next());
    let continues = |edge: Option<char>, neighbour: Option<char>| {
        edge.zip(neighbour).is_some_and(|(edge, neighbour)| {
            let class = CharClass::of(edge);
            class != CharClass::Other && CharClass::of(neighbour) == class
        })
    };
    !continues(found.chars().next(), before) && !continues(found.chars().next_back(), after)
}

/// A rewrite over every eligible document, yielding one [`Progress`] per document.
///
/// Each document is read, rewritten in memory and written back only if its
/// text changed. A failed read or write is logged and recorded, and the pass
/// moves on; documents already written stay written.
#[derive(Debug)]
pub struct RewritePass<'s, S: DocumentStore + ?Sized> {
    store: &'s mut S,
    rewriter: Rewriter,
    queue: std::vec::IntoIter<DocumentHandle>,
    report: RewriteReport,
}

impl<'s, S: DocumentStore + ?Sized> RewritePass<'s, S> {
    #[inline]
    pub fn new(
        store: &'s mut S,
        documents: &[DocumentHandle],
        filter: &ExclusionFilter,
        rewriter: Rewriter,
    ) -> Self {
        let queue: Vec<DocumentHandle> = filter.eligible(documents).cloned().collect();
        let report = RewriteReport {
            total: queue.len(),
            ..RewriteReport::default()
        };
        Self {
            store,
            rewriter,
            queue: queue.into_iter(),
            report,
        }
    }

    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.report.total
    }

    /// Runs the remaining documents and returns the summary.
    #[inline]
    #[must_use]
    pub fn finish(mut self) -> RewriteReport {
        self.by_ref().for_each(drop);
        self.report
    }

    fn process(&mut self, document: &DocumentHandle) -> DocumentOutcome {
        let text = match self.store.read(document) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(path = document.path(), error = %err, "read failed, document skipped");
                return DocumentOutcome::ReadFailed;
            }
        };

        let rewritten = self.rewriter.apply(&text);
        if rewritten.as_ref() == text.as_str() {
            return DocumentOutcome::Unchanged;
        }

        match self.store.write(document, &rewritten) {
            Ok(()) => {
                tracing::debug!(path = document.path(), mode = ?self.rewriter.mode(), "document rewritten");
                DocumentOutcome::Changed
            }
            Err(err) => {
                tracing::warn!(path = document.path(), error = %err, "write failed, change lost");
                DocumentOutcome::WriteFailed
            }
        }
    }
}

impl<S: DocumentStore + ?Sized> Iterator for RewritePass<'_, S> {
    type Item = Progress;

    fn next(&mut self) -> Option<Progress> {
        let document = self.queue.next()?;
        let outcome = self.process(&document);
        let progress = Progress {
            processed: self.report.processed.saturating_add(1),
            total: self.report.total,
            path: document.path().to_owned(),
            outcome,
        };
        self.report.record(&progress);
        Some(progress)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.queue.size_hint()
    }
}
