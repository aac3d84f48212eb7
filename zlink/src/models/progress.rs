// src/models/progress.rs

/// What a rewrite pass did to one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentOutcome {
    Changed,
    Unchanged,
    ReadFailed,
    WriteFailed,
}

/// Emitted after each document of a rewrite pass.
///
/// `processed` increases by one per event and ends at `total`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub processed: usize,
    pub total: usize,
    pub path: String,
    pub outcome: DocumentOutcome,
}

/// Summary of a finished rewrite pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteReport {
    pub total: usize,
    pub processed: usize,
    pub changed: Vec<String>,
    pub unchanged: usize,
    pub failed: Vec<String>,
}

impl RewriteReport {
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    #[inline]
    pub fn record(&mut self, progress: &Progress) {
        self.processed = progress.processed;
        match progress.outcome {
            DocumentOutcome::Changed => self.changed.push(progress.path.clone()),
            DocumentOutcome::Unchanged => self.unchanged = self.unchanged.saturating_add(1),
            DocumentOutcome::ReadFailed | DocumentOutcome::WriteFailed => {
                self.failed.push(progress.path.clone());
            }
        }
    }
}
