// src/core/exclusion.rs
use crate::store::DocumentHandle;

/// Path-substring rule removing documents from scanning and rewriting.
///
/// An empty substring excludes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionFilter {
    substring: String,
}

impl ExclusionFilter {
    #[inline]
    #[must_use]
    pub fn new(substring: impl Into<String>) -> Self {
        Self {
            substring: substring.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn substring(&self) -> &str {
        &self.substring
    }

    #[inline]
    #[must_use]
    pub fn is_excluded(&self, path: &str) -> bool {
        !self.substring.is_empty() && path.contains(&self.substring)
    }

    /// Documents that take part in a classification or rewrite pass.
    pub fn eligible<'d>(
        &'d self,
        documents: &'d [DocumentHandle],
    ) -> impl Iterator<Item = &'d DocumentHandle> + 'd {
        documents
            .iter()
            .filter(move |doc| !self.is_excluded(doc.path()))
    }
}
