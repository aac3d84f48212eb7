// src/utils.rs
use std::fs;
use std::io::{self, Write as _};
use std::path::{Component, Path};
use tempfile::NamedTempFile;

use crate::core::link_index::LinkIndex;
use crate::models::{Candidate, DocumentOutcome, Progress, RewriteReport};

pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

/// Writes `contents` to a temporary file next to `path`, then renames it over `path`.
///
/// Symlinks are resolved first, so the link stays in place and its target
/// gets the new text. An existing file keeps its permissions.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be created, written or persisted.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let permissions = fs::metadata(&target).ok().map(|metadata| metadata.permissions());
    let parent = target
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;

    let mut temp_file = NamedTempFile::new_in(parent)?;
    temp_file.write_all(contents.as_bytes())?;
    temp_file.flush()?;
    if let Some(permissions) = permissions {
        temp_file.as_file().set_permissions(permissions)?;
    }
    temp_file.persist(&target)?;
    Ok(())
}

/// Joins the normal components of `path` with `/`, whatever the platform separator.
pub fn to_slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

pub fn print_candidates<'c>(entries: impl IntoIterator<Item = &'c Candidate>) {
    for entry in entries {
        println!("{:8}  {}", entry.count, entry.keyword);
    }
}

pub fn print_links(index: &LinkIndex) {
    for entry in index.iter() {
        println!("[[{}]]  {}", entry.keyword, entry.origins.join(", "));
    }
}

pub fn print_progress(progress: &Progress) {
    let marker = match progress.outcome {
        DocumentOutcome::Changed => "updated",
        DocumentOutcome::Unchanged => return,
        DocumentOutcome::ReadFailed => "unreadable",
        DocumentOutcome::WriteFailed => "not saved",
    };
    println!(
        "[{}/{}] {marker}  {}",
        progress.processed, progress.total, progress.path
    );
}

pub fn print_report(action: &str, report: &RewriteReport) {
    if report.is_success() {
        println!(
            "{action} finished: {} of {} notes updated",
            report.changed.len(),
            report.total
        );
    } else {
        println!(
            "{action} finished with {} failed notes: {} of {} notes updated",
            report.failed.len(),
            report.changed.len(),
            report.total
        );
    }
}
