// src/store/ignore.rs
use glob::{MatchOptions, Pattern};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{LinkerError, Result};

pub const IGNORE_FILE_NAME: &str = ".zlinkignore";

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

#[derive(Debug)]
struct Rule {
    globs: Vec<Pattern>,
    negated: bool,
}

/// Gitignore-flavoured rules deciding which vault paths are never listed.
///
/// Paths are matched relative to the vault root with `/` separators. The last
/// rule that matches a path decides, so `!keep.md` after `*.md` re-includes it.
#[derive(Debug, Default)]
pub struct IgnorePatterns {
    rules: Vec<Rule>,
}

impl IgnorePatterns {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one line of an ignore file.
    ///
    /// Supported forms:
    /// - `#` comments and blank lines (skipped)
    /// - `!pattern` negation
    /// - `dir/` directories, at any depth
    /// - `/path` anchored to the vault root
    /// - `name` bare names, matched at any depth
    ///
    /// # Errors
    ///
    /// Returns an error if the line is not valid glob syntax.
    #[inline]
    pub fn add_line(&mut self, line: &str) -> Result<()> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let (line, negated) = line
            .strip_prefix('!')
            .map_or((line, false), |rest| (rest, true));
        let anchored = line.starts_with('/') || line.trim_end_matches('/').contains('/');
        let body = line.trim_start_matches('/');
        let (body, directory_only) = body
            .strip_suffix('/')
            .map_or((body, false), |dir| (dir, true));

        let prefix = if anchored { "" } else { "**/" };
        let mut sources = vec![format!("{prefix}{body}/**")];
        if !directory_only {
            sources.push(format!("{prefix}{body}"));
        }

        let globs = sources
            .into_iter()
            .map(|source| {
                Pattern::new(&source).map_err(|source_err| LinkerError::Pattern {
                    pattern: line.to_owned(),
                    source: source_err,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        self.rules.push(Rule { globs, negated });
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn is_ignored(&self, relative_path: &str) -> bool {
        let mut ignored = false;
        for rule in &self.rules {
            if rule
                .globs
                .iter()
                .any(|glob| glob.matches_with(relative_path, MATCH_OPTIONS))
            {
                ignored = !rule.negated;
            }
        }
        ignored
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Loads rules from the nearest `.zlinkignore`, searching `dir` and then its parents.
///
/// # Errors
///
/// Returns an error if an ignore file exists but cannot be read or holds an
/// invalid pattern.
pub fn load_ignore_patterns(dir: &Path) -> Result<IgnorePatterns> {
    let mut patterns = IgnorePatterns::new();
    let mut visited = HashSet::new();
    let mut current = Some(dir);

    while let Some(current_dir) = current {
        if !visited.insert(current_dir.to_path_buf()) {
            break;
        }
        let ignore_file = current_dir.join(IGNORE_FILE_NAME);
        match fs::read_to_string(&ignore_file) {
            Ok(content) => {
                for line in content.lines() {
                    patterns.add_line(line)?;
                }
                tracing::debug!(file = %ignore_file.display(), "loaded ignore rules");
                break;
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => {
                return Err(LinkerError::Read {
                    path: ignore_file.display().to_string(),
                    source: err,
                });
            }
        }
        current = current_dir.parent();
    }

    Ok(patterns)
}
