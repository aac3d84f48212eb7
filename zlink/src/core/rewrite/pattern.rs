// src/core/rewrite/pattern.rs
use regex::Regex;

use crate::error::Result;

/// Characters escaped before a keyword is placed in a pattern.
pub const REGEX_METACHARACTERS: [char; 16] = [
    '-', '/', '\\', '^', '$', '*', '+', '?', '.', '(', ')', '|', '[', ']', '{', '}',
];

/// Name of the capture group holding the matched keyword.
pub const KEYWORD_GROUP: &str = "keyword";

/// Prefixes every character of [`REGEX_METACHARACTERS`] with a backslash.
#[inline]
#[must_use]
pub fn escape_keyword(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if REGEX_METACHARACTERS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Escaped keywords joined with `|`, longest first so that `foo-bar` is tried
/// before `foo` at the same position.
fn alternation(keywords: &[String]) -> Option<String> {
    let mut keywords: Vec<&str> = keywords
        .iter()
        .map(String::as_str)
        .filter(|keyword| !keyword.is_empty())
        .collect();
    if keywords.is_empty() {
        return None;
    }
    keywords.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    keywords.dedup();
    Some(
        keywords
            .into_iter()
            .map(escape_keyword)
            .collect::<Vec<_>>()
            .join("|"),
    )
}

/// Matches either a whole existing link, which is left alone, or a bare
/// occurrence of one of `keywords` in the `keyword` group.
///
/// Returns `None` when there is nothing to match.
///
/// # Errors
///
/// Returns an error if the assembled pattern is rejected by the regex engine.
#[inline]
pub fn link_matcher(keywords: &[String]) -> Result<Option<Regex>> {
    alternation(keywords)
        .map(|alternatives| {
            Regex::new(&format!(
                r"\[\[.+?\]\]|(?P<{KEYWORD_GROUP}>{alternatives})"
            ))
        })
        .transpose()
        .map_err(Into::into)
}

/// Matches `[[keyword]]` for exactly one of `keywords`.
///
/// # Errors
///
/// Returns an error if the assembled pattern is rejected by the regex engine.
#[inline]
pub fn unlink_matcher(keywords: &[String]) -> Result<Option<Regex>> {
    alternation(keywords)
        .map(|alternatives| {
            Regex::new(&format!(
                r"\[\[(?P<{KEYWORD_GROUP}>{alternatives})\]\]"
            ))
        })
        .transpose()
        .map_err(Into::into)
}
