// src/core/tokenizer.rs
use regex::Regex;
use std::sync::LazyLock;

/// Inclusive code point ranges treated as CJK text.
///
/// Runs of these characters form their own token class, separate from
/// alphanumeric words, so `Rust中文` yields `Rust` and `中文`.
const CJK_RANGES: &[(u32, u32)] = &[
    (0x1100, 0x11FF),   // Hangul Jamo
    (0x3040, 0x309F),   // Hiragana
    (0x30A0, 0x30FF),   // Katakana
    (0x3130, 0x318F),   // Hangul Compatibility Jamo
    (0x31F0, 0x31FF),   // Katakana Phonetic Extensions
    (0x3400, 0x4DBF),   // CJK Extension A
    (0x4E00, 0x9FFF),   // CJK Unified Ideographs
    (0xAC00, 0xD7AF),   // Hangul Syllables
    (0xF900, 0xFAFF),   // CJK Compatibility Ideographs
    (0xFF66, 0xFF9F),   // Halfwidth Katakana
    (0x20000, 0x2EBEF), // CJK Extensions B-F
    (0x30000, 0x323AF), // CJK Extensions G-H
];

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[(.+?)\]\]").expect("link pattern is valid"));

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    let cjk = cjk_class_body();
    Regex::new(&format!(
        r"[{cjk}]+|[\p{{Alphabetic}}\p{{N}}_\-&&[^{cjk}]]+"
    ))
    .expect("token pattern is valid")
});

/// The token class a character belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Word,
    Cjk,
    Other,
}

impl CharClass {
    #[inline]
    #[must_use]
    pub fn of(c: char) -> Self {
        if is_cjk(c) {
            Self::Cjk
        } else if c.is_alphanumeric() || c == '_' || c == '-' {
            Self::Word
        } else {
            Self::Other
        }
    }
}

#[inline]
#[must_use]
pub fn is_cjk(c: char) -> bool {
    let code = u32::from(c);
    CJK_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&code))
}

fn cjk_class_body() -> String {
    CJK_RANGES
        .iter()
        .map(|(start, end)| format!(r"\x{{{start:X}}}-\x{{{end:X}}}"))
        .collect()
}

/// Keywords written as `[[keyword]]`, in order of appearance.
///
/// The inner text is taken verbatim and the first `]]` after a `[[` closes the
/// link, so `[[a [[b]] c]]` yields `a [[b`.
pub fn link_targets(text: &str) -> impl Iterator<Item = &str> {
    LINK_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
}

/// Maximal runs of word characters or of CJK characters, in order of appearance.
///
/// Text inside link syntax is tokenized like any other text; callers filter
/// linked keywords against the corpus-wide link index.
pub fn bare_tokens(text: &str) -> impl Iterator<Item = &str> {
    TOKEN_RE.find_iter(text).map(|m| m.as_str())
}

/// Tokens and link targets of a single document.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Tokens<'t> {
    pub links: Vec<&'t str>,
    pub bare: Vec<&'t str>,
}

#[inline]
#[must_use]
pub fn tokenize(text: &str) -> Tokens<'_> {
    let mut links: Vec<&str> = Vec::new();
    for target in link_targets(text) {
        if !links.contains(&target) {
            links.push(target);
        }
    }
    Tokens {
        links,
        bare: bare_tokens(text).collect(),
    }
}
