// src/services/matcher.rs

//! Whole-word, case-insensitive keyword matching.
//!
//! A keyword matches when it occurs in the text with no word character
//! (alphanumeric or `_`) directly before or after the occurrence. Unlike a
//! bare `\b` anchor this also holds for keywords that start or end with
//! punctuation, such as `C++` or `.NET`.

use regex::{Regex, RegexBuilder};

/// Check whether `keyword` occurs in `text` as a whole word, ignoring case.
///
/// An empty keyword never matches.
pub fn matches(text: &str, keyword: &str) -> bool {
    match Pattern::new(keyword) {
        Some(pattern) => pattern.is_match(text),
        None => false,
    }
}

/// A compiled set of keywords.
///
/// An empty set matches every text.
#[derive(Debug, Clone, Default)]
pub struct KeywordMatcher {
    patterns: Vec<Pattern>,
}

impl KeywordMatcher {
    /// Compile keywords once for repeated matching. Blank keywords are ignored.
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Self {
        let patterns = keywords
            .iter()
            .filter_map(|k| Pattern::new(k.as_ref()))
            .collect();
        Self { patterns }
    }

    /// True when no keywords are configured.
    pub fn is_pass_through(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// True if the set is empty or any keyword matches `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.is_pass_through() || self.first_match(text).is_some()
    }

    /// The first keyword, in configured order, that matches `text`.
    pub fn first_match(&self, text: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|p| p.is_match(text))
            .map(|p| p.keyword.as_str())
    }
}

#[derive(Debug, Clone)]
struct Pattern {
    keyword: String,
    regex: Regex,
}

impl Pattern {
    fn new(keyword: &str) -> Option<Self> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return None;
        }

        // An escaped literal always compiles.
        let regex = RegexBuilder::new(&regex::escape(keyword))
            .case_insensitive(true)
            .build()
            .ok()?;

        Some(Self {
            keyword: keyword.to_string(),
            regex,
        })
    }

    /// Scan every occurrence, including overlapping ones, until one has
    /// non-word neighbours on both sides.
    fn is_match(&self, text: &str) -> bool {
        let mut start = 0;
        while let Some(m) = self.regex.find_at(text, start) {
            let before = text[..m.start()].chars().next_back();
            let after = text[m.end()..].chars().next();
            if !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char) {
                return true;
            }

            // Resume one character past the start of this occurrence.
            match text[m.start()..].chars().next() {
                Some(c) => start = m.start() + c.len_utf8(),
                None => break,
            }
        }
        false
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
