//! Title inference for recovered slides.
//!
//! A slide rarely announces its title; this module guesses one from the
//! leading text using a priority-ordered pattern list, re-checking every
//! candidate for encoding damage before trusting it.

use regex::Regex;
use std::sync::LazyLock;

use crate::corruption::has_encoding_issues;

/// Placeholder title used when nothing usable can be inferred.
pub const UNTITLED_SLIDE: &str = "Untitled Slide";

/// Default maximum title length, including the ellipsis when truncated.
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 80;

/// Title-shape patterns in decreasing order of confidence.
static TITLE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // Markdown heading
        Regex::new(r"(?m)^#{1,3} ([^\n]+)").unwrap(),
        // Bold text at line start
        Regex::new(r"(?m)^\*\*([^*\n]+)\*\*").unwrap(),
        // Underlined text at line start
        Regex::new(r"(?m)^__([^_\n]+)__").unwrap(),
        // All-caps line of reasonable length
        Regex::new(r"(?m)^([A-Z][A-Z \t]{5,})").unwrap(),
        // A short first line is plausibly a title on its own
        Regex::new(r"(?m)^([^\n]{5,60})$").unwrap(),
    ]
});

/// Infers a short human-readable title from slide content.
#[derive(Debug, Clone)]
pub struct TitleExtractor {
    /// Maximum title length; longer candidates are truncated with an
    /// ellipsis.
    max_length: usize,
}

impl Default for TitleExtractor {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_TITLE_LENGTH,
        }
    }
}

impl TitleExtractor {
    /// Create an extractor with the default length bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum title length.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length.max(4);
        self
    }

    /// Extract a title from slide content.
    ///
    /// Never returns an empty string; the worst case is the
    /// [`UNTITLED_SLIDE`] placeholder.
    pub fn extract(&self, content: &str) -> String {
        if has_encoding_issues(content) {
            return UNTITLED_SLIDE.to_string();
        }

        for pattern in TITLE_PATTERNS.iter() {
            let Some(captures) = pattern.captures(content) else {
                continue;
            };
            let Some(candidate) = captures.get(1) else {
                continue;
            };

            // Strip markdown emphasis left inside the capture.
            let title: String = candidate
                .as_str()
                .chars()
                .filter(|c| !matches!(c, '#' | '*' | '_'))
                .collect();
            let title = title.trim();

            // A pattern can still capture garbled text from an
            // otherwise-clean slide; fall through to the next one.
            if title.is_empty() || has_encoding_issues(title) {
                continue;
            }

            return self.truncate(title);
        }

        self.first_words_fallback(content)
    }

    /// Fallback: the first few words of the first line.
    fn first_words_fallback(&self, content: &str) -> String {
        let first_line = content.lines().next().unwrap_or("").trim();
        if has_encoding_issues(first_line) {
            return UNTITLED_SLIDE.to_string();
        }

        let words: Vec<&str> = first_line.split_whitespace().collect();
        let taken = words.iter().take(5).copied().collect::<Vec<_>>().join(" ");

        if taken.len() > 3 && !has_encoding_issues(&taken) {
            if words.len() > 5 {
                self.truncate(&format!("{}...", taken))
            } else {
                self.truncate(&taken)
            }
        } else {
            UNTITLED_SLIDE.to_string()
        }
    }

    /// Bound a title to `max_length` characters, ellipsis-suffixed.
    fn truncate(&self, title: &str) -> String {
        if title.chars().count() <= self.max_length {
            return title.to_string();
        }

        let kept: String = title.chars().take(self.max_length - 3).collect();
        format!("{}...", kept.trim_end())
    }
}
