//! Assembly of candidate segments into finished slides.

use deck_core::{ContentSanitizer, Slide, TitleExtractor, UNTITLED_SLIDE};

/// Content of the placeholder slide emitted when every candidate
/// sanitized down to nothing.
pub const PLACEHOLDER_CONTENT: &str =
    "No readable text could be recovered from this document.";

/// Turns candidate segments into numbered, titled, sanitized slides.
#[derive(Debug, Clone, Default)]
pub struct SlideAssembler {
    sanitizer: ContentSanitizer,
    titles: TitleExtractor,
}

impl SlideAssembler {
    /// Create an assembler with default sanitizer and title extractor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the title extractor.
    pub fn with_title_extractor(mut self, titles: TitleExtractor) -> Self {
        self.titles = titles;
        self
    }

    /// Assemble slides from candidates, in order.
    ///
    /// Candidates whose sanitized content is empty are dropped (the
    /// count is logged at debug level); slide numbers are assigned by
    /// position in the surviving list, starting at 1. If nothing
    /// survives, a single placeholder slide is emitted instead, so the
    /// result is never empty.
    pub fn assemble(&self, candidates: Vec<String>) -> Vec<Slide> {
        let mut slides = Vec::with_capacity(candidates.len());
        let mut dropped = 0usize;

        for candidate in candidates {
            let content = self.sanitizer.sanitize(&candidate);
            if content.is_empty() {
                dropped += 1;
                continue;
            }

            let title = self.titles.extract(&content);
            slides.push(Slide::new(slides.len() + 1, title, content));
        }

        if dropped > 0 {
            log::debug!("dropped {} segment(s) that sanitized to empty", dropped);
        }

        if slides.is_empty() {
            slides.push(Slide::new(1, UNTITLED_SLIDE, PLACEHOLDER_CONTENT));
        }

        slides
    }
}
