//! Domain types for representing recovered slide content.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::title::UNTITLED_SLIDE;

/// An uploaded document before any processing: a file name plus the raw
/// text blob decoded from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDocument {
    /// Original file name (without path).
    pub file_name: String,

    /// Raw text as decoded by the acquisition layer. May contain
    /// replacement characters if the source bytes were not valid UTF-8.
    pub raw_text: String,
}

impl RawDocument {
    /// Create a raw document from already-decoded text.
    pub fn new(file_name: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            raw_text: raw_text.into(),
        }
    }

    /// Load a document from disk, decoding bytes lossily.
    ///
    /// Non-UTF-8 sequences become U+FFFD replacement characters; the
    /// corruption detector downstream decides whether the result is
    /// usable text.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::InvalidPath(path.display().to_string()))?
            .to_string();

        let bytes = std::fs::read(path)?;
        let raw_text = String::from_utf8_lossy(&bytes).into_owned();

        Ok(Self {
            file_name,
            raw_text,
        })
    }

    /// File name without its extension.
    pub fn stem(&self) -> &str {
        self.file_name
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .filter(|stem| !stem.is_empty())
            .unwrap_or(&self.file_name)
    }
}

/// A single recovered slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// 1-based position in the deck.
    pub number: usize,

    /// Inferred title. Never empty; falls back to a placeholder.
    pub title: String,

    /// Sanitized slide content. Never empty.
    pub content: String,
}

impl Slide {
    /// Create a slide with the given position, title, and content.
    pub fn new(number: usize, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            content: content.into(),
        }
    }
}

/// The result of running extraction over one document: an ordered,
/// never-empty list of slides plus a deck-level title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    /// Original file name the deck was recovered from.
    pub file_name: String,

    /// Deck title: the first slide's title when it is a real one,
    /// otherwise the file name without its extension.
    pub title: String,

    /// Slides in source order, numbered 1..=n.
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Build a deck from assembled slides, deriving the deck title.
    pub fn from_slides(document: &RawDocument, slides: Vec<Slide>) -> Self {
        let title = slides
            .first()
            .map(|s| s.title.as_str())
            .filter(|t| *t != UNTITLED_SLIDE)
            .unwrap_or_else(|| document.stem())
            .to_string();

        Self {
            file_name: document.file_name.clone(),
            title,
            slides,
        }
    }

    /// Number of slides in the deck.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// All slide titles in order.
    pub fn titles(&self) -> Vec<&str> {
        self.slides.iter().map(|s| s.title.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_strips_extension() {
        let doc = RawDocument::new("quarterly-review.pptx.txt", "");
        assert_eq!(doc.stem(), "quarterly-review.pptx");

        let doc = RawDocument::new("notes.md", "");
        assert_eq!(doc.stem(), "notes");
    }

    #[test]
    fn test_stem_without_extension() {
        let doc = RawDocument::new("README", "");
        assert_eq!(doc.stem(), "README");
    }

    #[test]
    fn test_stem_dotfile() {
        // A leading dot is not an extension separator worth honoring.
        let doc = RawDocument::new(".hidden", "");
        assert_eq!(doc.stem(), ".hidden");
    }

    #[test]
    fn test_deck_title_from_first_slide() {
        let doc = RawDocument::new("deck.txt", "");
        let slides = vec![
            Slide::new(1, "Overview", "Overview content"),
            Slide::new(2, "Details", "Detail content"),
        ];
        let deck = Deck::from_slides(&doc, slides);
        assert_eq!(deck.title, "Overview");
    }

    #[test]
    fn test_deck_title_falls_back_to_stem() {
        let doc = RawDocument::new("quarterly-review.txt", "");
        let slides = vec![Slide::new(1, UNTITLED_SLIDE, "garbled")];
        let deck = Deck::from_slides(&doc, slides);
        assert_eq!(deck.title, "quarterly-review");
    }

    #[test]
    fn test_deck_titles_in_order() {
        let doc = RawDocument::new("deck.txt", "");
        let deck = Deck::from_slides(
            &doc,
            vec![
                Slide::new(1, "A", "a"),
                Slide::new(2, "B", "b"),
                Slide::new(3, "C", "c"),
            ],
        );
        assert_eq!(deck.titles(), vec!["A", "B", "C"]);
        assert_eq!(deck.slide_count(), 3);
    }
}
