//! The pipeline entry point: raw document text in, finished deck out.

use deck_core::{Deck, RawDocument, TitleExtractor};

use crate::assembler::SlideAssembler;
use crate::segmenter::Segmenter;

/// The full extraction pipeline.
///
/// A pure, synchronous computation over in-memory strings: total over
/// any input (including the empty string), deterministic, and free of
/// I/O, so running it twice is always safe and the caller may simply
/// discard an unwanted result.
#[derive(Debug, Clone, Default)]
pub struct SlideExtractor {
    segmenter: Segmenter,
    assembler: SlideAssembler,
}

impl SlideExtractor {
    /// Create an extractor with default policy knobs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the corruption-ratio threshold (default 0.10).
    pub fn with_corruption_threshold(mut self, threshold: f64) -> Self {
        self.segmenter = self.segmenter.with_corruption_threshold(threshold);
        self
    }

    /// Set the corruption-check sample size (default 500 chars).
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.segmenter = self.segmenter.with_sample_size(sample_size);
        self
    }

    /// Set the maximum title length.
    pub fn with_max_title_length(mut self, max_length: usize) -> Self {
        self.assembler = self
            .assembler
            .with_title_extractor(TitleExtractor::new().with_max_length(max_length));
        self
    }

    /// Recover an ordered, titled slide list from a raw document.
    pub fn extract(&self, document: &RawDocument) -> Deck {
        log::debug!("extracting slides from {}", document.file_name);

        let candidates = self.segmenter.segment(&document.raw_text);
        let slides = self.assembler.assemble(candidates);

        log::debug!("recovered {} slide(s)", slides.len());
        Deck::from_slides(document, slides)
    }
}

/// Convenience wrapper running the default pipeline over one input.
pub fn extract(file_name: &str, raw_text: &str) -> Deck {
    SlideExtractor::new().extract(&RawDocument::new(file_name, raw_text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::UNTITLED_SLIDE;

    #[test]
    fn test_empty_input_yields_one_slide() {
        let deck = extract("empty.txt", "");
        assert_eq!(deck.slide_count(), 1);
        assert_eq!(deck.slides[0].number, 1);
    }

    #[test]
    fn test_whitespace_input_yields_one_slide() {
        let deck = extract("blank.txt", "  \n\t\n  ");
        assert_eq!(deck.slide_count(), 1);
        assert_eq!(deck.slides[0].number, 1);
    }

    #[test]
    fn test_numbers_have_no_gaps() {
        let deck = extract(
            "deck.txt",
            "# A\ntext1\n# B\ntext2\n# C\ntext3\n# D\ntext4",
        );
        let numbers: Vec<usize> = deck.slides.iter().map(|s| s.number).collect();
        assert_eq!(numbers, (1..=deck.slide_count()).collect::<Vec<_>>());
    }

    #[test]
    fn test_explicit_markers() {
        let deck = extract(
            "deck.txt",
            "===== Slide 1 =====\nA\n===== Slide 2 =====\nB",
        );
        assert_eq!(deck.slide_count(), 2);
        assert_eq!(deck.slides[0].content, "A");
        assert_eq!(deck.slides[1].content, "B");
    }

    #[test]
    fn test_structure_free_input_is_one_slide() {
        let text = "a single sentence without any breaks";
        let deck = extract("deck.txt", text);
        assert_eq!(deck.slide_count(), 1);
        assert_eq!(deck.slides[0].content, text);
    }

    #[test]
    fn test_corrupted_input_is_one_slide() {
        let mut text = String::new();
        for _ in 0..60 {
            text.push('\u{0002}');
        }
        text.push_str("# A\nx\n# B\ny\n# C\nz");

        let deck = extract("deck.bin", &text);
        assert_eq!(deck.slide_count(), 1);
    }

    #[test]
    fn test_titles_preserve_source_order() {
        let deck = extract("deck.txt", "# A\ntext1\n# B\ntext2\n# C\ntext3");
        assert_eq!(deck.titles(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_deck_title_from_first_slide_heading() {
        let deck = extract("deck.txt", "# Overview\nbody\n# Next\nbody");
        assert_eq!(deck.title, "Overview");
    }

    #[test]
    fn test_deck_title_from_file_stem_when_untitled() {
        let deck = extract("quarterly-review.txt", "");
        assert_eq!(deck.slides[0].title, UNTITLED_SLIDE);
        assert_eq!(deck.title, "quarterly-review");
    }

    #[test]
    fn test_determinism() {
        let text = "# A\ntext1\n\n\n\n# B\ntext2";
        let first = extract("deck.txt", text);
        let second = extract("deck.txt", text);
        assert_eq!(first.slides, second.slides);
    }

    #[test]
    fn test_custom_threshold_accepts_noisier_text() {
        // 20% control characters: corrupted at the default threshold,
        // clean at a permissive one.
        let mut text = String::new();
        for _ in 0..10 {
            text.push('\u{0002}');
        }
        text.push_str(&"a".repeat(40));
        text.push_str("\n---\n");
        text.push_str(&"b".repeat(40));

        let strict = SlideExtractor::new();
        let permissive = SlideExtractor::new().with_corruption_threshold(0.5);

        let doc = RawDocument::new("deck.txt", text);
        assert_eq!(strict.extract(&doc).slide_count(), 1);
        assert_eq!(permissive.extract(&doc).slide_count(), 2);
    }
}
