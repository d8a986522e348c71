//! Strategy orchestration: corruption check, cascade, fallback.

use deck_core::CorruptionDetector;

use crate::strategies;

/// Default minimum non-whitespace length for blank-run pieces.
pub const DEFAULT_MIN_SECTION_LEN: usize = 10;

/// Default minimum non-whitespace length for paragraph pieces.
pub const DEFAULT_MIN_PARAGRAPH_LEN: usize = 20;

/// Splits raw document text into candidate segments.
///
/// Strategies run in a fixed priority order and the first one producing
/// at least two candidates wins. Explicit authorial structure (markers,
/// headings) is preferred over typographic guessing (blank runs,
/// paragraphs); when nothing matches, the whole document becomes a
/// single candidate, so the result is never empty.
#[derive(Debug, Clone)]
pub struct Segmenter {
    detector: CorruptionDetector,
    min_section_len: usize,
    min_paragraph_len: usize,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self {
            detector: CorruptionDetector::new(),
            min_section_len: DEFAULT_MIN_SECTION_LEN,
            min_paragraph_len: DEFAULT_MIN_PARAGRAPH_LEN,
        }
    }
}

impl Segmenter {
    /// Create a segmenter with default policy knobs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the corruption detector.
    pub fn with_detector(mut self, detector: CorruptionDetector) -> Self {
        self.detector = detector;
        self
    }

    /// Set the corruption-ratio threshold on the detector.
    pub fn with_corruption_threshold(mut self, threshold: f64) -> Self {
        self.detector = self.detector.with_threshold(threshold);
        self
    }

    /// Set the corruption-check sample size on the detector.
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.detector = self.detector.with_sample_size(sample_size);
        self
    }

    /// Set the minimum piece length for the blank-run strategy.
    pub fn with_min_section_len(mut self, min_len: usize) -> Self {
        self.min_section_len = min_len;
        self
    }

    /// Set the minimum piece length for the paragraph strategy.
    pub fn with_min_paragraph_len(mut self, min_len: usize) -> Self {
        self.min_paragraph_len = min_len;
        self
    }

    /// Split the text into candidate segments.
    ///
    /// Corrupted input short-circuits to a single whole-text candidate:
    /// no strategy can be trusted to find real structure in mis-decoded
    /// bytes.
    pub fn segment(&self, text: &str) -> Vec<String> {
        if self.detector.is_corrupted(text) {
            log::debug!("content looks binary or mis-decoded; skipping segmentation");
            return vec![text.to_string()];
        }

        let cascade: [(&str, fn(&Self, &str) -> Vec<String>); 4] = [
            ("marker patterns", Self::try_markers),
            ("headings", Self::try_headings),
            ("blank-line runs", Self::try_blank_runs),
            ("paragraphs", Self::try_paragraphs),
        ];

        for (name, strategy) in cascade {
            let candidates = strategy(self, text);
            if candidates.len() > 1 {
                log::debug!("{} candidate segments via {}", candidates.len(), name);
                return candidates;
            }
        }

        log::debug!("no structure found; treating the whole document as one segment");
        vec![text.to_string()]
    }

    fn try_markers(&self, text: &str) -> Vec<String> {
        strategies::split_by_markers(text)
    }

    fn try_headings(&self, text: &str) -> Vec<String> {
        strategies::split_by_headings(text)
    }

    fn try_blank_runs(&self, text: &str) -> Vec<String> {
        strategies::split_by_blank_runs(text, self.min_section_len)
    }

    fn try_paragraphs(&self, text: &str) -> Vec<String> {
        strategies::split_by_paragraphs(text, self.min_paragraph_len)
    }
}
