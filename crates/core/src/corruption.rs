//! Detection of binary leakage and encoding damage in decoded text.
//!
//! Slide-deck exports frequently arrive as text files that are really a
//! binary container read through a lossy decoder. Segmenting such a blob
//! finds structure that is not there, so the pipeline checks a bounded
//! sample up front and degrades to a single slide when the sample looks
//! like mis-decoded bytes rather than prose.

/// Default number of leading characters to sample.
pub const DEFAULT_SAMPLE_SIZE: usize = 500;

/// Default problematic-character ratio above which text counts as
/// corrupted. 0.10 balances rejecting genuine binary against false
/// positives on symbol-heavy but legitimate text.
pub const DEFAULT_THRESHOLD: f64 = 0.10;

/// Ratio used by [`has_encoding_issues`] for short strings such as
/// title candidates.
const TITLE_ISSUE_THRESHOLD: f64 = 0.15;

/// Classifies a text sample as genuine text vs. binary/corrupted.
#[derive(Debug, Clone)]
pub struct CorruptionDetector {
    /// Maximum number of leading characters to examine.
    sample_size: usize,

    /// Problematic ratio above which the text counts as corrupted.
    threshold: f64,
}

impl Default for CorruptionDetector {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl CorruptionDetector {
    /// Create a detector with the default sample size and threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of leading characters to sample.
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size.max(1);
        self
    }

    /// Set the problematic-character ratio threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Check whether the text looks like mis-decoded binary content.
    ///
    /// Examines at most `sample_size` leading characters; scanning an
    /// entire large document adds cost without changing the verdict.
    /// Empty input is not corrupted.
    pub fn is_corrupted(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }

        let mut sampled = 0usize;
        let mut problematic = 0usize;

        for c in text.chars().take(self.sample_size) {
            sampled += 1;
            if is_problematic_char(c) {
                problematic += 1;
            }
        }

        let ratio = problematic as f64 / sampled as f64;
        if ratio > self.threshold {
            log::debug!(
                "corruption check: {}/{} problematic chars (ratio {:.3} > {:.3})",
                problematic,
                sampled,
                ratio,
                self.threshold
            );
            true
        } else {
            false
        }
    }
}

/// Whether a character indicates binary leakage or encoding damage.
///
/// Unpaired surrogates in the source bytes cannot survive into a Rust
/// string; lossy decoding turns them into U+FFFD, which is why the
/// replacement character is treated as a corruption signal here.
fn is_problematic_char(c: char) -> bool {
    match c {
        '\t' | '\n' | '\r' => false,
        c if (c as u32) < 0x20 => true,
        // DEL and the C1 control range
        '\u{7F}'..='\u{9F}' => true,
        '\u{FFFD}' | '\u{FFFE}' | '\u{FFFF}' => true,
        _ => false,
    }
}

/// Whole-string encoding check for short candidates such as titles.
///
/// A title regex can capture garbled text even from a document that
/// passed the sampled document-level check, so title candidates are
/// re-checked in full with a wider problematic set: the Specials block
/// and variation selectors also count against the ratio here.
pub fn has_encoding_issues(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }

    let mut total = 0usize;
    let mut problematic = 0usize;

    for c in text.chars() {
        total += 1;
        if is_problematic_char(c)
            || matches!(c, '\u{FFF0}'..='\u{FFFF}')
            || matches!(c, '\u{FE00}'..='\u{FE0F}')
        {
            problematic += 1;
        }
    }

    problematic as f64 / total as f64 > TITLE_ISSUE_THRESHOLD
}
