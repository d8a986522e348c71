//! Content sanitization for recovered slide text.
//!
//! Removes control characters and Unicode noise left behind by lossy
//! decoding, and strips leftover segmentation markers from the front of
//! a slide so that delimiters used for splitting never leak into
//! content. Sanitization is pure, total, and idempotent.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Leading marker boilerplate left over from extraction, e.g.
/// "Slide 3:", "[Slide 3]", "### Slide 3", "=== Slide 3 ===".
static LEADING_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:={2,}\s*slide \d+\s*={2,}|\*\*slide \d+\*\*|\[slide \d+\]|#{1,6} slide \d+|slide \d+:?)\s*",
    )
    .unwrap()
});

/// Sanitizer for extracted slide content.
///
/// Intra-slide whitespace is deliberately left alone: collapsing runs
/// of spaces would destroy indented layouts that survived the export.
#[derive(Debug, Clone, Default)]
pub struct ContentSanitizer;

impl ContentSanitizer {
    /// Create a new sanitizer.
    pub fn new() -> Self {
        Self
    }

    /// Sanitize one piece of slide content.
    ///
    /// - Drops control characters other than tab, LF, and CR
    ///   (including DEL and the C1 range).
    /// - Drops U+FFFD and the U+FFFE/U+FFFF noncharacters.
    /// - NFC-normalizes what remains.
    /// - Strips leading segmentation-marker boilerplate until none is
    ///   left, so stacked markers cannot survive one pass and break
    ///   idempotence.
    /// - Trims outer whitespace.
    pub fn sanitize(&self, text: &str) -> String {
        let cleaned: String = text
            .chars()
            .filter(|&c| !is_noise_char(c))
            .nfc()
            .collect();

        let mut rest = cleaned.trim_start();
        loop {
            match LEADING_MARKER_REGEX.find(rest) {
                Some(m) if m.start() == 0 => {
                    rest = rest[m.end()..].trim_start();
                }
                _ => break,
            }
        }

        rest.trim_end().to_string()
    }
}

/// Control characters and Unicode noise removed by sanitization.
fn is_noise_char(c: char) -> bool {
    match c {
        '\t' | '\n' | '\r' => false,
        c if (c as u32) < 0x20 => true,
        '\u{7F}'..='\u{9F}' => true,
        '\u{FFFD}' | '\u{FFFE}' | '\u{FFFF}' => true,
        _ => false,
    }
}
