//! Independent segmentation strategies.
//!
//! Each strategy takes the full document text and returns candidate
//! segments. A result of one segment or fewer means the strategy found
//! no structure; the orchestrator then moves on to the next one.

use regex::Regex;
use std::sync::LazyLock;

/// Known slide-delimiter shapes, most specific first.
///
/// Explicit "Slide N" markers carry high confidence; bare punctuation
/// runs come last because they can split on unrelated formatting.
static MARKER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // "=== Slide N ===" banner
        Regex::new(r"\n\s*==+\s*Slide \d+\s*==+\s*\n").unwrap(),
        // "[Slide N]" line
        Regex::new(r"\n\s*\[Slide \d+\]\s*\n").unwrap(),
        // "**Slide N**" bold line
        Regex::new(r"\n\s*\*\*Slide \d+\*\*\s*\n").unwrap(),
        // "# Slide N" heading line
        Regex::new(r"\n\s*#{1,6} Slide \d+\s*\n").unwrap(),
        // "Slide N:" line
        Regex::new(r"\n\s*Slide \d+:?\s*\n").unwrap(),
        // "slide: N" line, any case
        Regex::new(r"(?i)\n\s*slide:?\s*\d+\s*\n").unwrap(),
        // "N. Slide" numbered-list line
        Regex::new(r"\n\s*\d+\. Slide\s*\n").unwrap(),
        // Generic separator lines: runs of the same punctuation
        Regex::new(r"\n\s*-{3,}\s*\n").unwrap(),
        Regex::new(r"\n\s*\*{3,}\s*\n").unwrap(),
        Regex::new(r"\n\s*_{3,}\s*\n").unwrap(),
        Regex::new(r"\n\s*={3,}\s*\n").unwrap(),
    ]
});

/// Markdown headings of level 1-3 on their own line.
static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,3} [^\n]+$").unwrap());

/// Blank-line runs tried in decreasing strength: at least three blank
/// lines, then at least two.
static BLANK_RUN_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"\n(?:[ \t]*\n){3,}").unwrap(),
        Regex::new(r"\n(?:[ \t]*\n){2,}").unwrap(),
    ]
});

/// Any blank-line paragraph boundary.
static PARAGRAPH_BREAK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:[ \t]*\n)+").unwrap());

/// Split on the first known delimiter pattern that occurs in the text.
pub fn split_by_markers(text: &str) -> Vec<String> {
    for pattern in MARKER_PATTERNS.iter() {
        if !pattern.is_match(text) {
            continue;
        }

        let pieces: Vec<String> = pattern
            .split(text)
            .filter(|piece| !piece.trim().is_empty())
            .map(|piece| piece.to_string())
            .collect();

        if pieces.len() > 1 {
            log::debug!("marker pattern {:?} matched", pattern.as_str());
            return pieces;
        }
    }

    Vec::new()
}

/// Split at markdown headings; each heading starts a new segment.
///
/// Text before the first heading becomes its own leading segment when
/// non-empty. Fewer than two headings means no structural signal.
pub fn split_by_headings(text: &str) -> Vec<String> {
    let starts: Vec<usize> = HEADING_REGEX.find_iter(text).map(|m| m.start()).collect();
    if starts.len() < 2 {
        return Vec::new();
    }

    let mut segments = Vec::with_capacity(starts.len() + 1);

    let lead = &text[..starts[0]];
    if !lead.trim().is_empty() {
        segments.push(lead.trim().to_string());
    }

    for (idx, &start) in starts.iter().enumerate() {
        let end = starts.get(idx + 1).copied().unwrap_or(text.len());
        segments.push(text[start..end].trim().to_string());
    }

    segments
}

/// Split on runs of blank lines, strongest run first.
///
/// Pieces must carry more than `min_len` non-whitespace characters so
/// that minor spacing is not mistaken for a slide boundary.
pub fn split_by_blank_runs(text: &str, min_len: usize) -> Vec<String> {
    for pattern in BLANK_RUN_PATTERNS.iter() {
        let pieces: Vec<String> = pattern
            .split(text)
            .filter(|piece| non_whitespace_len(piece) > min_len)
            .map(|piece| piece.to_string())
            .collect();

        if pieces.len() > 1 {
            return pieces;
        }
    }

    Vec::new()
}

/// Split on any paragraph boundary, with a higher minimum length.
///
/// The most permissive strategy, used only when nothing more structured
/// matched.
pub fn split_by_paragraphs(text: &str, min_len: usize) -> Vec<String> {
    let pieces: Vec<String> = PARAGRAPH_BREAK_REGEX
        .split(text)
        .filter(|piece| non_whitespace_len(piece) > min_len)
        .map(|piece| piece.to_string())
        .collect();

    if pieces.len() > 1 {
        pieces
    } else {
        Vec::new()
    }
}

fn non_whitespace_len(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_banner_style() {
        let text = "===== Slide 1 =====\nAlpha\n===== Slide 2 =====\nBeta";
        let pieces = split_by_markers(text);
        assert_eq!(pieces.len(), 2);
        assert!(pieces[0].contains("Alpha"));
        assert!(pieces[1].contains("Beta"));
    }

    #[test]
    fn test_markers_bracket_style() {
        let text = "Intro\n[Slide 2]\nMiddle\n[Slide 3]\nEnd";
        let pieces = split_by_markers(text);
        assert_eq!(pieces, vec!["Intro", "Middle", "End"]);
    }

    #[test]
    fn test_markers_horizontal_rule() {
        let text = "First part\n---\nSecond part\n-----\nThird part";
        let pieces = split_by_markers(text);
        assert_eq!(pieces, vec!["First part", "Second part", "Third part"]);
    }

    #[test]
    fn test_specific_marker_wins_over_generic() {
        // Both "[Slide N]" and "---" occur; the explicit marker is
        // earlier in the pattern list, so the rule line stays inside a
        // segment instead of causing an extra split.
        let text = "a\n[Slide 2]\nb\n---\nc\n[Slide 3]\nd";
        let pieces = split_by_markers(text);
        assert_eq!(pieces.len(), 3);
        assert!(pieces[1].contains("---"));
    }

    #[test]
    fn test_markers_none_found() {
        assert!(split_by_markers("just a plain paragraph of text").is_empty());
    }

    #[test]
    fn test_markers_single_piece_is_nothing() {
        // The separator occurs but everything after it is blank.
        assert!(split_by_markers("only content\n---\n   ").is_empty());
    }

    #[test]
    fn test_headings_basic() {
        let text = "# A\ntext1\n# B\ntext2\n# C\ntext3";
        let pieces = split_by_headings(text);
        assert_eq!(pieces, vec!["# A\ntext1", "# B\ntext2", "# C\ntext3"]);
    }

    #[test]
    fn test_headings_leading_text_kept() {
        let text = "preamble before anything\n# One\nbody\n## Two\nbody";
        let pieces = split_by_headings(text);
        assert_eq!(pieces.len(), 3);
        assert_eq!(pieces[0], "preamble before anything");
    }

    #[test]
    fn test_single_heading_is_nothing() {
        assert!(split_by_headings("# Lonely\nbody text").is_empty());
    }

    #[test]
    fn test_deep_headings_ignored() {
        // Level 4+ headings are not slide boundaries.
        assert!(split_by_headings("#### a\nx\n#### b\ny").is_empty());
    }

    #[test]
    fn test_blank_runs_strong_separator() {
        let text = "first slide body text\n\n\n\nsecond slide body text";
        let pieces = split_by_blank_runs(text, 10);
        assert_eq!(pieces.len(), 2);
    }

    #[test]
    fn test_blank_runs_fall_back_to_weaker() {
        let text = "first slide body text\n\n\nsecond slide body text";
        let pieces = split_by_blank_runs(text, 10);
        assert_eq!(pieces.len(), 2);
    }

    #[test]
    fn test_blank_runs_short_pieces_filtered() {
        let text = "ok\n\n\n\nno";
        assert!(split_by_blank_runs(text, 10).is_empty());
    }

    #[test]
    fn test_blank_runs_with_spaces_on_blank_lines() {
        let text = "first slide body text\n  \n \n  \nsecond slide body text";
        let pieces = split_by_blank_runs(text, 10);
        assert_eq!(pieces.len(), 2);
    }

    #[test]
    fn test_paragraphs_split() {
        let text =
            "a paragraph with enough words in it\n\nanother paragraph with enough words in it";
        let pieces = split_by_paragraphs(text, 20);
        assert_eq!(pieces.len(), 2);
    }

    #[test]
    fn test_paragraphs_min_length_filter() {
        let text = "short one\n\nshort two";
        assert!(split_by_paragraphs(text, 20).is_empty());
    }

    #[test]
    fn test_paragraphs_no_breaks() {
        assert!(split_by_paragraphs("one single line of text here", 20).is_empty());
    }
}
