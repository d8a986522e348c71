//! Segmentation strategy cascade and slide assembly.
//!
//! Recovers an ordered list of slides from a raw deck-export text blob:
//! a corruption check up front, a priority-ordered cascade of splitting
//! strategies, then per-segment sanitization and title inference.

pub mod assembler;
pub mod extractor;
pub mod segmenter;
pub mod strategies;

pub use assembler::{SlideAssembler, PLACEHOLDER_CONTENT};
pub use extractor::{extract, SlideExtractor};
pub use segmenter::Segmenter;
