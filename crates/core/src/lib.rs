//! Core domain types, corruption detection, content sanitization,
//! and title inference for slide text recovery.

pub mod corruption;
pub mod error;
pub mod sanitize;
pub mod title;
pub mod types;

pub use corruption::{has_encoding_issues, CorruptionDetector};
pub use error::{Error, Result};
pub use sanitize::ContentSanitizer;
pub use title::{TitleExtractor, UNTITLED_SLIDE};
pub use types::{Deck, RawDocument, Slide};
