//! Source Text Splitter
//!
//! Breaks raw source text into trimmed, numbered lines ahead of
//! classification. No tokenization, no grammar concerns.

pub mod lines;

pub use lines::{SourceLine, split_source};
