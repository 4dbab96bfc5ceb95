//! Error report types and the category buckets.

use serde::Serialize;

/// Error category of a classified line or document check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Lexical,
    Syntactic,
    Semantic,
}

/// A single classified error with its formatted message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedError {
    pub category: Category,
    pub message: String,
}

/// The result of one validation run.
///
/// Errors are appended in classification order and never deduplicated,
/// downgraded, or reordered. `empty` is set only when the trimmed input
/// was the empty string, in which case all three buckets are empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub lexical: Vec<ClassifiedError>,
    pub syntactic: Vec<ClassifiedError>,
    pub semantic: Vec<ClassifiedError>,
    pub empty: bool,
}

impl Default for ErrorReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorReport {
    pub fn new() -> Self {
        Self {
            lexical: Vec::new(),
            syntactic: Vec::new(),
            semantic: Vec::new(),
            empty: false,
        }
    }

    /// Report for input whose trimmed text is empty
    pub fn empty_input() -> Self {
        Self {
            empty: true,
            ..Self::new()
        }
    }

    /// Append an error to its category bucket
    pub fn push(&mut self, category: Category, message: String) {
        let error = ClassifiedError { category, message };
        match category {
            Category::Lexical => self.lexical.push(error),
            Category::Syntactic => self.syntactic.push(error),
            Category::Semantic => self.semantic.push(error),
        }
    }

    /// True when all three buckets are empty
    pub fn is_clean(&self) -> bool {
        self.lexical.is_empty() && self.syntactic.is_empty() && self.semantic.is_empty()
    }

    /// Total number of errors across all buckets
    pub fn total(&self) -> usize {
        self.lexical.len() + self.syntactic.len() + self.semantic.len()
    }
}
