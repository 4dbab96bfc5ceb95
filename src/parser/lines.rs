//! Line splitting for raw source text.
//!
//! Lines are matched whole against the rule profile, so all the splitter
//! does is trim each line and remember its original position. Lines that
//! are empty after trimming are dropped here and never faulted.

/// A non-blank line of source text, trimmed for matching
#[derive(Debug, Clone, PartialEq)]
pub struct SourceLine {
    /// 1-based position in the original line sequence
    pub number: usize,
    /// Trimmed line content
    pub content: String,
}

/// Split raw source text into trimmed, numbered lines.
///
/// Blank and whitespace-only lines are skipped, but the surviving lines
/// keep their original 1-based numbers for reporting.
pub fn split_source(text: &str) -> Vec<SourceLine> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(SourceLine {
                    number: idx + 1,
                    content: trimmed.to_string(),
                })
            }
        })
        .collect()
}
