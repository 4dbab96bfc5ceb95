//! Core validation entry points and the per-line classifier.
//!
//! A line is accepted when any profile rule matches it, or when it is a
//! bare `{` or `}`. Unmatched lines go through the fallback cascade, which
//! always produces exactly one verdict. The cascade's precedence is part
//! of the observable behavior and must stay as-is, even where later
//! branches are unreachable for some input shapes.

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::{SourceLine, split_source};
use crate::profile::{Profile, default_profile};

use super::report::{Category, ErrorReport};
use super::{semantics, structure};

// Characters a line may contain before the fallback calls it a lexical
// error. Fixed alongside the cascade itself, not profile configuration.
static ILLEGAL_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_#<>\s{};]").expect("valid character class"));

/// Validate source text against the embedded default profile.
///
/// Any string is valid input. If the trimmed text is empty, the report
/// has `empty` set and no checks run. No state is kept between calls.
pub fn validate(text: &str) -> ErrorReport {
    validate_with_profile(text, default_profile())
}

/// Validate source text against a specific rule profile
pub fn validate_with_profile(text: &str, profile: &Profile) -> ErrorReport {
    if text.trim().is_empty() {
        return ErrorReport::empty_input();
    }

    let mut report = ErrorReport::new();

    for line in split_source(text) {
        classify_line(&line, profile, &mut report);
    }

    structure::check_structure(text, &mut report);
    semantics::check_semantics(text, profile, &mut report);

    report
}

/// Classify one non-blank line, appending at most one fallback verdict
/// plus the independent include-directive check.
fn classify_line(line: &SourceLine, profile: &Profile, report: &mut ErrorReport) {
    let content = line.content.as_str();

    let well_formed = content == "{" || content == "}" || profile.matches_any_rule(content);

    if !well_formed {
        // Fallback cascade: first applicable branch wins.
        if content.starts_with("int main") {
            report.push(
                Category::Syntactic,
                format!(
                    "Syntax error on line {}: malformed entry point declaration: {}",
                    line.number, content
                ),
            );
        } else if ILLEGAL_CHAR.is_match(content) || content.starts_with("return") {
            let reason = if ILLEGAL_CHAR.is_match(content) {
                "illegal character in statement"
            } else {
                "malformed return statement"
            };
            report.push(
                Category::Lexical,
                format!(
                    "Lexical error on line {}: {}: {}",
                    line.number, reason, content
                ),
            );
        } else if !content.ends_with(';') {
            report.push(
                Category::Syntactic,
                format!(
                    "Syntax error on line {}: missing statement terminator: {}",
                    line.number, content
                ),
            );
        } else {
            report.push(
                Category::Semantic,
                format!(
                    "Semantic error on line {}: unrecognized construct: {}",
                    line.number, content
                ),
            );
        }
    }

    // Independent of the cascade: a line that starts like an include
    // directive but fails the strict shape gets an additional syntactic
    // error, even when the line was accepted or already classified.
    if content.starts_with("#include")
        && let Some(rule) = profile.rule("include")
        && !rule.pattern.is_match(content)
    {
        report.push(
            Category::Syntactic,
            format!(
                "Syntax error on line {}: extraneous tokens in include directive: {}",
                line.number, content
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_program_is_clean() {
        let report = validate("int main() {\n  return 0;\n}");
        assert!(!report.empty);
        assert!(report.is_clean());
    }

    #[test]
    fn test_empty_input_short_circuits() {
        for input in ["", "   \n  ", "\t\n\n"] {
            let report = validate(input);
            assert!(report.empty);
            assert!(report.is_clean());
        }
    }

    #[test]
    fn test_malformed_entry_point_is_syntactic() {
        let report = validate("int main( {\nreturn 0;\n}");
        assert_eq!(report.syntactic.len(), 2); // cascade verdict + paren imbalance
        assert!(
            report.syntactic[0]
                .message
                .contains("malformed entry point declaration")
        );
        assert!(report.syntactic[0].message.contains("line 1"));
    }

    #[test]
    fn test_illegal_character_is_lexical() {
        let report = validate("x @ y;");
        assert_eq!(report.lexical.len(), 1);
        assert!(report.lexical[0].message.contains("illegal character"));
        assert!(report.lexical[0].message.contains("line 1"));
        assert!(report.syntactic.is_empty());
        assert!(report.semantic.is_empty());
    }

    #[test]
    fn test_malformed_return_is_lexical() {
        // `return x;` fails the return shape (integer literal required)
        // but contains no illegal character; the cascade still calls it
        // lexical, ahead of the terminator and semantic branches.
        let report = validate("return x;");
        assert_eq!(report.lexical.len(), 1);
        assert!(
            report.lexical[0]
                .message
                .contains("malformed return statement")
        );
    }

    #[test]
    fn test_missing_terminator_is_syntactic() {
        let report = validate("int x\nint y;");
        assert_eq!(report.syntactic.len(), 1);
        assert!(
            report.syntactic[0]
                .message
                .contains("missing statement terminator")
        );
        assert!(report.syntactic[0].message.contains("int x"));
    }

    #[test]
    fn test_unrecognized_construct_is_semantic() {
        // Ends with `;`, only permitted characters, matches no rule.
        let report = validate("int;");
        assert_eq!(report.semantic.len(), 1);
        assert!(
            report.semantic[0]
                .message
                .contains("unrecognized construct")
        );
    }

    #[test]
    fn test_exactly_one_fallback_verdict_per_line() {
        // One unmatched line must land in exactly one bucket.
        let report = validate("int x\n");
        assert_eq!(report.total(), 1);
    }

    #[test]
    fn test_include_extra_tokens_is_additive() {
        let report = validate("#include <stdio.h> extra");

        // The dot makes the fallback verdict lexical; the include check
        // adds its own syntactic error on top.
        assert_eq!(report.lexical.len(), 1);
        assert!(
            report
                .syntactic
                .iter()
                .any(|e| e.message.contains("extraneous tokens in include directive"))
        );
        assert!(
            report
                .syntactic
                .iter()
                .any(|e| e.message.contains("line 1"))
        );
    }

    #[test]
    fn test_well_formed_include_has_no_errors() {
        let report = validate("#include <stdio.h>");
        assert!(report.is_clean());
    }

    #[test]
    fn test_line_numbers_count_blank_lines() {
        let report = validate("int main() {\n\n\nint x\n}");
        assert_eq!(report.syntactic.len(), 1);
        assert!(report.syntactic[0].message.contains("line 4"));
    }

    #[test]
    fn test_structural_check_runs_even_when_lines_match() {
        // Every line matches a rule, but the braces are unbalanced.
        let report = validate("int main() {\nreturn 0;");
        assert_eq!(report.syntactic.len(), 1);
        assert!(report.syntactic[0].message.contains("braces"));
    }

    #[test]
    fn test_idempotence() {
        let input = "#include <stdio.h> extra\nint main() {\nx @ y;\nreturn 0;\n}";
        assert_eq!(validate(input), validate(input));
    }

    #[test]
    fn test_accepted_constructs() {
        let accepted = [
            "#include <stdio.h>",
            "int x = 1, y = 2;",
            "float rate;",
            "int main() {",
            "for (i = 0; i < 10; i += 1) {",
            "if (x > 1) {",
            "else {",
            "printf(\"hello\");",
            "printf(\"%d\", x);",
            "scanf(\"%d\", &x);",
            "return 0;",
            "x = y + 1;",
            "x += y;",
            "continue;",
            "{",
            "}",
        ];

        for line in accepted {
            let mut report = ErrorReport::new();
            classify_line(
                &SourceLine {
                    number: 1,
                    content: line.to_string(),
                },
                default_profile(),
                &mut report,
            );
            assert!(report.is_clean(), "expected '{}' to be accepted", line);
        }
    }
}
