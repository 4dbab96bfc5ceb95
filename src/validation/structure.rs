//! Structural balance checks over the whole document.
//!
//! Counting-based and order-independent: braces and parentheses must pair
//! up in total, and each quote character must occur an even number of
//! times. One document-level syntactic error per violated symmetry class.

use super::report::{Category, ErrorReport};

pub fn check_structure(text: &str, report: &mut ErrorReport) {
    let mut open_braces = 0usize;
    let mut close_braces = 0usize;
    let mut open_parens = 0usize;
    let mut close_parens = 0usize;
    let mut double_quotes = 0usize;
    let mut single_quotes = 0usize;

    for ch in text.chars() {
        match ch {
            '{' => open_braces += 1,
            '}' => close_braces += 1,
            '(' => open_parens += 1,
            ')' => close_parens += 1,
            '"' => double_quotes += 1,
            '\'' => single_quotes += 1,
            _ => {}
        }
    }

    if open_braces != close_braces {
        report.push(
            Category::Syntactic,
            "Syntax error: unequal number of opening and closing braces.".to_string(),
        );
    }
    if open_parens != close_parens {
        report.push(
            Category::Syntactic,
            "Syntax error: unequal number of opening and closing parentheses.".to_string(),
        );
    }
    if double_quotes % 2 != 0 {
        report.push(
            Category::Syntactic,
            "Syntax error: odd number of double quote characters.".to_string(),
        );
    }
    if single_quotes % 2 != 0 {
        report.push(
            Category::Syntactic,
            "Syntax error: odd number of single quote characters.".to_string(),
        );
    }
}
