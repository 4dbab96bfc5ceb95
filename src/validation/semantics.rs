//! Semantic predicate pass.
//!
//! Evaluates the profile's ordered predicate table against the raw text.
//! Predicates are document-level presence/absence tests bound to one
//! canonical reference program; each failing predicate contributes its
//! canned message, with no line number.

use crate::profile::Profile;

use super::report::{Category, ErrorReport};

pub fn check_semantics(text: &str, profile: &Profile, report: &mut ErrorReport) {
    for predicate in &profile.predicates {
        if !predicate.holds(text) {
            report.push(Category::Semantic, predicate.message.clone());
        }
    }
}
