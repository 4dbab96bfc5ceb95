//! Validation Engine
//!
//! Per-line classification against the rule profile, the fallback cascade
//! for unmatched lines, whole-document structural balance checks, and the
//! semantic predicate pass. All outcomes are data in the report; nothing
//! in here can fail.

pub mod engine;
pub mod report;
pub mod semantics;
pub mod structure;

pub use engine::{validate, validate_with_profile};
pub use report::{Category, ClassifiedError, ErrorReport};
