//! Rule Profiles
//!
//! A profile is an ordered table of line-shape rules plus an ordered table
//! of whole-document semantic predicates, loaded from TOML and compiled
//! once into regular expressions.

pub mod registry;
pub mod schema;

pub use registry::{DEFAULT_PROFILE, PAYROLL_PROFILE, ProfileRegistry, default_profile};
pub use schema::{Expect, GrammarRule, PredicateDef, Profile, ProfileFile, RuleDef, SemanticPredicate};
