//! C Subset Analyzer
//!
//! Line-oriented error classifier for a constrained C subset.
//!
//! This library provides:
//! - An ordered line-grammar rule table with a fallback classifier
//! - Whole-document structural balance checks
//! - Semantic predicates bound to a canonical reference program
//! - TOML rule profiles for stricter or looser rule variants
//!
//! The entry point is [`validate`], which takes raw source text and
//! returns an [`ErrorReport`] with lexical, syntactic, and semantic
//! error buckets.

pub mod config;
pub mod parser;
pub mod profile;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use profile::{Profile, ProfileRegistry};
pub use validation::{Category, ClassifiedError, ErrorReport, validate, validate_with_profile};

/// The canonical weekly-payroll reference program that the embedded
/// `payroll` profile's predicates are written against.
pub const REFERENCE_PROGRAM: &str = include_str!("../resources/reference/payroll.c");
