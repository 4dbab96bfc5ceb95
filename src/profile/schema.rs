//! Profile Schema Types
//!
//! Serde types matching the profile TOML layout, plus the compiled runtime
//! form. Patterns are compiled exactly once when a profile is loaded; the
//! validation path never constructs a regex at runtime.

use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;

/// Root profile file structure (matches TOML)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProfileFile {
    pub profile: ProfileMeta,
    pub rules: Vec<RuleDef>,
    #[serde(default)]
    pub predicates: Vec<PredicateDef>,
}

/// Profile metadata
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProfileMeta {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
}

/// One line-shape rule: a construct name and the pattern a whole trimmed
/// line must match to be accepted as that construct.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RuleDef {
    pub construct: String,
    pub pattern: String,
}

/// Whether a predicate expects its pattern in the document or not
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Expect {
    #[default]
    Present,
    Absent,
}

/// One whole-document semantic predicate with its canned message
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PredicateDef {
    pub pattern: String,
    #[serde(default)]
    pub expect: Expect,
    pub message: String,
}

/// A compiled line-shape rule
#[derive(Debug, Clone)]
pub struct GrammarRule {
    pub construct: String,
    pub pattern: Regex,
}

/// A compiled semantic predicate
#[derive(Debug, Clone)]
pub struct SemanticPredicate {
    pub pattern: Regex,
    pub expect: Expect,
    pub message: String,
}

impl SemanticPredicate {
    /// True when the whole document satisfies this predicate
    pub fn holds(&self, text: &str) -> bool {
        match self.expect {
            Expect::Present => self.pattern.is_match(text),
            Expect::Absent => !self.pattern.is_match(text),
        }
    }
}

/// Runtime profile with all patterns compiled
#[derive(Debug, Clone)]
pub struct Profile {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
    pub rules: Vec<GrammarRule>,
    pub predicates: Vec<SemanticPredicate>,
}

impl Profile {
    /// Compile a parsed profile file into its runtime form
    pub fn compile(file: ProfileFile) -> Result<Self> {
        let rules = file
            .rules
            .into_iter()
            .map(|rule| {
                let pattern = Regex::new(&rule.pattern).with_context(|| {
                    format!("invalid pattern for construct '{}'", rule.construct)
                })?;
                Ok(GrammarRule {
                    construct: rule.construct,
                    pattern,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let predicates = file
            .predicates
            .into_iter()
            .map(|pred| {
                let pattern = Regex::new(&pred.pattern)
                    .with_context(|| format!("invalid predicate pattern '{}'", pred.pattern))?;
                Ok(SemanticPredicate {
                    pattern,
                    expect: pred.expect,
                    message: pred.message,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: file.profile.name,
            version: file.profile.version,
            description: file.profile.description,
            rules,
            predicates,
        })
    }

    /// Parse and compile a profile from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: ProfileFile = toml::from_str(text).context("failed to parse profile TOML")?;
        Self::compile(file)
    }

    /// True when any rule in the table accepts the trimmed line.
    ///
    /// Rule order does not affect acceptance; any match is enough.
    pub fn matches_any_rule(&self, line: &str) -> bool {
        self.rules.iter().any(|rule| rule.pattern.is_match(line))
    }

    /// Find the rule for a construct by name
    pub fn rule(&self, construct: &str) -> Option<&GrammarRule> {
        self.rules.iter().find(|rule| rule.construct == construct)
    }
}
