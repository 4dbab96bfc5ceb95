//! Profile Registry
//!
//! Simple in-memory registry of compiled rule profiles, with the two
//! embedded profiles and optional loading from profile directories.

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};

use super::schema::Profile;

/// Name of the embedded default profile (line grammar only)
pub const DEFAULT_PROFILE: &str = "c-subset";

/// Name of the embedded payroll conformance profile
pub const PAYROLL_PROFILE: &str = "payroll";

static EMBEDDED_DEFAULT: LazyLock<Profile> = LazyLock::new(|| {
    Profile::from_toml_str(include_str!("../../resources/profiles/c-subset.toml"))
        .expect("embedded c-subset profile compiles")
});

/// The embedded default profile, compiled once
pub fn default_profile() -> &'static Profile {
    &EMBEDDED_DEFAULT
}

/// In-memory profile registry with one active profile
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: HashMap<String, Profile>,
    active_profile: Option<String>,
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileRegistry {
    pub fn new() -> Self {
        Self {
            profiles: HashMap::new(),
            active_profile: None,
        }
    }

    /// Registry preloaded with the embedded profiles, default active
    pub fn with_embedded_profiles() -> Result<Self> {
        let mut registry = Self::new();
        registry.add_embedded_profiles()?;
        registry.set_active_profile(DEFAULT_PROFILE);
        Ok(registry)
    }

    /// Add a profile to the registry
    pub fn add_profile(&mut self, profile: Profile) {
        self.profiles.insert(profile.name.clone(), profile);
    }

    /// Set the active profile, returning false if it is not registered
    pub fn set_active_profile(&mut self, name: &str) -> bool {
        if self.profiles.contains_key(name) {
            self.active_profile = Some(name.to_string());
            true
        } else {
            false
        }
    }

    /// Get the currently active profile
    pub fn get_active_profile(&self) -> Option<&Profile> {
        self.active_profile
            .as_ref()
            .and_then(|name| self.profiles.get(name))
    }

    /// List all registered profile names
    pub fn list_profiles(&self) -> Vec<&str> {
        self.profiles.keys().map(|s| s.as_str()).collect()
    }

    /// Register the embedded `c-subset` and `payroll` profiles
    pub fn add_embedded_profiles(&mut self) -> Result<()> {
        self.add_profile(default_profile().clone());

        let payroll =
            Profile::from_toml_str(include_str!("../../resources/profiles/payroll.toml"))
                .context("embedded payroll profile failed to compile")?;
        self.add_profile(payroll);

        Ok(())
    }

    /// Load every `*.toml` profile from a directory.
    ///
    /// Files that fail to parse or compile are logged and skipped so one
    /// bad file cannot take down the registry. Returns the number of
    /// profiles loaded.
    pub fn load_profile_dir(&mut self, dir: &Path) -> Result<usize> {
        let mut loaded = 0;

        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("failed to read profile directory {}", dir.display()))?;

        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
                continue;
            }

            let text = match std::fs::read_to_string(&path) {
                Ok(text) => text,
                Err(e) => {
                    log::warn!("skipping unreadable profile {}: {}", path.display(), e);
                    continue;
                }
            };

            match Profile::from_toml_str(&text) {
                Ok(profile) => {
                    log::info!("loaded profile '{}' from {}", profile.name, path.display());
                    self.add_profile(profile);
                    loaded += 1;
                }
                Err(e) => {
                    log::warn!("skipping invalid profile {}: {:#}", path.display(), e);
                }
            }
        }

        Ok(loaded)
    }
}
