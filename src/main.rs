use std::io::Read;

use anyhow::{Context, Result, bail};

use c_subset_analyzer::config::{Config, OutputFormat};
use c_subset_analyzer::profile::{DEFAULT_PROFILE, ProfileRegistry};
use c_subset_analyzer::{ErrorReport, REFERENCE_PROGRAM, validate_with_profile};

fn main() -> Result<()> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    if config.sample {
        print!("{}", REFERENCE_PROGRAM);
        return Ok(());
    }

    let mut registry = ProfileRegistry::with_embedded_profiles()?;
    for dir in &config.profile_dirs {
        if dir.is_dir() {
            let loaded = registry.load_profile_dir(dir)?;
            log::debug!("loaded {} profile(s) from {}", loaded, dir.display());
        }
    }

    let profile_name = config.cli_profile.as_deref().unwrap_or(DEFAULT_PROFILE);
    if !registry.set_active_profile(profile_name) {
        bail!(
            "unknown profile '{}' (available: {})",
            profile_name,
            registry.list_profiles().join(", ")
        );
    }
    let profile = registry
        .get_active_profile()
        .context("no active profile")?;

    let text = match &config.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read standard input")?;
            buffer
        }
    };

    let report = validate_with_profile(&text, profile);

    match config.format {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if !report.is_clean() {
        std::process::exit(1);
    }
    Ok(())
}

/// Render the three category lists the way the validator's original
/// front end did: one section per non-empty bucket, or a single
/// all-clear line.
fn render_text(report: &ErrorReport) {
    if report.empty {
        println!("Input is empty.");
        return;
    }

    if report.is_clean() {
        println!("No errors found.");
        return;
    }

    let sections = [
        ("Lexical errors:", &report.lexical),
        ("Syntactic errors:", &report.syntactic),
        ("Semantic errors:", &report.semantic),
    ];

    for (header, errors) in sections {
        if errors.is_empty() {
            continue;
        }
        println!("{}", header);
        for error in errors {
            println!("  - {}", error.message);
        }
    }
}
