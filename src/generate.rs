// SPDX-License-Identifier: PMPL-1.0-or-later

//! Generate: one full pass from taxonomies to theme resources
//!
//! Fetches both taxonomies, writes the per-locale country messages, the
//! realm settings, the theme properties and the English locale names, then
//! patches the user profile. Writes happen in that order and are not
//! transactional; a failed run is fixed by running again.

use crate::config::GeneratorConfig;
use crate::countries::build_country_list;
use crate::fetch;
use crate::languages::build_locales;
use crate::profile::UserProfile;
use crate::properties;
use crate::realm::RealmSettings;
use crate::types::{Taxonomies, TaxonomyDigests};
use anyhow::{Context, Result};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub created_at: String,
    pub languages_source: String,
    pub countries_source: String,
    pub digests: TaxonomyDigests,
    /// Supported locale codes, ascending
    pub locales: Vec<String>,
    pub country_count: usize,
    /// Taxonomy keys of countries left out for lack of a code
    pub skipped_countries: Vec<String>,
    pub files_written: Vec<PathBuf>,
}

/// Fetch the configured taxonomies and generate every output.
pub fn run(config: &GeneratorConfig) -> Result<GenerationReport> {
    let taxonomies = fetch::fetch_taxonomies(config)?;
    generate(config, &taxonomies)
}

/// Generate every output from already loaded taxonomies.
pub fn generate(config: &GeneratorConfig, taxonomies: &Taxonomies) -> Result<GenerationReport> {
    let mut files_written = Vec::new();

    let (language_list, locale_messages) =
        build_locales(&taxonomies.languages, &taxonomies.countries)?;
    for messages in &locale_messages {
        let path = config.locale_messages_path(&messages.code);
        properties::write_properties(&path, &messages.lines)?;
        log::debug!("wrote {} ({} countries)", path.display(), messages.lines.len());
        files_written.push(path);
    }

    let country_list = build_country_list(&taxonomies.countries);

    let codes = language_list.codes();
    let realm_path = config.realm_settings_path();
    RealmSettings::new(codes.clone()).write(&realm_path)?;
    files_written.push(realm_path);

    let theme_path = config.theme_properties_path();
    properties::write_theme_properties(&theme_path, &codes)?;
    files_written.push(theme_path);

    let english_path = config.english_messages_path();
    properties::add_locale_block(
        &english_path,
        &language_list.locale_lines(),
        config.english_mode,
    )?;
    if !files_written.contains(&english_path) {
        files_written.push(english_path);
    }

    let profile_path = config.user_profile_path();
    let mut profile = UserProfile::read(&profile_path)?;
    profile.apply_country_options(&country_list)?;
    profile.write(&profile_path)?;
    files_written.push(profile_path);

    log::info!(
        "generated {} locales, {} countries ({} skipped)",
        codes.len(),
        country_list.len(),
        country_list.skipped.len()
    );

    Ok(GenerationReport {
        created_at: chrono::Utc::now().to_rfc3339(),
        languages_source: config.languages.describe(),
        countries_source: config.countries.describe(),
        digests: taxonomies.digests.clone(),
        locales: codes,
        country_count: country_list.len(),
        skipped_countries: country_list.skipped,
        files_written,
    })
}

/// Print a summary to the terminal
pub fn print_summary(report: &GenerationReport, quiet: bool) {
    if quiet {
        return;
    }

    println!("\n{}", "LOCALE GENERATION".bold().yellow());
    println!("  Languages: {}", report.languages_source);
    println!("             sha256 {}", report.digests.languages.dimmed());
    println!("  Countries: {}", report.countries_source);
    println!("             sha256 {}", report.digests.countries.dimmed());
    println!();
    println!(
        "  Locales: {}  |  Countries: {}  |  Files written: {}",
        report.locales.len().to_string().green(),
        report.country_count.to_string().green(),
        report.files_written.len()
    );

    if !report.skipped_countries.is_empty() {
        println!(
            "  {} {} countries without a code:",
            "Skipped".yellow(),
            report.skipped_countries.len()
        );
        for key in report.skipped_countries.iter().take(10) {
            println!("    - {}", key);
        }
        if report.skipped_countries.len() > 10 {
            println!("    ... and {} more", report.skipped_countries.len() - 10);
        }
    }
    println!();
}

/// Write the generation report as JSON
pub fn write_report(report: &GenerationReport, path: &Path) -> Result<()> {
    properties::ensure_parent(path)?;
    let json = serde_json::to_string_pretty(report).context("serializing report")?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
