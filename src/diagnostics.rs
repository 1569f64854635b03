// SPDX-License-Identifier: PMPL-1.0-or-later

//! `doctor`: checks that a checkout has the layout the generator writes into

use crate::config::GeneratorConfig;
use crate::profile::{UserProfile, COUNTRY_ATTRIBUTE};
use anyhow::{anyhow, Result};
use std::fs;
use std::path::Path;

pub fn run_diagnostics(config: &GeneratorConfig) -> Result<()> {
    println!("taxonomy-locales diagnostics");

    let checks = collect_checks(config);

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks
        .iter()
        .any(|entry| matches!(entry.level, Level::Error))
    {
        Err(anyhow!("diagnostics reported issues"))
    } else {
        Ok(())
    }
}

fn collect_checks(config: &GeneratorConfig) -> Vec<Diagnostic> {
    vec![
        Diagnostic::ok(
            "version",
            format!("taxonomy-locales {}", env!("CARGO_PKG_VERSION")),
        ),
        check_directory("theme directory", &config.theme_dir, Severity::Error),
        check_directory("messages directory", &config.messages_dir(), Severity::Warn),
        check_directory("runtime directory", &config.runtime_dir, Severity::Error),
        check_file("theme properties", &config.theme_properties_path()),
        check_english_messages(&config.english_messages_path()),
        check_user_profile(&config.user_profile_path()),
    ]
}

#[derive(Debug, PartialEq, Eq)]
enum Level {
    Ok,
    Warn,
    Error,
}

#[derive(Debug)]
struct Diagnostic {
    label: &'static str,
    level: Level,
    detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:22} {}", self.level.tag(), self.label, self.detail);
    }
}

impl Level {
    fn tag(&self) -> &'static str {
        match self {
            Level::Ok => "OK",
            Level::Warn => "WARN",
            Level::Error => "ERR",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Severity {
    Warn,
    Error,
}

fn check_directory(label: &'static str, path: &Path, missing_level: Severity) -> Diagnostic {
    if path.is_dir() {
        Diagnostic::ok(label, format!("{} exists", path.display()))
    } else if path.exists() {
        Diagnostic::error(
            label,
            format!("{} exists but is not a directory", path.display()),
        )
    } else if missing_level == Severity::Error {
        Diagnostic::error(label, format!("{} missing", path.display()))
    } else {
        Diagnostic::warning(
            label,
            format!("{} missing (created on first run)", path.display()),
        )
    }
}

/// Missing files are only warnings: generation creates them.
fn check_file(label: &'static str, path: &Path) -> Diagnostic {
    if path.is_file() {
        Diagnostic::ok(label, format!("{} exists", path.display()))
    } else if path.exists() {
        Diagnostic::error(
            label,
            format!("{} exists but is not a regular file", path.display()),
        )
    } else {
        Diagnostic::warning(label, format!("{} missing", path.display()))
    }
}

fn check_english_messages(path: &Path) -> Diagnostic {
    let label = "english messages";
    let Ok(content) = fs::read_to_string(path) else {
        return check_file(label, path);
    };
    let blocks = content
        .lines()
        .filter(|line| line.starts_with("locale_en="))
        .count();
    if blocks > 1 {
        Diagnostic::warning(
            label,
            format!(
                "{} locale blocks appended (regenerate with --english-mode replace)",
                blocks
            ),
        )
    } else {
        Diagnostic::ok(label, format!("{} exists", path.display()))
    }
}

fn check_user_profile(path: &Path) -> Diagnostic {
    let label = "user profile";
    let profile = match UserProfile::read(path) {
        Ok(profile) => profile,
        Err(err) => return Diagnostic::error(label, format!("{:#}", err)),
    };
    match profile.attribute(COUNTRY_ATTRIBUTE) {
        Ok(_) => Diagnostic::ok(
            label,
            format!("{} has a {:?} attribute", path.display(), COUNTRY_ATTRIBUTE),
        ),
        Err(err) => Diagnostic::error(label, err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn layout(root: &Path, profile: &str) -> GeneratorConfig {
        let config = GeneratorConfig::default().rooted_at(root);
        fs::create_dir_all(config.messages_dir()).unwrap();
        fs::create_dir_all(&config.runtime_dir).unwrap();
        fs::write(config.user_profile_path(), profile).unwrap();
        config
    }

    #[test]
    fn complete_layout_passes() {
        let dir = TempDir::new().unwrap();
        let config = layout(dir.path(), r#"{"attributes":[{"name":"country"}]}"#);
        assert!(run_diagnostics(&config).is_ok());
    }

    #[test]
    fn profile_without_country_fails() {
        let dir = TempDir::new().unwrap();
        let config = layout(dir.path(), r#"{"attributes":[{"name":"email"}]}"#);
        let checks = collect_checks(&config);
        let profile = checks.iter().find(|c| c.label == "user profile").unwrap();
        assert_eq!(profile.level, Level::Error);
        assert!(run_diagnostics(&config).is_err());
    }

    #[test]
    fn repeated_locale_blocks_are_flagged() {
        let dir = TempDir::new().unwrap();
        let config = layout(dir.path(), r#"{"attributes":[{"name":"country"}]}"#);
        fs::write(
            config.english_messages_path(),
            "locale_en=English\nlocale_en=English\n",
        )
        .unwrap();
        let checks = collect_checks(&config);
        let english = checks
            .iter()
            .find(|c| c.label == "english messages")
            .unwrap();
        assert_eq!(english.level, Level::Warn);
    }

    #[test]
    fn missing_runtime_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let config = GeneratorConfig::default().rooted_at(dir.path());
        fs::create_dir_all(&config.theme_dir).unwrap();
        let checks = collect_checks(&config);
        let runtime = checks
            .iter()
            .find(|c| c.label == "runtime directory")
            .unwrap();
        assert_eq!(runtime.level, Level::Error);
    }
}
