// SPDX-License-Identifier: PMPL-1.0-or-later

//! Generator configuration
//!
//! Every location the generator reads or writes is a field here. The
//! defaults reproduce the layout of the auth repository: taxonomies come
//! from the Open Food Facts static host, theme resources live under
//! `themes/off/common` and realm data under `runtime-scripts`.

use clap::ValueEnum;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_LANGUAGES_URL: &str =
    "https://static.openfoodfacts.org/data/taxonomies/languages.json";
pub const DEFAULT_COUNTRIES_URL: &str =
    "https://static.openfoodfacts.org/data/taxonomies/countries.json";
pub const DEFAULT_RUNTIME_DIR: &str = "runtime-scripts";
pub const DEFAULT_THEME_DIR: &str = "themes/off/common";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Where a taxonomy document is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaxonomySource {
    Remote(String),
    Local(PathBuf),
}

impl TaxonomySource {
    /// Local file wins over the URL when both are given.
    pub fn pick(url: String, file: Option<PathBuf>) -> Self {
        match file {
            Some(path) => TaxonomySource::Local(path),
            None => TaxonomySource::Remote(url),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            TaxonomySource::Remote(url) => url.clone(),
            TaxonomySource::Local(path) => path.display().to_string(),
        }
    }
}

/// How the `locale_*` block is added to the English base messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EnglishMode {
    /// Append the block after whatever the file already contains
    #[default]
    Append,
    /// Drop previously generated `locale_*` lines, then append the block
    Replace,
}

/// Configuration for a generation run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub languages: TaxonomySource,
    pub countries: TaxonomySource,
    /// Holds `realm_settings.json` and `users_profile.json`
    pub runtime_dir: PathBuf,
    /// Holds `theme.properties` and the `messages/` directory
    pub theme_dir: PathBuf,
    pub english_mode: EnglishMode,
    pub timeout: Duration,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            languages: TaxonomySource::Remote(DEFAULT_LANGUAGES_URL.to_string()),
            countries: TaxonomySource::Remote(DEFAULT_COUNTRIES_URL.to_string()),
            runtime_dir: PathBuf::from(DEFAULT_RUNTIME_DIR),
            theme_dir: PathBuf::from(DEFAULT_THEME_DIR),
            english_mode: EnglishMode::Append,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl GeneratorConfig {
    pub fn messages_dir(&self) -> PathBuf {
        self.theme_dir.join("messages")
    }

    pub fn locale_messages_path(&self, code: &str) -> PathBuf {
        self.messages_dir()
            .join(format!("messages_{}.properties", code))
    }

    pub fn english_messages_path(&self) -> PathBuf {
        self.locale_messages_path("en")
    }

    pub fn theme_properties_path(&self) -> PathBuf {
        self.theme_dir.join("theme.properties")
    }

    pub fn realm_settings_path(&self) -> PathBuf {
        self.runtime_dir.join("realm_settings.json")
    }

    pub fn user_profile_path(&self) -> PathBuf {
        self.runtime_dir.join("users_profile.json")
    }

    /// Same layout rooted somewhere else, keeping relative directories.
    pub fn rooted_at(mut self, root: &Path) -> Self {
        self.runtime_dir = root.join(&self.runtime_dir);
        self.theme_dir = root.join(&self.theme_dir);
        self
    }
}
