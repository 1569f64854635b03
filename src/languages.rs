// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language list and per-locale country messages
//!
//! Every language of the taxonomy (except the unknown-language sentinel)
//! becomes a supported locale. For each locale the country names are
//! rendered as `country_<CC>=<name>` property lines.

use crate::iso639::is_valid_iso639_1;
use crate::types::{CountryTaxonomy, LanguageTaxonomy, UNKNOWN_LANGUAGE_KEY};
use anyhow::{bail, Result};
use std::collections::BTreeMap;

/// Supported locale code -> display name of the language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageList {
    entries: BTreeMap<String, String>,
}

impl LanguageList {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    /// Locale codes in ascending order.
    pub fn codes(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Sorted `locale_<code>=<name>` lines for the English base messages.
    pub fn locale_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .entries
            .iter()
            .map(|(code, name)| format!("locale_{}={}", code, name))
            .collect();
        lines.sort();
        lines
    }
}

/// Country message lines for one locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleMessages {
    pub code: String,
    pub lines: Vec<String>,
}

/// Sorted `country_<CC>=<name>` lines for `code`.
///
/// Countries without a two-letter code are left out without a warning;
/// the country list builder reports them once.
pub fn country_messages(code: &str, countries: &CountryTaxonomy) -> Vec<String> {
    let mut lines: Vec<String> = countries
        .iter()
        .filter_map(|(key, country)| {
            let country_code = country.code()?;
            Some(format!(
                "country_{}={}",
                country_code,
                country.name_in(code, key)
            ))
        })
        .collect();
    lines.sort();
    lines
}

/// Build the language list and the country messages of every locale.
///
/// Fails on the first language (other than the sentinel) without a
/// two-letter code.
pub fn build_locales(
    languages: &LanguageTaxonomy,
    countries: &CountryTaxonomy,
) -> Result<(LanguageList, Vec<LocaleMessages>)> {
    let mut list = LanguageList::default();
    let mut messages: Vec<LocaleMessages> = Vec::new();

    for (key, language) in languages {
        if key == UNKNOWN_LANGUAGE_KEY {
            continue;
        }
        let Some(code) = language.code() else {
            bail!("language {} has no language_code_2.en", key);
        };
        if !is_valid_iso639_1(code) {
            log::warn!("language {} has non ISO 639-1 code {:?}", key, code);
        }

        let name = language.display_name(code, key).to_string();
        if let Some(previous) = list.entries.insert(code.to_string(), name) {
            log::warn!(
                "language {} reuses code {} (replacing name {:?})",
                key,
                code,
                previous
            );
            continue;
        }

        messages.push(LocaleMessages {
            code: code.to_string(),
            lines: country_messages(code, countries),
        });
    }

    Ok((list, messages))
}
