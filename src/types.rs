// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for taxonomy-locales
//!
//! Taxonomy documents are JSON objects keyed by entry identifier
//! (`en:france`, `en:french`, ...). Each entry carries maps from language
//! code to value; only the fields used for generation are modelled here,
//! everything else in the upstream documents is ignored.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key of the synthetic language entry that never becomes a locale.
pub const UNKNOWN_LANGUAGE_KEY: &str = "en:unknown-language";

/// Language code used as the fallback for localized values.
pub const FALLBACK_LANG: &str = "en";

/// Language code -> value, as found in every taxonomy property.
pub type LocalizedValues = BTreeMap<String, String>;

/// Returns the first value present among the given lookups, in order.
///
/// Mirrors a `a ?? b ?? c` chain: an empty string counts as present.
pub fn first_present<'a>(
    candidates: impl IntoIterator<Item = Option<&'a str>>,
) -> Option<&'a str> {
    candidates.into_iter().flatten().next()
}

/// One entry of the languages taxonomy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code_2: Option<LocalizedValues>,
    #[serde(default)]
    pub name: LocalizedValues,
}

impl LanguageEntry {
    /// Two-letter language code, read from the English value of `language_code_2`.
    pub fn code(&self) -> Option<&str> {
        self.language_code_2
            .as_ref()
            .and_then(|codes| codes.get(FALLBACK_LANG))
            .map(String::as_str)
            .filter(|code| !code.is_empty())
    }

    /// Self-named value, then English name, then the raw taxonomy key.
    pub fn display_name<'a>(&'a self, code: &str, key: &'a str) -> &'a str {
        first_present([
            self.name.get(code).map(String::as_str),
            self.name.get(FALLBACK_LANG).map(String::as_str),
        ])
        .unwrap_or(key)
    }
}

/// One entry of the countries taxonomy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code_2: Option<LocalizedValues>,
    #[serde(default)]
    pub name: LocalizedValues,
}

impl CountryEntry {
    /// Two-letter country code; empty values count as missing.
    pub fn code(&self) -> Option<&str> {
        self.country_code_2
            .as_ref()
            .and_then(|codes| codes.get(FALLBACK_LANG))
            .map(String::as_str)
            .filter(|code| !code.is_empty())
    }

    /// Name in `lang`, then English name, then the raw taxonomy key.
    pub fn name_in<'a>(&'a self, lang: &str, key: &'a str) -> &'a str {
        first_present([
            self.name.get(lang).map(String::as_str),
            self.name.get(FALLBACK_LANG).map(String::as_str),
        ])
        .unwrap_or(key)
    }
}

/// Taxonomies keep document order: when two entries share a code, the
/// later one in the upstream file wins.
pub type LanguageTaxonomy = IndexMap<String, LanguageEntry>;
pub type CountryTaxonomy = IndexMap<String, CountryEntry>;

/// Both taxonomies for one generation run, with their content digests
#[derive(Debug, Clone, Default)]
pub struct Taxonomies {
    pub languages: LanguageTaxonomy,
    pub countries: CountryTaxonomy,
    pub digests: TaxonomyDigests,
}

/// SHA-256 digests (hex) of the raw taxonomy documents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyDigests {
    pub languages: String,
    pub countries: String,
}
