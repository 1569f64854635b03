// SPDX-License-Identifier: PMPL-1.0-or-later

//! Country list for the user-profile `country` attribute
//!
//! Labels are not literal names but `${country_<CC>}` references, resolved
//! by the identity server against the per-locale message files.

use crate::types::CountryTaxonomy;
use std::collections::BTreeMap;

/// Country code -> label placeholder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryList {
    labels: BTreeMap<String, String>,
    /// Taxonomy keys of the entries skipped for lack of a country code
    pub skipped: Vec<String>,
}

impl CountryList {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Country codes in ascending order.
    pub fn codes(&self) -> Vec<String> {
        self.labels.keys().cloned().collect()
    }

    pub fn labels(&self) -> &BTreeMap<String, String> {
        &self.labels
    }
}

pub fn placeholder(country_code: &str) -> String {
    format!("${{country_{}}}", country_code)
}

/// Build the country list, warning once per entry without a country code.
pub fn build_country_list(countries: &CountryTaxonomy) -> CountryList {
    let mut list = CountryList::default();
    for (key, country) in countries {
        match country.code() {
            Some(code) => {
                list.labels.insert(code.to_string(), placeholder(code));
            }
            None => {
                log::warn!("country {} has no country_code_2.en, skipping", key);
                list.skipped.push(key.clone());
            }
        }
    }
    list
}
