// SPDX-License-Identifier: PMPL-1.0-or-later

//! Realm settings document imported by the runtime scripts

use crate::properties::ensure_parent;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealmSettings {
    pub supported_locales: Vec<String>,
}

impl RealmSettings {
    /// Codes are sorted here so callers cannot write an unsorted list.
    pub fn new(mut codes: Vec<String>) -> Self {
        codes.sort();
        Self {
            supported_locales: codes,
        }
    }

    /// Compact JSON, as consumed by the realm import script.
    pub fn write(&self, path: &Path) -> Result<()> {
        ensure_parent(path)?;
        let json = serde_json::to_string(self)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))
    }
}
