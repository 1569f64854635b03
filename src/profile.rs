// SPDX-License-Identifier: PMPL-1.0-or-later

//! User-profile patching
//!
//! The user profile is the identity server's declarative attribute schema.
//! Only the `country` attribute is touched: its selectable options and the
//! labels shown for them. Everything else, key order included, is written
//! back exactly as read.

use crate::countries::CountryList;
use crate::properties::ensure_parent;
use anyhow::{anyhow, bail, Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

pub const COUNTRY_ATTRIBUTE: &str = "country";

/// Parsed user-profile document
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    document: Map<String, Value>,
}

impl UserProfile {
    pub fn parse(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).context("parsing user profile")?;
        match value {
            Value::Object(document) => Ok(Self { document }),
            other => bail!("user profile must be a JSON object, found {}", kind(&other)),
        }
    }

    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading user profile {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    fn attributes(&self) -> Result<&Vec<Value>> {
        self.document
            .get("attributes")
            .and_then(Value::as_array)
            .ok_or_else(|| anyhow!("user profile has no \"attributes\" array"))
    }

    fn attribute_index(&self, name: &str) -> Result<usize> {
        self.attributes()?
            .iter()
            .position(|attr| attr.get("name").and_then(Value::as_str) == Some(name))
            .ok_or_else(|| anyhow!("user profile has no attribute named {:?}", name))
    }

    /// The attribute named `name`, if the document has one.
    pub fn attribute(&self, name: &str) -> Result<&Value> {
        let index = self.attribute_index(name)?;
        Ok(&self.attributes()?[index])
    }

    /// Replace the `country` attribute with one listing `countries`.
    pub fn apply_country_options(&mut self, countries: &CountryList) -> Result<()> {
        let index = self.attribute_index(COUNTRY_ATTRIBUTE)?;
        let patched = patched_country_attribute(&self.attributes()?[index], countries)?;
        if let Some(Value::Array(attributes)) = self.document.get_mut("attributes") {
            attributes[index] = patched;
        }
        Ok(())
    }

    /// Compact JSON, no trailing newline.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.document)?)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        ensure_parent(path)?;
        fs::write(path, self.to_json()?)
            .with_context(|| format!("writing user profile {}", path.display()))
    }
}

/// New attribute value with `validations.options.options` set to the
/// sorted codes and `annotations.inputOptionLabels` to the placeholders.
pub fn patched_country_attribute(attribute: &Value, countries: &CountryList) -> Result<Value> {
    let mut patched = attribute.clone();
    let root = patched
        .as_object_mut()
        .ok_or_else(|| anyhow!("attribute {:?} is not an object", COUNTRY_ATTRIBUTE))?;

    let options: Vec<Value> = countries.codes().into_iter().map(Value::String).collect();
    let validations = child_object(root, "validations")?;
    let option_validator = child_object(validations, "options")?;
    option_validator.insert("options".to_string(), Value::Array(options));

    let labels: Map<String, Value> = countries
        .labels()
        .iter()
        .map(|(code, label)| (code.clone(), Value::String(label.clone())))
        .collect();
    let annotations = child_object(root, "annotations")?;
    annotations.insert("inputOptionLabels".to_string(), Value::Object(labels));

    Ok(patched)
}

/// Object under `key`, created empty when absent.
fn child_object<'a>(
    parent: &'a mut Map<String, Value>,
    key: &str,
) -> Result<&'a mut Map<String, Value>> {
    let child = parent
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    let found = kind(child);
    child.as_object_mut().ok_or_else(|| {
        anyhow!(
            "country attribute field {:?} is {}, expected an object",
            key,
            found
        )
    })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
