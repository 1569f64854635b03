// SPDX-License-Identifier: PMPL-1.0-or-later

//! Message and theme properties files
//!
//! All files are plain `key=value` lines, each terminated by `\n`. Values
//! are written as-is, the theme engine reads them as UTF-8.

use crate::config::EnglishMode;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Prefix of the lines generated into the English base messages
pub const LOCALE_KEY_PREFIX: &str = "locale_";

/// Join lines with a terminator after each one, including the last.
pub fn render_lines(lines: &[String]) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Overwrite `path` with the given lines.
pub fn write_properties(path: &Path, lines: &[String]) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, render_lines(lines)).with_context(|| format!("writing {}", path.display()))
}

/// `locales=<a>,<b>,...` for the theme, codes expected sorted.
pub fn theme_locales_line(codes: &[String]) -> String {
    format!("locales={}", codes.join(","))
}

pub fn write_theme_properties(path: &Path, codes: &[String]) -> Result<()> {
    write_properties(path, &[theme_locales_line(codes)])
}

/// Add the `locale_*` block to the English base messages.
///
/// In [`EnglishMode::Replace`] lines starting with `locale_` are removed
/// first, so running the generator twice leaves a single block.
pub fn add_locale_block(path: &Path, lines: &[String], mode: EnglishMode) -> Result<()> {
    ensure_parent(path)?;
    match mode {
        EnglishMode::Append => {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            file.write_all(render_lines(lines).as_bytes())
                .with_context(|| format!("appending to {}", path.display()))
        }
        EnglishMode::Replace => {
            let existing = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(err) if err.kind() == ErrorKind::NotFound => String::new(),
                Err(err) => {
                    return Err(err).with_context(|| format!("reading {}", path.display()))
                }
            };
            let mut kept: Vec<String> = existing
                .lines()
                .filter(|line| !line.starts_with(LOCALE_KEY_PREFIX))
                .map(str::to_string)
                .collect();
            kept.extend(lines.iter().cloned());
            write_properties(path, &kept)
        }
    }
}
