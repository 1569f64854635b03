// SPDX-License-Identifier: PMPL-1.0-or-later

//! Taxonomy fetching
//!
//! Both taxonomies are fetched sequentially with a blocking client. Any
//! transport failure, non-success status or malformed document aborts the
//! run; there is no retry, a build step can simply be re-run.

use crate::config::{GeneratorConfig, TaxonomySource};
use crate::types::{CountryTaxonomy, LanguageTaxonomy, Taxonomies, TaxonomyDigests};
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const USER_AGENT: &str = concat!("taxonomy-locales/", env!("CARGO_PKG_VERSION"));
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Raw bytes of a taxonomy document plus where they came from
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub origin: String,
    pub bytes: Vec<u8>,
}

impl RawDocument {
    pub fn sha256(&self) -> String {
        hex::encode(Sha256::digest(&self.bytes))
    }

    pub fn parse<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.bytes)
            .with_context(|| format!("parsing taxonomy from {}", self.origin))
    }
}

/// Reads taxonomy documents from the network or from local snapshots
pub struct TaxonomyFetcher {
    client: Client,
}

impl TaxonomyFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT.min(timeout))
            .timeout(timeout)
            .build()
            .context("building HTTP client")?;
        Ok(Self { client })
    }

    pub fn load(&self, source: &TaxonomySource) -> Result<RawDocument> {
        match source {
            TaxonomySource::Remote(url) => self.get(url),
            TaxonomySource::Local(path) => {
                let bytes = fs::read(path)
                    .with_context(|| format!("reading taxonomy {}", path.display()))?;
                Ok(RawDocument {
                    origin: path.display().to_string(),
                    bytes,
                })
            }
        }
    }

    fn get(&self, url: &str) -> Result<RawDocument> {
        log::info!("fetching {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("requesting {}", url))?
            .error_for_status()
            .with_context(|| format!("fetching {}", url))?;
        let bytes = response
            .bytes()
            .with_context(|| format!("reading response body from {}", url))?;
        log::debug!("{}: {} bytes", url, bytes.len());
        Ok(RawDocument {
            origin: url.to_string(),
            bytes: bytes.to_vec(),
        })
    }
}

/// Fetch and parse both taxonomies named by the configuration.
pub fn fetch_taxonomies(config: &GeneratorConfig) -> Result<Taxonomies> {
    let fetcher = TaxonomyFetcher::new(config.timeout)?;
    let languages_doc = fetcher.load(&config.languages)?;
    let countries_doc = fetcher.load(&config.countries)?;
    taxonomies_from_documents(&languages_doc, &countries_doc)
}

pub fn taxonomies_from_documents(
    languages_doc: &RawDocument,
    countries_doc: &RawDocument,
) -> Result<Taxonomies> {
    let languages: LanguageTaxonomy = languages_doc.parse()?;
    let countries: CountryTaxonomy = countries_doc.parse()?;
    log::info!(
        "loaded {} languages and {} countries",
        languages.len(),
        countries.len()
    );
    Ok(Taxonomies {
        languages,
        countries,
        digests: TaxonomyDigests {
            languages: languages_doc.sha256(),
            countries: countries_doc.sha256(),
        },
    })
}

/// Download both taxonomies into `out_dir` for later offline runs.
///
/// Documents are validated before anything is written, so a broken upstream
/// file never replaces a good snapshot.
pub fn snapshot_taxonomies(config: &GeneratorConfig, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let fetcher = TaxonomyFetcher::new(config.timeout)?;
    let languages_doc = fetcher.load(&config.languages)?;
    let countries_doc = fetcher.load(&config.countries)?;
    taxonomies_from_documents(&languages_doc, &countries_doc)?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating snapshot directory {}", out_dir.display()))?;
    let mut written = Vec::new();
    for (file_name, doc) in [
        ("languages.json", &languages_doc),
        ("countries.json", &countries_doc),
    ] {
        let path = out_dir.join(file_name);
        fs::write(&path, &doc.bytes).with_context(|| format!("writing {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}
