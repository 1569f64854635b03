// SPDX-License-Identifier: PMPL-1.0-or-later

//! taxonomy-locales: identity-server theme locales from Open Food Facts taxonomies
//!
//! Fetches the languages and countries taxonomies and derives from them:
//!
//! 1. **Messages**: one `messages_<code>.properties` per language, holding
//!    the localized name of every country (`country_<CC>=<name>`).
//! 2. **Locales**: the realm `supportedLocales`, the theme `locales=` line
//!    and the `locale_<code>=<name>` entries of the English messages.
//! 3. **User profile**: the options and option labels of the `country`
//!    attribute.

pub mod config;
pub mod countries;
pub mod diagnostics;
pub mod fetch;
pub mod generate;
pub mod iso639;
pub mod languages;
pub mod logging;
pub mod profile;
pub mod properties;
pub mod realm;
pub mod types;
