// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end generation against local taxonomy snapshots

use std::fs;
use std::path::{Path, PathBuf};
use taxonomy_locales::config::{EnglishMode, GeneratorConfig, TaxonomySource};
use taxonomy_locales::generate;
use taxonomy_locales::realm::RealmSettings;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// A checkout with the fixture profile and an English base file.
fn checkout(root: &Path, mode: EnglishMode) -> GeneratorConfig {
    let mut config = GeneratorConfig::default().rooted_at(root);
    config.languages = TaxonomySource::Local(fixture("languages.json"));
    config.countries = TaxonomySource::Local(fixture("countries.json"));
    config.english_mode = mode;

    fs::create_dir_all(config.messages_dir()).unwrap();
    fs::create_dir_all(&config.runtime_dir).unwrap();
    fs::copy(fixture("users_profile.json"), config.user_profile_path()).unwrap();
    config
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("reading {}: {}", path.display(), e))
}

#[test]
fn test_generates_per_locale_messages() {
    let dir = TempDir::new().unwrap();
    let config = checkout(dir.path(), EnglishMode::Append);

    generate::run(&config).expect("generation should succeed");

    assert_eq!(
        read(&config.locale_messages_path("fr")),
        "country_DE=Allemagne\ncountry_ES=Espagne\ncountry_FR=France\n"
    );
    // Spain has no German name, falls back to English
    assert_eq!(
        read(&config.locale_messages_path("de")),
        "country_DE=Deutschland\ncountry_ES=Spain\ncountry_FR=Frankreich\n"
    );
    assert_eq!(
        read(&config.locale_messages_path("eu")),
        "country_DE=Germany\ncountry_ES=Spain\ncountry_FR=France\n"
    );
}

#[test]
fn test_locale_lists_agree() {
    let dir = TempDir::new().unwrap();
    let config = checkout(dir.path(), EnglishMode::Append);

    let report = generate::run(&config).expect("generation should succeed");

    let expected = vec!["de", "en", "eu", "fr"];
    assert_eq!(report.locales, expected);

    let realm: RealmSettings =
        serde_json::from_str(&read(&config.realm_settings_path())).unwrap();
    assert_eq!(realm.supported_locales, expected);
    assert_eq!(
        read(&config.realm_settings_path()),
        r#"{"supportedLocales":["de","en","eu","fr"]}"#
    );

    assert_eq!(
        read(&config.theme_properties_path()),
        "locales=de,en,eu,fr\n"
    );
}

#[test]
fn test_english_messages_get_locale_block() {
    let dir = TempDir::new().unwrap();
    let config = checkout(dir.path(), EnglishMode::Append);

    generate::run(&config).expect("generation should succeed");

    // en is a supported locale: its country messages are written first,
    // then the locale names are added after them
    assert_eq!(
        read(&config.english_messages_path()),
        "country_DE=Germany\ncountry_ES=Spain\ncountry_FR=France\n\
         locale_de=Deutsch\nlocale_en=English\nlocale_eu=Basque\nlocale_fr=Français\n"
    );
}

#[test]
fn test_uncoded_countries_are_reported_and_excluded() {
    let dir = TempDir::new().unwrap();
    let config = checkout(dir.path(), EnglishMode::Append);

    let report = generate::run(&config).expect("generation should succeed");

    assert_eq!(report.country_count, 3);
    assert_eq!(
        report.skipped_countries,
        vec!["en:world".to_string(), "en:european-union".to_string()]
    );
    for code in &report.locales {
        let messages = read(&config.locale_messages_path(code));
        assert!(!messages.contains("World"), "{}: {}", code, messages);
        assert!(!messages.contains("Monde"), "{}: {}", code, messages);
    }
    let profile = read(&config.user_profile_path());
    assert!(!profile.contains("World"));
}

#[test]
fn test_user_profile_country_attribute_is_patched() {
    let dir = TempDir::new().unwrap();
    let config = checkout(dir.path(), EnglishMode::Append);

    generate::run(&config).expect("generation should succeed");

    let profile: serde_json::Value =
        serde_json::from_str(&read(&config.user_profile_path())).unwrap();
    let attributes = profile["attributes"].as_array().unwrap();
    assert_eq!(attributes.len(), 2);

    let username = &attributes[0];
    assert_eq!(username["validations"]["length"]["max"], 255);

    let country = &attributes[1];
    assert_eq!(
        country["validations"]["options"]["options"],
        serde_json::json!(["DE", "ES", "FR"])
    );
    assert_eq!(
        country["annotations"],
        serde_json::json!({
            "inputType": "select",
            "inputOptionLabels": {
                "DE": "${country_DE}",
                "ES": "${country_ES}",
                "FR": "${country_FR}"
            }
        })
    );
    assert_eq!(profile["groups"][0]["name"], "user-metadata");
}

#[test]
fn test_rerun_is_idempotent_when_english_is_a_locale() {
    let dir = TempDir::new().unwrap();
    let config = checkout(dir.path(), EnglishMode::Append);

    generate::run(&config).expect("first run");
    let first: Vec<String> = [
        config.locale_messages_path("fr"),
        config.english_messages_path(),
        config.realm_settings_path(),
        config.theme_properties_path(),
        config.user_profile_path(),
    ]
    .iter()
    .map(|p| read(p))
    .collect();

    generate::run(&config).expect("second run");
    let second: Vec<String> = [
        config.locale_messages_path("fr"),
        config.english_messages_path(),
        config.realm_settings_path(),
        config.theme_properties_path(),
        config.user_profile_path(),
    ]
    .iter()
    .map(|p| read(p))
    .collect();

    assert_eq!(first, second);
}

#[test]
fn test_english_block_grows_in_append_mode_without_english_locale() {
    let dir = TempDir::new().unwrap();
    let mut config = checkout(dir.path(), EnglishMode::Append);
    let languages = dir.path().join("languages.json");
    fs::write(
        &languages,
        r#"{"en:french": {"language_code_2": {"en": "fr"}, "name": {"fr": "Français"}}}"#,
    )
    .unwrap();
    config.languages = TaxonomySource::Local(languages);
    fs::write(config.english_messages_path(), "loginTitle=Sign in\n").unwrap();

    generate::run(&config).unwrap();
    generate::run(&config).unwrap();
    assert_eq!(
        read(&config.english_messages_path()),
        "loginTitle=Sign in\nlocale_fr=Français\nlocale_fr=Français\n"
    );

    config.english_mode = EnglishMode::Replace;
    generate::run(&config).unwrap();
    assert_eq!(
        read(&config.english_messages_path()),
        "loginTitle=Sign in\nlocale_fr=Français\n"
    );
}

#[test]
fn test_missing_country_attribute_fails() {
    let dir = TempDir::new().unwrap();
    let config = checkout(dir.path(), EnglishMode::Append);
    fs::write(
        config.user_profile_path(),
        r#"{"attributes":[{"name":"email"}]}"#,
    )
    .unwrap();

    let err = generate::run(&config).unwrap_err();
    assert!(
        format!("{:#}", err).contains("no attribute named \"country\""),
        "unexpected error: {:#}",
        err
    );
    // the profile is left untouched
    assert_eq!(
        read(&config.user_profile_path()),
        r#"{"attributes":[{"name":"email"}]}"#
    );
}

#[test]
fn test_report_records_digests_and_files() {
    let dir = TempDir::new().unwrap();
    let config = checkout(dir.path(), EnglishMode::Append);

    let report = generate::run(&config).expect("generation should succeed");
    assert_eq!(report.digests.languages.len(), 64);
    assert_eq!(report.digests.countries.len(), 64);
    assert_ne!(report.digests.languages, report.digests.countries);
    // 4 locale files, realm settings, theme properties, user profile
    assert_eq!(report.files_written.len(), 7);

    let report_path = dir.path().join("out/report.json");
    generate::write_report(&report, &report_path).unwrap();
    let back: generate::GenerationReport =
        serde_json::from_str(&read(&report_path)).unwrap();
    assert_eq!(back.locales, report.locales);
    assert_eq!(back.skipped_countries, report.skipped_countries);
}

#[test]
fn test_duplicate_language_code_follows_document_order() {
    let dir = TempDir::new().unwrap();
    let mut config = checkout(dir.path(), EnglishMode::Replace);
    let languages = dir.path().join("languages.json");
    fs::write(
        &languages,
        r#"{
            "en:norwegian-bokmal": {"language_code_2": {"en": "nb"}, "name": {"nb": "Norsk bokmål"}},
            "en:bokmal": {"language_code_2": {"en": "nb"}, "name": {"nb": "Bokmål"}}
        }"#,
    )
    .unwrap();
    config.languages = TaxonomySource::Local(languages);

    let report = generate::run(&config).expect("generation should succeed");

    assert_eq!(report.locales, vec!["nb".to_string()]);
    assert_eq!(read(&config.english_messages_path()), "locale_nb=Bokmål\n");
}

#[test]
fn test_report_write_errors_name_the_path() {
    let dir = TempDir::new().unwrap();
    let config = checkout(dir.path(), EnglishMode::Append);
    let report = generate::run(&config).expect("generation should succeed");

    // nested directories are created on demand
    let nested = dir.path().join("reports/2024/run.json");
    generate::write_report(&report, &nested).unwrap();
    assert!(nested.is_file());

    // a regular file where a directory is expected
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let err = generate::write_report(&report, &blocker.join("report.json")).unwrap_err();
    assert!(
        format!("{:#}", err).contains(&blocker.display().to_string()),
        "unexpected error: {:#}",
        err
    );

    // the report path itself is a directory
    let err = generate::write_report(&report, dir.path()).unwrap_err();
    assert!(
        format!("{:#}", err).contains(&format!("writing {}", dir.path().display())),
        "unexpected error: {:#}",
        err
    );
}
