//! Integration tests for the i18n runtime
//!
//! These tests drive the public API end to end: catalog validation,
//! language resolution with real preference files, table materialisation
//! and the accessor API.

use i18n_strings::config::Config;
use i18n_strings::i18n::{
    ids, selector_for, validate, Catalog, CatalogError, FilePreferenceStore, Localizer,
    MemoryPreferenceStore, PreferenceStore, ResolutionSource, StringId, TranslationRecord,
};
use proptest::prelude::*;
use std::sync::Arc;
use tempfile::TempDir;

// ==================== Test Helpers ====================

/// Config with persistence to a file inside `temp_dir` and a fixed ambient locale
fn create_test_config(temp_dir: &TempDir, ambient: &str) -> Config {
    Config {
        preferred_language: None,
        ambient_locale: Some(ambient.to_string()),
        persist_preference: true,
        preference_file: Some(temp_dir.path().join("prefs").join("preferences.json")),
        preference_ttl: None,
    }
}

fn catalog_from_ordinals(ordinals: &[u16]) -> Catalog {
    Catalog::new(
        ordinals
            .iter()
            .map(|&ordinal| TranslationRecord {
                id: StringId::new(ordinal),
                en: "text",
                fr: "texte",
                de: "Text",
            })
            .collect(),
    )
}

// ==================== Full Table Tests ====================

#[test]
fn test_every_identifier_matches_catalog_after_language_change() {
    let localizer = Localizer::builder().initialise(None).unwrap();
    let catalog = Catalog::builtin();
    let codes: Vec<&str> = localizer
        .registry()
        .list_enabled()
        .iter()
        .map(|lang| lang.code)
        .collect();

    for code in codes {
        let language = localizer.set_language(Some(code));
        assert_eq!(language.code(), code);

        let select = selector_for(code).expect("built-in languages are wired");
        for record in catalog.records() {
            assert_eq!(
                localizer.get_string(record.id),
                select(record),
                "identifier {} in '{}'",
                record.id,
                code
            );
        }
    }
}

#[test]
fn test_plus_english_for_every_identifier() {
    let localizer = Localizer::builder().initialise(Some("en")).unwrap();
    for record in Catalog::builtin().records() {
        assert_eq!(
            localizer.get_string_plus_english(record.id),
            localizer.get_string(record.id)
        );
    }

    localizer.set_language(Some("de"));
    for record in Catalog::builtin().records() {
        assert_eq!(
            localizer.get_string_plus_english(record.id),
            format!("{}[ {}]", record.de, record.en)
        );
    }
}

#[test]
fn test_initialise_twice_builds_identical_tables() {
    let first = Localizer::builder().initialise(Some("fr")).unwrap();
    let second = Localizer::builder().initialise(Some("fr")).unwrap();

    assert_eq!(*first.table(), *second.table());
    assert_eq!(first.table().texts(), second.table().texts());
}

// ==================== Persistence Tests ====================

#[test]
fn test_cold_start_reuses_persisted_language() {
    let temp_dir = TempDir::new().unwrap();

    let mut config = create_test_config(&temp_dir, "de-DE");
    config.preferred_language = Some("fr-CA".to_string());
    let first = Localizer::from_config(&config).unwrap();
    assert_eq!(first.active_language().code(), "fr");

    // Next run: no explicit choice, ambient says German, stored French wins
    let config = create_test_config(&temp_dir, "de-DE");
    let second = Localizer::from_config(&config).unwrap();
    assert_eq!(second.active_language().code(), "fr");
    assert_eq!(second.get_string(ids::CANCEL), "Annuler");
    assert_eq!(
        second.metrics().resolutions(ResolutionSource::Persisted),
        1
    );
}

#[test]
fn test_out_of_range_ttl_still_persists() {
    let temp_dir = TempDir::new().unwrap();

    let mut config = create_test_config(&temp_dir, "de-DE");
    config.preferred_language = Some("fr-CA".to_string());
    config.preference_ttl = Some(chrono::Duration::MAX);
    let first = Localizer::from_config(&config).unwrap();
    assert_eq!(first.active_language().code(), "fr");

    config.preferred_language = None;
    let second = Localizer::from_config(&config).unwrap();
    assert_eq!(second.active_language().code(), "fr");
}

#[test]
fn test_persisted_code_round_trips_as_ambient() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("preferences.json");

    let first = Localizer::builder()
        .preference_store(FilePreferenceStore::new(&path))
        .initialise(Some("de-AT"))
        .unwrap();
    let persisted = FilePreferenceStore::new(&path)
        .load()
        .expect("resolution was persisted");

    let second = Localizer::builder()
        .ambient_locale(Some(persisted))
        .initialise(None)
        .unwrap();

    assert_eq!(second.active_language(), first.active_language());
}

#[test]
fn test_language_change_is_persisted() {
    let store = Arc::new(MemoryPreferenceStore::new());
    let localizer = Localizer::builder()
        .preference_store(Arc::clone(&store))
        .initialise(None)
        .unwrap();
    assert_eq!(store.load(), Some("en".to_string()));

    localizer.set_language(Some("fr"));
    assert_eq!(store.load(), Some("fr".to_string()));
}

#[test]
fn test_disabled_persistence_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_test_config(&temp_dir, "fr");
    config.persist_preference = false;

    let localizer = Localizer::from_config(&config).unwrap();

    assert_eq!(localizer.active_language().code(), "fr");
    assert!(!config.preference_file.unwrap().exists());
}

#[test]
fn test_unmatched_codes_fall_back_to_default() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_test_config(&temp_dir, "xx-YY");
    config.preferred_language = Some("zz".to_string());

    let localizer = Localizer::from_config(&config).unwrap();

    assert_eq!(localizer.active_language().code(), "en");
    assert_eq!(localizer.get_string(ids::APP_TITLE), "String Catalog");
}

// ==================== Catalog Order Tests ====================

#[test]
fn test_misordered_catalog_is_fatal() {
    let catalog = catalog_from_ordinals(&[0, 1, 3, 2]);
    let result = Localizer::builder()
        .catalog(Arc::new(catalog), 4)
        .initialise(Some("fr"));

    match result {
        Err(CatalogError::OrderMismatch { position, found, message }) => {
            assert_eq!(position, 2);
            assert_eq!(found, 3);
            assert!(message.contains("\"text\""));
        }
        Err(other) => panic!("expected OrderMismatch, got {}", other),
        Ok(_) => panic!("misordered catalog was accepted"),
    }
}

proptest! {
    #[test]
    fn prop_validate_fails_at_first_misplaced_record(
        ordinals in (1usize..48).prop_flat_map(|n| Just((0..n as u16).collect::<Vec<_>>()).prop_shuffle())
    ) {
        let catalog = catalog_from_ordinals(&ordinals);
        let first_bad = ordinals
            .iter()
            .enumerate()
            .position(|(i, &ordinal)| usize::from(ordinal) != i);

        match (validate(&catalog, ordinals.len()), first_bad) {
            (Ok(()), None) => {}
            (Err(CatalogError::OrderMismatch { position, found, .. }), Some(expected)) => {
                prop_assert_eq!(position, expected);
                prop_assert_eq!(found, usize::from(ordinals[expected]));
            }
            (result, expected) => {
                prop_assert!(false, "validate returned {:?}, expected failure at {:?}", result, expected);
            }
        }
    }
}

// ==================== Concurrency Tests ====================

#[test]
fn test_readers_never_see_mixed_languages() {
    let localizer = Localizer::builder().initialise(None).unwrap();
    let allowed = ["Save", "Enregistrer[ Save]", "Speichern[ Save]"];

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..500 {
                    let text = localizer.get_string_plus_english(ids::SAVE);
                    assert!(allowed.contains(&&*text), "unexpected '{}'", text);
                }
            });
        }

        scope.spawn(|| {
            for round in 0..100 {
                let code = ["en", "fr", "de"][round % 3];
                localizer.set_language(Some(code));
            }
        });
    });

    assert_eq!(localizer.metrics().language_changes(), 100);
}
