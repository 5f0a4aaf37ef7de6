/*!
 * End-to-end translate workflow tests
 */

use crate::common::{seed_translation, test_translator};
use transtore::{miss_sentinel, StoreConfig, Translator};

#[test]
fn test_fullWorkflow_withItalianSeed_shouldTranslateHelloWorld() {
    let t = test_translator();

    let (lang_id, text_id) = seed_translation(&t, "Italian", "hello world", "Ciao Mondo");
    assert_eq!(lang_id, 1);
    assert_eq!(text_id, 1);

    let result = t.translate("hello world", "Italian").expect("Translate failed");
    assert_eq!(result, "Ciao Mondo");
}

#[test]
fn test_fullWorkflow_withNeverInsertedLanguage_shouldReturnSentinel() {
    let t = test_translator();
    seed_translation(&t, "Italian", "hello world", "Ciao Mondo");

    let result = t.translate("hello world", "French").expect("Translate failed");
    assert_eq!(result, miss_sentinel("hello world"));
}

#[test]
fn test_translate_afterReinsertingSamePair_shouldReturnLatestWrite() {
    let t = test_translator();
    let (lang_id, text_id) = seed_translation(&t, "Italian", "hello world", "Salve Mondo");

    t.add_translation("Ciao Mondo", lang_id, text_id)
        .expect("Replacement insert failed");

    let result = t.translate("hello world", "Italian").expect("Translate failed");
    assert_eq!(result, "Ciao Mondo");
}

#[test]
fn test_translate_withMultipleLanguages_shouldSelectByParameter() {
    let t = test_translator();
    let lang_it = t.add_language("Italian").unwrap().row_id.unwrap();
    let lang_de = t.add_language("German").unwrap().row_id.unwrap();
    let text = t.add_text("hello world").unwrap().row_id.unwrap();
    t.add_translation("Ciao Mondo", lang_it, text).unwrap();
    t.add_translation("Hallo Welt", lang_de, text).unwrap();

    assert_eq!(t.translate("hello world", "Italian").unwrap(), "Ciao Mondo");
    assert_eq!(t.translate("hello world", "German").unwrap(), "Hallo Welt");
}

#[test]
fn test_open_withFileBackedStore_shouldPersistAcrossReopen() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = StoreConfig::new(dir.path().join("store.db"));

    {
        let t = Translator::open(&config).expect("First open failed");
        seed_translation(&t, "Italian", "hello world", "Ciao Mondo");
    }

    // Reopening an initialized store is idempotent and keeps the rows
    let t = Translator::open(&config).expect("Second open failed");
    assert_eq!(t.get_languages(None).unwrap().len(), 1);
    assert_eq!(t.translate("hello world", "Italian").unwrap(), "Ciao Mondo");

    let stats = t.stats().expect("Stats failed");
    assert_eq!(stats.translation_count, 1);
    assert!(stats.file_size_bytes > 0);
}

#[test]
fn test_open_withUnwritablePath_shouldFailInitialization() {
    let config = StoreConfig::new("/proc/transtore-nope/store.db");

    let result = Translator::open(&config);
    assert!(matches!(
        result,
        Err(transtore::TranslatorError::Initialization(_))
    ));
}
