/*!
 * Tests for repository CRUD through the public facade
 */

use crate::common::{seed_translation, test_translator};
use transtore::TranslatorError;

#[test]
fn test_addLanguage_withValidNames_shouldAssignDistinctIds() {
    let t = test_translator();

    let first = t.add_language("Italian").expect("Insert failed");
    let second = t.add_language("Klingon").expect("Insert failed");

    assert!(first.ok);
    assert!(second.ok);
    assert_ne!(first.row_id, second.row_id);

    let languages = t.get_languages(None).expect("List failed");
    let names: Vec<&str> = languages.iter().map(|l| l.language.as_str()).collect();
    assert_eq!(languages.len(), 2);
    assert!(names.contains(&"Italian"));
    assert!(names.contains(&"Klingon"));
}

#[test]
fn test_addLanguage_withPunctuationAndDigits_shouldFailValidation() {
    let t = test_translator();

    for name in ["Port-ug-al2", "Fr3nch", "Español!", "12345"] {
        let result = t.add_language(name);
        assert!(
            matches!(result, Err(TranslatorError::Validation(_))),
            "{:?} should be rejected",
            name
        );
    }

    assert!(t.get_languages(None).unwrap().is_empty());
}

#[test]
fn test_addText_withAnyContent_shouldSucceed() {
    let t = test_translator();

    // Texts have no content constraint, duplicates included
    assert!(t.add_text("hello world").unwrap().ok);
    assert!(t.add_text("hello world").unwrap().ok);
    assert!(t.add_text("état café 123 !?").unwrap().ok);

    assert_eq!(t.get_texts(None).unwrap().len(), 3);
}

#[test]
fn test_getTexts_withIdFilter_shouldReturnAtMostOne() {
    let t = test_translator();
    t.add_text("first").unwrap();
    t.add_text("second").unwrap();

    let one = t.get_texts(Some(1)).unwrap();
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].text, "first");

    assert!(t.get_texts(Some(42)).unwrap().is_empty());
}

#[test]
fn test_getTranslations_withIdFilter_shouldReturnDenormalizedRow() {
    let t = test_translator();
    seed_translation(&t, "Italian", "hello world", "Ciao Mondo");
    seed_translation(&t, "German", "good night", "Gute Nacht");

    let all = t.get_translations(None).unwrap();
    assert_eq!(all.len(), 2);

    let one = t.get_translations(Some(2)).unwrap();
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].lang, "German");
    assert_eq!(one[0].text, "good night");
    assert_eq!(one[0].translation, "Gute Nacht");
}

#[test]
fn test_addTranslation_withZeroIds_shouldFailBeforeStorage() {
    let t = test_translator();

    let result = t.add_translation("Ciao", 0, 0);
    assert!(matches!(result, Err(TranslatorError::Validation(_))));
    assert!(t.get_translations(None).unwrap().is_empty());
}

#[test]
fn test_getTranslationsJson_shouldRoundTripThroughSerde() {
    let t = test_translator();
    seed_translation(&t, "Italian", "hello world", "Ciao Mondo");

    let json = t.get_translations_json(None).unwrap();
    let parsed: Vec<transtore::TranslationRow> =
        serde_json::from_str(&json).expect("Failed to parse listing JSON");

    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].translation, "Ciao Mondo");
}
