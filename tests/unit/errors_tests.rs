/*!
 * Tests for error types and conversions
 */

use transtore::errors::TranslatorError;

#[test]
fn test_initializationError_shouldDisplayCorrectly() {
    let error = TranslatorError::Initialization("store unreachable".to_string());
    let display = format!("{}", error);
    assert!(display.contains("initialization failed"));
    assert!(display.contains("store unreachable"));
}

#[test]
fn test_validationError_shouldDisplayCorrectly() {
    let error = TranslatorError::Validation("invalid language name".to_string());
    let display = format!("{}", error);
    assert!(display.contains("invalid input"));
    assert!(display.contains("invalid language name"));
}

#[test]
fn test_storageError_shouldCarryBackendMessage() {
    let error = TranslatorError::Storage("no such table: st_texts".to_string());
    let display = format!("{}", error);
    assert!(display.contains("storage error"));
    assert!(display.contains("no such table: st_texts"));
}

#[test]
fn test_storageError_fromRusqliteError_shouldWrapCorrectly() {
    let backend = rusqlite::Error::InvalidQuery;
    let error: TranslatorError = backend.into();
    assert!(matches!(error, TranslatorError::Storage(_)));
}

#[test]
fn test_isRecoverable_shouldBeFalseOnlyForInitialization() {
    assert!(!TranslatorError::Initialization("x".to_string()).is_recoverable());
    assert!(TranslatorError::Validation("x".to_string()).is_recoverable());
    assert!(TranslatorError::Storage("x".to_string()).is_recoverable());
}
