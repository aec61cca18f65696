//! BuildTarget token validation and guard derivation

use crate::stamp::error::StampError;
use crate::stamp::types::BuildTarget;

#[test]
fn guard_tokens_are_upper_cased() {
    let target = BuildTarget::new("esp32", "release").unwrap();
    assert_eq!(target.platform_guard(), "PLATFORM_ESP32");
    assert_eq!(target.target_guard(), "TARGET_RELEASE");
}

#[test]
fn guard_tokens_ignore_input_case() {
    let target = BuildTarget::new("Esp32", "ReLeAsE").unwrap();
    assert_eq!(target.platform_guard(), "PLATFORM_ESP32");
    assert_eq!(target.target_guard(), "TARGET_RELEASE");
    // Original case survives for the emitted values
    assert_eq!(target.platform(), "Esp32");
    assert_eq!(target.target(), "ReLeAsE");
}

#[test]
fn hyphens_map_to_underscores_in_guards() {
    let target = BuildTarget::new("esp32-s3", "release").unwrap();
    assert_eq!(target.platform_guard(), "PLATFORM_ESP32_S3");
    assert_eq!(target.include_guard(), "VERSION_DATA_ESP32_S3_RELEASE_H");
}

#[test]
fn empty_token_is_missing_configuration() {
    let err = BuildTarget::new("", "release").unwrap_err();
    assert!(matches!(err, StampError::MissingConfiguration { .. }));
    let err = BuildTarget::new("esp32", "").unwrap_err();
    assert!(matches!(err, StampError::MissingConfiguration { .. }));
}

#[test]
fn non_identifier_token_is_rejected() {
    for bad in ["esp 32", "rel/ease", "esp32\"", "tärget"] {
        let err = BuildTarget::new(bad, "release").unwrap_err();
        assert!(
            matches!(err, StampError::MissingConfiguration { .. }),
            "token {:?} should be rejected",
            bad
        );
    }
}
