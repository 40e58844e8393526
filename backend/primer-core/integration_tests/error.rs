use primer_core::CoreError;
use primer_core::error::{ConfigError, HttpError};

use models::{FrozenSeq, Sequence, SequenceError};

// ============================================================================
// Error formatting as seen by a consumer of the crate
// ============================================================================

/// **VALUE**: Verifies errors render with a category prefix and the source location.
///
/// **WHY THIS MATTERS**: The CLI prints these strings as-is; the location is
/// the fastest route from a bug report to the failing line.
#[test]
fn given_status_error_when_displayed_then_includes_url_and_location() {
    // GIVEN: A status error built here
    let line = line!() + 1;
    let err = HttpError::status(404, "Not Found", "https://example.com/x");

    // WHEN: Wrapped and displayed
    let message = CoreError::from(err).to_string();

    // THEN: Prefix, detail and location survive the transparent wrapper
    assert!(message.starts_with("HTTP Status Error: 404 Not Found for url: https://example.com/x"));
    assert!(message.contains(&format!("error.rs:{line}:")));
}

#[test]
fn given_sequence_error_when_wrapped_then_transparent() {
    let seq: FrozenSeq<i32> = FrozenSeq::from(vec![1, 2, 3]);

    let err: CoreError = seq.element_at(5).unwrap_err().into();

    assert!(matches!(
        err,
        CoreError::Sequence(SequenceError::IndexOutOfRange { index: 5, len: 3, .. })
    ));
}

#[test]
fn given_validation_error_when_displayed_then_reason_shown() {
    let err = CoreError::from(ConfigError::validation("smtp.port must be non-zero"));

    assert!(err.to_string().contains("smtp.port must be non-zero"));
}
