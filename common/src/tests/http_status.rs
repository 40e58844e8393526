use crate::HttpStatusCode;

/// **VALUE**: Verifies the 400..600 band used by `raise_for_status`.
///
/// **BUG THIS CATCHES**: Off-by-one at 399/400 or 599/600 would make
/// successful responses raise, or server failures pass silently.
#[test]
fn given_boundary_codes_when_classified_then_error_band_is_400_to_599() {
    assert!(!HttpStatusCode(399).is_error());
    assert!(HttpStatusCode(400).is_error());
    assert!(HttpStatusCode(404).is_client_error());
    assert!(HttpStatusCode(500).is_server_error());
    assert!(HttpStatusCode(599).is_error());
    assert!(!HttpStatusCode(600).is_error());
}

#[test]
fn given_success_and_redirect_codes_when_classified_then_not_errors() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(204).is_success());
    assert!(HttpStatusCode(301).is_redirection());
    assert!(!HttpStatusCode(301).is_error());
}

/// **VALUE**: Verifies which codes count as transient.
#[test]
fn given_transient_and_permanent_codes_when_checked_then_only_transient_retryable() {
    for code in [429, 500, 502, 503, 504] {
        assert!(HttpStatusCode(code).is_retryable(), "{code} should be retryable");
    }
    for code in [400, 401, 404, 501] {
        assert!(!HttpStatusCode(code).is_retryable(), "{code} should not be retryable");
    }
}

#[test]
fn given_out_of_range_number_when_validated_then_invalid() {
    assert!(!HttpStatusCode(99).is_valid());
    assert!(HttpStatusCode(100).is_valid());
    assert!(!HttpStatusCode(600).is_valid());
    assert_eq!(HttpStatusCode::from(418).to_string(), "418");
}
