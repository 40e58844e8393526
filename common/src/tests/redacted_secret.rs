use crate::RedactedSecret;

/// **VALUE**: Verifies the secret never appears in Debug or Display output.
///
/// **WHY THIS MATTERS**: SMTP passwords and bearer tokens travel through
/// structs that get logged with `{:?}`.
///
/// **BUG THIS CATCHES**: A derived Debug impl would leak the password.
#[test]
fn given_secret_when_formatted_then_value_is_hidden() {
    // GIVEN: A secret
    let secret = RedactedSecret::new("hunter2");

    // WHEN: Formatting it both ways
    let debug = format!("{:?}", secret);
    let display = format!("{}", secret);

    // THEN: Neither contains the value
    assert!(!debug.contains("hunter2"));
    assert!(!display.contains("hunter2"));
    assert!(debug.contains("REDACTED"));
}

#[test]
fn given_secret_when_exposed_then_returns_original_value() {
    let secret = RedactedSecret::from(String::from("hunter2"));

    assert_eq!(secret.expose(), "hunter2");
    assert_eq!(secret.len(), 7);
    assert!(!secret.is_empty());
}

/// **VALUE**: Verifies serialization is refused.
///
/// **BUG THIS CATCHES**: Saving a config would otherwise write the password to disk.
#[test]
fn given_secret_when_serialized_then_fails() {
    let secret = RedactedSecret::new("hunter2");

    let result = serde_json::to_string(&secret);

    let message = result.expect_err("Serializing a secret must fail").to_string();
    assert!(message.contains("refusing to serialize"));
    assert!(!message.contains("hunter2"));
}

#[test]
fn given_json_string_when_deserialized_then_wraps_value() {
    let secret: RedactedSecret = serde_json::from_str("\"hunter2\"").unwrap();

    assert_eq!(secret.expose(), "hunter2");
}
