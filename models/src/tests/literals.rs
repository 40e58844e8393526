use crate::literals::{ESCAPED_SAMPLE, RAW_QUOTED_SAMPLE, RAW_SAMPLE, samples, visible_escapes};

/// **VALUE**: Verifies the core distinction: `\n` is a newline in an escaped
/// literal and two characters in a raw one.
#[test]
fn given_samples_when_inspected_then_only_escaped_has_newline() {
    assert!(ESCAPED_SAMPLE.contains('\n'));
    assert!(!RAW_SAMPLE.contains('\n'));
    assert!(RAW_SAMPLE.contains("\\n"));
    assert_eq!(ESCAPED_SAMPLE.lines().count(), 2);
    assert_eq!(RAW_SAMPLE.lines().count(), 1);
}

#[test]
fn given_control_characters_when_made_visible_then_rendered_as_escapes() {
    assert_eq!(visible_escapes("a\nb\tc"), "a\\nb\\tc");
    assert_eq!(visible_escapes(RAW_SAMPLE), RAW_SAMPLE.replace('\\', "\\\\"));
    assert_eq!(visible_escapes("plain"), "plain");
}

#[test]
fn given_hashed_raw_literal_when_inspected_then_keeps_quotes_and_backslashes() {
    assert!(RAW_QUOTED_SAMPLE.contains('"'));
    assert!(RAW_QUOTED_SAMPLE.contains(r"C:\paths"));
    assert_eq!(samples().len(), 3);
}
