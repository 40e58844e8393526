// Unit tests for console input over in-memory readers/writers

use crate::error::InputError;
use crate::input::{IntBounds, Prompter, split_fields};

use std::io::Cursor;

fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
    Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output(prompter: &Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8_lossy(prompter.writer()).into_owned()
}

#[test]
fn given_line_when_read_then_prompt_written_and_terminator_stripped() {
    let mut prompter = prompter("Ada Lovelace\r\n");

    let answer = prompter.read_line("Name: ").unwrap();

    assert_eq!(answer, "Ada Lovelace");
    assert_eq!(output(&prompter), "Name: ");
}

#[test]
fn given_exhausted_input_when_read_then_eof() {
    let mut prompter = prompter("");

    let err = prompter.read_line("Name: ").unwrap_err();

    assert!(matches!(err, InputError::Eof { .. }));
}

#[test]
fn given_comma_list_when_fields_read_then_trimmed_pieces() {
    let mut prompter = prompter("red, green ,blue\n");

    let fields = prompter.read_fields("Colours: ", ',').unwrap();

    assert_eq!(fields, vec!["red", "green", "blue"]);
    assert_eq!(split_fields("a", ','), vec!["a"]);
    assert_eq!(split_fields("", ','), vec![""]);
}

/// **VALUE**: Verifies bad answers are explained and asked again.
///
/// **WHY THIS MATTERS**: The caller should only ever see a valid integer.
#[test]
fn given_bad_then_good_answers_when_int_read_then_reasons_written() {
    let mut prompter = prompter("abc\n0\n11\n7\n");

    let value = prompter.read_int("Pick: ", IntBounds::between(1, 10)).unwrap();

    assert_eq!(value, 7);
    let written = output(&prompter);
    assert!(written.contains("'abc' is not an integer."));
    assert!(written.contains("Number must be at minimum 1."));
    assert!(written.contains("Number must be at maximum 10."));
    assert_eq!(written.matches("Pick: ").count(), 4);
}

#[test]
fn given_only_bad_answers_when_int_read_then_too_many_attempts() {
    let mut prompter = prompter("x\ny\nz\n").with_max_attempts(3);

    let err = prompter.read_int("Pick: ", IntBounds::default()).unwrap_err();

    assert!(matches!(err, InputError::TooManyAttempts { attempts: 3, .. }));
}

#[test]
fn given_input_ends_before_valid_answer_when_int_read_then_eof() {
    let mut prompter = prompter("x\n");

    let err = prompter.read_int("Pick: ", IntBounds::at_least(0)).unwrap_err();

    assert!(matches!(err, InputError::Eof { .. }));
}

#[test]
fn given_choice_in_other_case_when_read_then_listed_spelling_returned() {
    let mut prompter = prompter("maybe\nYES\n");

    let choice = prompter.read_choice("Continue? ", &["yes", "no"]).unwrap();

    assert_eq!(choice, "yes");
    assert!(output(&prompter).contains("'maybe' is not a valid choice."));
}

#[test]
fn given_non_terminal_when_secret_read_then_line_used_and_redacted() {
    let mut prompter = prompter("s3cret\n");

    let secret = prompter.read_secret("Password: ").unwrap();

    assert_eq!(secret.expose(), "s3cret");
    assert!(!format!("{secret:?}").contains("s3cret"));
}

#[test]
fn given_bounds_when_checked_then_inclusive() {
    let bounds = IntBounds::between(-5, 5);

    assert_eq!(bounds.check(-5), Ok(-5));
    assert_eq!(bounds.check(5), Ok(5));
    assert!(bounds.check(6).is_err());
    assert_eq!(IntBounds::default().check(i64::MIN), Ok(i64::MIN));
}
