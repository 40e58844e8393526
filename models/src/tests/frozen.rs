// Unit tests for the read-only container
// Tests length, indexed access, bounds, and the absence of aliasing

use crate::{FrozenSeq, Sequence, SequenceError};

/// **VALUE**: Verifies the canonical five-element example.
///
/// **BUG THIS CATCHES**: Off-by-one bounds checks, or access that returns a
/// default value instead of failing past the end.
#[test]
fn given_five_numbers_when_accessed_then_length_and_bounds_hold() {
    // GIVEN: [1, 2, 3, 4, 5]
    let numbers = FrozenSeq::new([1, 2, 3, 4, 5]);

    // THEN: Length and in-range access match the input
    assert_eq!(numbers.len(), 5);
    assert_eq!(numbers.element_at(0), Ok(&1));
    assert_eq!(numbers.element_at(4), Ok(&5));

    // AND: One past the end fails with an out-of-range error
    let err = numbers.element_at(5).unwrap_err();
    assert!(matches!(
        err,
        SequenceError::IndexOutOfRange { index: 5, len: 5, .. }
    ));
}

#[test]
fn given_empty_input_when_accessed_then_every_index_fails() {
    let empty: FrozenSeq<i32> = FrozenSeq::new(Vec::new());

    assert_eq!(empty.len(), 0);
    assert!(empty.is_empty());
    for index in [0, 1, usize::MAX] {
        assert!(empty.element_at(index).is_err(), "index {index} should fail");
    }
    assert_eq!(Sequence::first(&empty), None);
    assert_eq!(Sequence::last(&empty), None);
}

/// **VALUE**: Verifies every valid index maps to the same position in the input.
#[test]
fn given_input_when_indexed_then_order_is_preserved() {
    let input = vec!["alpha", "beta", "gamma", "delta"];
    let frozen = FrozenSeq::from(input.as_slice());

    assert_eq!(frozen.len(), input.len());
    for (index, expected) in input.iter().enumerate() {
        assert_eq!(frozen.element_at(index), Ok(expected));
    }
}

/// **VALUE**: Verifies the container copies rather than aliases its input.
///
/// **BUG THIS CATCHES**: Would catch storage that borrows or shares the
/// caller's buffer, letting later writes leak into the "immutable" value.
#[test]
fn given_source_vec_mutated_after_construction_then_frozen_is_unchanged() {
    // GIVEN: A frozen copy of a vector
    let mut source = vec![String::from("a"), String::from("b")];
    let frozen = FrozenSeq::from(source.as_slice());

    // WHEN: The source is modified
    source[0] = String::from("changed");
    source.push(String::from("c"));

    // THEN: The frozen copy still reflects construction time
    assert_eq!(frozen.len(), 2);
    assert_eq!(frozen.element_at(0).map(String::as_str), Ok("a"));
}

#[test]
fn given_same_index_when_read_repeatedly_then_returns_same_value() {
    let frozen: FrozenSeq<char> = "xyz".chars().collect();

    let first_read = frozen.element_at(1).copied();
    let second_read = frozen.element_at(1).copied();

    assert_eq!(first_read, Ok('y'));
    assert_eq!(first_read, second_read);
}

#[test]
fn given_two_strings_when_last_requested_then_returns_final_element() {
    let letters = FrozenSeq::new(["a", "b"]);

    assert_eq!(Sequence::last(&letters), Some(&"b"));
    assert_eq!(Sequence::first(&letters), Some(&"a"));
}

#[test]
fn given_valid_range_when_sliced_then_new_container_holds_subrange() {
    let numbers = FrozenSeq::new(5..11);

    let middle = numbers.slice(1..5).unwrap();

    assert_eq!(middle.as_slice(), &[6, 7, 8, 9]);
    assert_eq!(numbers.len(), 6, "Slicing must not change the original");
}

/// **VALUE**: Verifies slices are bounds-checked instead of clamped.
#[test]
fn given_out_of_bounds_or_reversed_range_when_sliced_then_fails() {
    let numbers = FrozenSeq::new([1, 2, 3]);

    #[allow(clippy::reversed_empty_ranges)]
    let reversed = numbers.slice(2..1);

    assert!(matches!(
        numbers.slice(1..4),
        Err(SequenceError::SliceOutOfRange { start: 1, end: 4, len: 3, .. })
    ));
    assert!(reversed.is_err());
    assert_eq!(numbers.slice(3..3).map(|s| s.len()), Ok(0));
}

#[test]
fn given_two_frozen_seqs_when_concatenated_then_result_has_both_in_order() {
    let left = FrozenSeq::new([1, 2, 3]);
    let right = FrozenSeq::new([4, 5, 6]);

    let joined = left.concat(&right);

    assert_eq!(joined.as_slice(), &[1, 2, 3, 4, 5, 6]);
    assert_eq!(left.len(), 3);
    assert_eq!(right.len(), 3);
}

#[test]
fn given_frozen_seq_when_iterated_via_trait_then_yields_all_in_order() {
    let frozen = FrozenSeq::new([10, 20, 30]);

    let forward: Vec<i32> = Sequence::iter(&frozen).copied().collect();
    let backward: Vec<i32> = Sequence::iter(&frozen).rev().copied().collect();

    assert_eq!(forward, vec![10, 20, 30]);
    assert_eq!(backward, vec![30, 20, 10]);
    assert_eq!(Sequence::iter(&frozen).len(), 3);
}

#[test]
fn given_frozen_seq_when_serialized_then_is_plain_json_array() {
    let frozen = FrozenSeq::new(["a", "b"]);

    let json = serde_json::to_string(&frozen).unwrap();
    let back: FrozenSeq<String> = serde_json::from_str(&json).unwrap();

    assert_eq!(json, r#"["a","b"]"#);
    assert_eq!(back.len(), 2);
}

#[test]
#[should_panic]
fn given_out_of_range_index_operator_then_panics_like_slices() {
    let frozen = FrozenSeq::new([1]);
    let _ = frozen[1];
}
