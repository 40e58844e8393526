// Unit tests for the Sequence capability and its built-in implementations

use crate::{MutableSequence, Sequence, SequenceError, index_from_signed};

use std::collections::VecDeque;
use std::ops::Range;

/// Generic helper: only needs the capability, not a concrete type.
fn collect_twice<S>(sequence: &S) -> usize
where
    S: Sequence + ?Sized,
{
    Sequence::iter(sequence).count() + Sequence::iter(sequence).rev().count()
}

/// **VALUE**: Verifies ranges behave as computed sequences.
///
/// **BUG THIS CATCHES**: Off-by-one in the half-open length, or element
/// computation that ignores the start offset.
#[test]
fn given_range_five_to_eleven_when_queried_then_behaves_as_sequence() {
    // GIVEN: 5..11
    let numbers: Range<i64> = 5..11;

    // THEN: Six elements, the second is 6
    assert_eq!(Sequence::len(&numbers), 6);
    assert_eq!(Sequence::element_at(&numbers, 1), Ok(6));
    assert_eq!(Sequence::last(&numbers), Some(10));
    assert!(Sequence::element_at(&numbers, 6).is_err());
}

#[test]
fn given_reversed_range_when_queried_then_is_empty() {
    #[allow(clippy::reversed_empty_ranges)]
    let empty: Range<i64> = 10..5;

    assert_eq!(Sequence::len(&empty), 0);
    assert!(Sequence::is_empty(&empty));
    assert_eq!(Sequence::first(&empty), None);
}

#[test]
fn given_extreme_range_when_len_computed_then_does_not_overflow() {
    let wide: Range<i64> = i64::MIN..i64::MAX;

    assert!(Sequence::len(&wide) > 0);
    assert_eq!(Sequence::element_at(&wide, 0), Ok(i64::MIN));
}

#[test]
fn given_various_containers_when_iterated_generically_then_counts_match() {
    let vector = vec![1, 2, 3];
    let deque: VecDeque<i32> = VecDeque::from([1, 2, 3, 4]);
    let array = [1, 2];
    let range: Range<i64> = 0..5;

    assert_eq!(collect_twice(&vector), 6);
    assert_eq!(collect_twice(&deque), 8);
    assert_eq!(collect_twice(&array[..]), 4);
    assert_eq!(collect_twice(&range), 10);
}

#[test]
fn given_slice_when_out_of_range_then_reports_index_and_len() {
    let letters = ["a", "b"];

    let err = Sequence::element_at(&letters[..], 2).unwrap_err();

    assert!(matches!(
        err,
        SequenceError::IndexOutOfRange { index: 2, len: 2, .. }
    ));
    assert!(err.to_string().contains("Index Error"));
}

/// **VALUE**: Verifies the mutable capability on Vec, including bounds.
#[test]
fn given_vec_when_mutated_through_trait_then_changes_apply() {
    let mut values = vec![1, 2, 3];

    assert_eq!(values.set_at(0, 10), Ok(1));
    assert_eq!(values.insert_at(3, 4), Ok(()));
    assert_eq!(values.remove_at(1), Ok(2));
    assert_eq!(values, vec![10, 3, 4]);

    assert!(values.set_at(3, 0).is_err());
    assert!(values.insert_at(5, 0).is_err());
    assert!(values.remove_at(3).is_err());
    assert_eq!(values, vec![10, 3, 4], "Failed operations must not change contents");
}

#[test]
fn given_deque_when_mutated_through_trait_then_changes_apply() {
    let mut queue: VecDeque<&str> = VecDeque::from(["a", "b"]);

    assert_eq!(queue.insert_at(0, "z"), Ok(()));
    assert_eq!(queue.set_at(2, "c"), Ok("b"));
    assert!(queue.remove_at(5).is_err());
    assert_eq!(Sequence::iter(&queue).copied().collect::<Vec<_>>(), vec!["z", "a", "c"]);
}

/// **VALUE**: Pins the negative-index convention: rejected, never wrapped.
#[test]
fn given_negative_signed_index_when_converted_then_fails() {
    assert!(matches!(
        index_from_signed(-1, 2),
        Err(SequenceError::NegativeIndex { index: -1, len: 2, .. })
    ));
    assert_eq!(index_from_signed(1, 2), Ok(1));
    // In-range check is left to element_at.
    assert_eq!(index_from_signed(7, 2), Ok(7));
}

#[test]
fn given_partially_consumed_iterator_when_size_hint_read_then_counts_remaining() {
    let values = vec![1, 2, 3, 4];
    let mut iter = Sequence::iter(&values);

    iter.next();
    iter.next_back();

    assert_eq!(iter.len(), 2);
    assert_eq!(iter.collect::<Vec<_>>(), vec![&2, &3]);
}
