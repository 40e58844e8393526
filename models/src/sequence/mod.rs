//! Sequences: ordered collections with a length, indexed access, and iteration.
//!
//! [`Sequence`] is the capability every ordered container can expose. Strings,
//! vectors, deques and integer ranges all qualify; sets and maps do not, since
//! their elements have no position.
//!
//! A sequence is *mutable* when it also implements [`MutableSequence`]
//! (replace, insert, remove). [`FrozenSeq`](frozen::FrozenSeq)
//! does not.

pub mod frozen;

use crate::SequenceError;

use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::ops::Range;

/// Read-only ordered access.
///
/// Implementors provide [`len`](Sequence::len) and
/// [`element_at`](Sequence::element_at); iteration and the convenience
/// accessors are derived from those two.
///
/// Items are a generic associated type so stored containers hand out
/// references while computed sequences such as `Range<i64>` hand out values.
pub trait Sequence {
    type Item<'a>
    where
        Self: 'a;

    /// Number of elements. Never fails.
    fn len(&self) -> usize;

    /// Element at the zero-based `index`.
    ///
    /// # Errors
    ///
    /// [`SequenceError::IndexOutOfRange`] when `index >= len()`.
    fn element_at(&self, index: usize) -> Result<Self::Item<'_>, SequenceError>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn first(&self) -> Option<Self::Item<'_>> {
        self.element_at(0).ok()
    }

    fn last(&self) -> Option<Self::Item<'_>> {
        let index = self.len().checked_sub(1)?;
        self.element_at(index).ok()
    }

    /// In-order iteration over all elements.
    fn iter(&self) -> SeqIter<'_, Self> {
        SeqIter::new(self)
    }
}

/// Iterator over any [`Sequence`], driven purely by `len` and `element_at`.
pub struct SeqIter<'a, S>
where
    S: Sequence + ?Sized + 'a,
{
    sequence: &'a S,
    front: usize,
    back: usize,
}

impl<'a, S> SeqIter<'a, S>
where
    S: Sequence + ?Sized + 'a,
{
    fn new(sequence: &'a S) -> Self {
        Self {
            sequence,
            front: 0,
            back: sequence.len(),
        }
    }
}

impl<'a, S> Iterator for SeqIter<'a, S>
where
    S: Sequence + ?Sized + 'a,
{
    type Item = S::Item<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.sequence.element_at(self.front).ok()?;
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.saturating_sub(self.front);
        (remaining, Some(remaining))
    }
}

impl<'a, S> DoubleEndedIterator for SeqIter<'a, S>
where
    S: Sequence + ?Sized + 'a,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.sequence.element_at(self.back).ok()
    }
}

impl<'a, S> ExactSizeIterator for SeqIter<'a, S> where S: Sequence + ?Sized + 'a {}

impl<'a, S> FusedIterator for SeqIter<'a, S> where S: Sequence + ?Sized + 'a {}

/// A [`Sequence`] whose elements can be replaced, inserted and removed in place.
pub trait MutableSequence: Sequence {
    type Element;

    /// Replace the element at `index`, returning the previous one.
    fn set_at(&mut self, index: usize, value: Self::Element)
    -> Result<Self::Element, SequenceError>;

    /// Insert before `index`; `index == len()` appends.
    fn insert_at(&mut self, index: usize, value: Self::Element) -> Result<(), SequenceError>;

    fn remove_at(&mut self, index: usize) -> Result<Self::Element, SequenceError>;
}

/// Convert a signed index coming from user input into a sequence index.
///
/// Negative indices are rejected rather than counted from the end; use
/// [`Sequence::last`] for that.
#[track_caller]
pub fn index_from_signed(index: i64, len: usize) -> Result<usize, SequenceError> {
    if index < 0 {
        return Err(SequenceError::negative(index, len));
    }
    usize::try_from(index).map_err(|_| SequenceError::out_of_range(usize::MAX, len))
}

// ============================================
// BUILT-IN IMPLEMENTATIONS
// ============================================

impl<T> Sequence for [T] {
    type Item<'a>
        = &'a T
    where
        Self: 'a;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[track_caller]
    fn element_at(&self, index: usize) -> Result<&T, SequenceError> {
        self.get(index)
            .ok_or_else(|| SequenceError::out_of_range(index, <[T]>::len(self)))
    }
}

impl<T> Sequence for Vec<T> {
    type Item<'a>
        = &'a T
    where
        Self: 'a;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[track_caller]
    fn element_at(&self, index: usize) -> Result<&T, SequenceError> {
        self.as_slice().element_at(index)
    }
}

impl<T> MutableSequence for Vec<T> {
    type Element = T;

    #[track_caller]
    fn set_at(&mut self, index: usize, value: T) -> Result<T, SequenceError> {
        let len = Vec::len(self);
        let slot = self
            .get_mut(index)
            .ok_or_else(|| SequenceError::out_of_range(index, len))?;
        Ok(std::mem::replace(slot, value))
    }

    #[track_caller]
    fn insert_at(&mut self, index: usize, value: T) -> Result<(), SequenceError> {
        if index > Vec::len(self) {
            return Err(SequenceError::out_of_range(index, Vec::len(self)));
        }
        self.insert(index, value);
        Ok(())
    }

    #[track_caller]
    fn remove_at(&mut self, index: usize) -> Result<T, SequenceError> {
        if index >= Vec::len(self) {
            return Err(SequenceError::out_of_range(index, Vec::len(self)));
        }
        Ok(self.remove(index))
    }
}

// Deques index fine but have no contiguous slice to cut, so there is no `slice`.
impl<T> Sequence for VecDeque<T> {
    type Item<'a>
        = &'a T
    where
        Self: 'a;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[track_caller]
    fn element_at(&self, index: usize) -> Result<&T, SequenceError> {
        self.get(index)
            .ok_or_else(|| SequenceError::out_of_range(index, VecDeque::len(self)))
    }
}

impl<T> MutableSequence for VecDeque<T> {
    type Element = T;

    #[track_caller]
    fn set_at(&mut self, index: usize, value: T) -> Result<T, SequenceError> {
        let len = VecDeque::len(self);
        let slot = self
            .get_mut(index)
            .ok_or_else(|| SequenceError::out_of_range(index, len))?;
        Ok(std::mem::replace(slot, value))
    }

    #[track_caller]
    fn insert_at(&mut self, index: usize, value: T) -> Result<(), SequenceError> {
        if index > VecDeque::len(self) {
            return Err(SequenceError::out_of_range(index, VecDeque::len(self)));
        }
        self.insert(index, value);
        Ok(())
    }

    #[track_caller]
    fn remove_at(&mut self, index: usize) -> Result<T, SequenceError> {
        let len = VecDeque::len(self);
        self.remove(index)
            .ok_or_else(|| SequenceError::out_of_range(index, len))
    }
}

/// Integer ranges are computed sequences: elements are produced, not stored.
impl Sequence for Range<i64> {
    type Item<'a> = i64;

    fn len(&self) -> usize {
        let span = i128::from(self.end) - i128::from(self.start);
        if span <= 0 {
            return 0;
        }
        usize::try_from(span).unwrap_or(usize::MAX)
    }

    #[track_caller]
    fn element_at(&self, index: usize) -> Result<i64, SequenceError> {
        let len = Sequence::len(self);
        if index >= len {
            return Err(SequenceError::out_of_range(index, len));
        }
        i64::try_from(index)
            .ok()
            .and_then(|offset| self.start.checked_add(offset))
            .ok_or_else(|| SequenceError::out_of_range(index, len))
    }
}
