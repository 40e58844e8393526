//! The read-only ordered container.

use crate::SequenceError;
use crate::sequence::Sequence;

use std::ops::{Index, Range};

use serde::{Deserialize, Serialize};

/// An immutable, fixed-length sequence.
///
/// Built once from any finite ordered input; the elements are moved (or
/// cloned, for borrowed input) into storage owned by the container, so the
/// caller's buffer is never aliased. Nothing can be added, removed or
/// replaced afterwards: `len()` is fixed for the life of the value and
/// repeated reads of an index always return the same element.
///
/// ```
/// use models::{FrozenSeq, Sequence};
///
/// let numbers = FrozenSeq::new([1, 2, 3, 4, 5]);
/// assert_eq!(numbers.len(), 5);
/// assert_eq!(numbers.element_at(4), Ok(&5));
/// assert!(numbers.element_at(5).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrozenSeq<T> {
    elements: Box<[T]>,
}

impl<T> FrozenSeq<T> {
    pub fn new(elements: impl IntoIterator<Item = T>) -> Self {
        Self {
            elements: elements.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T: Clone> FrozenSeq<T> {
    /// A new container holding `range` of this one.
    ///
    /// # Errors
    ///
    /// [`SequenceError::SliceOutOfRange`] if the range is reversed or ends
    /// past `len()`. Ranges are not clamped.
    #[track_caller]
    pub fn slice(&self, range: Range<usize>) -> Result<Self, SequenceError> {
        match self.elements.get(range.clone()) {
            Some(part) => Ok(Self::from(part)),
            None => Err(SequenceError::slice_out_of_range(
                range.start,
                range.end,
                self.len(),
            )),
        }
    }

    /// A new container with `other`'s elements after this one's.
    pub fn concat(&self, other: &Self) -> Self {
        self.iter().chain(other.iter()).cloned().collect()
    }
}

impl<T> Sequence for FrozenSeq<T> {
    type Item<'a>
        = &'a T
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.elements.len()
    }

    #[track_caller]
    fn element_at(&self, index: usize) -> Result<&T, SequenceError> {
        self.elements.element_at(index)
    }
}

impl<T> Default for FrozenSeq<T> {
    fn default() -> Self {
        Self {
            elements: Box::default(),
        }
    }
}

impl<T> Index<usize> for FrozenSeq<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<T> FromIterator<T> for FrozenSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T> From<Vec<T>> for FrozenSeq<T> {
    fn from(elements: Vec<T>) -> Self {
        Self {
            elements: elements.into_boxed_slice(),
        }
    }
}

impl<T: Clone> From<&[T]> for FrozenSeq<T> {
    fn from(elements: &[T]) -> Self {
        Self {
            elements: elements.into(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for FrozenSeq<T> {
    fn from(elements: [T; N]) -> Self {
        Self::new(elements)
    }
}

impl<'a, T> IntoIterator for &'a FrozenSeq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T> IntoIterator for FrozenSeq<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_vec().into_iter()
    }
}
