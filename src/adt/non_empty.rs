//! A list guaranteed to hold at least one element.

use crate::typeclass::Semigroup;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A list with a `head` and a possibly empty `tail`.
///
/// Used as the error collection of [`validate_all`](crate::validate::validate_all),
/// where "failed with no errors" must be unrepresentable.
///
/// # Examples
///
/// ```rust
/// use fptk::adt::NonEmptyList;
///
/// let list = NonEmptyList::with_tail(1, vec![2, 3]).push(4);
/// assert_eq!(list.head(), &1);
/// assert_eq!(list.len(), 4);
/// assert_eq!(NonEmptyList::<i32>::from_vec(Vec::new()), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NonEmptyList<T> {
    head: T,
    tail: Vec<T>,
}

#[allow(clippy::len_without_is_empty)]
impl<T> NonEmptyList<T> {
    /// A single-element list.
    pub const fn new(head: T) -> Self {
        Self {
            head,
            tail: Vec::new(),
        }
    }

    /// A list from its first element and the rest.
    pub const fn with_tail(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// `None` when `items` is empty.
    pub fn from_vec(items: Vec<T>) -> Option<Self> {
        Self::try_from_iter(items)
    }

    /// `None` when the iterator yields nothing.
    pub fn try_from_iter<I: IntoIterator<Item = T>>(items: I) -> Option<Self> {
        let mut iterator = items.into_iter();
        let head = iterator.next()?;
        Some(Self {
            head,
            tail: iterator.collect(),
        })
    }

    /// The first element.
    pub const fn head(&self) -> &T {
        &self.head
    }

    /// Every element after the head.
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// The final element; the head for a single-element list.
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Always at least 1.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Appends one element.
    #[must_use]
    pub fn push(mut self, item: T) -> Self {
        self.tail.push(item);
        self
    }

    /// Appends every element of `other`.
    #[must_use]
    pub fn append(self, other: Self) -> Self {
        self.combine(other)
    }

    /// Borrowing iterator, head first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Applies `function` to every element.
    pub fn map<U, F>(self, mut function: F) -> NonEmptyList<U>
    where
        F: FnMut(T) -> U,
    {
        NonEmptyList {
            head: function(self.head),
            tail: self.tail.into_iter().map(function).collect(),
        }
    }

    /// All elements as a `Vec`, head first.
    pub fn into_vec(self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.len());
        items.push(self.head);
        items.extend(self.tail);
        items
    }
}

impl<T> Semigroup for NonEmptyList<T> {
    fn combine(mut self, other: Self) -> Self {
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }
}

impl<T> IntoIterator for NonEmptyList<T> {
    type Item = T;
    type IntoIter = std::iter::Chain<std::iter::Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<T> From<NonEmptyList<T>> for Vec<T> {
    fn from(list: NonEmptyList<T>) -> Self {
        list.into_vec()
    }
}

static_assertions::assert_impl_all!(NonEmptyList<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn try_from_iter_splits_head_and_tail() {
        let list = NonEmptyList::try_from_iter(1..=3).unwrap();
        assert_eq!(list.head(), &1);
        assert_eq!(list.tail(), &[2, 3]);
        assert_eq!(list.last(), &3);
    }

    #[rstest]
    fn singleton_last_is_head() {
        assert_eq!(NonEmptyList::new("only").last(), &"only");
    }

    #[rstest]
    fn append_keeps_order() {
        let joined =
            NonEmptyList::with_tail(1, vec![2]).append(NonEmptyList::with_tail(3, vec![4]));
        assert_eq!(joined.into_vec(), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn map_preserves_length() {
        let lengths = NonEmptyList::with_tail("a", vec!["bb", "ccc"]).map(str::len);
        assert_eq!(lengths.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
