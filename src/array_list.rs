//! ArrayList: contiguous growable sequence.
//!
//! Growth is explicit: when the buffer is full it is replaced by one of
//! `len * 2 + 1` slots and the elements are moved across.

use crate::error::{Error, Result};
use crate::sequence::Sequence;
use core::fmt;
use core::iter::FusedIterator;
use core::mem;

pub const DEFAULT_CAPACITY: usize = 10;

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ArrayList<T> {
    items: Vec<T>,
}

impl<T> ArrayList<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Slots available before the next growth.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    fn grow_if_full(&mut self) {
        let len = self.items.len();
        if len < self.items.capacity() {
            return;
        }
        let mut grown = Vec::with_capacity(len * 2 + 1);
        grown.append(&mut self.items);
        self.items = grown;
    }

    pub fn push(&mut self, value: T) {
        self.grow_if_full();
        self.items.push(value);
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        Error::check_index(index, self.len())?;
        Ok(&self.items[index])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        Error::check_index(index, self.len())?;
        Ok(&mut self.items[index])
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        Error::check_index(index, self.len())?;
        Ok(mem::replace(&mut self.items[index], value))
    }

    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        Error::check_position(index, self.len())?;
        self.grow_if_full();
        self.items.insert(index, value);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<T> {
        Error::check_index(index, self.len())?;
        Ok(self.items.remove(index))
    }

    /// Drops every element; capacity is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn reverse(&mut self) {
        self.items.reverse();
    }

    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|x| x == value)
    }

    pub fn indexes_of(&self, value: &T) -> ArrayList<usize>
    where
        T: PartialEq,
    {
        let mut found = ArrayList::new();
        for (i, x) in self.items.iter().enumerate() {
            if x == value {
                found.push(i);
            }
        }
        found
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.items.iter(),
        }
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence<T> for ArrayList<T> {
    fn len(&self) -> usize {
        ArrayList::len(self)
    }
    fn push(&mut self, value: T) {
        ArrayList::push(self, value)
    }
    fn get(&self, index: usize) -> Result<&T> {
        ArrayList::get(self, index)
    }
    fn set(&mut self, index: usize, value: T) -> Result<T> {
        ArrayList::set(self, index, value)
    }
    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        ArrayList::insert(self, index, value)
    }
    fn remove(&mut self, index: usize) -> Result<T> {
        ArrayList::remove(self, index)
    }
    fn clear(&mut self) {
        ArrayList::clear(self)
    }
    fn reverse(&mut self) {
        ArrayList::reverse(self)
    }
    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        ArrayList::index_of(self, value)
    }
    fn indexes_of(&self, value: &T) -> ArrayList<usize>
    where
        T: PartialEq,
    {
        ArrayList::indexes_of(self, value)
    }
}

/// Front-to-back iterator over an `ArrayList`.
pub struct Iter<'a, T> {
    inner: core::slice::Iter<'a, T>,
}

impl<T> Iter<'_, T> {
    /// Always fails: elements cannot be removed through an iterator.
    pub fn remove(&mut self) -> Result<()> {
        Error::iterator_remove()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ArrayList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.push(x);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// `[a, b, c]`
impl<T: fmt::Display> fmt::Display for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{x}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> ArrayList<&'static str> {
        ["a", "b", "c"].into_iter().collect()
    }

    #[test]
    fn starts_with_default_capacity() {
        let l: ArrayList<i32> = ArrayList::new();
        assert!(l.is_empty());
        assert!(l.capacity() >= DEFAULT_CAPACITY);
    }

    /// Invariant: a full buffer grows to at least `len * 2 + 1` slots.
    #[test]
    fn grows_when_full() {
        let mut l = ArrayList::with_capacity(1);
        l.push(0);
        assert_eq!(l.len(), 1);
        l.push(1);
        assert!(l.capacity() >= 3);
        for i in 2..100 {
            l.push(i);
        }
        assert_eq!(l.as_slice(), (0..100).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn zero_capacity_still_accepts_pushes() {
        let mut l = ArrayList::with_capacity(0);
        l.push('x');
        assert_eq!(l.get(0), Ok(&'x'));
    }

    #[test]
    fn get_and_set() {
        let mut l = abc();
        assert_eq!(l.get(1), Ok(&"b"));
        assert_eq!(l.set(1, "B"), Ok("b"));
        assert_eq!(l.get(1), Ok(&"B"));
        assert_eq!(
            l.set(3, "d"),
            Err(Error::IndexOutOfBounds { index: 3, len: 3 })
        );
        *l.get_mut(0).unwrap() = "A";
        assert_eq!(l.to_string(), "[A, B, c]");
    }

    #[test]
    fn insert_at_front_middle_and_end() {
        let mut l = abc();
        l.insert(0, "0").unwrap();
        l.insert(2, "mid").unwrap();
        l.insert(l.len(), "end").unwrap();
        assert_eq!(l.to_string(), "[0, a, mid, b, c, end]");
        assert_eq!(
            l.insert(7, "x"),
            Err(Error::IndexOutOfBounds { index: 7, len: 6 })
        );
        assert_eq!(l.len(), 6);
    }

    #[test]
    fn remove_shifts_left() {
        let mut l = abc();
        assert_eq!(l.remove(1), Ok("b"));
        assert_eq!(l.remove(1), Ok("c"));
        assert_eq!(
            l.remove(1),
            Err(Error::IndexOutOfBounds { index: 1, len: 1 })
        );
        assert_eq!(l.remove(0), Ok("a"));
        assert!(l.is_empty());
    }

    #[test]
    fn reverse_twice_is_identity() {
        let mut l = abc();
        l.reverse();
        assert_eq!(l.to_string(), "[c, b, a]");
        l.reverse();
        assert_eq!(l, abc());
    }

    #[test]
    fn index_lookups() {
        let l: ArrayList<i32> = [1, 2, 1, 3, 1].into_iter().collect();
        assert_eq!(l.index_of(&1), Some(0));
        assert_eq!(l.index_of(&3), Some(3));
        assert_eq!(l.index_of(&9), None);
        assert_eq!(l.indexes_of(&1).as_slice(), &[0, 2, 4]);
        assert!(l.indexes_of(&9).is_empty());
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut l: ArrayList<i32> = (0..50).collect();
        let cap = l.capacity();
        l.clear();
        assert!(l.is_empty());
        assert_eq!(l.capacity(), cap);
        assert_eq!(l.to_string(), "[]");
    }

    #[test]
    fn iterator_remove_is_unsupported() {
        let l = abc();
        let mut it = l.iter();
        assert_eq!(it.next(), Some(&"a"));
        assert!(matches!(it.remove(), Err(Error::Unsupported { .. })));
        assert_eq!(it.len(), 2);
        assert_eq!(l.len(), 3);
    }

    #[test]
    fn debug_and_display() {
        let l = abc();
        assert_eq!(format!("{l:?}"), r#"["a", "b", "c"]"#);
        assert_eq!(l.to_string(), "[a, b, c]");
    }
}
