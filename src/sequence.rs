//! Positional-sequence contract shared by `ArrayList` and `LinkedList`.

use crate::array_list::ArrayList;
use crate::error::Result;

/// An ordered, index-addressed sequence.
///
/// Positional operations report `Error::IndexOutOfBounds` with the offending
/// index and the length at the time of the call. `insert` accepts
/// `index == len()` (append); the others require `index < len()`.
pub trait Sequence<T> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends `value` at the end.
    fn push(&mut self, value: T);

    fn get(&self, index: usize) -> Result<&T>;

    /// Replaces the element at `index`, returning the old one.
    fn set(&mut self, index: usize, value: T) -> Result<T>;

    /// Inserts `value` at `index`, shifting later elements right.
    fn insert(&mut self, index: usize, value: T) -> Result<()>;

    /// Removes the element at `index`, shifting later elements left.
    fn remove(&mut self, index: usize) -> Result<T>;

    fn clear(&mut self);

    /// Reverses the order of the elements in place.
    fn reverse(&mut self);

    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Every position holding `value`, ascending. Empty when absent.
    fn indexes_of(&self, value: &T) -> ArrayList<usize>
    where
        T: PartialEq;
}
