//! LinkedList: doubly-linked sequence over an arena of nodes.
//!
//! Nodes are addressed by generational keys; `prev`/`next` links are keys,
//! so unlinking a node never leaves a dangling pointer behind.

use crate::array_list::ArrayList;
use crate::error::{Error, Result};
use crate::sequence::Sequence;
use core::fmt;
use core::iter::FusedIterator;
use core::mem;
use slotmap::{DefaultKey, SlotMap};

type Link = Option<DefaultKey>;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Link,
    next: Link,
}

#[derive(Clone)]
pub struct LinkedList<T> {
    nodes: SlotMap<DefaultKey, Node<T>>,
    head: Link,
    tail: Link,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.head.map(|k| &self.nodes[k].value)
    }

    pub fn last(&self) -> Option<&T> {
        self.tail.map(|k| &self.nodes[k].value)
    }

    // Walks from whichever end is closer. Caller has checked `index < len`.
    fn node_at(&self, index: usize) -> DefaultKey {
        let len = self.len();
        let (mut cursor, steps, forward) = if index < len / 2 {
            (self.head, index, true)
        } else {
            (self.tail, len - 1 - index, false)
        };
        for _ in 0..steps {
            let n = &self.nodes[cursor.expect("index below len is linked")];
            cursor = if forward { n.next } else { n.prev };
        }
        cursor.expect("index below len is linked")
    }

    pub fn push(&mut self, value: T) {
        let k = self.nodes.insert(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(t) => self.nodes[t].next = Some(k),
            None => self.head = Some(k),
        }
        self.tail = Some(k);
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        Error::check_index(index, self.len())?;
        Ok(&self.nodes[self.node_at(index)].value)
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        Error::check_index(index, self.len())?;
        let k = self.node_at(index);
        Ok(&mut self.nodes[k].value)
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(mem::replace(slot, value))
    }

    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        Error::check_position(index, self.len())?;
        if index == self.len() {
            self.push(value);
            return Ok(());
        }
        let next = self.node_at(index);
        let prev = self.nodes[next].prev;
        let k = self.nodes.insert(Node {
            value,
            prev,
            next: Some(next),
        });
        self.nodes[next].prev = Some(k);
        match prev {
            Some(p) => self.nodes[p].next = Some(k),
            None => self.head = Some(k),
        }
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<T> {
        Error::check_index(index, self.len())?;
        let k = self.node_at(index);
        let node = self.nodes.remove(k).expect("located node is live");
        match node.prev {
            Some(p) => self.nodes[p].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(n) => self.nodes[n].prev = node.prev,
            None => self.tail = node.prev,
        }
        Ok(node.value)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Swaps every node's links and the two ends. Linear time, no moves.
    pub fn reverse(&mut self) {
        for (_, node) in self.nodes.iter_mut() {
            mem::swap(&mut node.prev, &mut node.next);
        }
        mem::swap(&mut self.head, &mut self.tail);
    }

    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|x| x == value)
    }

    pub fn indexes_of(&self, value: &T) -> ArrayList<usize>
    where
        T: PartialEq,
    {
        let mut found = ArrayList::new();
        for (i, x) in self.iter().enumerate() {
            if x == value {
                found.push(i);
            }
        }
        found
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence<T> for LinkedList<T> {
    fn len(&self) -> usize {
        LinkedList::len(self)
    }
    fn push(&mut self, value: T) {
        LinkedList::push(self, value)
    }
    fn get(&self, index: usize) -> Result<&T> {
        LinkedList::get(self, index)
    }
    fn set(&mut self, index: usize, value: T) -> Result<T> {
        LinkedList::set(self, index, value)
    }
    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        LinkedList::insert(self, index, value)
    }
    fn remove(&mut self, index: usize) -> Result<T> {
        LinkedList::remove(self, index)
    }
    fn clear(&mut self) {
        LinkedList::clear(self)
    }
    fn reverse(&mut self) {
        LinkedList::reverse(self)
    }
    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        LinkedList::index_of(self, value)
    }
    fn indexes_of(&self, value: &T) -> ArrayList<usize>
    where
        T: PartialEq,
    {
        LinkedList::indexes_of(self, value)
    }
}

/// Head-to-tail iterator over a `LinkedList`.
pub struct Iter<'a, T> {
    nodes: &'a SlotMap<DefaultKey, Node<T>>,
    front: Link,
    back: Link,
    remaining: usize,
}

impl<T> Iter<'_, T> {
    /// Always fails: elements cannot be removed through an iterator.
    pub fn remove(&mut self) -> Result<()> {
        Error::iterator_remove()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let n = &nodes[self.front?];
        self.front = n.next;
        self.remaining -= 1;
        Some(&n.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let n = &nodes[self.back?];
        self.back = n.prev;
        self.remaining -= 1;
        Some(&n.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.push(x);
        }
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// `[a, b, c]`
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
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
