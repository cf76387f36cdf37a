//! ChainedHashMap: separate chaining over a prime-sized bucket table.
//!
//! Entries live in a generational arena and each bucket holds the arena key
//! of its chain head. Chains are singly linked through `Entry::next`.
//! Iteration order is the physical layout: buckets low-to-high, each chain
//! head-to-tail.

use crate::capacity::Capacity;
use crate::error::{Error, Result};
use crate::reentrancy::ExclusiveAccess;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::iter::FusedIterator;
use core::mem;
use hashbrown::hash_map::DefaultHashBuilder;
use log::{debug, info, trace};
use slotmap::{DefaultKey, SlotMap};

/// Maps with more entries than this render a placeholder instead of their
/// contents.
pub const DISPLAY_LIMIT: usize = 1000;

type Link = Option<DefaultKey>;

#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
    // Cached so relinking during growth never calls `K: Hash`.
    hash: u64,
    next: Link,
}

/// Where a key sits: its bucket, its chain predecessor and its own node.
#[derive(Clone, Copy, Debug)]
struct Located {
    bucket: usize,
    prev: Link,
    node: DefaultKey,
}

#[derive(Clone)]
pub struct ChainedHashMap<K, V, S = DefaultHashBuilder> {
    hasher: S,
    buckets: Box<[Link]>,
    capacity: Capacity,
    slots: SlotMap<DefaultKey, Entry<K, V>>,
    access: ExclusiveAccess,
}

impl<K, V> ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_hasher(Default::default())
    }
}

impl<K, V> Default for ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

fn empty_table(capacity: Capacity) -> Box<[Link]> {
    vec![None; capacity.buckets()].into_boxed_slice()
}

/// Relinks every entry of `table` into a fresh table sized for `target`.
///
/// Entries are visited in iteration order and each becomes the head of its
/// new bucket, so entries sharing a bucket before and after come out in
/// reverse order.
fn rehash<K, V>(
    slots: &mut SlotMap<DefaultKey, Entry<K, V>>,
    table: &[Link],
    target: Capacity,
) -> Box<[Link]> {
    let mut order = Vec::with_capacity(slots.len());
    for &head in table {
        let mut cursor = head;
        while let Some(k) = cursor {
            order.push(k);
            cursor = slots[k].next;
        }
    }

    let mut fresh = empty_table(target);
    for k in order {
        let entry = &mut slots[k];
        let bucket = target.bucket_of(entry.hash);
        entry.next = fresh[bucket];
        fresh[bucket] = Some(k);
    }
    fresh
}

impl<K, V, S> ChainedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        let capacity = Capacity::initial();
        Self {
            hasher,
            buckets: empty_table(capacity),
            capacity,
            slots: SlotMap::with_key(),
            access: ExclusiveAccess::new(),
        }
    }

    fn make_hash<Q>(&self, q: &Q) -> u64
    where
        Q: ?Sized + Hash,
    {
        self.hasher.hash_one(q)
    }

    fn locate<Q>(&self, hash: u64, q: &Q) -> Option<Located>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let bucket = self.capacity.bucket_of(hash);
        let mut prev = None;
        let mut cursor = self.buckets[bucket];
        while let Some(node) = cursor {
            let e = &self.slots[node];
            if e.hash == hash && e.key.borrow() == q {
                return Some(Located { bucket, prev, node });
            }
            prev = cursor;
            cursor = e.next;
        }
        None
    }

    pub fn get<Q>(&self, q: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.access.enter("get");
        let hash = self.make_hash(q);
        self.locate(hash, q).map(|at| &self.slots[at.node].value)
    }

    pub fn get_mut<Q>(&mut self, q: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.access.enter("get_mut");
        let hash = self.make_hash(q);
        let at = self.locate(hash, q)?;
        self.slots.get_mut(at.node).map(|e| &mut e.value)
    }

    pub fn contains_key<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let _g = self.access.enter("contains_key");
        let hash = self.make_hash(q);
        self.locate(hash, q).is_some()
    }

    /// Associates `value` with `key`, returning the value it replaces.
    ///
    /// An existing entry is updated in place. A new entry becomes the head of
    /// its bucket's chain; if that pushes the load factor past
    /// [`MAX_LOAD_FACTOR`](crate::MAX_LOAD_FACTOR) the table grows by exactly
    /// one step of the prime schedule (unless the schedule is exhausted).
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let _g = self.access.enter("insert");
        let hash = self.make_hash(&key);
        let bucket = self.capacity.bucket_of(hash);

        let mut cursor = self.buckets[bucket];
        while let Some(k) = cursor {
            let e = &mut self.slots[k];
            if e.hash == hash && e.key == key {
                return Some(mem::replace(&mut e.value, value));
            }
            cursor = e.next;
        }

        let next = self.buckets[bucket];
        let k = self.slots.insert(Entry {
            key,
            value,
            hash,
            next,
        });
        self.buckets[bucket] = Some(k);

        if self.capacity.should_grow(self.slots.len()) {
            if let Some(target) = self.capacity.next() {
                debug!(
                    "rehashing {} entries from {} to {} buckets",
                    self.slots.len(),
                    self.capacity.buckets(),
                    target.buckets()
                );
                self.buckets = rehash(&mut self.slots, &self.buckets, target);
                self.capacity = target;
                if target.is_final() {
                    info!(
                        "bucket table reached final capacity of {} buckets; growth disabled",
                        target.buckets()
                    );
                }
            }
        }
        None
    }

    /// Removes `q`, returning its value.
    ///
    /// A node with a successor takes over the successor's key and value and
    /// the successor node is unlinked instead. A tail node is unlinked from
    /// its predecessor, or its bucket is cleared if it was alone.
    pub fn remove<Q>(&mut self, q: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let (key, value) = {
            let _g = self.access.enter("remove");
            let hash = self.make_hash(q);
            let Located { bucket, prev, node } = self.locate(hash, q)?;

            match self.slots[node].next {
                Some(succ) => {
                    trace!("remove: forward-copying successor in bucket {bucket}");
                    let succ = self
                        .slots
                        .remove(succ)
                        .expect("chain successor must be live");
                    let e = &mut self.slots[node];
                    e.hash = succ.hash;
                    e.next = succ.next;
                    (
                        mem::replace(&mut e.key, succ.key),
                        mem::replace(&mut e.value, succ.value),
                    )
                }
                None => {
                    trace!("remove: unlinking chain tail in bucket {bucket}");
                    match prev {
                        Some(p) => self.slots[p].next = None,
                        None => self.buckets[bucket] = None,
                    }
                    let e = self
                        .slots
                        .remove(node)
                        .expect("located node must be live");
                    (e.key, e.value)
                }
            }
        };
        // The removed key is dropped outside the guarded section.
        drop(key);
        Some(value)
    }
}

impl<K, V, S> ChainedHashMap<K, V, S> {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Current number of buckets; always one of [`PRIMES`](crate::PRIMES).
    pub fn table_size(&self) -> usize {
        self.capacity.buckets()
    }

    /// Entries per bucket.
    pub fn load_factor(&self) -> f64 {
        self.capacity.load_factor(self.len())
    }

    /// Length of the longest chain, a gauge of hash quality. Zero when empty.
    pub fn max_chain_length(&self) -> usize {
        self.buckets
            .iter()
            .map(|&head| self.chain(head).count())
            .max()
            .unwrap_or(0)
    }

    fn chain(&self, head: Link) -> Chain<'_, K, V> {
        Chain {
            slots: &self.slots,
            cursor: head,
        }
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            slots: &self.slots,
            buckets: self.buckets.iter(),
            cursor: None,
            remaining: self.slots.len(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }
}

#[cfg(test)]
impl<K, V, S> ChainedHashMap<K, V, S> {
    /// Panics unless every node sits in its home bucket and the chains hold
    /// exactly `len()` nodes.
    pub(crate) fn assert_structure(&self) {
        assert_eq!(self.buckets.len(), self.capacity.buckets());
        let mut reachable = 0;
        for (i, &head) in self.buckets.iter().enumerate() {
            for e in self.chain(head) {
                assert_eq!(self.capacity.bucket_of(e.hash), i, "node outside its home bucket");
                reachable += 1;
                assert!(reachable <= self.slots.len(), "cycle in chain {i}");
            }
        }
        assert_eq!(reachable, self.slots.len(), "unreachable nodes in arena");
    }
}

/// Walks one chain head-to-tail.
struct Chain<'a, K, V> {
    slots: &'a SlotMap<DefaultKey, Entry<K, V>>,
    cursor: Link,
}

impl<'a, K, V> Iterator for Chain<'a, K, V> {
    type Item = &'a Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let slots = self.slots;
        let e = &slots[self.cursor?];
        self.cursor = e.next;
        Some(e)
    }
}

/// Iterator over `(&K, &V)` in bucket order, then chain order.
pub struct Iter<'a, K, V> {
    slots: &'a SlotMap<DefaultKey, Entry<K, V>>,
    buckets: core::slice::Iter<'a, Link>,
    cursor: Link,
    remaining: usize,
}

impl<K, V> Iter<'_, K, V> {
    /// Always fails: entries cannot be removed through an iterator.
    pub fn remove(&mut self) -> Result<()> {
        Error::iterator_remove()
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(k) = self.cursor {
                let slots = self.slots;
                let e = &slots[k];
                self.cursor = e.next;
                self.remaining -= 1;
                return Some((&e.key, &e.value));
            }
            self.cursor = *self.buckets.next()?;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<'a, K, V, S> IntoIterator for &'a ChainedHashMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S> FromIterator<(K, V)> for ChainedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::with_hasher(S::default());
        map.extend(iter);
        map
    }
}

impl<K, V, S> Extend<(K, V)> for ChainedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for ChainedHashMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// One line per occupied bucket: the bucket index right-aligned to the
/// widest occupied index, then the chain as `key=value` joined by `" -> "`.
impl<K: fmt::Display, V: fmt::Display, S> fmt::Display for ChainedHashMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.len() > DISPLAY_LIMIT {
            return f.write_str("HashMap too large to represent as a string.");
        }
        if self.is_empty() {
            return f.write_str("HashMap is empty.");
        }

        let last = self.buckets.iter().rposition(Option::is_some).unwrap_or(0);
        let width = last.to_string().len();
        for (index, &head) in self.buckets.iter().enumerate() {
            if head.is_none() {
                continue;
            }
            write!(f, "{index:>width$}: ")?;
            for (n, e) in self.chain(head).enumerate() {
                if n > 0 {
                    f.write_str(" -> ")?;
                }
                write!(f, "{}={}", e.key, e.value)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
