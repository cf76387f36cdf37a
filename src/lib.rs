//! chain-collections: an array list, a doubly-linked list and a
//! separate-chaining hash map, each with its storage layout spelled out.
//!
//! Internal Design:
//!
//! Summary
//! - `ChainedHashMap<K, V, S>` is the interesting piece. Buckets hold the
//!   head of a singly-linked chain; chain nodes live in a generational
//!   arena and link to each other by arena key.
//! - `ArrayList<T>` and `LinkedList<T>` are plain positional sequences
//!   sharing the `Sequence` trait. The map's design borrows `ArrayList` for
//!   collecting index results; nothing deeper.
//!
//! Map invariants
//! - Every entry sits in bucket `hash(key) % table_size()`.
//! - `len()` equals the number of nodes reachable from the buckets.
//! - Keys are unique; re-inserting a key updates its node in place.
//! - New nodes are linked at the chain head.
//!
//! Growth
//! - Table sizes come only from `PRIMES`, one step at a time. After an
//!   insert that adds an entry, if `load_factor()` exceeds
//!   `MAX_LOAD_FACTOR` the whole table is relinked into the next size.
//! - Relinking walks the old table in iteration order and pushes each node
//!   onto its new bucket's head, so shared chains come out reversed.
//! - At the last prime the table stops growing; the load factor may then
//!   exceed `MAX_LOAD_FACTOR`.
//! - Each node caches its hash; growth never calls `K: Hash`.
//!
//! Removal
//! - A node with a successor absorbs the successor's key and value and the
//!   successor node is unlinked. A tail node is unlinked from its
//!   predecessor (or empties its bucket).
//!
//! Iteration
//! - Buckets ascending, chains head-to-tail: an order that falls out of
//!   the physical layout, not insertion order or key order.
//! - Iterators borrow the collection, so structural mutation during a walk
//!   does not compile. Removal through an iterator is reported as
//!   `Error::Unsupported`.
//!
//! Constraints
//! - Single-threaded: the map is `!Sync`. A debug-only guard panics if
//!   user `Hash`/`Eq` code re-enters the map mid-operation.
//! - Positional errors carry the offending index and the current length.

mod array_list;
#[cfg(feature = "bench_internal")]
pub mod capacity;
#[cfg(not(feature = "bench_internal"))]
mod capacity;
pub mod chained_hash_map;
mod chained_hash_map_proptest;
mod error;
mod linked_list;
mod reentrancy;
mod sequence;

// Public surface
pub use array_list::{ArrayList, DEFAULT_CAPACITY};
pub use capacity::{MAX_LOAD_FACTOR, PRIMES};
pub use chained_hash_map::{ChainedHashMap, DISPLAY_LIMIT};
pub use error::{Error, Result};
pub use linked_list::LinkedList;
pub use sequence::Sequence;

pub mod iter {
    //! Iterator types.
    pub use crate::array_list::Iter as ArrayListIter;
    pub use crate::chained_hash_map::Iter as MapIter;
    pub use crate::linked_list::Iter as LinkedListIter;
}
