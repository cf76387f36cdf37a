//! Bucket-count schedule for `ChainedHashMap`.
//!
//! The table never picks its size from a formula: every size it ever has is
//! one of `PRIMES`, walked one step at a time. Once the last prime is
//! reached the table stops growing and the load factor is allowed to climb.

/// Ascending bucket counts. Each is a prime roughly double its predecessor.
pub const PRIMES: [usize; 12] = [
    101, 211, 431, 863, 1733, 3467, 6947, 13901, 27803, 55609, 111227, 222461,
];

/// Growth is considered once `len / buckets` exceeds this ratio.
pub const MAX_LOAD_FACTOR: f64 = 0.75;

/// Position within `PRIMES`.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Capacity(usize);

impl Capacity {
    /// The smallest table.
    pub const fn initial() -> Self {
        Capacity(0)
    }

    /// The largest table; no growth happens past it.
    pub const fn last() -> Self {
        Capacity(PRIMES.len() - 1)
    }

    /// Number of buckets at this step.
    pub fn buckets(self) -> usize {
        PRIMES[self.0]
    }

    pub fn is_final(self) -> bool {
        self == Self::last()
    }

    /// The following step, or `None` once the schedule is exhausted.
    pub fn next(self) -> Option<Self> {
        if self.is_final() {
            None
        } else {
            Some(Capacity(self.0 + 1))
        }
    }

    pub fn load_factor(self, len: usize) -> f64 {
        len as f64 / self.buckets() as f64
    }

    /// Whether holding `len` entries at this step calls for one growth step.
    pub fn should_grow(self, len: usize) -> bool {
        !self.is_final() && self.load_factor(len) > MAX_LOAD_FACTOR
    }

    /// Bucket slot for a 64-bit hash. Unsigned modulo keeps the index in
    /// `0..buckets()`.
    #[inline]
    pub fn bucket_of(self, hash: u64) -> usize {
        (hash % self.buckets() as u64) as usize
    }
}
