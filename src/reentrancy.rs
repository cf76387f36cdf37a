//! Debug-only exclusive-access check.
//!
//! The map calls user code (`K: Hash`, `K: Eq`) while its chains are being
//! walked or relinked. A key whose `eq` reaches back into the same map would
//! observe a half-spliced chain, so every public entry point claims the map
//! first. In debug builds a second claim panics and names both operations;
//! in release builds the check compiles away.

use core::cell::Cell;
use core::marker::PhantomData;

#[derive(Debug)]
pub(crate) struct ExclusiveAccess {
    #[cfg(debug_assertions)]
    holder: Cell<Option<&'static str>>,
    // Single-threaded structure: stay !Sync.
    _not_sync: PhantomData<Cell<()>>,
}

impl ExclusiveAccess {
    pub(crate) const fn new() -> Self {
        Self {
            #[cfg(debug_assertions)]
            holder: Cell::new(None),
            _not_sync: PhantomData,
        }
    }

    /// Claim the structure for `operation` until the returned guard drops.
    #[inline]
    pub(crate) fn enter(&self, operation: &'static str) -> AccessGuard<'_> {
        #[cfg(debug_assertions)]
        {
            if let Some(current) = self.holder.get() {
                panic!("reentrancy detected: `{operation}` called while `{current}` is running");
            }
            self.holder.set(Some(operation));
            AccessGuard { owner: self }
        }

        #[cfg(not(debug_assertions))]
        {
            let _ = operation;
            AccessGuard { _owner: PhantomData }
        }
    }
}

impl Default for ExclusiveAccess {
    fn default() -> Self {
        Self::new()
    }
}

// Cloning a map produces an unclaimed tracker.
impl Clone for ExclusiveAccess {
    fn clone(&self) -> Self {
        Self::new()
    }
}

pub(crate) struct AccessGuard<'a> {
    #[cfg(debug_assertions)]
    owner: &'a ExclusiveAccess,
    #[cfg(not(debug_assertions))]
    _owner: PhantomData<&'a ()>,
}

impl Drop for AccessGuard<'_> {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        {
            debug_assert!(self.owner.holder.get().is_some());
            self.owner.holder.set(None);
        }
    }
}
