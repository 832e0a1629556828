//! Strongly-typed identifiers for records and arenas.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// The address of a record inside an arena.
///
/// A record's address is its identity: for as long as the owning arena
/// (or fusion group) is alive, exactly this address names exactly this
/// record. The bridge layer treats the value as an opaque key and never
/// dereferences it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordAddr(pub usize);

impl fmt::Display for RecordAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl From<usize> for RecordAddr {
    fn from(v: usize) -> Self {
        Self(v)
    }
}

/// Counter for unique [`ArenaId`] allocation.
static ARENA_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for an arena.
///
/// Allocated from a monotonic atomic counter via [`ArenaId::next`]. Two
/// distinct arenas always have different IDs, even if one is dropped and
/// the other is allocated at the same heap address. Used for diagnostics
/// and to tell arenas apart in `Debug` output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArenaId(u64);

impl ArenaId {
    /// Allocate a fresh, unique instance ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(ARENA_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ArenaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_addr_displays_as_hex() {
        assert_eq!(RecordAddr(0xdead).to_string(), "0xdead");
    }

    #[test]
    fn record_addr_from_usize() {
        assert_eq!(RecordAddr::from(42), RecordAddr(42));
    }

    #[test]
    fn arena_ids_are_unique() {
        let a = ArenaId::next();
        let b = ArenaId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn arena_ids_are_monotonic() {
        let a = ArenaId::next();
        let b = ArenaId::next();
        assert!(b > a);
    }
}
