//! Boxed record slots with byte accounting.
//!
//! Each record gets its own heap slot, so addresses survive growth of the
//! slot table. Records are only ever dropped all at once, when the store
//! (and therefore its lifetime group) dies.

use std::any::Any;
use std::mem;
use std::ptr::NonNull;

use crate::config::ArenaConfig;
use crate::error::ArenaError;

/// One arena's record storage: heap-pinned slots plus a used-byte counter.
pub(crate) struct RecordStore {
    records: Vec<Box<dyn Any>>,
    used_bytes: usize,
    memory_limit: usize,
}

impl RecordStore {
    pub(crate) fn new(config: ArenaConfig) -> Self {
        Self {
            records: Vec::new(),
            used_bytes: 0,
            memory_limit: config.memory_limit,
        }
    }

    /// Allocate a record slot and return a pointer to its contents.
    ///
    /// The returned pointer stays valid until the store is dropped.
    pub(crate) fn alloc<T: Any>(&mut self, value: T) -> Result<NonNull<T>, ArenaError> {
        // Box does not allocate for zero-sized types, so two ZST records
        // could share an address and break address-based identity.
        assert!(
            mem::size_of::<T>() != 0,
            "zero-sized records have no stable address"
        );
        let requested = mem::size_of::<T>();
        let new_used = self
            .used_bytes
            .checked_add(requested)
            .filter(|&total| total <= self.memory_limit)
            .ok_or(ArenaError::CapacityExceeded {
                requested,
                capacity: self.memory_limit,
            })?;
        let boxed = Box::new(value);
        let ptr = NonNull::from(boxed.as_ref());
        self.records.push(boxed);
        self.used_bytes = new_used;
        Ok(ptr)
    }

    pub(crate) fn record_count(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn memory_bytes(&self) -> usize {
        self.used_bytes
    }
}
