//! The record arena: allocation facade and fuse operations.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tether_core::ArenaId;

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::group::FuseGroup;
use crate::record::RecordPtr;
use crate::store::RecordStore;

/// A bulk-freed arena of address-stable records.
///
/// `RecordArena` is a unique handle (it is not `Clone`): whoever owns it
/// decides when the arena's lifetime ends. The memory itself belongs to
/// the arena's fusion group and is released when the last handle into the
/// group drops, so fusing arenas extends record lifetimes across handles.
///
/// Records are write-once: they are installed by [`RecordArena::alloc`]
/// and never mutated or individually freed afterwards.
pub struct RecordArena {
    id: ArenaId,
    store: Rc<RefCell<RecordStore>>,
    group: Rc<FuseGroup>,
}

impl RecordArena {
    /// Create an arena with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ArenaConfig::default())
    }

    /// Create an arena with an explicit configuration.
    pub fn with_config(config: ArenaConfig) -> Self {
        let store = Rc::new(RefCell::new(RecordStore::new(config)));
        let group = FuseGroup::new(Rc::clone(&store));
        Self {
            id: ArenaId::next(),
            store,
            group,
        }
    }

    /// Allocate a record and return its address-stable pointer.
    ///
    /// Fails with [`ArenaError::CapacityExceeded`] when the configured
    /// memory limit would be exceeded; a failed allocation leaves the
    /// arena unchanged.
    ///
    /// Panics if `T` is zero-sized, since such records have no stable
    /// address to key identity on.
    pub fn alloc<T: Any>(&self, value: T) -> Result<RecordPtr<T>, ArenaError> {
        let ptr = self.store.borrow_mut().alloc(value)?;
        Ok(RecordPtr::new(ptr))
    }

    /// Fuse this arena's lifetime with `other`'s.
    ///
    /// Afterwards the two arenas form one lifetime group: every record of
    /// either arena stays alive until the last handle into the group is
    /// dropped. Fusing an arena with itself, or two arenas that are
    /// already in the same group, is a no-op.
    pub fn fuse(&self, other: &RecordArena) {
        let ours = FuseGroup::root(&self.group);
        let theirs = FuseGroup::root(&other.group);
        if Rc::ptr_eq(&ours, &theirs) {
            return;
        }
        ours.absorb(&theirs);
    }

    /// Whether `self` and `other` share a lifetime group.
    pub fn same_group(&self, other: &RecordArena) -> bool {
        Rc::ptr_eq(&FuseGroup::root(&self.group), &FuseGroup::root(&other.group))
    }

    /// Number of records allocated from this arena (not its whole group).
    pub fn record_count(&self) -> usize {
        self.store.borrow().record_count()
    }

    /// Bytes of record payload allocated from this arena.
    pub fn memory_bytes(&self) -> usize {
        self.store.borrow().memory_bytes()
    }

    /// This arena's unique instance ID.
    pub fn id(&self) -> ArenaId {
        self.id
    }
}

impl Default for RecordArena {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RecordArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordArena")
            .field("id", &self.id)
            .field("records", &self.record_count())
            .finish()
    }
}
