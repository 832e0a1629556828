//! The host-visible arena wrapper.

use std::fmt;
use std::rc::Rc;

use tether_arena::{ArenaConfig, RecordArena};

/// A refcounted host object that exclusively owns one record arena.
///
/// `ArenaBinding` is the only way arena memory is released: when the last
/// `Rc<ArenaBinding>` drops, the owned [`RecordArena`] drops with it and
/// the arena's lifetime group releases its records. There is no explicit
/// free operation.
///
/// Record bindings keep their arena's memory alive by holding a clone of
/// this `Rc`, never by copying record data out.
///
/// The binding/arena relationship is 1:1: [`ArenaBinding::new`] always
/// creates a fresh native arena, so no arena can ever be represented to
/// the host by two bindings.
pub struct ArenaBinding {
    arena: RecordArena,
}

impl ArenaBinding {
    /// Allocate a new native arena and the host binding that owns it.
    pub fn new() -> Rc<Self> {
        Self::with_config(ArenaConfig::default())
    }

    /// Like [`ArenaBinding::new`], with an explicit arena configuration.
    pub fn with_config(config: ArenaConfig) -> Rc<Self> {
        Rc::new(Self {
            arena: RecordArena::with_config(config),
        })
    }

    /// The owned native arena, for the record layer to allocate from.
    pub fn native(&self) -> &RecordArena {
        &self.arena
    }

    /// Fuse this binding's arena lifetime with `other`'s.
    ///
    /// Afterwards, keeping either binding alive keeps both arenas'
    /// records alive.
    pub fn fuse(&self, other: &ArenaBinding) {
        self.arena.fuse(&other.arena);
    }
}

impl fmt::Debug for ArenaBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArenaBinding")
            .field("arena", &self.arena.id())
            .finish()
    }
}
