//! The object identity cache: one host binding per record address.
//!
//! The cache maps a record's address to a *weak* reference to its host
//! binding. Weak entries keep the table from extending binding lifetimes;
//! in exchange, every binding must remove its own entry in its destructor,
//! before it is reclaimed. [`ObjectCache::get`] upgrades the weak entry,
//! so the caller always receives a newly-owned strong reference rather
//! than a borrow. That upgrade happens inside `get`, never in callers, to
//! keep the contract uniform across all binding types.
//!
//! Entries are type-erased (`Weak<dyn Any>`) because different record
//! types produce different binding types, exactly as the host runtime's
//! object references are untyped at this layer.

use std::any::Any;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use indexmap::IndexMap;
use tether_core::RecordAddr;

/// A cheaply-cloneable handle to the identity table.
///
/// Clones share one underlying table. Bindings keep a clone so their
/// destructors can deregister without reaching for an ambient global;
/// the table itself therefore lives until the last binding is gone, even
/// if the owning [`ModuleState`](crate::ModuleState) was torn down first.
///
/// Single-threaded by contract: the table is `Rc`/`RefCell` based and no
/// borrow is held across caller code.
#[derive(Clone)]
pub struct ObjectCache {
    entries: Rc<RefCell<IndexMap<RecordAddr, Weak<dyn Any>>>>,
}

impl ObjectCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: Rc::new(RefCell::new(IndexMap::new())),
        }
    }

    /// Register `wrapper` as the binding for the record at `key`.
    ///
    /// Stores a weak reference only; the wrapper's strong count is not
    /// changed.
    ///
    /// # Panics
    ///
    /// Panics if an entry for `key` already exists. A duplicate insert
    /// means two live bindings for one record, which is an identity
    /// invariant violation, not a recoverable condition.
    pub fn add<W: Any>(&self, key: RecordAddr, wrapper: &Rc<W>) {
        let erased: Rc<dyn Any> = wrapper.clone();
        let prev = self
            .entries
            .borrow_mut()
            .insert(key, Rc::downgrade(&erased));
        assert!(prev.is_none(), "duplicate cache entry for record at {key}");
    }

    /// Remove the entry for `key`.
    ///
    /// # Panics
    ///
    /// Panics if no entry exists. A missing entry on delete means the
    /// cache already lost track of a live binding.
    pub fn delete(&self, key: RecordAddr) {
        let prev = self.entries.borrow_mut().swap_remove(&key);
        assert!(prev.is_some(), "no cache entry for record at {key}");
    }

    /// Look up the binding for the record at `key`.
    ///
    /// On a hit the weak entry is upgraded, so the returned `Rc` is a
    /// newly-owned reference. On a miss returns `None`.
    ///
    /// # Panics
    ///
    /// Panics if an entry exists but cannot be upgraded or is of a
    /// different binding type. Both mean the entry went stale, which the
    /// destructor discipline rules out in correct programs.
    pub fn get<W: Any>(&self, key: RecordAddr) -> Option<Rc<W>> {
        let weak = self.entries.borrow().get(&key).cloned()?;
        let strong = match weak.upgrade() {
            Some(strong) => strong,
            None => panic!("stale cache entry for record at {key}"),
        };
        match strong.downcast::<W>() {
            Ok(wrapper) => Some(wrapper),
            Err(_) => panic!("cache entry for record at {key} has a different binding type"),
        }
    }

    /// Whether an entry exists for `key`.
    pub fn contains(&self, key: RecordAddr) -> bool {
        self.entries.borrow().contains_key(&key)
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the cache has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Default for ObjectCache {
    fn default() -> Self {
        Self::new()
    }
}
