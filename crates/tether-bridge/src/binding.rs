//! The binding construction protocol and the standard record binding.
//!
//! Every record type exposed to the host follows the same get-or-create
//! pattern: consult the identity cache first, fabricate and register a
//! binding only on a miss. Repeated requests for the same record then
//! yield the *same* host object (`Rc::ptr_eq` identity, not just equal
//! contents), which host-side code may rely on for identity hashing and
//! attribute visibility.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use tether_arena::RecordPtr;
use tether_core::RecordAddr;

use crate::arena::ArenaBinding;
use crate::cache::ObjectCache;
use crate::error::BridgeError;
use crate::state::ModuleState;

/// Look up the binding for `key`, or build and register one.
///
/// On a cache hit the existing binding is returned with its reference
/// count bumped. On a miss, `build` runs first and registration happens
/// strictly afterwards, so a `build` failure propagates without leaving a
/// cache entry behind, and a partially-initialized binding is never
/// visible to re-entrant lookups.
///
/// `build` may itself consult the cache (construction can trigger host
/// callbacks that re-enter this module); if it registers the same key,
/// the duplicate insert is caught by the cache's invariant check.
pub fn get_or_create<W, F>(
    cache: &ObjectCache,
    key: RecordAddr,
    build: F,
) -> Result<Rc<W>, BridgeError>
where
    W: Any,
    F: FnOnce() -> Result<Rc<W>, BridgeError>,
{
    if let Some(existing) = cache.get::<W>(key) {
        return Ok(existing);
    }
    let fresh = build()?;
    cache.add(key, &fresh);
    Ok(fresh)
}

/// The standard host binding for an arena-allocated record.
///
/// Holds the record pointer, a counted reference to the owning arena's
/// binding (so the record's memory cannot be freed while this binding is
/// alive), and the cache handle it must deregister from on drop.
pub struct RecordBinding<T: Any> {
    record: RecordPtr<T>,
    arena: Rc<ArenaBinding>,
    cache: ObjectCache,
    key: RecordAddr,
}

impl<T: Any> RecordBinding<T> {
    /// Get or create the host binding for `record`.
    ///
    /// `arena` must be the binding of the arena that owns `record` (or of
    /// an arena fused with it); it is what keeps the record's memory
    /// alive for this binding's lifetime. The record layer hands both out
    /// together, so callers cannot normally get this wrong.
    pub fn bind(
        state: &ModuleState,
        record: RecordPtr<T>,
        arena: &Rc<ArenaBinding>,
    ) -> Result<Rc<Self>, BridgeError> {
        let key = record.addr();
        get_or_create(state.cache(), key, || {
            Ok(Rc::new(Self {
                record,
                arena: Rc::clone(arena),
                cache: state.cache().clone(),
                key,
            }))
        })
    }

    /// Borrow the underlying record.
    pub fn record(&self) -> &T {
        // SAFETY: `self.arena` holds the owning arena's lifetime group
        // alive for at least as long as `self`, records are never mutated
        // or individually freed, and the returned borrow cannot outlive
        // `self`.
        unsafe { self.record.as_ref() }
    }

    /// The binding of the arena that owns this record.
    pub fn arena(&self) -> &Rc<ArenaBinding> {
        &self.arena
    }

    /// The record's identity key.
    pub fn addr(&self) -> RecordAddr {
        self.key
    }
}

impl<T: Any> Drop for RecordBinding<T> {
    fn drop(&mut self) {
        // Deregister before the host reclaims this binding; the cache
        // entry is weak and must never outlive its binding.
        self.cache.delete(self.key);
    }
}

impl<T: Any> fmt::Debug for RecordBinding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordBinding")
            .field("key", &self.key)
            .field("arena", &self.arena)
            .finish()
    }
}
